pub mod constants;
pub mod helpers;
pub mod setup;

pub use constants::*;
pub use helpers::*;
pub use setup::*;
