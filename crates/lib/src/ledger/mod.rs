pub mod inspector;
pub mod snapshot;
pub mod transfer;

pub use inspector::AccountInspector;
pub use snapshot::{AccountLookup, AccountSnapshot};
pub use transfer::{TransferExecutor, TransferReceipt, TransferRequest};
