pub mod assertions;
pub mod config;
pub mod constant;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod log;
pub mod report;
pub mod rpc;
pub mod sanitize;
pub mod verifier;
pub use config::{Commitment, VerifierConfig};
pub use error::VerifierError;
pub use identity::IdentityProvider;
pub use report::VerificationReport;
pub use verifier::{LedgerVerifier, Scenario};
