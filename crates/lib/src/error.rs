use serde::{Deserialize, Serialize};
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_request::RpcError,
};
use solana_sdk::instruction::InstructionError;
use solana_transaction_error::TransactionError;
use thiserror::Error;

use crate::sanitize_error;

/// System program custom error 1: the debit would leave the source with negative lamports.
const NEGATIVE_LAMPORTS_ERROR_CODE: u32 = 1;

#[derive(Error, Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub enum VerifierError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Program {0} is not deployed")]
    ProgramNotDeployed(String),

    #[error("Rejected by ledger: {0}")]
    Rejected(String),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("Assertion failed: {0}")]
    AssertionFailure(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl VerifierError {
    /// Short stable name of the error kind, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifierError::ConfigurationError(_) => "ConfigurationError",
            VerifierError::TransportError(_) => "TransportError",
            VerifierError::ProgramNotDeployed(_) => "ProgramNotDeployedError",
            VerifierError::Rejected(_) => "RejectedError",
            VerifierError::InsufficientFunds(_) => "InsufficientFundsError",
            VerifierError::AssertionFailure(_) => "AssertionFailure",
            VerifierError::InvalidRequest(_) => "InvalidRequest",
        }
    }
}

fn is_insufficient_funds(tx_error: &TransactionError) -> bool {
    match tx_error {
        TransactionError::InsufficientFundsForFee => true,
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            *code == NEGATIVE_LAMPORTS_ERROR_CODE
        }
        _ => false,
    }
}

impl From<ClientError> for VerifierError {
    fn from(e: ClientError) -> Self {
        let message = sanitize_error!(e);

        if let Some(tx_error) = e.get_transaction_error() {
            return if is_insufficient_funds(&tx_error) {
                VerifierError::InsufficientFunds(message)
            } else {
                VerifierError::Rejected(message)
            };
        }

        match e.kind() {
            ClientErrorKind::RpcError(RpcError::RpcResponseError { .. }) => {
                if message.to_lowercase().contains("insufficient") {
                    VerifierError::InsufficientFunds(message)
                } else {
                    VerifierError::Rejected(message)
                }
            }
            ClientErrorKind::TransactionError(_) => VerifierError::Rejected(message),
            ClientErrorKind::SigningError(_) => VerifierError::ConfigurationError(message),
            _ => VerifierError::TransportError(message),
        }
    }
}

impl From<std::io::Error> for VerifierError {
    fn from(e: std::io::Error) -> Self {
        VerifierError::ConfigurationError(sanitize_error!(e))
    }
}

impl From<toml::de::Error> for VerifierError {
    fn from(e: toml::de::Error) -> Self {
        VerifierError::ConfigurationError(sanitize_error!(e))
    }
}
