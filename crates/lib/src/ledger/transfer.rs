use serde::{Deserialize, Serialize};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::sync::Arc;
use tracing::info;

use crate::{config::Commitment, error::VerifierError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    pub destination: Pubkey,
    pub lamports: u64,
}

/// Proof that a transfer reached the requested commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub signature: String,
    pub source: String,
    pub destination: String,
    pub lamports: u64,
    pub commitment: Commitment,
}

/// Sends native transfers from a funded identity.
///
/// Balance reads and confirmation both use the commitment the RPC client was built with.
pub struct TransferExecutor {
    rpc_client: Arc<RpcClient>,
    commitment: Commitment,
    fee_reserve_lamports: u64,
}

impl TransferExecutor {
    pub fn new(rpc_client: Arc<RpcClient>, fee_reserve_lamports: u64) -> Self {
        let commitment = Commitment::from(rpc_client.commitment());
        Self { rpc_client, commitment, fee_reserve_lamports }
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    pub async fn execute(
        &self,
        source: &Keypair,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, VerifierError> {
        let source_pubkey = source.pubkey();

        if request.lamports == 0 {
            return Err(VerifierError::InvalidRequest(
                "Transfer amount must be greater than zero".to_string(),
            ));
        }
        if request.destination == source_pubkey {
            return Err(VerifierError::InvalidRequest(
                "Transfer source and destination must differ".to_string(),
            ));
        }

        let required = request.lamports.checked_add(self.fee_reserve_lamports).ok_or_else(|| {
            VerifierError::InvalidRequest(format!(
                "Transfer amount {} overflows with the fee reserve",
                request.lamports
            ))
        })?;

        let balance = self
            .rpc_client
            .get_balance_with_commitment(&source_pubkey, self.commitment.into())
            .await?
            .value;

        if balance < required {
            return Err(VerifierError::InsufficientFunds(format!(
                "Source {source_pubkey} holds {balance} lamports, transfer of {} needs {required} including fee reserve",
                request.lamports
            )));
        }

        let recent_blockhash = self.rpc_client.get_latest_blockhash().await?;
        let instruction = solana_system_interface::instruction::transfer(
            &source_pubkey,
            &request.destination,
            request.lamports,
        );
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&source_pubkey),
            &[source],
            recent_blockhash,
        );

        info!(
            source = %source_pubkey,
            destination = %request.destination,
            lamports = request.lamports,
            "Submitting transfer"
        );

        let signature = self.rpc_client.send_and_confirm_transaction(&transaction).await?;

        info!(%signature, commitment = %self.commitment, "Transfer confirmed");

        Ok(TransferReceipt {
            signature: signature.to_string(),
            source: source_pubkey.to_string(),
            destination: request.destination.to_string(),
            lamports: request.lamports,
            commitment: self.commitment,
        })
    }
}
