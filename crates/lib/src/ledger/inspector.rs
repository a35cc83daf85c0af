use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::debug;

use crate::{
    config::Commitment,
    error::VerifierError,
    ledger::snapshot::{AccountLookup, AccountSnapshot},
};

/// Read-only account queries against the remote ledger.
pub struct AccountInspector {
    rpc_client: Arc<RpcClient>,
    commitment: Commitment,
}

impl AccountInspector {
    pub fn new(rpc_client: Arc<RpcClient>, commitment: Commitment) -> Self {
        Self { rpc_client, commitment }
    }

    /// Fetches a fresh snapshot. A missing account is `Ok(AccountLookup::NotFound)`;
    /// only transport or RPC failures are errors.
    pub async fn inspect(&self, address: &Pubkey) -> Result<AccountLookup, VerifierError> {
        let response = self
            .rpc_client
            .get_account_with_commitment(address, self.commitment.into())
            .await?;

        let lookup = match response.value {
            Some(account) => AccountLookup::Found(AccountSnapshot::from_account(address, &account)),
            None => AccountLookup::NotFound,
        };

        debug!(%address, slot = response.context.slot, found = lookup.is_found(), "Inspected account");
        Ok(lookup)
    }

    /// Like [`inspect`](Self::inspect), but absence is a `ProgramNotDeployed` error.
    pub async fn require_program(&self, program_id: &Pubkey) -> Result<AccountSnapshot, VerifierError> {
        self.inspect(program_id)
            .await?
            .into_snapshot()
            .ok_or_else(|| VerifierError::ProgramNotDeployed(program_id.to_string()))
    }

    /// Current balance in lamports; an absent account holds zero.
    pub async fn balance(&self, address: &Pubkey) -> Result<u64, VerifierError> {
        Ok(self.inspect(address).await?.lamports())
    }
}
