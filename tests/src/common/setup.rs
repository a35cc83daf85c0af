use anyhow::Result;
use ledger_verifier_lib::{
    constant::{KEYPAIR_PATH_ENV, PROGRAM_ID_ENV, RPC_URL_ENV},
    identity::{identity_provider_from_env, IdentityProvider},
    ledger::{AccountInspector, TransferExecutor},
    rpc::get_rpc_client_for,
    LedgerVerifier, VerifierConfig,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;

use crate::common::constants::DEFAULT_TEST_RPC_URL;

/// Shared wiring for live-network tests, resolved from the environment and `.env`.
pub struct TestContext {
    pub config: VerifierConfig,
    rpc_client: Arc<RpcClient>,
    identities: Arc<dyn IdentityProvider>,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        let rpc_url =
            std::env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_TEST_RPC_URL.to_string());
        Self::new_with_rpc_url(&rpc_url)
    }

    pub fn new_with_rpc_url(rpc_url: &str) -> Result<Self> {
        dotenv::dotenv().ok();
        let mut config = VerifierConfig::default().with_rpc_url(rpc_url);
        if let Ok(program_id) = std::env::var(PROGRAM_ID_ENV) {
            config = config.with_program_id(program_id);
        }
        if let Ok(keypair_path) = std::env::var(KEYPAIR_PATH_ENV) {
            config = config.with_keypair_path(keypair_path);
        }
        config.validate()?;

        let identities = identity_provider_from_env(&config)?;
        let rpc_client = get_rpc_client_for(&config);

        Ok(Self { config, rpc_client, identities })
    }

    pub fn rpc_client(&self) -> Arc<RpcClient> {
        self.rpc_client.clone()
    }

    pub fn identities(&self) -> Arc<dyn IdentityProvider> {
        self.identities.clone()
    }

    pub fn inspector(&self) -> AccountInspector {
        AccountInspector::new(self.rpc_client(), self.config.network.commitment)
    }

    pub fn executor(&self) -> TransferExecutor {
        TransferExecutor::new(self.rpc_client(), self.config.transfer.fee_reserve_lamports)
    }

    pub fn verifier(&self) -> Result<LedgerVerifier> {
        Ok(LedgerVerifier::new(self.config.clone(), self.rpc_client(), self.identities())?)
    }
}
