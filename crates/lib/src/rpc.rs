use std::{sync::Arc, time::Duration};

use solana_client::nonblocking::rpc_client::RpcClient;

use crate::config::{Commitment, VerifierConfig};

pub fn get_rpc_client(rpc_url: &str, commitment: Commitment, timeout: Duration) -> Arc<RpcClient> {
    Arc::new(RpcClient::new_with_timeout_and_commitment(
        rpc_url.to_string(),
        timeout,
        commitment.into(),
    ))
}

pub fn get_rpc_client_for(config: &VerifierConfig) -> Arc<RpcClient> {
    get_rpc_client(&config.network.rpc_url, config.network.commitment, config.timeout())
}
