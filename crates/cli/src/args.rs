use clap::Parser;
use ledger_verifier_lib::{
    config::Commitment,
    constant::{KEYPAIR_PATH_ENV, PROGRAM_ID_ENV, RPC_URL_ENV},
    error::VerifierError,
    log::LoggingFormat,
    VerifierConfig,
};
use std::path::PathBuf;

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "ledger-verifier")]
pub struct GlobalArgs {
    /// Solana RPC endpoint URL (defaults to devnet)
    #[arg(long, env = RPC_URL_ENV)]
    pub rpc_url: Option<String>,

    /// Commitment level to read and confirm at
    #[arg(long, value_enum)]
    pub commitment: Option<Commitment>,

    /// Program that must be deployed at the endpoint
    #[arg(long, env = PROGRAM_ID_ENV)]
    pub program_id: Option<String>,

    /// Keypair file of the funded identity (defaults to ~/.config/solana/id.json)
    #[arg(long, env = KEYPAIR_PATH_ENV)]
    pub keypair: Option<PathBuf>,

    /// Path to verifier configuration file (TOML format)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LoggingFormat::Standard)]
    pub logging_format: LoggingFormat,
}

impl GlobalArgs {
    /// Defaults, then the config file, then command line and environment overrides.
    pub fn resolve_config(&self) -> Result<VerifierConfig, VerifierError> {
        let mut config = match &self.config {
            Some(path) => VerifierConfig::load_config(path)?,
            None => VerifierConfig::default(),
        };

        if let Some(rpc_url) = &self.rpc_url {
            config = config.with_rpc_url(rpc_url.clone());
        }
        if let Some(commitment) = self.commitment {
            config = config.with_commitment(commitment);
        }
        if let Some(program_id) = &self.program_id {
            config = config.with_program_id(program_id.clone());
        }
        if let Some(keypair) = &self.keypair {
            config = config.with_keypair_path(keypair.clone());
        }

        Ok(config)
    }
}
