use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use crate::{
    constant::{
        DEFAULT_FEE_RESERVE_LAMPORTS, DEFAULT_KEYPAIR_RELATIVE_PATH, DEFAULT_PROGRAM_ID,
        DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL, DEFAULT_TRANSFER_LAMPORTS,
    },
    error::VerifierError,
    sanitize_error,
};

/// Durability level requested from the ledger. Ordered processed < confirmed < finalized.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Commitment> for CommitmentConfig {
    fn from(commitment: Commitment) -> Self {
        match commitment {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl From<CommitmentConfig> for Commitment {
    fn from(config: CommitmentConfig) -> Self {
        if config.is_finalized() {
            Commitment::Finalized
        } else if config.is_confirmed() {
            Commitment::Confirmed
        } else {
            Commitment::Processed
        }
    }
}

/// Everything the verifier needs to know about its environment.
///
/// `VerifierConfig::default()` is the fixed devnet configuration; a TOML file or
/// CLI flags may override parts of it before the verifier is built. Once built,
/// the verifier never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub program: ProgramConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub commitment: Commitment,
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: Commitment::default(),
            timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    pub program_id: String,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self { program_id: DEFAULT_PROGRAM_ID.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Secret key file of the funded identity. Defaults to `~/.config/solana/id.json`.
    pub keypair_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub amount_lamports: u64,
    /// Headroom kept on the source for fees when checking funds locally
    pub fee_reserve_lamports: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            amount_lamports: DEFAULT_TRANSFER_LAMPORTS,
            fee_reserve_lamports: DEFAULT_FEE_RESERVE_LAMPORTS,
        }
    }
}

impl VerifierConfig {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<VerifierConfig, VerifierError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            VerifierError::ConfigurationError(format!(
                "Failed to read config file: {}",
                sanitize_error!(e)
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            VerifierError::ConfigurationError(format!(
                "Failed to parse config file: {}",
                sanitize_error!(e)
            ))
        })
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.network.rpc_url = rpc_url.into();
        self
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.network.commitment = commitment;
        self
    }

    pub fn with_program_id(mut self, program_id: impl Into<String>) -> Self {
        self.program.program_id = program_id.into();
        self
    }

    pub fn with_keypair_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity.keypair_path = Some(path.into());
        self
    }

    pub fn program_id(&self) -> Result<Pubkey, VerifierError> {
        Pubkey::from_str(&self.program.program_id).map_err(|e| {
            VerifierError::ConfigurationError(format!(
                "Invalid program id '{}': {e}",
                self.program.program_id
            ))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.network.timeout_secs)
    }

    /// Configured secret key path, or the per-user default under the home directory.
    pub fn keypair_path(&self) -> Result<PathBuf, VerifierError> {
        if let Some(path) = &self.identity.keypair_path {
            return Ok(path.clone());
        }

        dirs::home_dir().map(|home| home.join(DEFAULT_KEYPAIR_RELATIVE_PATH)).ok_or_else(|| {
            VerifierError::ConfigurationError(
                "Cannot resolve home directory for the default keypair path".to_string(),
            )
        })
    }

    /// Checks the config without touching the network.
    pub fn validate(&self) -> Result<(), VerifierError> {
        let url = self.network.rpc_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(VerifierError::ConfigurationError(format!(
                "RPC url must use http or https, got '{}'",
                sanitize_error!(url)
            )));
        }

        if self.network.timeout_secs == 0 {
            return Err(VerifierError::ConfigurationError(
                "RPC timeout must be greater than zero".to_string(),
            ));
        }

        self.program_id()?;

        if self.transfer.amount_lamports == 0 {
            return Err(VerifierError::ConfigurationError(
                "Transfer amount must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
