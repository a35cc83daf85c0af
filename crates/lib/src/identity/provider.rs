use mockall::automock;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    config::VerifierConfig, constant::PRIVATE_KEY_ENV, error::VerifierError,
    identity::KeypairUtil,
};

/// Source of signing identities for a verification run.
///
/// Neither method touches the network.
#[automock]
pub trait IdentityProvider: Send + Sync {
    /// The funded identity transfers are sent from.
    fn funded_identity(&self) -> Result<Keypair, VerifierError>;

    /// A fresh identity with no backing funds. It is never persisted.
    fn ephemeral_identity(&self) -> Keypair {
        Keypair::new()
    }
}

/// Loads the funded identity from a solana-cli keypair file on every call.
#[derive(Debug, Clone)]
pub struct KeypairFileProvider {
    path: PathBuf,
}

impl KeypairFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &VerifierConfig) -> Result<Self, VerifierError> {
        Ok(Self::new(config.keypair_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityProvider for KeypairFileProvider {
    fn funded_identity(&self) -> Result<Keypair, VerifierError> {
        let keypair = KeypairUtil::from_json_file(&self.path)?;
        tracing::debug!(path = %self.path.display(), pubkey = %keypair.pubkey(), "Loaded funded identity");
        Ok(keypair)
    }
}

/// Holds the funded identity in memory.
pub struct MemoryIdentityProvider {
    secret: Vec<u8>,
    pubkey: Pubkey,
}

impl MemoryIdentityProvider {
    pub fn new(keypair: &Keypair) -> Self {
        Self { secret: keypair.to_bytes().to_vec(), pubkey: keypair.pubkey() }
    }

    /// Parses a base58 string, a JSON byte array, or a keypair file path.
    pub fn from_private_key_string(private_key: &str) -> Result<Self, VerifierError> {
        Ok(Self::new(&KeypairUtil::from_private_key_string(private_key)?))
    }

    pub fn pubkey(&self) -> Pubkey {
        self.pubkey
    }
}

impl IdentityProvider for MemoryIdentityProvider {
    fn funded_identity(&self) -> Result<Keypair, VerifierError> {
        KeypairUtil::from_bytes(&self.secret)
    }
}

/// `VERIFIER_PRIVATE_KEY` when set, otherwise the keypair file from `config`.
pub fn identity_provider_from_env(
    config: &VerifierConfig,
) -> Result<Arc<dyn IdentityProvider>, VerifierError> {
    match std::env::var(PRIVATE_KEY_ENV) {
        Ok(private_key) if !private_key.trim().is_empty() => {
            Ok(Arc::new(MemoryIdentityProvider::from_private_key_string(private_key.trim())?))
        }
        _ => Ok(Arc::new(KeypairFileProvider::from_config(config)?)),
    }
}
