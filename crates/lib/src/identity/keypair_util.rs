use solana_sdk::signature::Keypair;
use std::{fs, path::Path};

use crate::{constant::SECRET_KEY_LEN, error::VerifierError, sanitize_error};

/// Parsing of secret keys. Errors never include the key material itself.
pub struct KeypairUtil;

impl KeypairUtil {
    /// Reads a solana-cli style keypair file: a JSON array of 64 bytes.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Keypair, VerifierError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            VerifierError::ConfigurationError(format!(
                "Failed to read keypair file {}: {}",
                path.display(),
                sanitize_error!(e)
            ))
        })?;

        Self::from_json_keypair(&contents).map_err(|e| match e {
            VerifierError::ConfigurationError(msg) => {
                VerifierError::ConfigurationError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_json_keypair(json_content: &str) -> Result<Keypair, VerifierError> {
        let bytes: Vec<u8> = serde_json::from_str(json_content).map_err(|_| {
            VerifierError::ConfigurationError(
                "Keypair is not a JSON array of bytes".to_string(),
            )
        })?;
        Self::from_bytes(&bytes)
    }

    /// Accepts a path to a keypair file, a `[1, 2, ...]` byte array, or base58.
    pub fn from_private_key_string(private_key: &str) -> Result<Keypair, VerifierError> {
        let trimmed = private_key.trim();

        if trimmed.starts_with('[') {
            return Self::from_json_keypair(trimmed);
        }

        if Path::new(trimmed).is_file() {
            return Self::from_json_file(trimmed);
        }

        Self::from_base58(trimmed)
    }

    pub fn from_base58(encoded: &str) -> Result<Keypair, VerifierError> {
        let bytes = bs58::decode(encoded).into_vec().map_err(|_| {
            VerifierError::ConfigurationError("Private key is not valid base58".to_string())
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Keypair, VerifierError> {
        if bytes.len() != SECRET_KEY_LEN {
            return Err(VerifierError::ConfigurationError(format!(
                "Secret key must be exactly {SECRET_KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        Keypair::try_from(bytes).map_err(|_| {
            VerifierError::ConfigurationError(
                "Secret key bytes do not form a valid ed25519 keypair".to_string(),
            )
        })
    }
}
