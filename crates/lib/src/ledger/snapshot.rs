use serde::{Deserialize, Serialize};
use solana_sdk::{account::Account, pubkey::Pubkey};
use std::fmt;

use crate::constant::loaders;

/// Point-in-time read of an account. Never cached; every query fetches a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub address: String,
    pub owner: String,
    pub lamports: u64,
    pub executable: bool,
    pub data_len: usize,
}

impl AccountSnapshot {
    pub fn from_account(address: &Pubkey, account: &Account) -> Self {
        Self {
            address: address.to_string(),
            owner: account.owner.to_string(),
            lamports: account.lamports,
            executable: account.executable,
            data_len: account.data.len(),
        }
    }

    /// Name of the program loader that owns this account, if it is one.
    pub fn loader(&self) -> Option<&'static str> {
        match self.owner.as_str() {
            loaders::BPF_LOADER_UPGRADEABLE => Some("BPFLoaderUpgradeable"),
            loaders::BPF_LOADER_2 => Some("BPFLoader2"),
            loaders::BPF_LOADER_1 => Some("BPFLoader1"),
            loaders::LOADER_V4 => Some("LoaderV4"),
            _ => None,
        }
    }
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} owner={} lamports={} executable={} data_len={}",
            self.address, self.owner, self.lamports, self.executable, self.data_len
        )
    }
}

/// Result of looking an address up. Absence is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "account", rename_all = "snake_case")]
pub enum AccountLookup {
    Found(AccountSnapshot),
    NotFound,
}

impl AccountLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, AccountLookup::Found(_))
    }

    pub fn snapshot(&self) -> Option<&AccountSnapshot> {
        match self {
            AccountLookup::Found(snapshot) => Some(snapshot),
            AccountLookup::NotFound => None,
        }
    }

    pub fn into_snapshot(self) -> Option<AccountSnapshot> {
        match self {
            AccountLookup::Found(snapshot) => Some(snapshot),
            AccountLookup::NotFound => None,
        }
    }

    /// Balance, treating an absent account as holding zero lamports.
    pub fn lamports(&self) -> u64 {
        self.snapshot().map(|s| s.lamports).unwrap_or(0)
    }
}
