use anyhow::{bail, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::str::FromStr;

use crate::common::{constants::MIN_SOURCE_BALANCE_LAMPORTS, setup::TestContext};

pub fn parse_pubkey(address: &str) -> Pubkey {
    Pubkey::from_str(address).expect("Invalid pubkey")
}

pub struct FundedSourceHelper;

impl FundedSourceHelper {
    /// Loads the funded identity and checks it can afford a test transfer.
    pub async fn get_funded_source(ctx: &TestContext) -> Result<Keypair> {
        let source = ctx.identities().funded_identity()?;
        let balance = ctx.inspector().balance(&source.pubkey()).await?;

        if balance < MIN_SOURCE_BALANCE_LAMPORTS {
            bail!(
                "Funded identity holds {balance} lamports, tests need at least {MIN_SOURCE_BALANCE_LAMPORTS}. \
                 Airdrop to it with `solana airdrop 2 --url devnet`."
            );
        }
        Ok(source)
    }
}
