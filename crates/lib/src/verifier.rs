use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{pubkey::Pubkey, signature::Signer};
use std::{fmt, sync::Arc, time::Instant};
use tracing::{info, warn};

use crate::{
    assertions::{
        assert_fee_charged, assert_not_found, assert_program_executable,
        assert_snapshots_identical, assert_transfer_deltas, BalanceObservation,
    },
    config::VerifierConfig,
    error::VerifierError,
    identity::IdentityProvider,
    ledger::{
        AccountInspector, AccountLookup, AccountSnapshot, TransferExecutor, TransferReceipt,
        TransferRequest,
    },
    report::{ScenarioOutcome, VerificationReport},
    rpc::get_rpc_client_for,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// The configured program is deployed and executable
    ProgramDeployed,
    /// A never-funded address reads as not found
    UnfundedAccountAbsent,
    /// Two reads of the program account agree
    InspectionIdempotent,
    /// A transfer to a fresh address moves exactly the requested amount
    Transfer,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::ProgramDeployed,
        Scenario::UnfundedAccountAbsent,
        Scenario::InspectionIdempotent,
        Scenario::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::ProgramDeployed => "program-deployed",
            Scenario::UnfundedAccountAbsent => "unfunded-account-absent",
            Scenario::InspectionIdempotent => "inspection-idempotent",
            Scenario::Transfer => "transfer",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observed balances around a confirmed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferVerification {
    pub receipt: TransferReceipt,
    pub source: BalanceObservation,
    pub destination: BalanceObservation,
}

impl TransferVerification {
    /// Lamports the source lost beyond the transferred amount.
    pub fn fee_paid(&self) -> u64 {
        self.source.pre.saturating_sub(self.source.post).saturating_sub(self.receipt.lamports)
    }
}

pub struct LedgerVerifier {
    config: VerifierConfig,
    program_id: Pubkey,
    inspector: AccountInspector,
    executor: TransferExecutor,
    identities: Arc<dyn IdentityProvider>,
}

impl LedgerVerifier {
    pub fn new(
        config: VerifierConfig,
        rpc_client: Arc<RpcClient>,
        identities: Arc<dyn IdentityProvider>,
    ) -> Result<Self, VerifierError> {
        let program_id = config.program_id()?;
        let commitment = config.network.commitment;

        // Transfers confirm at the client's commitment, so reads must use the same level
        let executor =
            TransferExecutor::new(rpc_client.clone(), config.transfer.fee_reserve_lamports);
        if executor.commitment() != commitment {
            return Err(VerifierError::ConfigurationError(format!(
                "RPC client commitment {} does not match configured commitment {commitment}",
                executor.commitment()
            )));
        }

        Ok(Self {
            program_id,
            inspector: AccountInspector::new(rpc_client, commitment),
            executor,
            identities,
            config,
        })
    }

    pub fn from_config(
        config: VerifierConfig,
        identities: Arc<dyn IdentityProvider>,
    ) -> Result<Self, VerifierError> {
        let rpc_client = get_rpc_client_for(&config);
        Self::new(config, rpc_client, identities)
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn inspector(&self) -> &AccountInspector {
        &self.inspector
    }

    pub async fn verify_program_deployed(&self) -> Result<AccountSnapshot, VerifierError> {
        let snapshot = self.inspector.require_program(&self.program_id).await?;
        assert_program_executable(&snapshot)?;
        Ok(snapshot)
    }

    /// Returns the fresh address that was checked.
    pub async fn verify_unfunded_account_absent(&self) -> Result<Pubkey, VerifierError> {
        let address = self.identities.ephemeral_identity().pubkey();
        let lookup = self.inspector.inspect(&address).await?;
        assert_not_found(&address.to_string(), &lookup)?;
        Ok(address)
    }

    pub async fn verify_inspection_idempotent(&self) -> Result<AccountSnapshot, VerifierError> {
        let first = self.inspector.require_program(&self.program_id).await?;

        match self.inspector.inspect(&self.program_id).await? {
            AccountLookup::Found(second) => {
                assert_snapshots_identical(&first, &second)?;
                Ok(first)
            }
            AccountLookup::NotFound => Err(VerifierError::AssertionFailure(format!(
                "Account {}: found on first read, not found on second",
                self.program_id
            ))),
        }
    }

    pub async fn verify_transfer(&self, amount: u64) -> Result<TransferVerification, VerifierError> {
        let source = self.identities.funded_identity()?;
        let destination = self.identities.ephemeral_identity().pubkey();
        let source_pubkey = source.pubkey();

        let source_pre = self.inspector.balance(&source_pubkey).await?;
        let destination_pre = self.inspector.balance(&destination).await?;
        if destination_pre != 0 {
            return Err(VerifierError::AssertionFailure(format!(
                "Destination {destination}: expected a fresh account with 0 lamports, observed {destination_pre}"
            )));
        }

        let receipt = self
            .executor
            .execute(&source, &TransferRequest { destination, lamports: amount })
            .await?;

        let source = BalanceObservation::new(source_pre, self.inspector.balance(&source_pubkey).await?);
        let destination =
            BalanceObservation::new(destination_pre, self.inspector.balance(&destination).await?);

        assert_transfer_deltas(source, destination, amount)?;
        assert_fee_charged(source, amount)?;

        Ok(TransferVerification { receipt, source, destination })
    }

    async fn run_scenario(&self, scenario: Scenario) -> Result<String, VerifierError> {
        match scenario {
            Scenario::ProgramDeployed => {
                let snapshot = self.verify_program_deployed().await?;
                Ok(format!(
                    "{} is executable with {} bytes of data (loader {})",
                    snapshot.address,
                    snapshot.data_len,
                    snapshot.loader().unwrap_or("unknown")
                ))
            }
            Scenario::UnfundedAccountAbsent => {
                let address = self.verify_unfunded_account_absent().await?;
                Ok(format!("{address} is not found"))
            }
            Scenario::InspectionIdempotent => {
                let snapshot = self.verify_inspection_idempotent().await?;
                Ok(format!("Two reads of {} are identical", snapshot.address))
            }
            Scenario::Transfer => {
                let verification = self.verify_transfer(self.config.transfer.amount_lamports).await?;
                Ok(format!(
                    "Moved {} lamports to {} in {} (fee {} lamports)",
                    verification.receipt.lamports,
                    verification.receipt.destination,
                    verification.receipt.signature,
                    verification.fee_paid()
                ))
            }
        }
    }

    /// Runs the scenarios in order. A failing scenario does not stop the ones after it.
    pub async fn run(&self, scenarios: &[Scenario]) -> VerificationReport {
        let mut report = VerificationReport::new(
            &self.config.network.rpc_url,
            self.config.network.commitment,
            self.program_id.to_string(),
        );

        for &scenario in scenarios {
            info!(%scenario, "Running scenario");
            let started = Instant::now();
            let result = self.run_scenario(scenario).await;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            let outcome = match result {
                Ok(message) => {
                    info!(%scenario, elapsed_ms, "Scenario passed");
                    ScenarioOutcome::pass(scenario, message, elapsed_ms)
                }
                Err(e) => {
                    warn!(%scenario, kind = e.kind(), error = %e, "Scenario failed");
                    ScenarioOutcome::fail(scenario, &e, elapsed_ms)
                }
            };
            report.push(outcome);
        }

        report
    }
}
