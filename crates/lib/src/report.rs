use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{config::Commitment, error::VerifierError, sanitize::sanitize_message, verifier::Scenario};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub passed: bool,
    /// Success summary, or the error's display text.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    pub elapsed_ms: u64,
}

impl ScenarioOutcome {
    pub fn pass(scenario: Scenario, message: impl Into<String>, elapsed_ms: u64) -> Self {
        Self { scenario, passed: true, message: message.into(), error_kind: None, elapsed_ms }
    }

    pub fn fail(scenario: Scenario, error: &VerifierError, elapsed_ms: u64) -> Self {
        Self {
            scenario,
            passed: false,
            message: error.to_string(),
            error_kind: Some(error.kind().to_string()),
            elapsed_ms,
        }
    }
}

/// Outcome of one verification run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub started_at: DateTime<Utc>,
    pub rpc_url: String,
    pub commitment: Commitment,
    pub program_id: String,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl VerificationReport {
    pub fn new(rpc_url: &str, commitment: Commitment, program_id: impl Into<String>) -> Self {
        Self {
            started_at: Utc::now(),
            rpc_url: sanitize_message(rpc_url),
            commitment,
            program_id: program_id.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ledger verification of {} against {} ({})",
            self.program_id, self.rpc_url, self.commitment
        )?;
        for outcome in &self.outcomes {
            let status = if outcome.passed { "PASS" } else { "FAIL" };
            writeln!(
                f,
                "  [{status}] {} ({} ms): {}",
                outcome.scenario, outcome.elapsed_ms, outcome.message
            )?;
        }
        write!(f, "{}/{} scenarios passed", self.passed_count(), self.outcomes.len())
    }
}
