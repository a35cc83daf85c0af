use serde::{Deserialize, Serialize};

use crate::{
    error::VerifierError,
    ledger::{AccountLookup, AccountSnapshot},
};

/// Balance of one account before and after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceObservation {
    pub pre: u64,
    pub post: u64,
}

impl BalanceObservation {
    pub fn new(pre: u64, post: u64) -> Self {
        Self { pre, post }
    }

    /// Signed change in lamports, post minus pre.
    pub fn delta(&self) -> i128 {
        i128::from(self.post) - i128::from(self.pre)
    }
}

pub fn assert_program_executable(snapshot: &AccountSnapshot) -> Result<(), VerifierError> {
    let mut problems = Vec::new();

    if !snapshot.executable {
        problems.push("executable: expected true, observed false".to_string());
    }
    if snapshot.data_len == 0 {
        problems.push("data_len: expected > 0, observed 0".to_string());
    }

    if problems.is_empty() {
        return Ok(());
    }

    Err(VerifierError::AssertionFailure(format!(
        "Account {} is not a deployed program ({})",
        snapshot.address,
        problems.join("; ")
    )))
}

pub fn assert_not_found(address: &str, lookup: &AccountLookup) -> Result<(), VerifierError> {
    match lookup {
        AccountLookup::NotFound => Ok(()),
        AccountLookup::Found(snapshot) => Err(VerifierError::AssertionFailure(format!(
            "Account {address}: expected not found, observed {snapshot}"
        ))),
    }
}

pub fn assert_snapshots_identical(
    first: &AccountSnapshot,
    second: &AccountSnapshot,
) -> Result<(), VerifierError> {
    let mut diff = Vec::new();

    if first.address != second.address {
        diff.push(format!("address: {} != {}", first.address, second.address));
    }
    if first.owner != second.owner {
        diff.push(format!("owner: {} != {}", first.owner, second.owner));
    }
    if first.lamports != second.lamports {
        diff.push(format!("lamports: {} != {}", first.lamports, second.lamports));
    }
    if first.executable != second.executable {
        diff.push(format!("executable: {} != {}", first.executable, second.executable));
    }
    if first.data_len != second.data_len {
        diff.push(format!("data_len: {} != {}", first.data_len, second.data_len));
    }

    if diff.is_empty() {
        Ok(())
    } else {
        Err(VerifierError::AssertionFailure(format!(
            "Snapshots of {} differ: {}",
            first.address,
            diff.join("; ")
        )))
    }
}

/// Destination must gain exactly `amount`; source must lose at least `amount`.
pub fn assert_transfer_deltas(
    source: BalanceObservation,
    destination: BalanceObservation,
    amount: u64,
) -> Result<(), VerifierError> {
    let expected_destination = destination.pre.checked_add(amount).ok_or_else(|| {
        VerifierError::AssertionFailure(format!(
            "Destination balance {} + {amount} overflows",
            destination.pre
        ))
    })?;

    if destination.post != expected_destination {
        return Err(VerifierError::AssertionFailure(format!(
            "Destination balance: expected {} + {amount} = {expected_destination}, observed {} (delta {})",
            destination.pre,
            destination.post,
            destination.delta()
        )));
    }

    match source.pre.checked_sub(amount) {
        Some(ceiling) if source.post <= ceiling => Ok(()),
        Some(ceiling) => Err(VerifierError::AssertionFailure(format!(
            "Source balance: expected <= {} - {amount} = {ceiling}, observed {} (delta {})",
            source.pre,
            source.post,
            source.delta()
        ))),
        None => Err(VerifierError::AssertionFailure(format!(
            "Source balance {} was below the transferred amount {amount}",
            source.pre
        ))),
    }
}

/// Source must end strictly below `pre - amount`. The fee itself is not asserted.
pub fn assert_fee_charged(source: BalanceObservation, amount: u64) -> Result<(), VerifierError> {
    let ceiling = source.pre.saturating_sub(amount);

    if source.post < ceiling {
        return Ok(());
    }

    Err(VerifierError::AssertionFailure(format!(
        "Source balance: expected < {} - {amount} = {ceiling} after fees, observed {}",
        source.pre, source.post
    )))
}
