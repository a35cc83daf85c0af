use ledger_verifier_lib::{assertions::assert_program_executable, Scenario, VerifierError};
use tests::common::*;

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_program_is_deployed_and_executable() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let verifier = ctx.verifier().expect("Failed to create verifier");

    let snapshot = verifier.verify_program_deployed().await.expect("Program should be deployed");

    assert_eq!(snapshot.address, ctx.config.program.program_id);
    assert!(snapshot.executable, "Program account should be executable");
    assert!(snapshot.data_len > 0, "Program account should carry data");
    assert!(snapshot.loader().is_some(), "Program should be owned by a known loader");
}

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_program_inspection_is_idempotent() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let inspector = ctx.inspector();
    let program_id = ctx.config.program_id().expect("Invalid program id");

    let first = inspector.require_program(&program_id).await.expect("First read failed");
    let second = inspector.require_program(&program_id).await.expect("Second read failed");

    assert_eq!(first, second);
    assert_program_executable(&second).expect("Program should stay executable");
}

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_missing_program_is_not_deployed() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let missing = solana_sdk::pubkey::Pubkey::new_unique();

    let result = ctx.inspector().require_program(&missing).await;
    assert_eq!(result, Err(VerifierError::ProgramNotDeployed(missing.to_string())));
}

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_read_only_scenarios_pass() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let verifier = ctx.verifier().expect("Failed to create verifier");

    let report = verifier
        .run(&[
            Scenario::ProgramDeployed,
            Scenario::UnfundedAccountAbsent,
            Scenario::InspectionIdempotent,
        ])
        .await;

    assert!(report.all_passed(), "Scenarios failed:\n{report}");
    assert_eq!(report.outcomes.len(), 3);
}
