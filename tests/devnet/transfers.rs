use ledger_verifier_lib::{ledger::TransferRequest, Scenario, VerifierError};
use solana_sdk::signature::{Keypair, Signer};
use tests::common::*;

#[tokio::test]
#[ignore = "requires devnet access and a funded keypair"]
async fn test_transfer_moves_exact_amount() {
    let ctx = TestContext::new().expect("Failed to create test context");
    FundedSourceHelper::get_funded_source(&ctx).await.expect("Funded source unavailable");
    let verifier = ctx.verifier().expect("Failed to create verifier");

    let verification =
        verifier.verify_transfer(TEST_TRANSFER_LAMPORTS).await.expect("Transfer should verify");

    assert_eq!(verification.destination.pre, 0);
    assert_eq!(verification.destination.post, TEST_TRANSFER_LAMPORTS);
    assert!(
        verification.source.post < verification.source.pre - TEST_TRANSFER_LAMPORTS,
        "Source should pay a fee on top of the amount"
    );
    assert!(verification.fee_paid() > 0);
    assert_eq!(verification.receipt.lamports, TEST_TRANSFER_LAMPORTS);
}

#[tokio::test]
#[ignore = "requires devnet access and a funded keypair"]
async fn test_transfer_receipt_matches_request() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let source = FundedSourceHelper::get_funded_source(&ctx).await.expect("Funded source unavailable");
    let destination = Keypair::new().pubkey();

    let receipt = ctx
        .executor()
        .execute(&source, &TransferRequest { destination, lamports: TEST_TRANSFER_LAMPORTS })
        .await
        .expect("Transfer failed");

    assert_eq!(receipt.source, source.pubkey().to_string());
    assert_eq!(receipt.destination, destination.to_string());
    assert_eq!(receipt.commitment, ctx.config.network.commitment);
    assert_eq!(ctx.inspector().balance(&destination).await.unwrap(), TEST_TRANSFER_LAMPORTS);
}

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_transfer_from_unfunded_source_is_insufficient_funds() {
    let ctx = TestContext::new().expect("Failed to create test context");

    let result = ctx
        .executor()
        .execute(
            &Keypair::new(),
            &TransferRequest { destination: Keypair::new().pubkey(), lamports: TEST_TRANSFER_LAMPORTS },
        )
        .await;

    assert!(
        matches!(result, Err(VerifierError::InsufficientFunds(_))),
        "Expected insufficient funds, got {result:?}"
    );
}

#[tokio::test]
async fn test_zero_transfer_is_invalid_without_network() {
    let ctx =
        TestContext::new_with_rpc_url(UNREACHABLE_RPC_URL).expect("Failed to create test context");

    let result = ctx
        .executor()
        .execute(&Keypair::new(), &TransferRequest { destination: Keypair::new().pubkey(), lamports: 0 })
        .await;

    assert!(matches!(result, Err(VerifierError::InvalidRequest(_))));
}

#[tokio::test]
#[ignore = "requires devnet access and a funded keypair"]
async fn test_full_run_passes() {
    let ctx = TestContext::new().expect("Failed to create test context");
    FundedSourceHelper::get_funded_source(&ctx).await.expect("Funded source unavailable");
    let verifier = ctx.verifier().expect("Failed to create verifier");

    let report = verifier.run(&Scenario::ALL).await;

    assert!(report.all_passed(), "Scenarios failed:\n{report}");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"].as_array().map(Vec::len), Some(Scenario::ALL.len()));
}
