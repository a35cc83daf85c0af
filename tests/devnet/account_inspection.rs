use ledger_verifier_lib::{ledger::AccountLookup, VerifierError};
use solana_sdk::signature::{Keypair, Signer};
use tests::common::*;

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_unfunded_account_is_not_found() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let address = Keypair::new().pubkey();

    let lookup = ctx.inspector().inspect(&address).await.expect("Lookup should not error");

    assert_eq!(lookup, AccountLookup::NotFound);
    assert_eq!(ctx.inspector().balance(&address).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_unfunded_account_scenario() {
    let ctx = TestContext::new().expect("Failed to create test context");
    let verifier = ctx.verifier().expect("Failed to create verifier");

    verifier.verify_unfunded_account_absent().await.expect("Fresh address should not exist");
}

#[tokio::test]
#[ignore = "requires devnet access"]
async fn test_system_program_is_found() {
    let ctx = TestContext::new().expect("Failed to create test context");

    let lookup = ctx
        .inspector()
        .inspect(&parse_pubkey(SYSTEM_PROGRAM_ID))
        .await
        .expect("Lookup should not error");

    let snapshot = lookup.snapshot().expect("System program should exist");
    assert!(snapshot.executable);
    assert!(snapshot.lamports > 0);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let ctx =
        TestContext::new_with_rpc_url(UNREACHABLE_RPC_URL).expect("Failed to create test context");

    let result = ctx.inspector().inspect(&Keypair::new().pubkey()).await;
    assert!(
        matches!(result, Err(VerifierError::TransportError(_))),
        "Expected transport error, got {result:?}"
    );
}
