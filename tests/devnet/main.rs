// Devnet Integration Tests
//
// NETWORK: RPC_URL (default https://api.devnet.solana.com)
// IDENTITY: VERIFIER_PRIVATE_KEY, or the keypair file at VERIFIER_KEYPAIR / ~/.config/solana/id.json
// TESTS: Live ledger checks, ignored by default
//        - Program deployment and repeatable inspection
//        - Unfunded and well-known account lookups
//        - Native transfers with exact balance deltas
//
// RUN: cargo test -p tests --test devnet -- --ignored

mod account_inspection;
mod program_deployment;
mod transfers;
