// ============================================================================
// Network
// ============================================================================

/// Endpoint used when `RPC_URL` is not set
pub const DEFAULT_TEST_RPC_URL: &str = "https://api.devnet.solana.com";

/// Nothing listens here; used to provoke transport failures
pub const UNREACHABLE_RPC_URL: &str = "http://127.0.0.1:1";

// ============================================================================
// Transfers
// ============================================================================

/// Amount moved by the transfer scenario (1 SOL)
pub const TEST_TRANSFER_LAMPORTS: u64 = 1_000_000_000;

/// Smallest source balance the transfer tests will run with
pub const MIN_SOURCE_BALANCE_LAMPORTS: u64 = TEST_TRANSFER_LAMPORTS + 10_000;

// ============================================================================
// Well-known accounts
// ============================================================================

pub const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";
