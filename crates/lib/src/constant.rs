// Network
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 90;

// Program under test
pub const DEFAULT_PROGRAM_ID: &str = "DR85urM1zGQhEA5b9MorTjC3FyTacXEgPY9jfmnMt9JX";

// Transfers
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const LAMPORTS_PER_SIGNATURE: u64 = 5000;
pub const DEFAULT_TRANSFER_LAMPORTS: u64 = LAMPORTS_PER_SOL;
pub const DEFAULT_FEE_RESERVE_LAMPORTS: u64 = LAMPORTS_PER_SIGNATURE;

// Identities
pub const SECRET_KEY_LEN: usize = 64;
pub const DEFAULT_KEYPAIR_RELATIVE_PATH: &str = ".config/solana/id.json";

// Program loaders, used to label the owner of an executable account
pub mod loaders {
    pub const BPF_LOADER_UPGRADEABLE: &str = "BPFLoaderUpgradeab1e11111111111111111111111";
    pub const BPF_LOADER_2: &str = "BPFLoader2111111111111111111111111111111111";
    pub const BPF_LOADER_1: &str = "BPFLoader1111111111111111111111111111111111";
    pub const LOADER_V4: &str = "LoaderV411111111111111111111111111111111111";
}

// Environment variables read by the CLI and the integration tests
pub const RPC_URL_ENV: &str = "RPC_URL";
pub const PROGRAM_ID_ENV: &str = "PROGRAM_ID";
pub const KEYPAIR_PATH_ENV: &str = "VERIFIER_KEYPAIR";
pub const PRIVATE_KEY_ENV: &str = "VERIFIER_PRIVATE_KEY";
