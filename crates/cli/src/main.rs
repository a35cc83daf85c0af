mod args;

use args::GlobalArgs;
use clap::{Parser, Subcommand};
use ledger_verifier_lib::{
    error::VerifierError,
    identity::identity_provider_from_env,
    ledger::{AccountInspector, AccountLookup, TransferExecutor, TransferRequest},
    log::setup_logging,
    rpc::get_rpc_client_for,
    sanitize::sanitize_message,
    LedgerVerifier, Scenario, VerifierConfig,
};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

#[derive(Subcommand)]
enum Commands {
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
    /// Print the snapshot of an account, or report that it does not exist
    Inspect {
        /// Base58 address to look up
        address: String,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check that the configured program is deployed and executable
    CheckProgram,
    /// Send lamports from the funded identity
    Transfer {
        /// Destination address
        #[arg(long)]
        to: String,

        /// Amount in lamports (defaults to the configured transfer amount)
        #[arg(long)]
        amount: Option<u64>,
    },
    /// Run verification scenarios and print a report
    Run {
        /// Scenario to run; repeat to run several (default: all)
        #[arg(long = "scenario", value_enum)]
        scenarios: Vec<Scenario>,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Validate the resolved configuration (no RPC calls)
    Validate,
}

#[derive(Parser)]
#[command(author, version, about = "Ledger contract verifier for Solana RPC endpoints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = cli.global_args.resolve_config().unwrap_or_else(|e| {
        print_error(&format!("Failed to load config: {e}"));
        std::process::exit(1);
    });

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  config validate  - Validate configuration");
            println!("  inspect          - Inspect an account");
            println!("  check-program    - Check that the program is deployed");
            println!("  transfer         - Send lamports from the funded identity");
            println!("  run              - Run verification scenarios");
            return;
        }
    };

    setup_logging(cli.global_args.logging_format);
    tracing::debug!(
        rpc_url = %sanitize_message(&config.network.rpc_url),
        commitment = %config.network.commitment,
        "Resolved configuration"
    );

    let exit_code = match execute(command, config).await {
        Ok(code) => code,
        Err(e) => {
            print_error(&e.to_string());
            1
        }
    };
    std::process::exit(exit_code);
}

/// Validates the configuration, then runs the command. No command touches the network
/// with an invalid configuration.
async fn execute(command: Commands, config: VerifierConfig) -> Result<i32, VerifierError> {
    config.validate()?;

    match command {
        Commands::Config { config_command: ConfigCommands::Validate } => {
            println!("Configuration is valid");
            println!("  rpc_url:    {}", sanitize_message(&config.network.rpc_url));
            println!("  commitment: {}", config.network.commitment);
            println!("  program_id: {}", config.program.program_id);
            Ok(0)
        }
        Commands::Inspect { address, json } => {
            let address = parse_pubkey(&address)?;
            let inspector =
                AccountInspector::new(get_rpc_client_for(&config), config.network.commitment);
            let lookup = inspector.inspect(&address).await?;

            if json {
                println!("{}", to_json(&lookup)?);
            } else {
                match &lookup {
                    AccountLookup::Found(snapshot) => {
                        println!("{snapshot}");
                        if let Some(loader) = snapshot.loader() {
                            println!("loader: {loader}");
                        }
                    }
                    AccountLookup::NotFound => println!("{address}: not found"),
                }
            }
            Ok(0)
        }
        Commands::CheckProgram => {
            let identities = identity_provider_from_env(&config)?;
            let verifier = LedgerVerifier::from_config(config, identities)?;
            let snapshot = verifier.verify_program_deployed().await?;
            println!(
                "Program {} is deployed ({} bytes, loader {})",
                snapshot.address,
                snapshot.data_len,
                snapshot.loader().unwrap_or("unknown")
            );
            Ok(0)
        }
        Commands::Transfer { to, amount } => {
            let destination = parse_pubkey(&to)?;
            let source = identity_provider_from_env(&config)?.funded_identity()?;
            let executor =
                TransferExecutor::new(get_rpc_client_for(&config), config.transfer.fee_reserve_lamports);
            let request = TransferRequest {
                destination,
                lamports: amount.unwrap_or(config.transfer.amount_lamports),
            };

            let receipt = executor.execute(&source, &request).await?;
            println!("{}", to_json(&receipt)?);
            Ok(0)
        }
        Commands::Run { scenarios, json } => {
            let scenarios = if scenarios.is_empty() { Scenario::ALL.to_vec() } else { scenarios };
            let identities = identity_provider_from_env(&config)?;
            let verifier = LedgerVerifier::from_config(config, identities)?;

            let report = verifier.run(&scenarios).await;
            if json {
                println!("{}", to_json(&report)?);
            } else {
                println!("{report}");
            }
            Ok(if report.all_passed() { 0 } else { 1 })
        }
    }
}

fn parse_pubkey(address: &str) -> Result<Pubkey, VerifierError> {
    Pubkey::from_str(address)
        .map_err(|e| VerifierError::InvalidRequest(format!("Invalid address '{address}': {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, VerifierError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| VerifierError::InvalidRequest(format!("Failed to serialize output: {e}")))
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}
