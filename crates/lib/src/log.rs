use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LoggingFormat {
    #[default]
    Standard,
    Json,
}

const DEFAULT_LOG_FILTER: &str = "info,solana_rpc_client=warn,reqwest=warn,hyper=warn";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn setup_logging(format: LoggingFormat) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false);
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
