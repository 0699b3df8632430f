use clap::Parser;
use std::process::ExitCode;
use thinq_dialer::cli::{self, Args};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.resolve_config()?;
    info!("Configuration loaded: {:?}", config);

    Ok(cli::run(&config, &mut std::io::stdout(), &mut std::io::stderr()).await)
}
