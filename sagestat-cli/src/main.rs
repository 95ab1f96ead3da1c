//! sagestat
//!
//! Lists SageMaker pipelines with their most recent execution as a
//! color-coded console table.
//!
//! Credentials and region are resolved by the AWS SDK's default provider
//! chain. Logs go to stderr and are controlled with `RUST_LOG`.

mod config;
mod fetcher;
mod presenter;
mod report;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use config::Config;
use sagestat_client::SageMakerDirectory;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sagestat", version)]
#[command(about = "Show SageMaker pipelines and their latest execution status", long_about = None)]
struct Cli {
    /// Shared config profile to load credentials from
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// Region to query
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Disable status highlighting
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sagestat_cli=warn,sagestat_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        profile: cli.profile,
        region: cli.region,
        color: !cli.no_color,
    };
    config.validate()?;
    debug!(?config, "Loaded configuration");

    let directory =
        SageMakerDirectory::from_env(config.profile.as_deref(), config.region.as_deref()).await;
    info!(region = ?directory.region(), "Directory client initialized");

    let stdout = std::io::stdout();
    report::run(&directory, config.color, &mut stdout.lock()).await
}
