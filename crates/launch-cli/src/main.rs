//! Launch Miner CLI
//!
//! Runs analytics queries against a JSON launch snapshot.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use launch_analytics::LaunchAnalytics;
use launch_cli::{run, Command, Config, LogFormat};
use launch_persistence::JsonFileLaunchSource;

#[derive(Parser, Debug)]
#[command(name = "launch-miner")]
#[command(about = "Rank rockets, providers and launches from a launch snapshot")]
struct Args {
    /// Snapshot document (overrides LAUNCH_SNAPSHOT_PATH)
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let args = Args::parse();

    init_tracing(&config);

    let path = args
        .snapshot
        .clone()
        .unwrap_or_else(|| config.snapshot_path.clone());
    info!(
        version = launch_cli::VERSION,
        snapshot = %path.display(),
        "Starting launch-miner"
    );

    let engine = LaunchAnalytics::new(JsonFileLaunchSource::new(&path));
    let output = run(&engine, &args.command, &config)
        .map_err(|e| anyhow::anyhow!("{}: {e}", e.error_code()))?;

    println!("{output}");
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
