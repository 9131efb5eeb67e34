use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use watcher::config::Config;
use watcher::run;
use watcher::window::Window;

#[derive(Parser)]
#[command(name = "watcher")]
#[command(about = "Watch the Hub for notable new and modified models and notify a group chat")]
#[command(version)]
struct Cli {
    /// Number of days to look back
    #[arg(long, default_value_t = 0)]
    days: u32,

    /// Number of hours to look back
    #[arg(long, default_value_t = 0)]
    hours: u32,

    /// Number of minutes to look back
    #[arg(long, default_value_t = 0)]
    minutes: u32,
}

fn main() -> ExitCode {
    // Load .env if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run_cli() {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

#[tokio::main]
async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let window = Window::new(cli.days, cli.hours, cli.minutes);
    if window.is_zero() {
        bail!("at least one of --days, --hours or --minutes must be greater than zero");
    }

    // Configuration is validated before any network call.
    let config = Config::from_env().context("Failed to load configuration")?;

    run::run(window, config).await
}
