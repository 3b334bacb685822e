use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eb_platform_notify::config::Config;

#[derive(Parser)]
#[command(name = "eb-platform-notify")]
#[command(
    version,
    about = "Notifies Slack when Elastic Beanstalk environments run outdated platform versions"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    // Future subcommands will be added here
    // e.g., Scan { #[arg(long)] dry_run: bool }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        // One sequential pass; every external call blocks the single
        // runtime thread until it completes.
        None => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(eb_platform_notify::runner::run(&config)),
    }

    Ok(())
}
