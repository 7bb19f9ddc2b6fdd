//! Luminous Stats command-line entry point.

use clap::Parser;
use luminous::cli::{Cli, Command, run_campaigns, run_dashboard, run_metrics};
use luminous::{DashboardConfig, init_file_tracing, init_tracing};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DashboardConfig::load(cli.config.as_deref())?;
    let level = config.logging().level();

    match &cli.command {
        Command::Dashboard => init_file_tracing(level, config.logging().file_or_default())?,
        _ => init_tracing(level),
    }
    info!(command = ?cli.command, "Starting Luminous");

    match cli.command {
        Command::Campaigns(args) => {
            let now = chrono::Local::now().naive_local();
            println!("{}", run_campaigns(&args, &config, now)?);
        }
        Command::Metrics(args) => {
            let mut stdout = std::io::stdout();
            run_metrics(&args, &config, &mut stdout).await?;
        }
        Command::Dashboard => run_dashboard(&config).await?,
    }
    Ok(())
}
