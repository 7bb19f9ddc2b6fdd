//! Command-line interface.

mod campaigns;
mod dashboard;
mod metrics;

pub use campaigns::{CampaignsArgs, render_page, run_campaigns};
pub use dashboard::run_dashboard;
pub use metrics::{MetricsArgs, run_metrics};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Campaign analytics dashboard.
#[derive(Parser, Debug)]
#[command(name = "luminous")]
#[command(about = "Luminous Stats - campaign analytics in the terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "LUMINOUS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of the campaign table
    Campaigns(CampaignsArgs),
    /// Stream simulated live metrics to stdout
    Metrics(MetricsArgs),
    /// Open the interactive terminal dashboard
    Dashboard,
}
