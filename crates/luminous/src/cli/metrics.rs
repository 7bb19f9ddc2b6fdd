//! `luminous metrics`: stream the simulated live feed.

use crate::DashboardConfig;
use clap::Args;
use luminous_core::{MetricSnapshot, Trend, mock};
use luminous_live::{LiveFeed, LiveMetricSimulator};
use std::io::Write;
use std::time::Duration;
use tracing::{info, instrument};

/// Arguments for `luminous metrics`.
#[derive(Args, Debug, Clone, Default)]
pub struct MetricsArgs {
    /// Number of updates to print before stopping
    #[arg(long, default_value_t = 5)]
    pub ticks: u64,

    /// Milliseconds between updates (overrides the configured interval)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// RNG seed for a reproducible sequence
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the feed for `args.ticks` updates, writing every set to `out`.
///
/// Returns the number of updates the feed published before it was stopped.
#[instrument(skip(config, out))]
pub async fn run_metrics<W: Write>(
    args: &MetricsArgs,
    config: &DashboardConfig,
    out: &mut W,
) -> anyhow::Result<u64> {
    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.tick_interval());
    let simulator = match args.seed.or(*config.live().seed()) {
        Some(seed) => LiveMetricSimulator::seeded(seed),
        None => LiveMetricSimulator::from_entropy(),
    };

    let mut feed = LiveFeed::spawn(simulator, mock::metrics(), interval)?;
    let mut updates = feed.subscribe();
    write_metrics(out, 0, &feed.latest())?;

    for tick in 1..=args.ticks {
        updates.changed().await?;
        let metrics = updates.borrow_and_update().clone();
        write_metrics(out, tick, &metrics)?;
    }

    feed.stop()?;
    info!(ticks = feed.ticks(), "Metric stream finished");
    Ok(feed.ticks())
}

fn write_metrics<W: Write>(out: &mut W, tick: u64, metrics: &[MetricSnapshot]) -> std::io::Result<()> {
    writeln!(out, "tick {tick}")?;
    let width = metrics
        .iter()
        .map(|m| m.label().chars().count())
        .max()
        .unwrap_or(0);
    for metric in metrics {
        let arrow = match metric.trend() {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "•",
        };
        writeln!(
            out,
            "  {:<width$}  {:>10}  {} {:+.2}%",
            metric.label(),
            metric.value().to_string(),
            arrow,
            metric.change()
        )?;
    }
    out.flush()
}
