//! `luminous dashboard`: the interactive terminal UI.

use crate::DashboardConfig;
use luminous_core::mock;
use luminous_live::{LiveFeed, LiveMetricSimulator};
use luminous_table::TableView;
use luminous_tui::{App, ExportTarget};
use tracing::instrument;

/// Start the live feed and hand the terminal to the dashboard until it quits.
#[instrument(skip_all)]
pub async fn run_dashboard(config: &DashboardConfig) -> anyhow::Result<()> {
    let view = TableView::new(mock::campaigns(), config.table_options()?)?;
    let simulator = match config.live().seed() {
        Some(seed) => LiveMetricSimulator::seeded(*seed),
        None => LiveMetricSimulator::from_entropy(),
    };
    let feed = LiveFeed::spawn(simulator, mock::metrics(), config.tick_interval())?;

    let export = ExportTarget {
        directory: config.export().directory().clone(),
        prefix: config.export().file_prefix().clone(),
    };
    let app = App::new(view, feed.subscribe(), export);

    tokio::task::spawn_blocking(move || luminous_tui::run(app, feed)).await??;
    Ok(())
}
