//! Dashboard state and key handling.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use luminous_core::{Campaign, CampaignField, CampaignStatus, ChartPoint, mock};
use luminous_live::MetricSet;
use luminous_table::{TableView, campaign_filter};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Columns shown in the campaign table, addressed by keys `1`-`9`.
pub const DISPLAY_COLUMNS: [CampaignField; 9] = [
    CampaignField::Name,
    CampaignField::Status,
    CampaignField::Budget,
    CampaignField::Spent,
    CampaignField::Impressions,
    CampaignField::Clicks,
    CampaignField::Ctr,
    CampaignField::Conversions,
    CampaignField::Cpa,
];

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Navigating the table
    #[default]
    Browse,
    /// Typing a search term
    Search,
}

/// Where page exports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    /// Output directory
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
}

/// Dashboard application state.
pub struct App {
    /// Campaign table
    pub view: TableView<Campaign>,
    /// Metrics currently displayed on the cards
    pub metrics: MetricSet,
    /// Monthly revenue chart series
    pub revenue: Vec<ChartPoint>,
    /// Traffic share per channel
    pub traffic: Vec<ChartPoint>,
    /// Current input mode
    pub mode: AppMode,
    /// Free-text search term
    pub search: String,
    /// Status filter, `None` shows every status
    pub status_filter: Option<CampaignStatus>,
    /// Message shown in the status bar
    pub status_message: String,
    /// Set once the user asks to quit
    pub should_quit: bool,
    updates: watch::Receiver<MetricSet>,
    export: ExportTarget,
}

impl App {
    /// Create the app around a campaign view and a metric subscription.
    pub fn new(
        view: TableView<Campaign>,
        updates: watch::Receiver<MetricSet>,
        export: ExportTarget,
    ) -> Self {
        let metrics = updates.borrow().clone();
        Self {
            view,
            metrics,
            revenue: mock::revenue_series(),
            traffic: mock::traffic_sources(),
            mode: AppMode::default(),
            search: String::new(),
            status_filter: None,
            status_message: "Ready".to_string(),
            should_quit: false,
            updates,
            export,
        }
    }

    /// Pull the latest metric set if a new one was published.
    ///
    /// Returns whether the cards changed.
    pub fn refresh_metrics(&mut self) -> bool {
        match self.updates.has_changed() {
            Ok(true) => {
                self.metrics = self.updates.borrow_and_update().clone();
                true
            }
            _ => false,
        }
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.mode {
            AppMode::Browse => self.handle_browse_key(key.code),
            AppMode::Search => self.handle_search_key(key.code),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right => self.view.next_page(),
            KeyCode::Left => self.view.prev_page(),
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                self.sort_by_column(column);
            }
            KeyCode::Char('s') => self.cycle_status(),
            KeyCode::Char('/') => {
                self.mode = AppMode::Search;
                self.status_message = "Search: type to filter, Enter to finish".to_string();
            }
            KeyCode::Char('e') => {
                let now = chrono::Local::now().naive_local();
                self.export_page(now);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.mode = AppMode::Browse;
                self.status_message = format!("{} matching campaigns", self.view.total());
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.apply_filter();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.apply_filter();
            }
            _ => {}
        }
    }

    /// Sort by the n-th displayed column (zero-based).
    pub fn sort_by_column(&mut self, column: usize) {
        let Some(field) = DISPLAY_COLUMNS.get(column).copied() else {
            return;
        };
        self.view.set_sort(field);
        debug!(%field, direction = %self.view.sort_direction(), "Sorted campaigns");
        self.status_message = format!(
            "Sorted by {} {}",
            field.title(),
            self.view.sort_direction().arrow()
        );
    }

    /// Advance the status filter: all, then each status in turn.
    pub fn cycle_status(&mut self) {
        self.status_filter = next_status(self.status_filter);
        self.apply_filter();
        self.status_message = match self.status_filter {
            Some(status) => format!("Showing {status} campaigns"),
            None => "Showing all campaigns".to_string(),
        };
    }

    fn apply_filter(&mut self) {
        self.view
            .set_filter(campaign_filter(&self.search, self.status_filter));
    }

    /// Export the current page, stamping the file name with `now`.
    pub fn export_page(&mut self, now: NaiveDateTime) {
        let page = self.view.snapshot();
        match luminous_export::export_page_to_file(
            &page,
            &self.export.directory,
            &self.export.prefix,
            now,
        ) {
            Ok(path) => {
                info!(path = %path.display(), "Exported page");
                self.status_message = format!("Exported {}", path.display());
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                self.status_message = format!("Export failed: {}", e.kind());
            }
        }
    }
}

fn next_status(current: Option<CampaignStatus>) -> Option<CampaignStatus> {
    match current {
        None => CampaignStatus::iter().next(),
        Some(status) => CampaignStatus::iter().skip_while(|s| *s != status).nth(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle_wraps_to_all() {
        let mut seen = Vec::new();
        let mut current = None;
        for _ in 0..5 {
            current = next_status(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(CampaignStatus::Active),
                Some(CampaignStatus::Paused),
                Some(CampaignStatus::Completed),
                Some(CampaignStatus::Draft),
                None,
            ]
        );
    }
}
