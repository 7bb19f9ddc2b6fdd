//! Luminous Stats: campaign analytics for the terminal.
//!
//! This crate ties the workspace together. It re-exports the table engine,
//! the live metric feed and the export and UI layers, and adds TOML
//! configuration and the `luminous` command-line interface.
//!
//! # Example
//!
//! ```
//! use luminous::{CampaignStatus, TableOptions, TableView, campaign_filter, mock};
//!
//! let mut view = TableView::new(
//!     mock::campaigns(),
//!     TableOptions::new()
//!         .with_page_size(4)
//!         .with_filter(campaign_filter("", Some(CampaignStatus::Active))),
//! )?;
//! view.set_sort_by_name("budget")?;
//!
//! let page = view.snapshot();
//! assert_eq!(page.total(), 5);
//! assert_eq!(page.total_pages(), 2);
//! # Ok::<(), luminous::TableError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_DASHBOARD_PAGE_SIZE, DEFAULT_SORT_KEY, DashboardConfig,
    ExportSettings, LiveSettings, LoggingSettings, TableSettings,
};

pub use luminous_core::{
    Campaign, CampaignField, CampaignStatus, FieldValue, MetricKind, MetricSnapshot, MetricValue,
    Record, SortDirection, Trend, init_file_tracing, init_tracing, mock,
};
pub use luminous_error::{
    ConfigError, ExportError, LiveError, LuminousError, LuminousErrorKind, LuminousResult,
    TableError, TuiError,
};
pub use luminous_export::{export_csv, export_page_to_file};
pub use luminous_live::{LiveFeed, LiveFeedHandle, LiveMetricSimulator, MetricSet};
pub use luminous_table::{
    FilterExpr, RecordFilter, RecordStore, TableOptions, TablePage, TableView, campaign_filter,
};
