//! Terminal dashboard for campaign analytics.
//!
//! Shows the live metric cards above a sortable, filterable and paginated
//! campaign table. [`run`] owns the terminal until the user quits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod runner;
mod ui;

pub use app::{App, AppMode, DISPLAY_COLUMNS, ExportTarget};
pub use runner::run;
pub use ui::draw;
