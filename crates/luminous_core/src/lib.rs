//! Core data types for the Luminous analytics dashboard.
//!
//! This crate provides the record abstraction consumed by the table engine,
//! the metric data model driven by the live feed, chart series, and the
//! sample data set.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod campaign;
mod chart;
mod metric;
pub mod mock;
mod observability;
mod record;
mod sort;

pub use campaign::{Campaign, CampaignField, CampaignStatus};
pub use chart::{ChartPoint, share_percent};
pub use metric::{CurrencyUnit, MetricKind, MetricSnapshot, MetricValue, Trend, group_thousands};
pub use observability::{init_file_tracing, init_tracing};
pub use record::{FieldValue, Record};
pub use sort::SortDirection;
