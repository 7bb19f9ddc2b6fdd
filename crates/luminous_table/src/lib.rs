//! Sort, filter and pagination over in-memory record collections.
//!
//! A [`TableView`] owns a [`RecordStore`], an active [`RecordFilter`], an
//! optional sort column and the current page. Everything it exposes beyond
//! that state is derived on read.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod filter;
mod options;
mod store;
mod view;

pub use filter::{FilterClause, FilterExpr, RecordFilter, campaign_filter};
pub use options::{DEFAULT_PAGE_SIZE, SortSpec, TableOptions};
pub use store::RecordStore;
pub use view::{TablePage, TableView};
