//! CSV export for Luminous tables.
//!
//! Exports either an arbitrary record iterator or the current page of a
//! [`luminous_table::TableView`]. File names carry a minute-resolution
//! timestamp supplied by the caller.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv_export;

pub use csv_export::{
    DEFAULT_FILE_PREFIX, export_csv, export_file_name, export_page_to_file, export_to_file,
};
