//! Table view error types.

/// Table view error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TableErrorKind {
    /// Page size must be a positive integer
    #[display("Invalid page size: {_0} (must be at least 1)")]
    InvalidPageSize(usize),
    /// Field name does not identify a column of the record type
    #[display("Unknown field: {_0}")]
    UnknownField(String),
    /// Filter expression could not be parsed
    #[display("Invalid filter expression: {_0}")]
    InvalidFilter(String),
}

/// Table view error with source location tracking.
///
/// # Examples
///
/// ```
/// use luminous_error::{TableError, TableErrorKind};
///
/// let err = TableError::new(TableErrorKind::InvalidPageSize(0));
/// assert!(format!("{}", err).contains("page size"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Table Error: {} at line {} in {}", kind, line, file)]
pub struct TableError {
    kind: TableErrorKind,
    line: u32,
    file: &'static str,
}

impl TableError {
    /// Create a new TableError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TableErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TableErrorKind {
        &self.kind
    }
}

impl From<TableErrorKind> for TableError {
    #[track_caller]
    fn from(kind: TableErrorKind) -> Self {
        Self::new(kind)
    }
}
