//! Export error types.

/// Export error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExportErrorKind {
    /// Filesystem error while writing the export
    #[display("I/O error: {_0}")]
    Io(String),
    /// CSV encoding error
    #[display("CSV error: {_0}")]
    Csv(String),
}

/// Export error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    kind: ExportErrorKind,
    line: u32,
    file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ExportErrorKind {
        &self.kind
    }
}

impl From<std::io::Error> for ExportError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ExportErrorKind::Io(err.to_string()))
    }
}
