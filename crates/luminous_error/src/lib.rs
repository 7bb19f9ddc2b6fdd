//! Error types for the Luminous dashboard.
//!
//! Every error records the file and line where it was created. Domain errors
//! are collected into [`LuminousErrorKind`] so binaries can propagate any of
//! them through a single [`LuminousResult`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod export;
mod live;
mod table;
mod tui;

pub use config::ConfigError;
pub use export::{ExportError, ExportErrorKind};
pub use live::{LiveError, LiveErrorKind};
pub use table::{TableError, TableErrorKind};
pub use tui::{TuiError, TuiErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum LuminousErrorKind {
    /// Configuration error
    #[display("{_0}")]
    Config(ConfigError),
    /// Table view error
    #[display("{_0}")]
    Table(TableError),
    /// Live feed error
    #[display("{_0}")]
    Live(LiveError),
    /// Export error
    #[display("{_0}")]
    Export(ExportError),
    /// Terminal UI error
    #[display("{_0}")]
    Tui(TuiError),
}

/// Luminous error with kind discrimination.
#[derive(Debug)]
pub struct LuminousError(Box<LuminousErrorKind>);

impl LuminousError {
    /// Create a new error from a kind.
    pub fn new(kind: LuminousErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LuminousErrorKind {
        &self.0
    }
}

impl std::fmt::Display for LuminousError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Luminous Error: {}", self.0)
    }
}

impl std::error::Error for LuminousError {}

// Generic From implementation for any type that converts to LuminousErrorKind
impl<T> From<T> for LuminousError
where
    T: Into<LuminousErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Luminous operations.
pub type LuminousResult<T> = std::result::Result<T, LuminousError>;
