//! Live metric feed error types.

/// Live feed error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LiveErrorKind {
    /// Tick interval must be non-zero
    #[display("Tick interval must be greater than zero")]
    InvalidInterval,
    /// The feed has already been stopped
    #[display("Live feed is not running")]
    NotRunning,
    /// Snapshot could not be published to subscribers
    #[display("Failed to publish snapshot: {_0}")]
    Publish(String),
}

/// Live feed error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Live Feed Error: {} at line {} in {}", kind, line, file)]
pub struct LiveError {
    kind: LiveErrorKind,
    line: u32,
    file: &'static str,
}

impl LiveError {
    /// Create a new LiveError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LiveErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LiveErrorKind {
        &self.kind
    }
}

impl From<LiveErrorKind> for LiveError {
    #[track_caller]
    fn from(kind: LiveErrorKind) -> Self {
        Self::new(kind)
    }
}
