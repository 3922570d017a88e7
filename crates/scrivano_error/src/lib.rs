//! Error types for the Scrivano chat-completion client.
//!
//! Each domain gets a kind enum plus a location-tracking error struct; the
//! crate-level [`ScrivanoError`] aggregates them for callers that want a
//! single error type at the application boundary.

mod config;
mod generation;
mod json;
mod transport;

pub use config::ConfigError;
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use json::JsonError;
pub use transport::{TransportError, TransportErrorKind, TransportResult};

/// Classifies errors for the connection-level retry policy.
///
/// Transient faults (connect/read failures, 429, 500, 502, 503, 504) return
/// true; permanent failures such as timeouts, other 4xx statuses, or bad
/// configuration return false and fail immediately.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ScrivanoErrorKind {
    /// Transport error
    Transport(TransportError),
    /// Generation strategy error
    Generation(GenerationError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for ScrivanoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrivanoErrorKind::Transport(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Generation(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Json(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Scrivano error with kind discrimination.
#[derive(Debug)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ScrivanoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scrivano Error: {}", self.0)
    }
}

impl std::error::Error for ScrivanoError {}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivano operations.
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;
