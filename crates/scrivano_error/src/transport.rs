//! Transport error types and retry classification.

use crate::RetryableError;

/// HTTP status codes that indicate a transient upstream fault.
const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Specific error conditions for chat-completion transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// Endpoint URL is empty or missing an http/https scheme
    InvalidEndpoint(String),
    /// The request exceeded the configured timeout
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },
    /// Non-2xx response after retries, or a non-timeout network fault
    RequestFailed {
        /// HTTP status code, if a response was received
        status: Option<u16>,
        /// Underlying cause description
        message: String,
    },
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::InvalidEndpoint(url) => {
                write!(f, "Invalid endpoint URL: {}", url)
            }
            TransportErrorKind::Timeout { timeout_secs } => {
                write!(f, "Request timed out after {} seconds", timeout_secs)
            }
            TransportErrorKind::RequestFailed {
                status: Some(status),
                message,
            } => write!(f, "API request failed (status {}): {}", status, message),
            TransportErrorKind::RequestFailed {
                status: None,
                message,
            } => write!(f, "API request failed: {}", message),
        }
    }
}

impl TransportErrorKind {
    /// Check if this error type should be retried at the connection level.
    ///
    /// Connect/read faults and 429/500/502/503/504 are transient; timeouts
    /// and the remaining 4xx statuses fail immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportErrorKind::RequestFailed { status: Some(s), .. } => {
                RETRYABLE_STATUSES.contains(s)
            }
            TransportErrorKind::RequestFailed { status: None, .. } => true,
            _ => false,
        }
    }
}

/// Transport error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrivano_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Timeout { timeout_secs: 90 });
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new TransportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transport Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for TransportError {}

impl RetryableError for TransportError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Result alias for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;
