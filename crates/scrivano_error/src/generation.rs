//! Generation strategy error types.

/// Specific error conditions for the fallback generation strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The variant ladder is empty
    NoVariants,
    /// Every payload variant failed
    AllAttemptsFailed {
        /// Failure description from the last variant attempted
        last_error: String,
    },
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::NoVariants => {
                write!(f, "Generation strategy has no payload variants")
            }
            GenerationErrorKind::AllAttemptsFailed { last_error } => {
                write!(f, "All generation attempts failed. Last error: {}", last_error)
            }
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use scrivano_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::AllAttemptsFailed {
///     last_error: "Request timed out after 90 seconds".to_string(),
/// });
/// assert!(format!("{}", err).contains("All generation attempts failed"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}

/// Result alias for generation operations.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
