//! Vector extraction error types.

use boreas_core::ShapeViolation;

/// Specific error conditions for extracting a probability vector from an
/// extraction-collaborator reply.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum ExtractionErrorKind {
    /// The reply did not parse as the expected `{"prob_new": [..]}` shape,
    /// even after the truncation fallback
    #[display("Reply is not the expected JSON shape: {} (reply: {}...)", message, preview)]
    Malformed {
        /// The underlying parse error
        message: String,
        /// Leading characters of the offending reply
        preview: String,
    },
    /// The reply parsed, but the vector violates the probability contract
    #[display("Extracted vector violates the probability contract: {}", _0)]
    #[from(ShapeViolation)]
    Shape(ShapeViolation),
}

/// Error type for extraction operations.
///
/// # Examples
///
/// ```
/// use boreas_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::Malformed {
///     message: "expected value at line 1 column 1".to_string(),
///     preview: "Sure! Here is".to_string(),
/// });
/// assert!(format!("{}", err).contains("JSON shape"));
/// ```
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific error condition
    pub kind: ExtractionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: impl Into<ExtractionErrorKind>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind: kind.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error is a parse failure (as opposed to a shape violation).
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ExtractionErrorKind::Malformed { .. })
    }
}
