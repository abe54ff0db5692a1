//! Pipeline orchestration error types.

use crate::ExtractionError;

/// Specific error conditions for the elicitation pipeline.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Extraction failed on the first attempt and on the permitted retry
    #[display("Extraction failed after {} attempt(s): {}", attempts, last_error)]
    RetriesExhausted {
        /// Total narrative+extraction attempts made
        attempts: u32,
        /// The extraction error from the final attempt
        last_error: ExtractionError,
    },
    /// Failed to create the report output directory
    #[display("Failed to create report directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the report file
    #[display("Failed to write report: {}", _0)]
    ReportWrite(String),
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use boreas_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::ReportWrite("disk full".to_string()));
/// assert!(format!("{}", err).contains("report"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
