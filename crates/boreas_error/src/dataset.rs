//! Dataset loading error types.

/// Specific error conditions for loading the forecast/actual time series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DatasetErrorKind {
    /// Failed to read the dataset file
    #[display("Failed to read dataset file: {}", _0)]
    FileRead(String),
    /// The CSV layer reported a malformed record
    #[display("Malformed CSV record: {}", _0)]
    Csv(String),
    /// A record has fewer than the two required columns
    #[display("Record {} has {} column(s), need at least 2 (forecast, actual)", row, found)]
    TooFewColumns {
        /// Zero-based record index
        row: usize,
        /// Number of columns found
        found: usize,
    },
    /// A data cell did not parse as a number
    #[display("Record {} column {} is not numeric: '{}'", row, column, value)]
    NonNumeric {
        /// Zero-based record index
        row: usize,
        /// Zero-based column index within the record
        column: usize,
        /// The offending cell text
        value: String,
    },
}

/// Error type for dataset operations.
///
/// # Examples
///
/// ```
/// use boreas_error::{DatasetError, DatasetErrorKind};
///
/// let err = DatasetError::new(DatasetErrorKind::TooFewColumns { row: 3, found: 1 });
/// assert!(format!("{}", err).contains("forecast"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Dataset Error: {} at line {} in {}", kind, line, file)]
pub struct DatasetError {
    /// The specific error condition
    pub kind: DatasetErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl DatasetError {
    /// Create a new DatasetError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DatasetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
