//! Top-level error wrapper types.

use crate::{ConfigError, DatasetError, ExtractionError, ModelsError, PipelineError};

/// This is the foundation error enum for the Boreas workspace.
///
/// # Examples
///
/// ```
/// use boreas_error::{BoreasError, ConfigError};
///
/// let config_err = ConfigError::new("trials_per_window must be at least 1");
/// let err: BoreasError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BoreasErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Dataset loading error
    #[from(DatasetError)]
    Dataset(DatasetError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Probability vector extraction error
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Boreas error with kind discrimination.
///
/// # Examples
///
/// ```
/// use boreas_error::{BoreasResult, ConfigError};
///
/// fn might_fail() -> BoreasResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Boreas Error: {}", _0)]
pub struct BoreasError(Box<BoreasErrorKind>);

impl BoreasError {
    /// Create a new error from a kind.
    pub fn new(kind: BoreasErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BoreasErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BoreasErrorKind
impl<T> From<T> for BoreasError
where
    T: Into<BoreasErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Boreas operations.
///
/// # Examples
///
/// ```
/// use boreas_error::{BoreasResult, ModelsError, ModelsErrorKind};
///
/// fn call_provider() -> BoreasResult<String> {
///     Err(ModelsError::new(ModelsErrorKind::EmptyResponse))?
/// }
/// ```
pub type BoreasResult<T> = std::result::Result<T, BoreasError>;
