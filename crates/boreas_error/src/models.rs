//! Model provider errors.

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Required credentials are missing from the environment
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),
    /// The HTTP request itself failed (connection, DNS, timeout)
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// The API returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status message
        message: String,
    },
    /// Failed to convert a request into the provider wire format
    #[display("Request conversion error: {}", _0)]
    RequestConversion(String),
    /// Failed to convert a provider response into the generic format
    #[display("Response conversion error: {}", _0)]
    ResponseConversion(String),
    /// The provider returned a response with no generated content
    #[display("Provider returned an empty response")]
    EmptyResponse,
    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
