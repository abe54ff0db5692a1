//! Client configuration sourced from the environment at startup.

use boreas_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Default API endpoint when `OPENAI_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model identifier when `BOREAS_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Explicit configuration for an OpenAI-compatible client.
///
/// Built once at process start (from the environment or explicitly) and
/// passed into client constructors, rather than read from the environment
/// deep in the call stack.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ModelConfig {
    /// Bearer token for the API
    api_key: String,
    /// Base URL of the OpenAI-compatible endpoint
    endpoint: String,
    /// Model identifier
    model: String,
    /// Default sampling temperature, if any
    temperature: Option<f32>,
    /// Default output token ceiling, if any
    max_tokens: Option<u32>,
}

impl ModelConfig {
    /// Creates a config with the default endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_ENDPOINT` and `BOREAS_MODEL`
    /// fall back to [`DEFAULT_ENDPOINT`] and [`DEFAULT_MODEL`].
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> ModelsResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|e| {
            ModelsError::new(ModelsErrorKind::MissingCredentials(format!(
                "OPENAI_API_KEY not set: {}",
                e
            )))
        })?;
        let endpoint =
            std::env::var("OPENAI_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = std::env::var("BOREAS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            endpoint,
            model,
            temperature: None,
            max_tokens: None,
        })
    }

    /// Overrides the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets a default sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets a default output token ceiling.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let config = ModelConfig::new("key", "gpt-4o");
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.model(), "gpt-4o");
        assert_eq!(*config.temperature(), None);
    }

    #[test]
    fn with_methods_override_defaults() {
        let config = ModelConfig::new("key", "gpt-4o")
            .with_endpoint("http://localhost:8000/v1")
            .with_temperature(0.2)
            .with_max_tokens(512);
        assert_eq!(config.endpoint(), "http://localhost:8000/v1");
        assert_eq!(*config.temperature(), Some(0.2));
        assert_eq!(*config.max_tokens(), Some(512));
    }
}
