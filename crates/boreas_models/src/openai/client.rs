//! OpenAI-compatible chat-completions client.

use crate::openai::{ChatRequest, ChatResponse, ModelConfig, conversion};
use async_trait::async_trait;
use boreas_core::{GenerateRequest, GenerateResponse};
use boreas_error::{BoreasResult, ModelsError, ModelsErrorKind, ModelsResult};
use boreas_interface::TextGenerator;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// OpenAI-compatible chat-completions client.
///
/// One instance serves one role (narrative or extraction); each `generate`
/// call is an independent round trip with no response caching.
#[derive(Debug, Clone)]
pub struct OpenAiChatClient {
    client: Client,
    config: ModelConfig,
}

impl OpenAiChatClient {
    /// Creates a new client from an explicit configuration.
    pub fn new(config: ModelConfig) -> Self {
        debug!(model = %config.model(), "Creating new OpenAI-compatible client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a new client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> ModelsResult<Self> {
        Ok(Self::new(ModelConfig::from_env()?))
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint().trim_end_matches('/')
        )
    }

    /// Sends a request to the chat-completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn generate_chat(&self, request: &ChatRequest) -> ModelsResult<ChatResponse> {
        debug!("Sending chat-completions request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat-completions request");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat-completions API returned error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat-completions response");
            ModelsError::new(ModelsErrorKind::ResponseConversion(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(
            response_id = chat_response.id.as_deref().unwrap_or("<none>"),
            "Received chat-completions response"
        );
        Ok(chat_response)
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.config.model()))]
    async fn generate(&self, request: &GenerateRequest) -> BoreasResult<GenerateResponse> {
        let chat_request = conversion::to_chat_request(request, &self.config)?;
        let chat_response = self.generate_chat(&chat_request).await?;
        let response = conversion::from_chat_response(&chat_response)?;

        Ok(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
