//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use boreas_core::{GenerateRequest, GenerateResponse};
use boreas_error::BoreasResult;

/// Core trait that all text-generation backends must implement.
///
/// Each call is one independent round trip: implementations hold no
/// conversational memory between requests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate model output for a request.
    async fn generate(&self, req: &GenerateRequest) -> BoreasResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}
