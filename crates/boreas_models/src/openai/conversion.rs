//! Conversions between the generic request/response types and the wire format.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse, ModelConfig};
use boreas_core::{GenerateRequest, GenerateResponse, Output, Role};
use boreas_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Converts a generic request to a chat-completions request.
///
/// Per-request overrides win over config defaults for model, temperature,
/// and max_tokens.
pub(crate) fn to_chat_request(
    request: &GenerateRequest,
    config: &ModelConfig,
) -> ModelsResult<ChatRequest> {
    if request.messages().is_empty() {
        return Err(ModelsError::new(ModelsErrorKind::RequestConversion(
            "request has no messages".to_string(),
        )));
    }

    let messages = request
        .messages()
        .iter()
        .map(|message| {
            let role = match message.role() {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            ChatMessage {
                role: role.to_string(),
                content: message.content().clone(),
            }
        })
        .collect();

    Ok(ChatRequest {
        model: request
            .model()
            .clone()
            .unwrap_or_else(|| config.model().clone()),
        messages,
        temperature: (*request.temperature()).or(*config.temperature()),
        max_tokens: (*request.max_tokens()).or(*config.max_tokens()),
    })
}

/// Converts a chat-completions response to the generic response.
pub(crate) fn from_chat_response(response: &ChatResponse) -> ModelsResult<GenerateResponse> {
    if response.choices.is_empty() {
        return Err(ModelsError::new(ModelsErrorKind::EmptyResponse));
    }

    let outputs: Vec<Output> = response
        .choices
        .iter()
        .map(|choice| Output::Text(choice.message.content.clone()))
        .collect();

    GenerateResponse::builder()
        .outputs(outputs)
        .build()
        .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
}
