//! Wire types for the OpenAI-compatible chat-completions API.

use serde::{Deserialize, Serialize};

/// A chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single message on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user", or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// A chat-completions response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    /// Response identifier, when the provider sends one
    #[serde(default)]
    pub id: Option<String>,
    /// Generated choices
    pub choices: Vec<ChatChoice>,
    /// Token accounting, when the provider sends it
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// One generated completion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
    /// Why generation stopped, when reported
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage accounting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens billed
    pub total_tokens: u32,
}
