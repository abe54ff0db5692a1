//! OpenAI-compatible chat-completions provider.

mod client;
mod config;
mod conversion;
mod dto;

pub use client::OpenAiChatClient;
pub use config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, ModelConfig};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage};
