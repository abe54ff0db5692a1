//! Text-generation provider integration for Boreas.
//!
//! This crate provides the OpenAI-compatible chat-completions client used by
//! both pipeline roles (narrative generation and vector extraction). The
//! client is configured once at process start from a [`ModelConfig`] and
//! never reads credentials ad hoc.
//!
//! # Example
//!
//! ```no_run
//! use boreas_models::{ModelConfig, OpenAiChatClient};
//! use boreas_interface::TextGenerator;
//! use boreas_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ModelConfig::from_env()?;
//! let client = OpenAiChatClient::new(config);
//!
//! let message = Message::new(Role::User, "Hello".to_string());
//! let request = GenerateRequest::new(vec![message]);
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

mod openai;

pub use openai::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, DEFAULT_ENDPOINT,
    DEFAULT_MODEL, ModelConfig, OpenAiChatClient,
};
