//! Test utilities for Boreas model tests.
//!
//! This module provides mock implementations and test helpers.

use boreas_core::{GenerateRequest, Message, Role};

pub mod mock_generator;

#[allow(unused_imports)]
pub use mock_generator::{MockReply, MockTextGenerator};

/// Helper to create a test GenerateRequest using the builder pattern.
#[allow(dead_code)]
pub fn create_test_request(prompt: &str, max_tokens: Option<u32>) -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::new(Role::User, prompt.to_string())])
        .max_tokens(max_tokens)
        .build()
        .expect("Failed to build test request")
}
