//! Mock text generator for deterministic tests.

use async_trait::async_trait;
use boreas_core::{GenerateRequest, GenerateResponse, Output};
use boreas_error::{BoreasResult, ModelsError, ModelsErrorKind};
use boreas_interface::TextGenerator;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted mock response.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text
    Success(String),
    /// Fail with this error kind
    Error(ModelsErrorKind),
}

enum MockBehavior {
    Always(MockReply),
    Sequence(Mutex<VecDeque<MockReply>>),
}

/// A `TextGenerator` that replays scripted responses and counts calls.
pub struct MockTextGenerator {
    behavior: MockBehavior,
    calls: AtomicUsize,
    model: String,
}

impl MockTextGenerator {
    /// Always returns the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Always(MockReply::Success(text.into())),
            calls: AtomicUsize::new(0),
            model: "mock-model".to_string(),
        }
    }

    /// Always fails with the given error kind.
    pub fn new_error(kind: ModelsErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Always(MockReply::Error(kind)),
            calls: AtomicUsize::new(0),
            model: "mock-model".to_string(),
        }
    }

    /// Replays the given replies in order, panicking if exhausted.
    pub fn new_sequence(replies: Vec<MockReply>) -> Self {
        Self {
            behavior: MockBehavior::Sequence(Mutex::new(replies.into())),
            calls: AtomicUsize::new(0),
            model: "mock-model".to_string(),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, _req: &GenerateRequest) -> BoreasResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let reply = match &self.behavior {
            MockBehavior::Always(reply) => reply.clone(),
            MockBehavior::Sequence(queue) => queue
                .lock()
                .expect("mock reply queue poisoned")
                .pop_front()
                .expect("mock reply sequence exhausted"),
        };

        match reply {
            MockReply::Success(text) => Ok(GenerateResponse::builder()
                .outputs(vec![Output::Text(text)])
                .build()
                .expect("mock response should build")),
            MockReply::Error(kind) => Err(ModelsError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
