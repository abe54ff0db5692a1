//! Test doubles for pipeline tests.

use async_trait::async_trait;
use boreas_core::{GenerateRequest, GenerateResponse, Output};
use boreas_error::{BoreasResult, ModelsError, ModelsErrorKind};
use boreas_interface::TextGenerator;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A scripted `TextGenerator` that counts its calls.
///
/// Replies are served from a queue; once the queue is empty the last reply
/// repeats, so a single-entry script behaves as a fixed responder.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, ModelsErrorKind>>>,
    last: Mutex<Option<Result<String, ModelsErrorKind>>>,
    calls: AtomicUsize,
    model: String,
}

impl ScriptedGenerator {
    /// Serves the given replies in order, repeating the final one.
    pub fn new(replies: Vec<Result<String, ModelsErrorKind>>) -> Self {
        assert!(!replies.is_empty(), "script needs at least one reply");
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            model: "stub-model".to_string(),
        }
    }

    /// Always returns the same text.
    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Always fails with the given error kind.
    #[allow(dead_code)]
    pub fn failing(kind: ModelsErrorKind) -> Self {
        Self::new(vec![Err(kind)])
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for &ScriptedGenerator {
    async fn generate(&self, _req: &GenerateRequest) -> BoreasResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut last = self.last.lock().expect("reply cache poisoned");
        let reply = match self.replies.lock().expect("reply queue poisoned").pop_front() {
            Some(reply) => {
                *last = Some(reply.clone());
                reply
            }
            None => last.clone().expect("script served no reply yet"),
        };

        match reply {
            Ok(text) => Ok(GenerateResponse::builder()
                .outputs(vec![Output::Text(text)])
                .build()
                .expect("stub response should build")),
            Err(kind) => Err(ModelsError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
