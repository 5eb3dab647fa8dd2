use crate::ai::openai::types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatMessageContent,
};
use crate::ai::ChatTransport;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const DEFAULT_COMPLETION_TEXT: &str =
    "Condition: Skin appears healthy\nConcerns:\n- None visible\nRecommendations:\n- Keep it up";

/// In-memory transport for tests. Serves queued completion texts (or a
/// canned default) and records how often it was called. Clones share
/// state, so a clone kept outside the analyzer can observe the call count.
#[derive(Clone)]
pub struct MockChatTransport {
    completions: Arc<Mutex<VecDeque<String>>>,
    upstream_failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockChatTransport {
    pub fn new() -> Self {
        Self {
            completions: Arc::new(Mutex::new(VecDeque::new())),
            upstream_failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_completion_text(self, text: impl Into<String>) -> Self {
        self.completions.lock().unwrap().push_back(text.into());
        self
    }

    /// Make every call fail as a raw upstream error with the given message.
    pub fn with_upstream_failure(self, message: impl Into<String>) -> Self {
        *self.upstream_failure.lock().unwrap() = Some(message.into());
        self
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockChatTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockChatTransport {
    async fn chat_completion(
        &self,
        _api_key: &str,
        _request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = self.upstream_failure.lock().unwrap().clone() {
            return Err(Error::Upstream(message));
        }

        let text = self
            .completions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| DEFAULT_COMPLETION_TEXT.to_string());

        Ok(ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: Some(ChatMessage {
                    role: "assistant".to_string(),
                    content: Some(ChatMessageContent::Text(text)),
                }),
                finish_reason: Some("stop".to_string()),
            }],
        })
    }
}
