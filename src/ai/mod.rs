//! Transport seam to the vision-capable chat completion service
//!
//! The analysis pipeline talks to the upstream provider only through the
//! [`ChatTransport`] trait, so HTTP can be swapped for a mock in tests.

pub mod mime;
pub mod mock;
pub mod openai;

pub use mock::MockChatTransport;
pub use openai::OpenAiHttpClient;

use crate::ai::openai::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::Result;
use async_trait::async_trait;

/// One chat-completion-style call to the upstream service.
///
/// The API key is a per-call value rather than transport state, so one
/// transport can serve concurrent analyses under different credentials.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}
