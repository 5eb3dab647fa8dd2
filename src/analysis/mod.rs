//! The analysis pipeline
//!
//! Wires credential and image validation, request assembly, the transport
//! call, response parsing, and report completion into one operation, with
//! every failure normalized exactly once at the boundary.

pub mod image;
pub mod parser;
pub mod report;
pub mod request;

use crate::ai::openai::types::{ChatCompletionResponse, ChatMessageContent};
use crate::ai::{ChatTransport, OpenAiHttpClient};
use crate::models::{Config, SkinAnalysis};
use crate::normalize::Normalizer;
use crate::{credential, Error, Result};

pub const NO_ANALYSIS_MESSAGE: &str = "No analysis received";

/// Caller-owned analysis handle.
///
/// Holds immutable configuration and a connection-pooling transport; no
/// state is shared between calls, so one analyzer may serve concurrent
/// analyses under different API keys.
pub struct SkinAnalyzer {
    transport: Box<dyn ChatTransport>,
    config: Config,
    normalizer: Normalizer,
}

impl SkinAnalyzer {
    pub fn new(config: Config) -> Self {
        let transport = OpenAiHttpClient::new(config.timeout);
        Self::with_transport(config, Box::new(transport))
    }

    pub fn with_transport(config: Config, transport: Box<dyn ChatTransport>) -> Self {
        Self {
            transport,
            config,
            normalizer: Normalizer::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Analyze a face photo.
    ///
    /// `image` is a base64 string, optionally carrying a
    /// `data:image/<subtype>;base64,` header. The API key is validated
    /// before any network traffic. Every error has been through the
    /// normalizer and carries a user-displayable message.
    pub async fn analyze(&self, image: &str, api_key: &str) -> Result<SkinAnalysis> {
        self.run(image, api_key)
            .await
            .map_err(|e| self.normalizer.normalize(e))
    }

    async fn run(&self, image: &str, api_key: &str) -> Result<SkinAnalysis> {
        credential::validate(api_key)?;
        let image_bytes = image::decode_image(image)?;

        let request = request::build_vision_request(&self.config, &image_bytes);
        tracing::debug!(
            model = %self.config.model,
            image_bytes = image_bytes.len(),
            "Dispatching skin analysis request"
        );

        let response = self.transport.chat_completion(api_key, &request).await?;
        let text = extract_text(&response)?;
        let analysis = report::finalize(parser::parse(&text));

        tracing::info!(
            concerns = analysis.concerns.len(),
            recommendations = analysis.recommendations.len(),
            "Skin analysis completed"
        );
        Ok(analysis)
    }
}

/// Pull the first completion's text out of the response envelope.
fn extract_text(response: &ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.as_ref())
        .and_then(|message| message.content.as_ref())
        .and_then(|content| match content {
            ChatMessageContent::Text(text) => Some(text.trim()),
            ChatMessageContent::Parts(_) => None,
        })
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::ParseFailure(NO_ANALYSIS_MESSAGE.to_string()))
}
