//! Vision request assembly
//!
//! Builds the chat completion payload: persona system message, analysis
//! instruction, and the image inlined as a data URL, under the configured
//! output-token ceiling. Transmission is the transport's job.

use crate::ai::mime::sniff_image_mime;
use crate::ai::openai::types::{
    ChatCompletionRequest, ChatMessage, ChatMessageContent, ImageUrl, MessagePart,
};
use crate::models::Config;
use crate::prompts;
use base64::Engine as _;

pub fn build_vision_request(config: &Config, image_bytes: &[u8]) -> ChatCompletionRequest {
    let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);
    let mime = sniff_image_mime(image_bytes);
    let data_url = format!("data:{};base64,{}", mime, encoded);

    let system_message = ChatMessage {
        role: "system".to_string(),
        content: Some(ChatMessageContent::Text(
            prompts::ANALYSIS_SYSTEM.trim().to_string(),
        )),
    };

    let user_message = ChatMessage {
        role: "user".to_string(),
        content: Some(ChatMessageContent::Parts(vec![
            MessagePart {
                part_type: "text".to_string(),
                text: Some(prompts::ANALYSIS_USER.trim().to_string()),
                image_url: None,
            },
            MessagePart {
                part_type: "image_url".to_string(),
                text: None,
                image_url: Some(ImageUrl { url: data_url }),
            },
        ])),
    };

    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![system_message, user_message],
        max_tokens: config.max_tokens,
    }
}
