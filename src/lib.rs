//! Analysis core for Skin Health AI
//!
//! Takes a base64-encoded face photo and an API credential, sends one
//! vision-capable chat completion request to an OpenAI-compatible service,
//! and converts the free-text reply into an always-complete
//! [`SkinAnalysis`] report. Failures from any stage are rewritten into a
//! small fixed vocabulary of user-facing error categories.

pub mod ai;
pub mod analysis;
pub mod credential;
pub mod error;
pub mod models;
pub mod normalize;
pub mod prompts;

pub use analysis::SkinAnalyzer;
pub use error::{Error, ErrorCategory, Result};
pub use models::{Config, SkinAnalysis};
pub use normalize::{NormalizationRule, Normalizer};
