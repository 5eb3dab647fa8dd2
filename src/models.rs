//! Data models and configuration
//!
//! Defines the analysis report consumed by the UI and the runtime
//! configuration for the upstream vision model.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Structured skin-health report.
///
/// Every field is populated before a value leaves the analysis pipeline;
/// callers never see a partially filled report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkinAnalysis {
    pub condition: String,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub confidence: f32,
}

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the upstream vision model.
///
/// The model identifier is configuration rather than code so a deployment
/// can move off a deprecated model without a rebuild.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Build a configuration from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            model: std::env::var("SKIN_AI_MODEL").unwrap_or(defaults.model),
            max_tokens: std::env::var("SKIN_AI_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            timeout: defaults.timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
