//! Error normalization
//!
//! Rewrites raw transport failures into the fixed vocabulary of user-facing
//! categories by matching known substrings of the upstream provider's error
//! phrasing. The match table is data on the [`Normalizer`], not inline
//! conditionals, so it can be extended or swapped without touching call
//! sites. Substring matching against upstream text is a known boundary
//! limitation; the upstream error schema is not owned by this crate.

use crate::{Error, ErrorCategory};

pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// One classification rule: if the raw message contains `needle`
/// (case-sensitive), the failure maps to `category` with `message`.
#[derive(Debug, Clone)]
pub struct NormalizationRule {
    needle: &'static str,
    category: ErrorCategory,
    message: &'static str,
}

impl NormalizationRule {
    pub fn new(needle: &'static str, category: ErrorCategory, message: &'static str) -> Self {
        Self {
            needle,
            category,
            message,
        }
    }
}

/// Classifies raw failures into user-facing categories.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<NormalizationRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(vec![
            NormalizationRule::new(
                "API key",
                ErrorCategory::InvalidCredential,
                "Invalid API key. Please check your API key.",
            ),
            NormalizationRule::new(
                "insufficient_quota",
                ErrorCategory::QuotaExceeded,
                "Quota exceeded. Please check your billing.",
            ),
            NormalizationRule::new(
                "rate_limit",
                ErrorCategory::RateLimited,
                "Too many requests. Please wait and try again.",
            ),
            NormalizationRule::new(
                "model_not_found",
                ErrorCategory::ServiceUnavailable,
                "The AI service is temporarily unavailable.",
            ),
            NormalizationRule::new(
                "deprecated",
                ErrorCategory::ServiceUnavailable,
                "The AI service is temporarily unavailable.",
            ),
        ])
    }
}

impl Normalizer {
    pub fn new(rules: Vec<NormalizationRule>) -> Self {
        Self { rules }
    }

    /// Classify a failure exactly once.
    ///
    /// Errors that already carry a user-facing category pass through
    /// unchanged. Raw transport errors are matched against the rule table
    /// in order; the first matching rule wins. An unmatched message is
    /// surfaced as [`Error::Unknown`] with the original text, or with a
    /// generic message when there is no text to show.
    pub fn normalize(&self, err: Error) -> Error {
        let raw = match err {
            Error::Http(e) => e.to_string(),
            Error::Upstream(message) => message,
            categorized => return categorized,
        };

        for rule in &self.rules {
            if raw.contains(rule.needle) {
                return rule.category.into_error(rule.message);
            }
        }

        if raw.trim().is_empty() {
            Error::Unknown(GENERIC_FAILURE_MESSAGE.to_string())
        } else {
            Error::Unknown(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(message: &str) -> Error {
        Normalizer::default().normalize(Error::Upstream(message.to_string()))
    }

    #[test]
    fn test_api_key_maps_to_invalid_credential() {
        let err = normalize("Incorrect API key provided: sk-bad");
        assert_eq!(err.category(), Some(ErrorCategory::InvalidCredential));
        assert_eq!(err.to_string(), "Invalid API key. Please check your API key.");
    }

    #[test]
    fn test_insufficient_quota_maps_to_quota_exceeded() {
        let err = normalize("API error (status 429): {\"error\":{\"code\":\"insufficient_quota\"}}");
        assert_eq!(err.category(), Some(ErrorCategory::QuotaExceeded));
        assert_eq!(err.to_string(), "Quota exceeded. Please check your billing.");
    }

    #[test]
    fn test_rate_limit_maps_to_rate_limited() {
        let err = normalize("rate_limit_exceeded: slow down");
        assert_eq!(err.category(), Some(ErrorCategory::RateLimited));
    }

    #[test]
    fn test_model_not_found_maps_to_service_unavailable() {
        let err = normalize("The model does not exist (model_not_found)");
        assert_eq!(err.category(), Some(ErrorCategory::ServiceUnavailable));
        assert_eq!(err.to_string(), "The AI service is temporarily unavailable.");
    }

    #[test]
    fn test_deprecated_maps_to_service_unavailable() {
        let err = normalize("gpt-4-vision-preview has been deprecated");
        assert_eq!(err.category(), Some(ErrorCategory::ServiceUnavailable));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let err = normalize("api key looks wrong");
        assert_eq!(err.category(), Some(ErrorCategory::Unknown));
    }

    #[test]
    fn test_unmatched_message_passes_through_as_unknown() {
        let err = normalize("connection reset by peer");
        assert_eq!(err.category(), Some(ErrorCategory::Unknown));
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn test_empty_message_gets_generic_text() {
        let err = normalize("   ");
        assert_eq!(err.category(), Some(ErrorCategory::Unknown));
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let err = normalize("API key invalid and rate_limit hit");
        assert_eq!(err.category(), Some(ErrorCategory::InvalidCredential));
    }

    #[test]
    fn test_categorized_errors_pass_through_unchanged() {
        let original = Error::InvalidImage("Invalid image data".to_string());
        let err = Normalizer::default().normalize(original);
        assert_eq!(err.category(), Some(ErrorCategory::InvalidImage));
        assert_eq!(err.to_string(), "Invalid image data");
    }

    #[test]
    fn test_custom_rule_table() {
        let normalizer = Normalizer::new(vec![NormalizationRule::new(
            "teapot",
            ErrorCategory::ServiceUnavailable,
            "The AI service is temporarily unavailable.",
        )]);
        let err = normalizer.normalize(Error::Upstream("I'm a teapot".to_string()));
        assert_eq!(err.category(), Some(ErrorCategory::ServiceUnavailable));
    }
}
