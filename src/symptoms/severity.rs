//! Risk severity grading.

use crate::config::{HIGH_RISK_CONFIDENCE, MEDIUM_RISK_CONFIDENCE};

use super::types::{Prediction, RiskSeverity};

/// Condition names that grade the risk as critical regardless of
/// confidence. Matched as substrings of the predicted disease name.
const CRITICAL_CONDITION_KEYWORDS: &[&str] = &["heart attack", "stroke", "sepsis", "meningitis"];

/// Grade the risk of a prediction list.
///
/// Pure function of its input: any critical condition name → critical;
/// otherwise graded by the maximum confidence. An empty list is low.
pub fn classify_risk(predictions: &[Prediction]) -> RiskSeverity {
    if predictions.is_empty() {
        return RiskSeverity::Low;
    }

    let has_critical_condition = predictions.iter().any(|p| {
        let name = p.disease.to_lowercase();
        CRITICAL_CONDITION_KEYWORDS.iter().any(|k| name.contains(k))
    });
    if has_critical_condition {
        return RiskSeverity::Critical;
    }

    let max_confidence = predictions
        .iter()
        .map(|p| p.confidence)
        .fold(0.0_f64, f64::max);

    if max_confidence >= HIGH_RISK_CONFIDENCE {
        RiskSeverity::High
    } else if max_confidence >= MEDIUM_RISK_CONFIDENCE {
        RiskSeverity::Medium
    } else {
        RiskSeverity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(disease: &str, confidence: f64) -> Prediction {
        Prediction {
            disease: disease.into(),
            confidence,
        }
    }

    #[test]
    fn empty_list_is_low() {
        assert_eq!(classify_risk(&[]), RiskSeverity::Low);
    }

    #[test]
    fn critical_condition_overrides_low_confidence() {
        let predictions = vec![prediction("Heart Attack", 0.2)];
        assert_eq!(classify_risk(&predictions), RiskSeverity::Critical);
    }

    #[test]
    fn critical_keyword_matches_substring_case_insensitive() {
        let predictions = vec![prediction("Bacterial MENINGITIS (suspected)", 0.4)];
        assert_eq!(classify_risk(&predictions), RiskSeverity::Critical);
    }

    #[test]
    fn confidence_cutoffs() {
        assert_eq!(
            classify_risk(&[prediction("Common Cold", 0.95)]),
            RiskSeverity::High
        );
        assert_eq!(
            classify_risk(&[prediction("Common Cold", 0.9)]),
            RiskSeverity::High
        );
        assert_eq!(
            classify_risk(&[prediction("Common Cold", 0.8)]),
            RiskSeverity::Medium
        );
        assert_eq!(
            classify_risk(&[prediction("Common Cold", 0.75)]),
            RiskSeverity::Medium
        );
        assert_eq!(
            classify_risk(&[prediction("Common Cold", 0.5)]),
            RiskSeverity::Low
        );
    }

    #[test]
    fn max_confidence_governs_not_first() {
        let predictions = vec![
            prediction("Common Cold", 0.5),
            prediction("Influenza", 0.92),
        ];
        assert_eq!(classify_risk(&predictions), RiskSeverity::High);
    }

    #[test]
    fn idempotent_on_identical_input() {
        let predictions = vec![prediction("Influenza", 0.8)];
        let first = classify_risk(&predictions);
        let second = classify_risk(&predictions);
        assert_eq!(first, second);
    }
}
