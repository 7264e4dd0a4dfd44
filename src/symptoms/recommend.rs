//! Severity-tiered action recommendations.

use super::types::RiskSeverity;

/// Tail item appended to every tier.
const DIARY_ITEM: &str = "Keep a symptom diary to share with your healthcare provider";

/// Ordered action list for a risk severity. Pure function; every tier
/// ends with the generic symptom-diary item.
pub fn recommendations_for(severity: RiskSeverity) -> Vec<String> {
    let mut recommendations: Vec<String> = match severity {
        RiskSeverity::Critical => vec![
            "Seek immediate medical attention or call emergency services (911)".into(),
            "Do not wait - this could be a medical emergency".into(),
            "Go to the nearest emergency room if safe to do so".into(),
        ],
        RiskSeverity::High => vec![
            "Schedule an appointment with your doctor as soon as possible".into(),
            "Monitor your symptoms closely".into(),
            "Seek immediate care if symptoms worsen".into(),
        ],
        RiskSeverity::Medium => vec![
            "Consider scheduling a doctor's appointment within the next few days".into(),
            "Keep track of your symptoms and any changes".into(),
            "Rest and stay hydrated".into(),
        ],
        RiskSeverity::Low => vec![
            "Monitor your symptoms over the next few days".into(),
            "Get adequate rest and maintain good hydration".into(),
            "Contact your doctor if symptoms persist or worsen".into(),
        ],
    };

    recommendations.push(DIARY_ITEM.into());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_tier_contains_urgency_language() {
        let recommendations = recommendations_for(RiskSeverity::Critical);
        let urgency = ["emergency", "immediate", "911", "urgent"];
        assert!(recommendations
            .iter()
            .any(|r| urgency.iter().any(|k| r.to_lowercase().contains(k))));
    }

    #[test]
    fn every_tier_ends_with_diary_item() {
        for severity in [
            RiskSeverity::Low,
            RiskSeverity::Medium,
            RiskSeverity::High,
            RiskSeverity::Critical,
        ] {
            let recommendations = recommendations_for(severity);
            assert_eq!(recommendations.last().unwrap(), DIARY_ITEM);
            assert_eq!(recommendations.len(), 4);
        }
    }

    #[test]
    fn tiers_are_distinct() {
        assert_ne!(
            recommendations_for(RiskSeverity::Low)[0],
            recommendations_for(RiskSeverity::High)[0]
        );
        assert!(recommendations_for(RiskSeverity::High)[0].contains("as soon as possible"));
        assert!(recommendations_for(RiskSeverity::Medium)[0].contains("next few days"));
    }
}
