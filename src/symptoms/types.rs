use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Symptom analysis request as received from the calling boundary.
/// Count/non-emptiness constraints are enforced upstream; this core
/// assumes pre-validated input. Demographics are carried through the
/// contract but do not influence prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomAnalysisRequest {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Case-normalized, de-duplicated set of symptom names.
///
/// Backed by a BTreeSet so iteration order is deterministic; ordering
/// carries no significance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSet {
    names: BTreeSet<String>,
}

impl SymptomSet {
    /// Build a set from raw names: lower-cased, trimmed, empties
    /// dropped, duplicates collapsed.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// One ranked disease candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub confidence: f64,
}

/// Ordinal risk grading: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// A prediction enriched with knowledge-store context for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDetail {
    pub disease: String,
    pub confidence: f64,
    pub description: String,
    pub treatment_options: Vec<String>,
    pub when_to_see_doctor: String,
}

/// Full result of one symptom analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predictions: Vec<PredictionDetail>,
    pub risk_severity: RiskSeverity,
    pub recommendations: Vec<String>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symptom_set_normalizes_and_dedupes() {
        let set = SymptomSet::new(["  Fever ", "COUGH", "fever", "", "  "]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("fever"));
        assert!(set.contains("Cough"));
        assert!(!set.contains("headache"));
    }

    #[test]
    fn symptom_set_iteration_is_deterministic() {
        let set1 = SymptomSet::new(["cough", "fever"]);
        let set2 = SymptomSet::new(["Fever", "Cough"]);
        assert_eq!(set1, set2);
        let order: Vec<&str> = set1.iter().collect();
        assert_eq!(order, vec!["cough", "fever"]);
    }

    #[test]
    fn severity_ordering_is_ordinal() {
        assert!(RiskSeverity::Low < RiskSeverity::Medium);
        assert!(RiskSeverity::Medium < RiskSeverity::High);
        assert!(RiskSeverity::High < RiskSeverity::Critical);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskSeverity::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn request_demographics_optional() {
        let request: SymptomAnalysisRequest =
            serde_json::from_str(r#"{"symptoms":["fever"]}"#).unwrap();
        assert_eq!(request.symptoms.len(), 1);
        assert!(request.age.is_none());
        assert!(request.gender.is_none());
    }
}
