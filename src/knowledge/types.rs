use serde::{Deserialize, Serialize};

/// One-sided or two-sided numeric bound. A missing side means
/// "unbounded on that side" and never triggers a comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeBound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeBound {
    /// True when the value falls below `min` or above `max`.
    pub fn is_outside(&self, value: f64) -> bool {
        self.min.is_some_and(|min| value < min) || self.max.is_some_and(|max| value > max)
    }
}

/// Patient-facing interpretation texts for the three in-range outcomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interpretation {
    pub low: Option<String>,
    pub normal: Option<String>,
    pub high: Option<String>,
}

/// Standard range and interpretation record for one lab test.
/// Owned by the external knowledge store; read-only to this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceStandard {
    pub test_name: String,
    pub unit: String,
    pub normal_range: RangeBound,
    #[serde(default)]
    pub critical_range: Option<RangeBound>,
    #[serde(default)]
    pub interpretation: Interpretation,
}

/// Known symptom with its associated-disease correlations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub name: String,
    #[serde(default)]
    pub common_diseases: Vec<String>,
}

/// Disease record used to enrich predictions for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub treatment_options: Vec<String>,
    #[serde(default)]
    pub when_to_see_doctor: Option<String>,
}
