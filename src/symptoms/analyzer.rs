//! Symptom pipeline orchestrator.

use std::path::Path;
use std::sync::Arc;

use crate::knowledge::KnowledgeStore;

use super::predictor::{load_predictor, DiseasePredictor};
use super::recommend::recommendations_for;
use super::severity::classify_risk;
use super::types::{
    AnalysisResult, Prediction, PredictionDetail, SymptomAnalysisRequest, SymptomSet,
};

/// Fixed disclaimer attached to every analysis result.
pub const SYMPTOM_DISCLAIMER: &str = "Important Medical Disclaimer: This analysis is for \
    informational purposes only and does not constitute medical advice, diagnosis, or treatment. \
    The predictions are based on statistical patterns and may not be accurate for your specific \
    situation. Always consult with a qualified healthcare professional for proper medical \
    evaluation and diagnosis.";

/// Runs encode → predict → grade → recommend for one symptom report.
/// Holds the process-wide predictor and knowledge snapshot; performs no
/// mutation per request.
pub struct SymptomAnalyzer {
    predictor: Box<dyn DiseasePredictor>,
    knowledge: Arc<KnowledgeStore>,
}

impl SymptomAnalyzer {
    pub fn new(predictor: Box<dyn DiseasePredictor>, knowledge: Arc<KnowledgeStore>) -> Self {
        Self {
            predictor,
            knowledge,
        }
    }

    /// Construct with the strategy resolved from a model directory:
    /// learned when the artifact loads, correlation otherwise.
    pub fn with_model_dir(model_dir: &Path, knowledge: Arc<KnowledgeStore>) -> Self {
        let predictor = load_predictor(model_dir, Arc::clone(&knowledge));
        Self::new(predictor, knowledge)
    }

    /// Analyze a pre-validated symptom report.
    pub fn analyze(&self, request: &SymptomAnalysisRequest) -> AnalysisResult {
        let symptoms = SymptomSet::new(&request.symptoms);
        let predictions = self.predictor.predict(&symptoms);

        tracing::info!(
            strategy = self.predictor.strategy_name(),
            symptoms = symptoms.len(),
            predictions = predictions.len(),
            "symptom analysis complete"
        );

        let risk_severity = classify_risk(&predictions);
        let recommendations = recommendations_for(risk_severity);
        let predictions = predictions
            .into_iter()
            .map(|p| self.enrich(p))
            .collect();

        AnalysisResult {
            predictions,
            risk_severity,
            recommendations,
            disclaimer: SYMPTOM_DISCLAIMER.into(),
        }
    }

    /// Attach knowledge-store context to a prediction, with graceful
    /// defaults when the disease record is missing.
    fn enrich(&self, prediction: Prediction) -> PredictionDetail {
        match self.knowledge.disease_by_name(&prediction.disease) {
            Some(record) => PredictionDetail {
                disease: prediction.disease,
                confidence: prediction.confidence,
                description: record
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description available".into()),
                treatment_options: record.treatment_options.iter().take(3).cloned().collect(),
                when_to_see_doctor: record
                    .when_to_see_doctor
                    .clone()
                    .unwrap_or_else(|| "Consult a healthcare provider".into()),
            },
            None => PredictionDetail {
                disease: prediction.disease,
                confidence: prediction.confidence,
                description: "No additional information available".into(),
                treatment_options: Vec::new(),
                when_to_see_doctor: "Consult a healthcare provider for proper diagnosis".into(),
            },
        }
    }
}
