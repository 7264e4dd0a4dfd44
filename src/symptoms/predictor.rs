//! Disease prediction strategies.
//!
//! Two stateless variants behind one trait, selected once at
//! construction based on artifact availability. Callers depend only on
//! the trait, never on which variant is active.
//!
//! Both strategies apply the same selection rule: keep predictions with
//! confidence at or above the threshold, capped at three; if nothing
//! clears the threshold, take the top three by confidence instead.
//! Ties break by ascending disease name so ordering is deterministic.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::config::{CONFIDENCE_THRESHOLD, MAX_PREDICTIONS};
use crate::knowledge::KnowledgeStore;

use super::encoder::SymptomFeatureEncoder;
use super::model::ModelArtifacts;
use super::types::{Prediction, SymptomSet};
use super::ModelError;

/// Common contract for both prediction strategies. Implementations are
/// immutable after construction and safe to share across requests.
pub trait DiseasePredictor: Send + Sync {
    /// Ranked candidates, strictly non-increasing in confidence,
    /// length 1–3 for any non-empty vocabulary.
    fn predict(&self, symptoms: &SymptomSet) -> Vec<Prediction>;

    /// Strategy tag for logging.
    fn strategy_name(&self) -> &'static str;
}

/// Build the predictor for this process: the learned strategy when the
/// persisted artifact loads, the correlation fallback otherwise.
/// Artifact absence is never a startup failure.
pub fn load_predictor(
    model_dir: &Path,
    knowledge: Arc<KnowledgeStore>,
) -> Box<dyn DiseasePredictor> {
    match ModelArtifacts::load(model_dir).and_then(LearnedPredictor::new) {
        Ok(predictor) => {
            tracing::info!("using learned prediction strategy");
            Box::new(predictor)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "classifier artifact unavailable, using correlation strategy"
            );
            Box::new(CorrelationPredictor::new(knowledge))
        }
    }
}

// ── Learned strategy ────────────────────────────────────────

/// Feeds the encoded feature vector through the persisted classifier to
/// obtain a probability distribution over the disease vocabulary.
pub struct LearnedPredictor {
    artifacts: ModelArtifacts,
    encoder: SymptomFeatureEncoder,
    diseases: Vec<String>,
}

impl LearnedPredictor {
    pub fn new(artifacts: ModelArtifacts) -> Result<Self, ModelError> {
        let encoder = SymptomFeatureEncoder::from_index(artifacts.mappings.symptom_to_index.clone());
        let diseases = artifacts.mappings.disease_vector()?;

        if encoder.dim() != artifacts.classifier.input_dim() {
            return Err(ModelError::DimensionMismatch(format!(
                "symptom vocabulary {} vs classifier input {}",
                encoder.dim(),
                artifacts.classifier.input_dim()
            )));
        }
        if diseases.len() != artifacts.classifier.output_dim() {
            return Err(ModelError::DimensionMismatch(format!(
                "disease vocabulary {} vs classifier output {}",
                diseases.len(),
                artifacts.classifier.output_dim()
            )));
        }

        Ok(Self {
            artifacts,
            encoder,
            diseases,
        })
    }
}

impl DiseasePredictor for LearnedPredictor {
    fn predict(&self, symptoms: &SymptomSet) -> Vec<Prediction> {
        if self.diseases.is_empty() {
            return Vec::new();
        }

        let features = self.encoder.encode(symptoms);
        let probabilities = self.artifacts.classifier.forward(&features);

        let scored = self
            .diseases
            .iter()
            .zip(probabilities.iter())
            .map(|(disease, &p)| Prediction {
                disease: disease.clone(),
                confidence: round3(p as f64),
            })
            .collect();

        select_predictions(scored)
    }

    fn strategy_name(&self) -> &'static str {
        "learned"
    }
}

// ── Correlation strategy ────────────────────────────────────

/// Rule-based fallback: tallies symptom→disease co-occurrences from the
/// knowledge store and normalizes by the number of input symptoms.
pub struct CorrelationPredictor {
    knowledge: Arc<KnowledgeStore>,
}

impl CorrelationPredictor {
    pub fn new(knowledge: Arc<KnowledgeStore>) -> Self {
        Self { knowledge }
    }
}

impl DiseasePredictor for CorrelationPredictor {
    fn predict(&self, symptoms: &SymptomSet) -> Vec<Prediction> {
        if symptoms.is_empty() {
            return Vec::new();
        }

        // BTreeMap keeps the tally deterministic before sorting
        let mut scores: BTreeMap<&str, usize> = BTreeMap::new();
        for symptom in symptoms.iter() {
            if let Some(diseases) = self.knowledge.diseases_for_symptom(symptom) {
                for disease in diseases {
                    *scores.entry(disease.as_str()).or_insert(0) += 1;
                }
            }
        }

        let total = symptoms.len() as f64;
        let scored = scores
            .into_iter()
            .map(|(disease, count)| Prediction {
                disease: disease.to_string(),
                confidence: round3(count as f64 / total),
            })
            .collect();

        select_predictions(scored)
    }

    fn strategy_name(&self) -> &'static str {
        "correlation"
    }
}

// ── Shared selection rule ───────────────────────────────────

/// Sort by descending confidence (ties: ascending disease name), keep
/// entries clearing the threshold capped at the maximum, and fall back
/// to the uncapped top entries when nothing clears it.
fn select_predictions(mut scored: Vec<Prediction>) -> Vec<Prediction> {
    scored.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.disease.cmp(&b.disease))
    });

    let selected: Vec<Prediction> = scored
        .iter()
        .filter(|p| p.confidence >= CONFIDENCE_THRESHOLD)
        .take(MAX_PREDICTIONS)
        .cloned()
        .collect();

    if selected.is_empty() {
        scored.into_iter().take(MAX_PREDICTIONS).collect()
    } else {
        selected
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
