//! Symptom feature encoding.

use std::collections::HashMap;

use ndarray::Array1;

use super::types::SymptomSet;

/// Immutable mapping from normalized symptom name to vector index,
/// built once from the symptom vocabulary and shared read-only.
pub struct SymptomFeatureEncoder {
    index: HashMap<String, usize>,
    dim: usize,
}

impl SymptomFeatureEncoder {
    /// Build from an ordered vocabulary: name i → index i.
    pub fn from_vocabulary<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index: HashMap<String, usize> = vocabulary
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.as_ref().trim().to_lowercase(), i))
            .collect();
        Self::from_index(index)
    }

    /// Build from a persisted name→index mapping.
    pub fn from_index(index: HashMap<String, usize>) -> Self {
        let dim = index.values().map(|i| i + 1).max().unwrap_or(0);
        Self { index, dim }
    }

    /// Length of the encoded feature vector.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Binary feature vector over the vocabulary: 1.0 at the index of
    /// each present, recognized symptom. Unrecognized names are
    /// silently ignored.
    pub fn encode(&self, symptoms: &SymptomSet) -> Array1<f32> {
        let mut features = Array1::zeros(self.dim);
        for name in symptoms.iter() {
            if let Some(&i) = self.index.get(name) {
                features[i] = 1.0;
            }
        }
        features
    }
}
