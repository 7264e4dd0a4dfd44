//! Persisted classifier artifact.
//!
//! The learned predictor is a fixed dense feed-forward network trained
//! offline. It is persisted as a little-endian binary weight file plus a
//! JSON vocabulary-mapping file, both loaded once at startup. Training
//! is out of scope here; `save` exists for the offline tooling and for
//! round-trip tests.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::ModelError;
use crate::config::{MODEL_MAPPINGS_FILE, MODEL_WEIGHTS_FILE};

/// Magic bytes at the head of the weight artifact.
const WEIGHTS_MAGIC: &[u8; 4] = b"CLSM";

/// Supported artifact format version.
const WEIGHTS_VERSION: u16 = 1;

/// One dense layer: `output = input · weights + bias`.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    pub weights: Array2<f32>,
    pub bias: Array1<f32>,
}

/// Fixed multi-class classifier: ReLU on hidden layers, softmax on the
/// output layer. Inference performs no mutation, so one instance may be
/// shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct DenseClassifier {
    layers: Vec<DenseLayer>,
}

impl DenseClassifier {
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self, ModelError> {
        if layers.is_empty() {
            return Err(ModelError::InvalidArtifact("no layers".into()));
        }
        for window in layers.windows(2) {
            if window[0].weights.ncols() != window[1].weights.nrows() {
                return Err(ModelError::InvalidArtifact(format!(
                    "layer output {} does not feed layer input {}",
                    window[0].weights.ncols(),
                    window[1].weights.nrows()
                )));
            }
        }
        for layer in &layers {
            if layer.bias.len() != layer.weights.ncols() {
                return Err(ModelError::InvalidArtifact(
                    "bias length does not match layer output".into(),
                ));
            }
        }
        Ok(Self { layers })
    }

    pub fn input_dim(&self) -> usize {
        self.layers[0].weights.nrows()
    }

    pub fn output_dim(&self) -> usize {
        self.layers[self.layers.len() - 1].weights.ncols()
    }

    /// Run the network, returning a probability distribution over the
    /// output classes.
    pub fn forward(&self, input: &Array1<f32>) -> Array1<f32> {
        let last = self.layers.len() - 1;
        let mut activation = input.clone();

        for (i, layer) in self.layers.iter().enumerate() {
            let mut z = activation.dot(&layer.weights) + &layer.bias;
            if i < last {
                z.mapv_inplace(|v| v.max(0.0));
            }
            activation = z;
        }

        softmax(&activation)
    }

    /// Read the weight artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let mut reader = BufReader::new(File::open(path)?);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != WEIGHTS_MAGIC {
            return Err(ModelError::InvalidArtifact("bad magic bytes".into()));
        }

        let version = reader.read_u16::<LittleEndian>()?;
        if version != WEIGHTS_VERSION {
            return Err(ModelError::InvalidArtifact(format!(
                "unsupported version {version}"
            )));
        }

        let layer_count = reader.read_u16::<LittleEndian>()? as usize;
        let mut layers = Vec::with_capacity(layer_count);

        for _ in 0..layer_count {
            let rows = reader.read_u32::<LittleEndian>()? as usize;
            let cols = reader.read_u32::<LittleEndian>()? as usize;

            let mut weights = vec![0f32; rows * cols];
            reader.read_f32_into::<LittleEndian>(&mut weights)?;
            let weights = Array2::from_shape_vec((rows, cols), weights)
                .map_err(|e| ModelError::InvalidArtifact(e.to_string()))?;

            let mut bias = vec![0f32; cols];
            reader.read_f32_into::<LittleEndian>(&mut bias)?;

            layers.push(DenseLayer {
                weights,
                bias: Array1::from_vec(bias),
            });
        }

        Self::new(layers)
    }

    /// Write the weight artifact to disk.
    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let mut writer = BufWriter::new(File::create(path)?);

        writer.write_all(WEIGHTS_MAGIC)?;
        writer.write_u16::<LittleEndian>(WEIGHTS_VERSION)?;
        writer.write_u16::<LittleEndian>(self.layers.len() as u16)?;

        for layer in &self.layers {
            writer.write_u32::<LittleEndian>(layer.weights.nrows() as u32)?;
            writer.write_u32::<LittleEndian>(layer.weights.ncols() as u32)?;
            for &v in layer.weights.iter() {
                writer.write_f32::<LittleEndian>(v)?;
            }
            for &v in layer.bias.iter() {
                writer.write_f32::<LittleEndian>(v)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

fn softmax(logits: &Array1<f32>) -> Array1<f32> {
    if logits.is_empty() {
        return logits.clone();
    }
    let max = logits.fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let exps = logits.mapv(|v| (v - max).exp());
    let sum = exps.sum();
    exps / sum
}

/// Vocabulary mappings persisted beside the weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyMappings {
    pub symptom_to_index: HashMap<String, usize>,
    pub disease_to_index: HashMap<String, usize>,
    /// JSON object keys are strings on disk; parsed to indices on load.
    pub index_to_disease: HashMap<String, String>,
}

impl VocabularyMappings {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| ModelError::MappingsParse(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let json =
            serde_json::to_string(self).map_err(|e| ModelError::MappingsParse(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Index-ordered disease names. Fails when the index keys are not a
    /// contiguous 0..n cover.
    pub fn disease_vector(&self) -> Result<Vec<String>, ModelError> {
        let n = self.index_to_disease.len();
        let mut diseases: Vec<Option<String>> = vec![None; n];

        for (key, name) in &self.index_to_disease {
            let i: usize = key
                .parse()
                .map_err(|_| ModelError::MappingsParse(format!("non-numeric index {key:?}")))?;
            if i >= n {
                return Err(ModelError::MappingsParse(format!(
                    "index {i} out of range for {n} diseases"
                )));
            }
            diseases[i] = Some(name.clone());
        }

        diseases
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                d.ok_or_else(|| ModelError::MappingsParse(format!("missing disease index {i}")))
            })
            .collect()
    }
}

/// The pair of persisted files the learned strategy needs.
pub struct ModelArtifacts {
    pub classifier: DenseClassifier,
    pub mappings: VocabularyMappings,
}

impl ModelArtifacts {
    /// Load both artifact files from a model directory. Absence of
    /// either file is reported as `ArtifactNotFound`; the caller treats
    /// any error here as "use the correlation fallback", never as a
    /// startup failure.
    pub fn load(model_dir: &Path) -> Result<Self, ModelError> {
        let weights_path = model_dir.join(MODEL_WEIGHTS_FILE);
        let mappings_path = model_dir.join(MODEL_MAPPINGS_FILE);

        if !weights_path.exists() {
            return Err(ModelError::ArtifactNotFound(weights_path));
        }
        if !mappings_path.exists() {
            return Err(ModelError::ArtifactNotFound(mappings_path));
        }

        let classifier = DenseClassifier::load(&weights_path)?;
        let mappings = VocabularyMappings::load(&mappings_path)?;

        tracing::info!(
            input_dim = classifier.input_dim(),
            output_dim = classifier.output_dim(),
            "classifier artifact loaded"
        );

        Ok(Self {
            classifier,
            mappings,
        })
    }
}
