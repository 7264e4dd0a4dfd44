pub mod analyzer;
pub mod encoder;
pub mod model;
pub mod predictor;
pub mod recommend;
pub mod severity;
pub mod types;

pub use analyzer::*;
pub use predictor::{load_predictor, CorrelationPredictor, DiseasePredictor, LearnedPredictor};
pub use types::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model artifact not found at: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Vocabulary mappings parse failed: {0}")]
    MappingsParse(String),

    #[error("Model/vocabulary dimension mismatch: {0}")]
    DimensionMismatch(String),
}
