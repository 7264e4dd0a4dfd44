pub mod store;
pub mod types;

pub use store::KnowledgeStore;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Knowledge data load failed ({0}): {1}")]
    Load(String, String),

    #[error("Knowledge data parse failed ({0}): {1}")]
    Parse(String, String),
}
