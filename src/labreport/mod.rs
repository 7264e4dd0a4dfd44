pub mod analyzer;
pub mod blocks;
pub mod mock;
pub mod resolve;
pub mod synthesize;
pub mod table_extract;
pub mod text_extract;
pub mod types;

pub use analyzer::*;
pub use types::*;
