//! Carelens core — patient-facing clinical decision support.
//!
//! Two pipelines share a layered shape: raw external signal → structured
//! candidate records → classified/scored records → patient-facing synthesis.
//!
//! - `labreport`: OCR block graph → lab value candidates → reference-range
//!   classification → summary/recommendations.
//! - `symptoms`: symptom set → feature vector → ranked disease predictions
//!   → risk severity → recommendations.
//!
//! HTTP routing, auth, persistence and notification delivery are external
//! collaborators; this crate consumes and produces their data contracts only.

pub mod config;
pub mod knowledge;
pub mod labreport;
pub mod symptoms;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and integration harnesses embedding
/// this core. Respects `RUST_LOG`, falling back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Carelens core starting v{}", config::APP_VERSION);
}
