/// Application-level constants
pub const APP_NAME: &str = "Carelens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Minimum confidence a prediction must reach to be selected outright.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Maximum number of predictions ever returned for one analysis.
pub const MAX_PREDICTIONS: usize = 3;

/// Max confidence at or above this level grades the risk as high.
pub const HIGH_RISK_CONFIDENCE: f64 = 0.9;

/// Max confidence at or above this level grades the risk as medium.
pub const MEDIUM_RISK_CONFIDENCE: f64 = 0.75;

/// File name of the persisted classifier weights inside the model directory.
pub const MODEL_WEIGHTS_FILE: &str = "symptom_predictor.bin";

/// File name of the vocabulary mappings persisted beside the weights.
pub const MODEL_MAPPINGS_FILE: &str = "symptom_mappings.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_carelens() {
        assert_eq!(APP_NAME, "Carelens");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn risk_cutoffs_ordered() {
        assert!(MEDIUM_RISK_CONFIDENCE < HIGH_RISK_CONFIDENCE);
        assert!(CONFIDENCE_THRESHOLD < MEDIUM_RISK_CONFIDENCE);
    }

    #[test]
    fn default_filter_names_crate() {
        assert_eq!(default_log_filter(), "carelens=info");
    }
}
