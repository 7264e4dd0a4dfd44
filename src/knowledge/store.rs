use std::path::Path;

use super::types::{DiseaseRecord, Interpretation, RangeBound, ReferenceStandard, SymptomRecord};
use super::KnowledgeError;

/// Loaded medical knowledge: lab test standards, symptom-disease
/// correlations and disease records.
///
/// Built once at startup and shared immutably; every lookup is a
/// read-only query. The authoritative data lives in an external store,
/// of which this is a request-independent snapshot.
#[derive(Debug)]
pub struct KnowledgeStore {
    pub reference_standards: Vec<ReferenceStandard>,
    pub symptoms: Vec<SymptomRecord>,
    pub diseases: Vec<DiseaseRecord>,
}

impl KnowledgeStore {
    /// Load knowledge data from bundled JSON files.
    pub fn load(knowledge_dir: &Path) -> Result<Self, KnowledgeError> {
        let reference_standards: Vec<ReferenceStandard> =
            load_json(knowledge_dir, "reference_standards.json")?;
        let symptoms: Vec<SymptomRecord> = load_json(knowledge_dir, "symptoms.json")?;
        let diseases: Vec<DiseaseRecord> = load_json(knowledge_dir, "diseases.json")?;

        tracing::info!(
            standards = reference_standards.len(),
            symptoms = symptoms.len(),
            diseases = diseases.len(),
            "knowledge store loaded"
        );

        Ok(Self {
            reference_standards,
            symptoms,
            diseases,
        })
    }

    /// Resolve the reference standard for a test name: exact
    /// case-insensitive match first, then substring match (the standard
    /// name containing the queried name).
    pub fn find_standard(&self, test_name: &str) -> Option<&ReferenceStandard> {
        let query = test_name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.reference_standards
            .iter()
            .find(|s| s.test_name.to_lowercase() == query)
            .or_else(|| {
                self.reference_standards
                    .iter()
                    .find(|s| s.test_name.to_lowercase().contains(&query))
            })
    }

    /// Diseases commonly associated with a symptom (case-insensitive).
    pub fn diseases_for_symptom(&self, symptom: &str) -> Option<&[String]> {
        let query = symptom.trim().to_lowercase();
        self.symptoms
            .iter()
            .find(|s| s.name.to_lowercase() == query)
            .map(|s| s.common_diseases.as_slice())
    }

    /// Disease record by exact case-insensitive name.
    pub fn disease_by_name(&self, name: &str) -> Option<&DiseaseRecord> {
        let query = name.trim().to_lowercase();
        self.diseases
            .iter()
            .find(|d| d.name.to_lowercase() == query)
    }

    /// Known symptom names, lower-cased, in store order. This is the
    /// vocabulary the feature encoder is built from.
    pub fn symptom_vocabulary(&self) -> Vec<String> {
        self.symptoms.iter().map(|s| s.name.to_lowercase()).collect()
    }

    /// Create knowledge data for tests (no file I/O).
    pub fn load_test() -> Self {
        Self {
            reference_standards: vec![
                ReferenceStandard {
                    test_name: "Glucose".into(),
                    unit: "mg/dL".into(),
                    normal_range: RangeBound {
                        min: Some(70.0),
                        max: Some(100.0),
                    },
                    critical_range: Some(RangeBound {
                        min: Some(50.0),
                        max: Some(400.0),
                    }),
                    interpretation: Interpretation {
                        low: Some("Below normal blood sugar".into()),
                        normal: Some("Normal glucose metabolism".into()),
                        high: Some("Above normal blood sugar, may indicate prediabetes".into()),
                    },
                },
                ReferenceStandard {
                    test_name: "Total Cholesterol".into(),
                    unit: "mg/dL".into(),
                    normal_range: RangeBound {
                        min: Some(125.0),
                        max: Some(200.0),
                    },
                    critical_range: None,
                    interpretation: Interpretation {
                        low: Some("Generally not concerning unless very low".into()),
                        normal: Some("Desirable cholesterol level".into()),
                        high: Some("Increased risk of heart disease".into()),
                    },
                },
                ReferenceStandard {
                    test_name: "Hemoglobin".into(),
                    unit: "g/dL".into(),
                    normal_range: RangeBound {
                        min: Some(13.5),
                        max: Some(17.5),
                    },
                    critical_range: Some(RangeBound {
                        min: Some(7.0),
                        max: Some(20.0),
                    }),
                    interpretation: Interpretation {
                        low: Some("May indicate anemia".into()),
                        normal: Some("Normal oxygen-carrying capacity".into()),
                        high: Some("May indicate dehydration or other conditions".into()),
                    },
                },
            ],
            symptoms: vec![
                SymptomRecord {
                    name: "fever".into(),
                    common_diseases: vec!["Common Cold".into(), "Influenza".into()],
                },
                SymptomRecord {
                    name: "cough".into(),
                    common_diseases: vec!["Common Cold".into(), "Bronchitis".into()],
                },
                SymptomRecord {
                    name: "fatigue".into(),
                    common_diseases: vec!["Type 2 Diabetes".into(), "Anemia".into()],
                },
                SymptomRecord {
                    name: "headache".into(),
                    common_diseases: vec!["Migraine".into(), "Hypertension".into()],
                },
                SymptomRecord {
                    name: "chest pain".into(),
                    common_diseases: vec!["Heart Attack".into(), "Angina".into()],
                },
            ],
            diseases: vec![
                DiseaseRecord {
                    name: "Common Cold".into(),
                    description: Some(
                        "A viral infection of the upper respiratory tract.".into(),
                    ),
                    treatment_options: vec![
                        "Rest".into(),
                        "Hydration".into(),
                        "Over-the-counter medications".into(),
                    ],
                    when_to_see_doctor: Some("Symptoms last more than 10 days".into()),
                },
                DiseaseRecord {
                    name: "Influenza".into(),
                    description: Some("A contagious respiratory illness.".into()),
                    treatment_options: vec!["Antiviral medication".into(), "Rest".into()],
                    when_to_see_doctor: Some("Difficulty breathing or high fever".into()),
                },
                DiseaseRecord {
                    name: "Heart Attack".into(),
                    description: Some("Blocked blood flow to the heart muscle.".into()),
                    treatment_options: vec!["Emergency intervention".into()],
                    when_to_see_doctor: Some("Call emergency services immediately".into()),
                },
            ],
        }
    }
}

fn load_json<T: serde::de::DeserializeOwned>(
    dir: &Path,
    file_name: &str,
) -> Result<T, KnowledgeError> {
    let path = dir.join(file_name);
    let json = std::fs::read_to_string(&path)
        .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&json)
        .map_err(|e| KnowledgeError::Parse(file_name.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let store = KnowledgeStore::load_test();
        let standard = store.find_standard("glucose").unwrap();
        assert_eq!(standard.test_name, "Glucose");
    }

    #[test]
    fn substring_match_when_exact_fails() {
        let store = KnowledgeStore::load_test();
        let standard = store.find_standard("cholesterol").unwrap();
        assert_eq!(standard.test_name, "Total Cholesterol");
    }

    #[test]
    fn unknown_test_has_no_standard() {
        let store = KnowledgeStore::load_test();
        assert!(store.find_standard("Troponin").is_none());
        assert!(store.find_standard("").is_none());
        assert!(store.find_standard("   ").is_none());
    }

    #[test]
    fn symptom_correlations_case_insensitive() {
        let store = KnowledgeStore::load_test();
        let diseases = store.diseases_for_symptom("  Fever ").unwrap();
        assert!(diseases.contains(&"Common Cold".to_string()));
        assert!(store.diseases_for_symptom("vertigo").is_none());
    }

    #[test]
    fn disease_lookup_case_insensitive() {
        let store = KnowledgeStore::load_test();
        assert!(store.disease_by_name("common cold").is_some());
        assert!(store.disease_by_name("Rare Disease").is_none());
    }

    #[test]
    fn vocabulary_is_lowercase_store_order() {
        let store = KnowledgeStore::load_test();
        let vocab = store.symptom_vocabulary();
        assert_eq!(vocab[0], "fever");
        assert_eq!(vocab.len(), store.symptoms.len());
        assert!(vocab.iter().all(|s| *s == s.to_lowercase()));
    }

    #[test]
    fn load_from_json_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("reference_standards.json"),
            r#"[{"test_name":"Glucose","unit":"mg/dL","normal_range":{"min":70.0,"max":100.0}}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("symptoms.json"),
            r#"[{"name":"fever","common_diseases":["Common Cold"]}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("diseases.json"),
            r#"[{"name":"Common Cold","description":"Viral infection."}]"#,
        )
        .unwrap();

        let store = KnowledgeStore::load(dir.path()).unwrap();
        assert_eq!(store.reference_standards.len(), 1);
        assert_eq!(store.symptoms.len(), 1);
        assert_eq!(store.diseases.len(), 1);
    }

    #[test]
    fn load_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = KnowledgeStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::Load(_, _)));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("reference_standards.json"), "not json").unwrap();
        let err = KnowledgeStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse(_, _)));
    }

    #[test]
    fn bundled_seed_data_loads() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("resources")
            .join("knowledge");
        let store = KnowledgeStore::load(&dir).unwrap();
        assert!(store.find_standard("Glucose").is_some());
        assert!(store.diseases_for_symptom("fever").is_some());
        assert!(store.disease_by_name("Common Cold").is_some());
    }
}
