//! Reference-range resolution and clinical classification.

use crate::knowledge::{KnowledgeStore, ReferenceStandard};

use super::types::{ClassifiedLabValue, LabStatus, LabValueCandidate};

/// Classify every candidate against the knowledge store's standards.
pub fn classify_values(
    store: &KnowledgeStore,
    candidates: Vec<LabValueCandidate>,
) -> Vec<ClassifiedLabValue> {
    candidates
        .into_iter()
        .map(|c| classify_value(store, c))
        .collect()
}

/// Classify one candidate.
///
/// Order of precedence: unparsed value → `Unknown`; no matching
/// standard → `Unknown`; outside the critical range → `Critical`;
/// below normal min → `Low`; above normal max → `High`; else `Normal`.
pub fn classify_value(store: &KnowledgeStore, candidate: LabValueCandidate) -> ClassifiedLabValue {
    let Some(value) = candidate.numeric_value else {
        return ClassifiedLabValue {
            candidate,
            status: LabStatus::Unknown,
            interpretation: "Could not parse numeric value".into(),
        };
    };

    let Some(standard) = store.find_standard(&candidate.test_name) else {
        return ClassifiedLabValue {
            candidate,
            status: LabStatus::Unknown,
            interpretation: "No standard reference available".into(),
        };
    };

    let (status, interpretation) = classify_against_standard(value, standard);

    ClassifiedLabValue {
        candidate,
        status,
        interpretation,
    }
}

fn classify_against_standard(value: f64, standard: &ReferenceStandard) -> (LabStatus, String) {
    // Critical override comes first: a value outside the critical range
    // is critical even when it is also outside the normal range.
    if let Some(critical) = &standard.critical_range {
        if critical.is_outside(value) {
            return (
                LabStatus::Critical,
                "Critical value - requires immediate attention".into(),
            );
        }
    }

    if standard
        .normal_range
        .min
        .is_some_and(|min| value < min)
    {
        let text = standard
            .interpretation
            .low
            .clone()
            .unwrap_or_else(|| "Below normal range".into());
        return (LabStatus::Low, text);
    }

    if standard
        .normal_range
        .max
        .is_some_and(|max| value > max)
    {
        let text = standard
            .interpretation
            .high
            .clone()
            .unwrap_or_else(|| "Above normal range".into());
        return (LabStatus::High, text);
    }

    let text = standard
        .interpretation
        .normal
        .clone()
        .unwrap_or_else(|| "Within normal range".into());
    (LabStatus::Normal, text)
}
