//! Patient-facing report synthesis.
//!
//! A deterministic fold over classified values: no I/O, no lookups.

use super::types::{ClassifiedLabValue, LabReportAnalysis, LabStatus};

/// Fixed disclaimer attached to every synthesized report.
pub const LAB_DISCLAIMER: &str = "Important Medical Disclaimer: This analysis is for informational \
    purposes only and does not constitute medical advice, diagnosis, or treatment. Lab results \
    should always be reviewed with your healthcare provider who can interpret them in the context \
    of your complete medical history and current health status.";

/// Aggregate classified values into a summary, tiered recommendations
/// and dietary suggestions.
pub fn synthesize_report(classified_values: Vec<ClassifiedLabValue>) -> LabReportAnalysis {
    let normal_count = count_status(&classified_values, |s| s == LabStatus::Normal);
    let abnormal_count =
        count_status(&classified_values, |s| s == LabStatus::Low || s == LabStatus::High);
    let critical_count = count_status(&classified_values, |s| s == LabStatus::Critical);

    let summary = build_summary(normal_count, abnormal_count, critical_count);
    let recommendations = build_recommendations(abnormal_count, critical_count);
    let dietary_suggestions = build_dietary_suggestions(&classified_values);

    LabReportAnalysis {
        classified_values,
        summary,
        normal_count,
        abnormal_count,
        critical_count,
        recommendations,
        dietary_suggestions,
        disclaimer: LAB_DISCLAIMER.into(),
    }
}

fn count_status(values: &[ClassifiedLabValue], pred: impl Fn(LabStatus) -> bool) -> usize {
    values.iter().filter(|v| pred(v.status)).count()
}

/// One sentence per non-empty bucket, critical first.
fn build_summary(normal: usize, abnormal: usize, critical: usize) -> String {
    if normal + abnormal + critical == 0 {
        return "No lab results to analyze.".into();
    }

    let mut parts = Vec::new();

    if critical > 0 {
        parts.push(format!(
            "CRITICAL: {critical} test(s) show critical values requiring immediate medical attention."
        ));
    }
    if abnormal > 0 {
        parts.push(format!("{abnormal} test(s) are outside normal range."));
    }
    if normal > 0 {
        parts.push(format!("{normal} test(s) are within normal range."));
    }

    parts.join(" ")
}

/// Urgent-contact items iff critical, follow-up items iff abnormal,
/// always ending with the two generic maintenance items.
fn build_recommendations(abnormal: usize, critical: usize) -> Vec<String> {
    let mut recommendations = Vec::new();

    if critical > 0 {
        recommendations.push(
            "Contact your healthcare provider immediately about critical values".to_string(),
        );
        recommendations.push(
            "Do not wait for a scheduled appointment - this requires urgent attention".to_string(),
        );
    }

    if abnormal > 0 {
        recommendations.push(
            "Schedule a follow-up appointment with your doctor to discuss abnormal results"
                .to_string(),
        );
        recommendations
            .push("Bring this report to your appointment for detailed review".to_string());
    }

    recommendations
        .push("Keep track of your lab results over time to monitor trends".to_string());
    recommendations.push(
        "Continue taking prescribed medications unless advised otherwise by your doctor"
            .to_string(),
    );

    recommendations
}

/// Keyword-matched dietary guidance for abnormal tests, generic
/// balanced-diet guidance when nothing matches.
fn build_dietary_suggestions(values: &[ClassifiedLabValue]) -> Vec<String> {
    let abnormal_names: Vec<String> = values
        .iter()
        .filter(|v| v.status == LabStatus::Low || v.status == LabStatus::High)
        .map(|v| v.candidate.test_name.to_lowercase())
        .collect();

    let mentions =
        |keywords: &[&str]| abnormal_names.iter().any(|n| keywords.iter().any(|k| n.contains(k)));

    let mut suggestions = Vec::new();

    if mentions(&["glucose", "sugar"]) {
        suggestions.push(
            "Monitor carbohydrate intake and choose complex carbs over simple sugars".to_string(),
        );
        suggestions.push("Include more fiber-rich foods in your diet".to_string());
    }

    if mentions(&["cholesterol", "lipid"]) {
        suggestions.push(
            "Choose healthy fats (omega-3, monounsaturated) over saturated fats".to_string(),
        );
        suggestions.push("Include fatty fish like salmon in your diet".to_string());
        suggestions.push("Limit processed foods and trans fats".to_string());
    }

    if mentions(&["iron", "hemoglobin"]) {
        suggestions.push(
            "Include iron-rich foods like lean meats, beans, and leafy greens".to_string(),
        );
        suggestions
            .push("Pair iron-rich foods with vitamin C for better absorption".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(
            "Maintain a balanced diet with plenty of fruits and vegetables".to_string(),
        );
        suggestions.push("Stay well hydrated".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labreport::types::LabValueCandidate;

    fn classified(test_name: &str, status: LabStatus) -> ClassifiedLabValue {
        ClassifiedLabValue {
            candidate: LabValueCandidate {
                test_name: test_name.into(),
                value_string: "1".into(),
                numeric_value: Some(1.0),
                unit: String::new(),
                reference_range: String::new(),
            },
            status,
            interpretation: String::new(),
        }
    }

    // --- summary tests ---

    #[test]
    fn empty_input_has_placeholder_summary() {
        let report = synthesize_report(vec![]);
        assert_eq!(report.summary, "No lab results to analyze.");
        assert_eq!(report.normal_count, 0);
    }

    #[test]
    fn critical_sentence_comes_first() {
        let report = synthesize_report(vec![
            classified("Sodium", LabStatus::Normal),
            classified("Glucose", LabStatus::High),
            classified("Potassium", LabStatus::Critical),
        ]);
        assert!(report.summary.starts_with("CRITICAL: 1 test(s)"));
        assert!(report.summary.contains("1 test(s) are outside normal range."));
        assert!(report.summary.contains("1 test(s) are within normal range."));
    }

    #[test]
    fn counts_partition_by_status() {
        let report = synthesize_report(vec![
            classified("A", LabStatus::Normal),
            classified("B", LabStatus::Low),
            classified("C", LabStatus::High),
            classified("D", LabStatus::Critical),
            classified("E", LabStatus::Unknown),
        ]);
        assert_eq!(report.normal_count, 1);
        assert_eq!(report.abnormal_count, 2);
        assert_eq!(report.critical_count, 1);
        assert_eq!(report.classified_values.len(), 5);
    }

    // --- recommendation tests ---

    #[test]
    fn maintenance_items_always_last() {
        let report = synthesize_report(vec![classified("A", LabStatus::Normal)]);
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.recommendations[0].contains("Keep track of your lab results"));
        assert!(report.recommendations[1].contains("Continue taking prescribed medications"));
    }

    #[test]
    fn critical_adds_urgent_contact_items() {
        let report = synthesize_report(vec![classified("A", LabStatus::Critical)]);
        assert!(report.recommendations[0].contains("immediately"));
        assert!(report.recommendations[1].contains("urgent"));
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn abnormal_adds_follow_up_items() {
        let report = synthesize_report(vec![classified("A", LabStatus::Low)]);
        assert!(report.recommendations[0].contains("follow-up appointment"));
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn critical_and_abnormal_stack_in_order() {
        let report = synthesize_report(vec![
            classified("A", LabStatus::Critical),
            classified("B", LabStatus::High),
        ]);
        assert_eq!(report.recommendations.len(), 6);
        assert!(report.recommendations[0].contains("immediately"));
        assert!(report.recommendations[2].contains("follow-up"));
        assert!(report.recommendations[5].contains("prescribed medications"));
    }

    // --- dietary suggestion tests ---

    #[test]
    fn glucose_keyword_selects_carb_guidance() {
        let report = synthesize_report(vec![classified("Glucose (Fasting)", LabStatus::High)]);
        assert!(report.dietary_suggestions[0].contains("carbohydrate"));
    }

    #[test]
    fn cholesterol_keyword_selects_fat_guidance() {
        let report = synthesize_report(vec![classified("Total Cholesterol", LabStatus::High)]);
        assert!(report.dietary_suggestions[0].contains("fats"));
        assert_eq!(report.dietary_suggestions.len(), 3);
    }

    #[test]
    fn hemoglobin_keyword_selects_iron_guidance() {
        let report = synthesize_report(vec![classified("Hemoglobin", LabStatus::Low)]);
        assert!(report.dietary_suggestions[0].contains("iron-rich"));
        assert!(report.dietary_suggestions[1].contains("vitamin C"));
    }

    #[test]
    fn normal_only_results_get_generic_guidance() {
        let report = synthesize_report(vec![classified("Glucose", LabStatus::Normal)]);
        assert!(report.dietary_suggestions[0].contains("balanced diet"));
        assert_eq!(report.dietary_suggestions.len(), 2);
    }

    #[test]
    fn critical_values_do_not_drive_diet_tips() {
        // Dietary keywords look only at abnormal (low/high) tests
        let report = synthesize_report(vec![classified("Glucose", LabStatus::Critical)]);
        assert!(report.dietary_suggestions[0].contains("balanced diet"));
    }

    #[test]
    fn disclaimer_always_present() {
        let report = synthesize_report(vec![]);
        assert!(report.disclaimer.contains("does not constitute medical advice"));
    }
}
