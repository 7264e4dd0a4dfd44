//! Documented offline fallback dataset.
//!
//! Substituted when the upstream document-analysis service is
//! unreachable, so the extraction → classification → synthesis path
//! stays exercisable without network access.

use super::types::ExtractedDocument;

/// Fixed extraction result standing in for an unavailable upstream
/// analysis. Mirrors a small, plausible lab report.
pub fn mock_extraction() -> ExtractedDocument {
    let text_lines: Vec<String> = [
        "Lab Report",
        "Patient: John Doe",
        "Date: 2024-01-15",
        "Test Results:",
        "Glucose: 105 mg/dL (70-100)",
        "Cholesterol: 220 mg/dL (125-200)",
        "Hemoglobin: 14.5 g/dL (13.5-17.5)",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    let tables = vec![vec![
        row(&["Test Name", "Value", "Unit", "Reference Range"]),
        row(&["Glucose", "105", "mg/dL", "70-100"]),
        row(&["Cholesterol", "220", "mg/dL", "125-200"]),
        row(&["Hemoglobin", "14.5", "g/dL", "13.5-17.5"]),
    ]];

    let full_text = text_lines.join("\n");

    ExtractedDocument {
        text_lines,
        tables,
        full_text,
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labreport::table_extract::extract_table_values;

    #[test]
    fn mock_table_parses_into_three_candidates() {
        let doc = mock_extraction();
        let values = extract_table_values(&doc.tables[0]);
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].test_name, "Glucose");
        assert_eq!(values[0].numeric_value, Some(105.0));
    }

    #[test]
    fn full_text_joins_lines() {
        let doc = mock_extraction();
        assert_eq!(doc.full_text.lines().count(), doc.text_lines.len());
        assert!(doc.full_text.contains("Glucose: 105 mg/dL"));
    }
}
