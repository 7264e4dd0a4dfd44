//! Regex fallback extraction for reports without detectable tables.
//!
//! Matches the `name: number unit? (range)?` shape per line. A line may
//! yield several values; unmatched lines and malformed ranges simply
//! contribute nothing.

use regex::Regex;

use super::table_extract::extract_numeric_value;
use super::types::LabValueCandidate;

/// Scan normalized full text for `<name>: <number> <unit>? (<range>)?`
/// occurrences, line by line.
pub fn extract_text_values(full_text: &str) -> Vec<LabValueCandidate> {
    let pattern =
        Regex::new(r"([A-Za-z][A-Za-z\s]*):\s*([0-9.]+)\s*([A-Za-z/%]+)?\s*(?:\(([0-9.\-\s]+)\))?")
            .unwrap();

    let mut candidates = Vec::new();

    for line in full_text.lines() {
        for cap in pattern.captures_iter(line) {
            let test_name = cap[1].trim().to_string();
            let value_string = cap[2].trim().to_string();
            let unit = cap
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let reference_range = cap
                .get(4)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();

            candidates.push(LabValueCandidate {
                numeric_value: extract_numeric_value(&value_string),
                test_name,
                value_string,
                unit,
                reference_range,
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pattern_with_unit_and_range() {
        let values = extract_text_values("Glucose: 105 mg/dL (70-100)");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].test_name, "Glucose");
        assert_eq!(values[0].numeric_value, Some(105.0));
        assert_eq!(values[0].unit, "mg/dL");
        assert_eq!(values[0].reference_range, "70-100");
    }

    #[test]
    fn unit_and_range_optional() {
        let values = extract_text_values("Hemoglobin: 14.5");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].numeric_value, Some(14.5));
        assert_eq!(values[0].unit, "");
        assert_eq!(values[0].reference_range, "");
    }

    #[test]
    fn multiple_values_on_one_line() {
        let values = extract_text_values("K: 4.2 mmol/L  Na: 140 mmol/L");
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].test_name, "K");
        assert_eq!(values[1].test_name, "Na");
        assert_eq!(values[1].numeric_value, Some(140.0));
    }

    #[test]
    fn multi_line_report() {
        let text = "Lab Report\nGlucose: 105 mg/dL (70-100)\nCholesterol: 220 mg/dL (125-200)";
        let values = extract_text_values(text);
        assert_eq!(values.len(), 2);
        assert_eq!(values[1].test_name, "Cholesterol");
        assert_eq!(values[1].reference_range, "125-200");
    }

    #[test]
    fn multi_word_test_name() {
        let values = extract_text_values("Total Cholesterol: 220 mg/dL");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].test_name, "Total Cholesterol");
    }

    #[test]
    fn unmatched_lines_contribute_nothing() {
        let text = "Patient seen today\nNo significant findings\n";
        assert!(extract_text_values(text).is_empty());
        assert!(extract_text_values("").is_empty());
    }

    #[test]
    fn percent_unit_captured() {
        let values = extract_text_values("Hematocrit: 42.1 % (38.3-48.6)");
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].unit, "%");
        assert_eq!(values[0].reference_range, "38.3-48.6");
    }
}
