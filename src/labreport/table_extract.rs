//! Table-based lab value extraction.
//!
//! Detects column roles from a header row by keyword match, then parses
//! each data row into a `LabValueCandidate`. Rows that cannot contribute
//! a test name and a value string are skipped, never fatal.

use regex::Regex;

use super::types::LabValueCandidate;

/// Header keywords identifying the test-name column.
const TEST_KEYWORDS: &[&str] = &["test", "name", "parameter"];

/// Header keywords identifying the value column.
const VALUE_KEYWORDS: &[&str] = &["value", "result", "level"];

/// Header keywords identifying the unit column.
const UNIT_KEYWORDS: &[&str] = &["unit", "units", "uom"];

/// Header keywords identifying the reference-range column.
const RANGE_KEYWORDS: &[&str] = &["range", "reference", "normal"];

/// Parse lab value candidates out of one table grid.
///
/// Requires a header row plus at least one data row; anything smaller
/// yields no candidates.
pub fn extract_table_values(table: &[Vec<String>]) -> Vec<LabValueCandidate> {
    if table.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = table[0]
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let test_col = find_column_index(&headers, TEST_KEYWORDS);
    let value_col = find_column_index(&headers, VALUE_KEYWORDS);
    let unit_col = find_column_index(&headers, UNIT_KEYWORDS);
    let range_col = find_column_index(&headers, RANGE_KEYWORDS);

    // Without both a test and a value column no row can produce a candidate
    let (Some(test_col), Some(value_col)) = (test_col, value_col) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();

    for row in &table[1..] {
        if row.len() <= test_col.max(value_col) {
            continue;
        }

        let test_name = row[test_col].trim();
        let value_string = row[value_col].trim();

        if test_name.is_empty() || value_string.is_empty() {
            continue;
        }

        candidates.push(LabValueCandidate {
            test_name: test_name.to_string(),
            value_string: value_string.to_string(),
            numeric_value: extract_numeric_value(value_string),
            unit: column_value(row, unit_col),
            reference_range: column_value(row, range_col),
        });
    }

    candidates
}

/// First header cell containing any keyword of the role wins.
fn find_column_index(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| keywords.iter().any(|k| h.contains(k)))
}

fn column_value(row: &[String], col: Option<usize>) -> String {
    col.and_then(|i| row.get(i))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Extract the first numeric token from a value string.
///
/// Comparator symbols are stripped first so "<5.0" parses as 5.0. A
/// string with no parseable token yields `None` — downstream this is an
/// `unknown`-status trigger, not an error.
pub fn extract_numeric_value(value_string: &str) -> Option<f64> {
    let cleaned: String = value_string
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '≤' | '≥'))
        .collect();

    let token = Regex::new(r"[0-9.]+").unwrap();
    token
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
