use serde::{Deserialize, Serialize};

// ── Upstream document-analysis contract ─────────────────────
//
// Wire shape produced by the external OCR/document-analysis service.
// Field names are PascalCase on the wire.

/// Full document-analysis result: a flat block graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentAnalysis {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One node of the block graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    #[serde(default)]
    pub id: String,
    pub block_type: BlockType,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub row_index: Option<usize>,
    #[serde(default)]
    pub column_index: Option<usize>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockType {
    Line,
    Table,
    Cell,
    Word,
    /// Block types this core does not consume (key-value sets, selection
    /// elements, ...). Carried so unknown upstream types never fail parsing.
    #[serde(other)]
    Other,
}

/// Parent→child edge set of a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    #[serde(rename = "Type")]
    pub relationship_type: RelationshipType,
    #[serde(default)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationshipType {
    Child,
    #[serde(other)]
    Other,
}

// ── Normalized document ─────────────────────────────────────

/// Block graph flattened into ordered text lines and 2-D table grids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text_lines: Vec<String>,
    pub tables: Vec<Vec<Vec<String>>>,
    pub full_text: String,
}

// ── Lab value records ───────────────────────────────────────

/// A lab value as parsed out of a table row or text line, before any
/// clinical interpretation. `numeric_value` is `None` exactly when no
/// leading numeric token could be parsed from the value string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabValueCandidate {
    pub test_name: String,
    pub value_string: String,
    pub numeric_value: Option<f64>,
    pub unit: String,
    pub reference_range: String,
}

/// Clinical classification of a lab value against its reference standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Normal,
    Low,
    High,
    Critical,
    Unknown,
}

/// A candidate plus its classification outcome.
///
/// `status` is `Unknown` iff no matching standard was found or the
/// numeric value failed to parse; `Critical` takes precedence over
/// low/high/normal whenever the value lies outside the critical range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedLabValue {
    #[serde(flatten)]
    pub candidate: LabValueCandidate,
    pub status: LabStatus,
    pub interpretation: String,
}

/// Patient-facing synthesis of a full lab report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReportAnalysis {
    pub classified_values: Vec<ClassifiedLabValue>,
    pub summary: String,
    pub normal_count: usize,
    pub abnormal_count: usize,
    pub critical_count: usize,
    pub recommendations: Vec<String>,
    pub dietary_suggestions: Vec<String>,
    pub disclaimer: String,
}
