//! Lab report pipeline orchestrator.

use std::sync::Arc;

use crate::knowledge::KnowledgeStore;

use super::blocks::normalize_blocks;
use super::mock::mock_extraction;
use super::resolve::classify_values;
use super::synthesize::synthesize_report;
use super::table_extract::extract_table_values;
use super::text_extract::extract_text_values;
use super::types::{DocumentAnalysis, ExtractedDocument, LabReportAnalysis, LabValueCandidate};

/// Runs the full extraction → classification → synthesis pipeline for
/// one uploaded lab report. Stateless apart from the shared knowledge
/// snapshot; safe to share across concurrent requests.
pub struct LabReportAnalyzer {
    knowledge: Arc<KnowledgeStore>,
}

impl LabReportAnalyzer {
    pub fn new(knowledge: Arc<KnowledgeStore>) -> Self {
        Self { knowledge }
    }

    /// Analyze one document-analysis result. `None` means the upstream
    /// service was unreachable; the documented fallback dataset is
    /// substituted so the request still completes.
    pub fn analyze(&self, analysis: Option<&DocumentAnalysis>) -> LabReportAnalysis {
        let extracted = match analysis {
            Some(analysis) => normalize_blocks(analysis),
            None => {
                tracing::warn!("document analysis unavailable, using offline fallback dataset");
                mock_extraction()
            }
        };

        let candidates = parse_lab_values(&extracted);
        tracing::info!(
            candidates = candidates.len(),
            tables = extracted.tables.len(),
            "lab values extracted"
        );

        let classified = classify_values(&self.knowledge, candidates);
        synthesize_report(classified)
    }
}

/// Parse candidates from tables first; fall back to the text pattern
/// only when the tables yielded nothing.
pub fn parse_lab_values(extracted: &ExtractedDocument) -> Vec<LabValueCandidate> {
    let mut candidates = Vec::new();

    for table in &extracted.tables {
        candidates.extend(extract_table_values(table));
    }

    if candidates.is_empty() {
        candidates = extract_text_values(&extracted.full_text);
    }

    candidates
}
