//! Block graph normalization.
//!
//! The upstream document-analysis service emits a flat graph of LINE,
//! TABLE, CELL and WORD blocks linked by CHILD relationships. This module
//! flattens it into ordered text lines and 2-D table grids for the
//! extractors.

use std::collections::HashMap;

use super::types::{Block, BlockType, DocumentAnalysis, ExtractedDocument, RelationshipType};

/// Convert a block graph into ordered text lines and table grids.
///
/// LINE text is collected in document order. Each TABLE resolves its
/// CELL children through the relationship edges; grid dimensions come
/// from the maximum 1-based row/column index observed. Cells without
/// WORD children yield empty strings. An empty or absent graph yields
/// empty output, never an error.
pub fn normalize_blocks(analysis: &DocumentAnalysis) -> ExtractedDocument {
    let block_map: HashMap<&str, &Block> = analysis
        .blocks
        .iter()
        .map(|b| (b.id.as_str(), b))
        .collect();

    let mut text_lines = Vec::new();
    let mut tables = Vec::new();

    for block in &analysis.blocks {
        match block.block_type {
            BlockType::Line => {
                text_lines.push(block.text.clone().unwrap_or_default());
            }
            BlockType::Table => {
                let grid = extract_table(block, &block_map);
                if !grid.is_empty() {
                    tables.push(grid);
                }
            }
            _ => {}
        }
    }

    let full_text = text_lines.join("\n");

    ExtractedDocument {
        text_lines,
        tables,
        full_text,
    }
}

/// Resolve a TABLE block's CELL children into a 2-D string grid.
fn extract_table(table_block: &Block, block_map: &HashMap<&str, &Block>) -> Vec<Vec<String>> {
    let cells: Vec<&Block> = child_ids(table_block)
        .filter_map(|id| block_map.get(id).copied())
        .filter(|b| b.block_type == BlockType::Cell)
        .collect();

    if cells.is_empty() {
        return Vec::new();
    }

    let max_row = cells.iter().filter_map(|c| c.row_index).max().unwrap_or(0);
    let max_col = cells
        .iter()
        .filter_map(|c| c.column_index)
        .max()
        .unwrap_or(0);

    if max_row == 0 || max_col == 0 {
        return Vec::new();
    }

    let mut grid = vec![vec![String::new(); max_col]; max_row];

    for cell in cells {
        // Indices on the wire are 1-based
        let row = cell.row_index.unwrap_or(1).saturating_sub(1);
        let col = cell.column_index.unwrap_or(1).saturating_sub(1);
        if row < max_row && col < max_col {
            grid[row][col] = cell_text(cell, block_map);
        }
    }

    grid
}

/// Space-join the text of a cell's WORD children.
fn cell_text(cell: &Block, block_map: &HashMap<&str, &Block>) -> String {
    let words: Vec<&str> = child_ids(cell)
        .filter_map(|id| block_map.get(id).copied())
        .filter(|b| b.block_type == BlockType::Word)
        .filter_map(|b| b.text.as_deref())
        .collect();

    words.join(" ")
}

fn child_ids(block: &Block) -> impl Iterator<Item = &str> {
    block
        .relationships
        .iter()
        .filter(|r| r.relationship_type == RelationshipType::Child)
        .flat_map(|r| r.ids.iter().map(String::as_str))
}
