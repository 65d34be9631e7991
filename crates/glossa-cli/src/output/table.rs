//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use glossa::{Operands, PluralCategory};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language tag (e.g., "es", "pt-BR").
    pub language: String,
    /// Number of source messages translated.
    pub translated: usize,
    /// Ids of missing messages, sorted.
    pub missing: Vec<String>,
}

/// One classified number.
pub struct PluralRow {
    /// The value as written on the command line.
    pub input: String,
    pub operands: Operands,
    pub category: PluralCategory,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format coverage data as a table.
pub fn format_coverage_table(source_count: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = new_table(vec!["Language", "Coverage", "Missing"]);
    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, source_count),
            lang.missing.len().to_string(),
        ]);
    }
    table
}

/// Format classified numbers with their operands.
pub fn format_plural_table(rows: &[PluralRow]) -> Table {
    let mut table = new_table(vec!["Value", "n", "i", "v", "w", "f", "t", "Category"]);
    for row in rows {
        let ops = &row.operands;
        table.add_row(vec![
            row.input.clone(),
            ops.n.to_string(),
            ops.i.to_string(),
            ops.v.to_string(),
            ops.w.to_string(),
            ops.f.to_string(),
            ops.t.to_string(),
            row.category.to_string(),
        ]);
    }
    table
}
