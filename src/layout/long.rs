use crate::model::{PercentTable, SpecimenGroupTable};
use crate::pipeline::CellStats;

pub const MOUSE_COLUMN: &str = "mouse";
pub const PERCENT_COLUMN: &str = "percent";

#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub category: String,
    pub mouse: String,
    pub percent: f64,
    /// One entry per `LongTable::metadata_columns`; `None` when the specimen
    /// has no group row.
    pub metadata: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongTable {
    pub metadata_columns: Vec<String>,
    pub rows: Vec<LongRow>,
}

impl LongTable {
    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !out.contains(&row.category.as_str()) {
                out.push(row.category.as_str());
            }
        }
        out
    }

    pub fn metadata_index(&self, column: &str) -> Option<usize> {
        self.metadata_columns.iter().position(|c| c == column)
    }
}

/// Melts `table` to one row per (category, specimen), specimen-major, and
/// left-joins the specimen metadata.
pub fn melt(table: &PercentTable, groups: &SpecimenGroupTable) -> LongTable {
    let positions = groups.position_index();
    let mut rows = Vec::with_capacity(table.width() * table.height());

    for (col, mouse) in table.columns.iter().enumerate() {
        let metadata: Vec<Option<String>> = match positions.get(mouse.as_str()) {
            Some(&idx) => groups.specimens[idx]
                .metadata
                .iter()
                .cloned()
                .map(Some)
                .collect(),
            None => vec![None; groups.metadata_columns.len()],
        };
        for row in &table.rows {
            rows.push(LongRow {
                category: row.label.clone(),
                mouse: mouse.clone(),
                percent: row.values[col],
                metadata: metadata.clone(),
            });
        }
    }

    LongTable {
        metadata_columns: groups.metadata_columns.clone(),
        rows,
    }
}

/// Long view over the primary-denominator percentages.
pub fn primary_percents(stats: &CellStats) -> LongTable {
    melt(&stats.top_percent, &stats.groups)
}

/// Long view over the pairwise (mid-level) percentages.
pub fn all_percents(stats: &CellStats) -> LongTable {
    melt(&stats.mid_percent, &stats.groups)
}

#[cfg(test)]
#[path = "../../tests/src_inline/layout/long.rs"]
mod tests;
