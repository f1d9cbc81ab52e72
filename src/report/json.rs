use serde::Serialize;

use crate::model::Table;
use crate::pipeline::CellStats;
use crate::pipeline::reconcile::ColumnMapping;

pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub input: String,
    pub categories: Vec<CategorySummary>,
    pub specimens: Vec<String>,
    pub dropped: Vec<String>,
    pub warnings: Vec<String>,
    pub n_cells: usize,
    pub unlisted_cells: usize,
    pub tables: TableShapes,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub rank: u32,
    pub label: String,
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableShapes {
    pub totals: TableShape,
    pub pairwise: TableShape,
    pub combinations: TableShape,
    pub top_percent: TableShape,
    pub mid_percent: TableShape,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableShape {
    pub rows: usize,
    pub columns: usize,
    /// Canonical specimens absent from the grouped data, zero-filled.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filled: Vec<String>,
}

impl TableShape {
    fn of<T>(table: &Table<T>, mapping: Option<&ColumnMapping>) -> Self {
        Self {
            rows: table.height(),
            columns: table.width(),
            filled: mapping
                .map(|m| m.filled().into_iter().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }
}

impl RunSummary {
    pub fn new(stats: &CellStats, input: &str, outputs: Vec<String>) -> Self {
        let primary = stats.categories.primary().id;
        Self {
            tool: TOOL_NAME,
            version: TOOL_VERSION,
            input: input.to_string(),
            categories: stats
                .categories
                .entries()
                .iter()
                .map(|c| CategorySummary {
                    rank: c.id.0,
                    label: c.label.clone(),
                    primary: c.id == primary,
                })
                .collect(),
            specimens: stats.groups.order(),
            dropped: stats.dropped.clone(),
            warnings: stats.warnings(),
            n_cells: stats.n_cells,
            unlisted_cells: stats.unlisted_cells,
            tables: TableShapes {
                totals: TableShape::of(&stats.totals, Some(&stats.mappings.totals)),
                pairwise: TableShape::of(&stats.pairwise, Some(&stats.mappings.pairwise)),
                combinations: TableShape::of(
                    &stats.combinations,
                    Some(&stats.mappings.combinations),
                ),
                top_percent: TableShape::of(&stats.top_percent, None),
                mid_percent: TableShape::of(&stats.mid_percent, None),
            },
            outputs,
        }
    }
}

pub fn render_summary_json(summary: &RunSummary) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}
