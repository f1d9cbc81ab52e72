pub mod reconcile;
pub mod stage1_membership;
pub mod stage2_filter;
pub mod stage3_totals;
pub mod stage4_combinations;
pub mod stage5_pairwise;
pub mod stage6_percent;
pub mod stage7_report;

use thiserror::Error;

use crate::input::InputBundle;
use crate::model::category::{DictionaryError, PRIMARY_RANK};
use crate::model::{CategoryDictionary, CountTable, PercentTable, SpecimenGroupTable};
use reconcile::ColumnMapping;
use stage1_membership::run_stage1;
use stage2_filter::run_stage2;
use stage3_totals::run_stage3;
use stage4_combinations::run_stage4;
use stage5_pairwise::run_stage5;
use stage6_percent::{Stage6Inputs, run_stage6};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("no category with rank {PRIMARY_RANK} (primary category) in dictionary")]
    MissingPrimary,
    #[error("invalid category dictionary: {0}")]
    Dictionary(DictionaryError),
    #[error("category dictionary has no secondary (rank > 1) categories")]
    NoSecondaryCategories,
}

impl From<DictionaryError> for AggregationError {
    fn from(err: DictionaryError) -> Self {
        match err {
            DictionaryError::MissingPrimary => Self::MissingPrimary,
            other => Self::Dictionary(other),
        }
    }
}

/// Everything the output views are built from.
#[derive(Debug, Clone)]
pub struct CellStats {
    pub categories: CategoryDictionary,
    /// Group table restricted to surviving specimens.
    pub groups: SpecimenGroupTable,
    pub dropped: Vec<String>,
    pub n_cells: usize,
    pub unlisted_cells: usize,

    pub totals: CountTable,
    pub pairwise: CountTable,
    pub combinations: CountTable,
    pub mappings: TableMappings,

    pub top_percent: PercentTable,
    pub mid_percent: PercentTable,
}

#[derive(Debug, Clone)]
pub struct TableMappings {
    pub totals: ColumnMapping,
    pub pairwise: ColumnMapping,
    pub combinations: ColumnMapping,
}

impl CellStats {
    /// One message per dropped specimen, for the preview display.
    pub fn warnings(&self) -> Vec<String> {
        let primary = &self.categories.primary().label;
        self.dropped
            .iter()
            .map(|specimen| format!("{specimen} has no {primary}"))
            .collect()
    }
}

pub fn run_pipeline(bundle: &InputBundle) -> Result<CellStats, AggregationError> {
    let dict = &CategoryDictionary::new(bundle.categories.clone())?;

    if dict.secondary_indices().is_empty() {
        return Err(AggregationError::NoSecondaryCategories);
    }

    let membership = run_stage1(&bundle.cells, dict);
    let selection = run_stage2(membership, dict, &bundle.groups);
    let order = selection.surviving.order();

    let totals = run_stage3(&selection.cells, dict, &order);
    let combinations = run_stage4(&selection.cells, dict, &order);
    let pairwise = run_stage5(&selection.cells, dict, &order);

    let percents = run_stage6(&Stage6Inputs {
        dict,
        totals: &totals.table,
        pairwise: &pairwise.table,
        combinations: &combinations.table,
    });

    tracing::info!(
        specimens = order.len(),
        dropped = selection.dropped.len(),
        totals_rows = totals.table.height(),
        pairwise_rows = pairwise.table.height(),
        combination_rows = combinations.table.height(),
        "aggregation complete"
    );

    Ok(CellStats {
        categories: dict.clone(),
        groups: selection.surviving,
        dropped: selection.dropped,
        n_cells: selection.cells.len(),
        unlisted_cells: selection.unlisted_cells,
        totals: totals.table,
        pairwise: pairwise.table,
        combinations: combinations.table,
        mappings: TableMappings {
            totals: totals.mapping,
            pairwise: pairwise.mapping,
            combinations: combinations.mapping,
        },
        top_percent: percents.top,
        mid_percent: percents.mid,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
