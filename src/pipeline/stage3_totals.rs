use crate::model::CategoryDictionary;
use crate::pipeline::reconcile::{Pivot, ReconciledTable};
use crate::pipeline::stage1_membership::CellMembership;

/// Per-category member counts, one row per dictionary entry.
pub fn run_stage3(
    cells: &[CellMembership],
    dict: &CategoryDictionary,
    order: &[String],
) -> ReconciledTable {
    let labels: Vec<String> = dict.labels().map(str::to_string).collect();
    let mut pivot = Pivot::with_labels(labels.iter().cloned());

    for cell in cells {
        pivot.observe(&cell.specimen);
        for (label, &flag) in labels.iter().zip(&cell.flags) {
            if flag {
                pivot.add(label, &cell.specimen, 1);
            }
        }
    }

    pivot.reconcile(order)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_totals.rs"]
mod tests;
