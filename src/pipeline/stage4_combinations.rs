use std::collections::BTreeSet;

use crate::model::CategoryDictionary;
use crate::pipeline::reconcile::{Pivot, ReconciledTable};
use crate::pipeline::stage1_membership::CellMembership;

/// `"<label>+"` for every category the pattern contains; empty if none.
pub fn combination_label(dict: &CategoryDictionary, flags: &[bool]) -> String {
    let mut out = String::new();
    for (category, &flag) in dict.entries().iter().zip(flags) {
        if flag {
            out.push_str(&category.label);
            out.push('+');
        }
    }
    out
}

/// Counts cells by their full membership pattern. Each cell lands in exactly
/// one row. Rows are ordered member-before-non-member over dictionary order.
pub fn run_stage4(
    cells: &[CellMembership],
    dict: &CategoryDictionary,
    order: &[String],
) -> ReconciledTable {
    let patterns: BTreeSet<&[bool]> = cells.iter().map(|c| c.flags.as_slice()).collect();
    let labels = patterns
        .iter()
        .rev()
        .map(|flags| combination_label(dict, flags));
    let mut pivot = Pivot::with_labels(labels);

    for cell in cells {
        pivot.add(&combination_label(dict, &cell.flags), &cell.specimen, 1);
    }

    pivot.reconcile(order)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_combinations.rs"]
mod tests;
