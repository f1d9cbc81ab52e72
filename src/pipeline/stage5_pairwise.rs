use crate::model::CategoryDictionary;
use crate::pipeline::reconcile::{Pivot, ReconciledTable};
use crate::pipeline::stage1_membership::CellMembership;

/// Polarities reported per pair; `--` cells are outside the `a OR b` filter.
const POLARITIES: [(bool, bool); 3] = [(true, true), (true, false), (false, true)];

fn sign(flag: bool) -> char {
    if flag { '+' } else { '-' }
}

pub fn pair_label(a: &str, a_flag: bool, b: &str, b_flag: bool) -> String {
    format!("{a}{}{b}{}", sign(a_flag), sign(b_flag))
}

/// Co-occurrence counts for every unordered pair of secondary categories.
/// Rows are grouped by pair in dictionary order, then `++`, `+-`, `-+`; only
/// polarities seen in at least one cell are emitted.
pub fn run_stage5(
    cells: &[CellMembership],
    dict: &CategoryDictionary,
    order: &[String],
) -> ReconciledTable {
    let entries = dict.entries();
    let pairs = dict.secondary_pairs();

    let mut labels = Vec::new();
    for &(a, b) in &pairs {
        for (pa, pb) in POLARITIES {
            if cells.iter().any(|c| c.flags[a] == pa && c.flags[b] == pb) {
                labels.push(pair_label(&entries[a].label, pa, &entries[b].label, pb));
            }
        }
    }

    let mut pivot = Pivot::with_labels(labels);
    for cell in cells {
        pivot.observe(&cell.specimen);
        for &(a, b) in &pairs {
            let (pa, pb) = (cell.flags[a], cell.flags[b]);
            if !(pa || pb) {
                continue;
            }
            let label = pair_label(&entries[a].label, pa, &entries[b].label, pb);
            pivot.add(&label, &cell.specimen, 1);
        }
    }

    pivot.reconcile(order)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_pairwise.rs"]
mod tests;
