use super::*;
use crate::input::cells::CellRecord;
use crate::model::{Category, CategoryId};
use crate::pipeline::stage1_membership::run_stage1;

fn dict(entries: &[(u32, &str)]) -> CategoryDictionary {
    CategoryDictionary::new(
        entries
            .iter()
            .map(|&(rank, label)| Category {
                id: CategoryId(rank),
                label: label.to_string(),
            })
            .collect(),
    )
    .unwrap()
}

fn order(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_totals_count_members_per_specimen() {
    let dict = dict(&[(1, "A"), (2, "B"), (3, "C")]);
    let cells = run_stage1(
        &[
            CellRecord::new("1", "m1"),
            CellRecord::new("1,2", "m1"),
            CellRecord::new("1,2,3", "m2"),
            CellRecord::new("3", "m2"),
        ],
        &dict,
    );

    let out = run_stage3(&cells, &dict, &order(&["m1", "m2", "m3"]));
    let table = &out.table;

    assert_eq!(table.labels(), vec!["A", "B", "C"]);
    assert_eq!(table.columns, order(&["m1", "m2", "m3"]));
    assert_eq!(table.row("A").unwrap().values, vec![2, 1, 0]);
    assert_eq!(table.row("B").unwrap().values, vec![1, 1, 0]);
    assert_eq!(table.row("C").unwrap().values, vec![0, 2, 0]);
    assert_eq!(out.mapping.filled(), vec!["m3"]);
}

#[test]
fn test_totals_follow_dictionary_order_not_rank() {
    let dict = dict(&[(3, "C"), (1, "A"), (2, "B")]);
    let cells = run_stage1(&[CellRecord::new("1", "m1")], &dict);
    let out = run_stage3(&cells, &dict, &order(&["m1"]));
    assert_eq!(out.table.labels(), vec!["C", "A", "B"]);
    assert_eq!(out.table.value("A", "m1"), Some(1));
}

#[test]
fn test_totals_column_sum_may_exceed_cell_count() {
    let dict = dict(&[(1, "A"), (2, "B")]);
    let cells = run_stage1(&[CellRecord::new("1,2", "m1")], &dict);
    let out = run_stage3(&cells, &dict, &order(&["m1"]));
    assert_eq!(out.table.column_sums(), vec![2]);
}
