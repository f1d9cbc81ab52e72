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
fn test_combination_label_concatenates_members() {
    let dict = dict(&[(1, "A"), (2, "B"), (3, "C")]);
    assert_eq!(combination_label(&dict, &[true, false, true]), "A+C+");
    assert_eq!(combination_label(&dict, &[false, false, false]), "");
}

#[test]
fn test_combinations_rows_and_order() {
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

    let out = run_stage4(&cells, &dict, &order(&["m1", "m2"]));
    let table = &out.table;

    assert_eq!(table.labels(), vec!["A+B+C+", "A+B+", "A+", "C+"]);
    assert_eq!(table.row("A+B+C+").unwrap().values, vec![0, 1]);
    assert_eq!(table.row("A+B+").unwrap().values, vec![1, 0]);
    assert_eq!(table.row("A+").unwrap().values, vec![1, 0]);
    assert_eq!(table.row("C+").unwrap().values, vec![0, 1]);
}

#[test]
fn test_each_cell_counted_once() {
    let dict = dict(&[(1, "A"), (2, "B"), (3, "C")]);
    let records = [
        CellRecord::new("1", "m1"),
        CellRecord::new("1,2", "m1"),
        CellRecord::new("", "m1"),
        CellRecord::new("2,3", "m2"),
        CellRecord::new("1,3", "m2"),
        CellRecord::new("1,3", "m2"),
    ];
    let cells = run_stage1(&records, &dict);
    let out = run_stage4(&cells, &dict, &order(&["m1", "m2"]));

    assert_eq!(out.table.column_sums(), vec![3, 3]);
    assert_eq!(out.table.value("", "m1"), Some(1));
    assert_eq!(out.table.labels().last(), Some(&""));
}
