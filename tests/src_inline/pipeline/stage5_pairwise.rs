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
fn test_pair_label_format() {
    assert_eq!(pair_label("GFP", true, "RFP", false), "GFP+RFP-");
    assert_eq!(pair_label("GFP", false, "RFP", true), "GFP-RFP+");
}

#[test]
fn test_pairwise_counts_observed_polarities() {
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

    let out = run_stage5(&cells, &dict, &order(&["m1", "m2", "m3"]));
    let table = &out.table;

    assert_eq!(table.labels(), vec!["B+C+", "B+C-", "B-C+"]);
    assert_eq!(table.row("B+C+").unwrap().values, vec![0, 1, 0]);
    assert_eq!(table.row("B+C-").unwrap().values, vec![1, 0, 0]);
    assert_eq!(table.row("B-C+").unwrap().values, vec![0, 1, 0]);
}

#[test]
fn test_pairwise_uses_unordered_pairs_only() {
    let dict = dict(&[(1, "A"), (2, "B"), (3, "C"), (4, "D")]);
    let cells = run_stage1(
        &[
            CellRecord::new("1,2,3,4", "m1"),
            CellRecord::new("1,2", "m1"),
        ],
        &dict,
    );
    let out = run_stage5(&cells, &dict, &order(&["m1"]));
    let labels = out.table.labels();

    assert!(labels.contains(&"B+C+"));
    assert!(labels.contains(&"C+D+"));
    assert!(!labels.iter().any(|l| l.starts_with('C') && l.contains("B")));
    assert!(!labels.iter().any(|l| l.starts_with('A') || l.contains("A+")));
    assert_eq!(out.table.value("B+C-", "m1"), Some(1));
    assert_eq!(out.table.value("B+D-", "m1"), Some(1));
    assert_eq!(out.table.row("C-D+"), None);
}

#[test]
fn test_single_secondary_category_has_no_rows() {
    let dict = dict(&[(1, "A"), (2, "B")]);
    let cells = run_stage1(&[CellRecord::new("1,2", "m1")], &dict);
    let out = run_stage5(&cells, &dict, &order(&["m1"]));
    assert_eq!(out.table.height(), 0);
    assert_eq!(out.table.columns, order(&["m1"]));
}
