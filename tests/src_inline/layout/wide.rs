use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use super::*;
use crate::input::InputBundle;
use crate::input::cells::CellRecord;
use crate::layout::Cell;
use crate::model::{Category, CategoryId, Specimen, SpecimenGroupTable};
use crate::pipeline::run_pipeline;
use crate::report::xlsx::write_workbook;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("cell_count_stats_wide_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn stats() -> CellStats {
    let bundle = InputBundle {
        source: PathBuf::from("fixture.xlsx"),
        cells: [("1", "m1"), ("1,2", "m1"), ("1,2,3", "m1"), ("1,3", "m2")]
            .iter()
            .map(|&(tag, file)| CellRecord::new(tag, file))
            .collect(),
        categories: [(1, "A"), (2, "B"), (3, "C")]
            .iter()
            .map(|&(rank, label)| Category {
                id: CategoryId(rank),
                label: label.to_string(),
            })
            .collect(),
        groups: SpecimenGroupTable {
            id_column: "Mouse".to_string(),
            metadata_columns: vec!["Genotype".to_string(), "Gender".to_string()],
            specimens: [("m1", "WT", "M"), ("m2", "KO", "F")]
                .iter()
                .map(|&(id, genotype, gender)| Specimen {
                    id: id.to_string(),
                    metadata: vec![genotype.to_string(), gender.to_string()],
                })
                .collect(),
        },
    };
    run_pipeline(&bundle).unwrap()
}

fn first_rows(layout: &SheetLayout) -> Vec<u32> {
    layout.blocks.iter().map(|b| b.first_row).collect()
}

fn text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected text at ({row}, {col}), got {other:?}"),
    }
}

fn number(range: &Range<Data>, row: u32, col: u32) -> f64 {
    match range.get_value((row, col)) {
        Some(Data::Float(v)) => *v,
        Some(Data::Int(v)) => *v as f64,
        other => panic!("expected number at ({row}, {col}), got {other:?}"),
    }
}

fn is_blank(range: &Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}

fn read_back(path: &Path) -> (Vec<String>, Range<Data>, Range<Data>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let names = workbook.sheet_names();
    let summary = workbook.worksheet_range(SUMMARY_SHEET).unwrap();
    let prism = workbook.worksheet_range(PRISM_SHEET).unwrap();
    (names, summary, prism)
}

#[test]
fn test_summary_blocks_are_one_blank_row_apart() {
    let stats = stats();
    let layout = summary_sheet(&stats);

    assert_eq!(stats.totals.height(), 3);
    assert_eq!(first_rows(&layout), vec![0, 5, 10]);
    assert!(layout.blocks.iter().all(|b| b.block.header));
    let frozen: Vec<bool> = layout
        .blocks
        .iter()
        .map(|b| b.block.freeze_first_column)
        .collect();
    assert_eq!(frozen, vec![false, false, true]);
    assert!(layout.freezes_first_column());
}

#[test]
fn test_prism_interleaves_labels_and_percent_rows() {
    let stats = stats();
    let layout = prism_sheet(&stats);

    assert_eq!(stats.top_percent.height(), 9);
    assert_eq!(first_rows(&layout), vec![0, 3, 13, 16]);

    let headers: Vec<bool> = layout.blocks.iter().map(|b| b.block.header).collect();
    assert_eq!(headers, vec![true, false, true, false]);
    assert!(layout.blocks.iter().all(|b| b.block.bold_labels));
    assert!(layout.freezes_first_column());

    for placed in [&layout.blocks[1], &layout.blocks[3]] {
        for row in &placed.block.grid.rows {
            assert!(row[1..].iter().all(|c| matches!(c, Cell::Percent(_))));
        }
    }
}

#[test]
fn test_wide_view_round_trips_through_xlsx() {
    let stats = stats();
    let path = make_temp_dir().join("wide.xlsx");
    write_workbook(&wide_view(&stats), &path).unwrap();

    let (names, summary, prism) = read_back(&path);
    assert_eq!(names, vec![SUMMARY_SHEET.to_string(), PRISM_SHEET.to_string()]);

    for row in [0, 5, 10] {
        assert_eq!(text(&summary, row, 0), "Category");
        assert_eq!(text(&summary, row, 1), "m1");
        assert_eq!(text(&summary, row, 2), "m2");
    }
    assert_eq!(text(&summary, 1, 0), "A");
    assert_eq!(number(&summary, 1, 1), 3.0);
    assert_eq!(number(&summary, 1, 2), 1.0);
    assert_eq!(text(&summary, 6, 0), stats.pairwise.rows[0].label);
    assert_eq!(text(&summary, 11, 0), stats.combinations.rows[0].label);
    assert!(is_blank(&summary, 4, 0));
    assert!(is_blank(&summary, 9, 0));

    for row in [0, 13] {
        assert_eq!(text(&prism, row, 0), " ");
        assert_eq!(text(&prism, row, 1), "m1");
        assert_eq!(text(&prism, row + 1, 0), "Genotype");
        assert_eq!(text(&prism, row + 1, 1), "WT");
        assert_eq!(text(&prism, row + 2, 0), "Gender");
        assert_eq!(text(&prism, row + 2, 2), "F");
    }
    assert_eq!(text(&prism, 3, 0), "B/A");
    assert!((number(&prism, 3, 1) - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(text(&prism, 16, 0), stats.mid_percent.rows[0].label);
    assert!(is_blank(&prism, 12, 0));
}
