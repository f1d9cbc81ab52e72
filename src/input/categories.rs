use calamine::Data;

use crate::input::{LoadError, SheetGrid};
use crate::model::category::check_entries;
use crate::model::{Category, CategoryId};

/// Reads the header-less `(rank, label)` sheet. Blank rows are ignored.
/// The primary category is resolved later, by the aggregation.
pub fn read_categories(grid: &SheetGrid) -> Result<Vec<Category>, LoadError> {
    let mut entries = Vec::new();

    if let (Some((first_row, first_col)), Some((last_row, _))) = (grid.start(), grid.end()) {
        for row in first_row..=last_row {
            let rank_cell = grid.raw(row, first_col);
            let label = grid.text(row, first_col + 1)?;
            let rank_text = grid.text(row, first_col)?;
            if rank_text.is_empty() && label.is_empty() {
                continue;
            }
            let rank = parse_rank(rank_cell, &rank_text).ok_or_else(|| {
                grid.malformed(
                    row,
                    format!("category rank {rank_text:?} is not a positive integer"),
                )
            })?;
            entries.push(Category {
                id: CategoryId(rank),
                label,
            });
        }
    }

    check_entries(&entries).map_err(|source| LoadError::Dictionary {
        sheet: grid.name.clone(),
        source,
    })?;
    Ok(entries)
}

fn parse_rank(cell: Option<&Data>, text: &str) -> Option<u32> {
    let rank = match cell {
        Some(Data::Int(i)) => u32::try_from(*i).ok()?,
        Some(Data::Float(f)) if f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64 => {
            *f as u32
        }
        _ => text.parse::<u32>().ok()?,
    };
    (rank > 0).then_some(rank)
}
