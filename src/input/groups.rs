use std::collections::BTreeSet;

use crate::input::{LoadError, SheetGrid};
use crate::model::{Specimen, SpecimenGroupTable};

pub const MOUSE_COLUMN: &str = "Mouse";

/// Reads the `Groups` sheet; row order becomes the canonical specimen order.
pub fn read_groups(grid: &SheetGrid) -> Result<SpecimenGroupTable, LoadError> {
    let Some((header_row, _)) = grid.start() else {
        return Err(grid.missing_column(MOUSE_COLUMN));
    };
    let header = grid.header(header_row)?;

    let id_col = header
        .iter()
        .find(|(_, name)| name == MOUSE_COLUMN)
        .map(|(col, _)| *col)
        .ok_or_else(|| grid.missing_column(MOUSE_COLUMN))?;

    let metadata: Vec<(u32, String)> = header
        .into_iter()
        .filter(|(col, _)| *col != id_col)
        .collect();

    let mut specimens = Vec::new();
    let mut seen = BTreeSet::new();
    if let Some((last_row, _)) = grid.end() {
        for row in header_row + 1..=last_row {
            let id = grid.text(row, id_col)?;
            if id.is_empty() {
                continue;
            }
            if !seen.insert(id.clone()) {
                return Err(grid.malformed(row, format!("duplicate specimen {id:?}")));
            }
            let mut values = Vec::with_capacity(metadata.len());
            for (col, _) in &metadata {
                values.push(grid.text(row, *col)?);
            }
            specimens.push(Specimen {
                id,
                metadata: values,
            });
        }
    }

    Ok(SpecimenGroupTable {
        id_column: MOUSE_COLUMN.to_string(),
        metadata_columns: metadata.into_iter().map(|(_, name)| name).collect(),
        specimens,
    })
}
