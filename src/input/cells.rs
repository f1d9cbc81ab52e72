use crate::input::{LoadError, SheetGrid};

pub const CATEGORY_COLUMN: &str = "Category";
pub const FILENAME_COLUMN: &str = "Filename";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRecord {
    /// Free-text tag such as `"1,3"`.
    pub category: String,
    /// Specimen identifier.
    pub filename: String,
}

#[cfg(test)]
impl CellRecord {
    pub fn new(category: &str, filename: &str) -> Self {
        Self {
            category: category.to_string(),
            filename: filename.to_string(),
        }
    }
}

pub fn read_cell_records(grid: &SheetGrid, skip_rows: u32) -> Result<Vec<CellRecord>, LoadError> {
    let header_row = skip_rows;
    let header = grid.header(header_row)?;
    let category_col = find_column(&header, CATEGORY_COLUMN)
        .ok_or_else(|| grid.missing_column(CATEGORY_COLUMN))?;
    let filename_col = find_column(&header, FILENAME_COLUMN)
        .ok_or_else(|| grid.missing_column(FILENAME_COLUMN))?;

    let Some((last_row, _)) = grid.end() else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in header_row + 1..=last_row {
        let filename = grid.text(row, filename_col)?;
        if filename.is_empty() {
            skipped += 1;
            continue;
        }
        let category = grid.text(row, category_col)?;
        records.push(CellRecord { category, filename });
    }

    if skipped > 0 {
        tracing::debug!(
            sheet = %grid.name,
            skipped,
            "cell rows without a filename were skipped"
        );
    }

    Ok(records)
}

fn find_column(header: &[(u32, String)], name: &str) -> Option<u32> {
    header
        .iter()
        .find(|(_, column)| column == name)
        .map(|(col, _)| *col)
}
