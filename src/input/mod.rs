use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, XlsxError, open_workbook};
use thiserror::Error;

pub mod categories;
pub mod cells;
pub mod groups;

use crate::model::category::DictionaryError;
use crate::model::{Category, SpecimenGroupTable};
use categories::read_categories;
use cells::{CellRecord, read_cell_records};
use groups::read_groups;

pub const CELL_DATA_SHEET: &str = "Cell Data";
pub const CATEGORIES_SHEET: &str = "Categories";
pub const GROUPS_SHEET: &str = "Groups";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetNames {
    pub cells: String,
    pub categories: String,
    pub groups: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            cells: CELL_DATA_SHEET.to_string(),
            categories: CATEGORIES_SHEET.to_string(),
            groups: GROUPS_SHEET.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub sheets: SheetNames,
    /// Rows above the `Cell Data` header.
    pub cell_skip_rows: u32,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheets: SheetNames::default(),
            cell_skip_rows: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub source: PathBuf,
    pub cells: Vec<CellRecord>,
    /// `(rank, label)` entries in sheet order, not yet resolved into a
    /// dictionary.
    pub categories: Vec<Category>,
    pub groups: SpecimenGroupTable,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open workbook {path}: {source}")]
    Open { path: PathBuf, source: XlsxError },
    #[error("missing sheet {0:?}")]
    MissingSheet(String),
    #[error("failed to read sheet {sheet:?}: {source}")]
    Sheet { sheet: String, source: XlsxError },
    #[error("sheet {sheet:?} has no column {column:?}")]
    MissingColumn { sheet: String, column: String },
    #[error("sheet {sheet:?}, row {row}: {message}")]
    Malformed {
        sheet: String,
        row: u32,
        message: String,
    },
    #[error("sheet {sheet:?}: {source}")]
    Dictionary {
        sheet: String,
        source: DictionaryError,
    },
}

pub fn load_input(path: &Path, options: &LoadOptions) -> Result<InputBundle, LoadError> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let cell_grid = SheetGrid::read(&mut workbook, &options.sheets.cells)?;
    let category_grid = SheetGrid::read(&mut workbook, &options.sheets.categories)?;
    let group_grid = SheetGrid::read(&mut workbook, &options.sheets.groups)?;

    let cells = read_cell_records(&cell_grid, options.cell_skip_rows)?;
    let categories = read_categories(&category_grid)?;
    let groups = read_groups(&group_grid)?;

    tracing::info!(
        path = %path.display(),
        cells = cells.len(),
        categories = categories.len(),
        specimens = groups.len(),
        "loaded workbook"
    );

    Ok(InputBundle {
        source: path.to_path_buf(),
        cells,
        categories,
        groups,
    })
}

/// One worksheet addressed by absolute 0-based (row, col) positions.
#[derive(Debug, Clone)]
pub struct SheetGrid {
    pub name: String,
    range: Range<Data>,
}

impl SheetGrid {
    fn read(workbook: &mut Xlsx<BufReader<File>>, name: &str) -> Result<Self, LoadError> {
        if !workbook.sheet_names().iter().any(|s| s == name) {
            return Err(LoadError::MissingSheet(name.to_string()));
        }
        let range = workbook
            .worksheet_range(name)
            .map_err(|source| LoadError::Sheet {
                sheet: name.to_string(),
                source,
            })?;
        Ok(Self::from_range(name, range))
    }

    pub fn from_range(name: &str, range: Range<Data>) -> Self {
        Self {
            name: name.to_string(),
            range,
        }
    }

    /// First used (row, col), or `None` for an empty sheet.
    pub fn start(&self) -> Option<(u32, u32)> {
        self.range.start()
    }

    pub fn end(&self) -> Option<(u32, u32)> {
        self.range.end()
    }

    pub fn raw(&self, row: u32, col: u32) -> Option<&Data> {
        self.range.get_value((row, col))
    }

    pub fn text(&self, row: u32, col: u32) -> Result<String, LoadError> {
        match self.raw(row, col) {
            None => Ok(String::new()),
            Some(Data::Error(e)) => Err(self.malformed(row, format!("cell error {e:?}"))),
            Some(value) => Ok(cell_text(value)),
        }
    }

    /// Header row as `(column, name)` pairs, skipping blank headers.
    pub fn header(&self, row: u32) -> Result<Vec<(u32, String)>, LoadError> {
        let (Some((_, first_col)), Some((_, last_col))) = (self.start(), self.end()) else {
            return Ok(Vec::new());
        };
        let mut out = Vec::new();
        for col in first_col..=last_col {
            let name = self.text(row, col)?;
            if !name.is_empty() {
                out.push((col, name));
            }
        }
        Ok(out)
    }

    pub fn malformed(&self, row: u32, message: String) -> LoadError {
        LoadError::Malformed {
            sheet: self.name.clone(),
            row: row + 1,
            message,
        }
    }

    pub fn missing_column(&self, column: &str) -> LoadError {
        LoadError::MissingColumn {
            sheet: self.name.clone(),
            column: column.to_string(),
        }
    }
}

/// Renders any non-error cell as the text a user sees in the sheet.
pub fn cell_text(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
