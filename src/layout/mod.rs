pub mod long;
pub mod wide;

use crate::model::specimen::LABEL_HEADER;
use crate::model::table::LABEL_COLUMN;
use crate::model::{CountTable, PercentTable, SpecimenLabelTable};

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Count(u64),
    /// Fraction in `[0, 1]`; rendered as a percentage.
    Percent(f64),
}

/// Header plus rows; column 0 is the row label.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }
}

impl From<&CountTable> for Grid {
    fn from(table: &CountTable) -> Self {
        Self {
            header: header_for(LABEL_COLUMN, &table.columns),
            rows: table
                .rows
                .iter()
                .map(|row| {
                    let mut cells = vec![Cell::Text(row.label.clone())];
                    cells.extend(row.values.iter().map(|&v| Cell::Count(v)));
                    cells
                })
                .collect(),
        }
    }
}

impl From<&PercentTable> for Grid {
    fn from(table: &PercentTable) -> Self {
        Self {
            header: header_for(LABEL_COLUMN, &table.columns),
            rows: table
                .rows
                .iter()
                .map(|row| {
                    let mut cells = vec![Cell::Text(row.label.clone())];
                    cells.extend(row.values.iter().map(|&v| Cell::Percent(v)));
                    cells
                })
                .collect(),
        }
    }
}

impl From<&SpecimenLabelTable> for Grid {
    fn from(table: &SpecimenLabelTable) -> Self {
        Self {
            header: header_for(LABEL_HEADER, &table.columns),
            rows: table
                .rows
                .iter()
                .map(|row| {
                    let mut cells = vec![Cell::Text(row.label.clone())];
                    cells.extend(row.values.iter().map(|v| Cell::Text(v.clone())));
                    cells
                })
                .collect(),
        }
    }
}

fn header_for(label: &str, columns: &[String]) -> Vec<String> {
    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push(label.to_string());
    header.extend(columns.iter().cloned());
    header
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub grid: Grid,
    /// Write the grid header as the block's first row.
    pub header: bool,
    pub bold_labels: bool,
    pub freeze_first_column: bool,
}

impl Block {
    pub fn new(grid: impl Into<Grid>) -> Self {
        Self {
            grid: grid.into(),
            header: true,
            bold_labels: false,
            freeze_first_column: false,
        }
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    pub fn bold_labels(mut self) -> Self {
        self.bold_labels = true;
        self
    }

    pub fn freeze_first_column(mut self) -> Self {
        self.freeze_first_column = true;
        self
    }

    /// Rows occupied on the sheet, header included.
    pub fn span(&self) -> u32 {
        self.grid.height() + u32::from(self.header)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// 0-based sheet row of the block's first line (header or data).
    pub first_row: u32,
    pub block: Block,
}

impl PlacedBlock {
    pub fn data_row(&self) -> u32 {
        self.first_row + u32::from(self.block.header)
    }

    /// First row after the block.
    #[cfg(test)]
    pub fn end_row(&self) -> u32 {
        self.first_row + self.block.span()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub blocks: Vec<PlacedBlock>,
}

impl SheetLayout {
    pub fn builder(name: &str) -> LayoutBuilder {
        LayoutBuilder {
            name: name.to_string(),
            next_row: 0,
            blocks: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn height(&self) -> u32 {
        self.blocks.last().map(PlacedBlock::end_row).unwrap_or(0)
    }

    pub fn freezes_first_column(&self) -> bool {
        self.blocks.iter().any(|b| b.block.freeze_first_column)
    }
}

/// Stacks blocks top to bottom and computes their row offsets.
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    name: String,
    next_row: u32,
    blocks: Vec<PlacedBlock>,
}

impl LayoutBuilder {
    /// Places `block` after one blank row (no gap for the first block).
    pub fn stack(self, block: Block) -> Self {
        let gap = if self.blocks.is_empty() { 0 } else { 1 };
        self.place(block, gap)
    }

    /// Places `block` directly under the previous one.
    pub fn attach(self, block: Block) -> Self {
        self.place(block, 0)
    }

    pub fn place(mut self, block: Block, gap: u32) -> Self {
        let first_row = self.next_row + gap;
        self.next_row = first_row + block.span();
        self.blocks.push(PlacedBlock { first_row, block });
        self
    }

    pub fn build(self) -> SheetLayout {
        SheetLayout {
            name: self.name,
            blocks: self.blocks,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/layout/mod.rs"]
mod tests;
