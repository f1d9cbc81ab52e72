use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, Workbook, Worksheet};

use crate::layout::{Cell, PlacedBlock, SheetLayout};
use crate::report::ExportError;

pub const PERCENT_FORMAT: &str = "0.00%";

pub fn build_workbook(layouts: &[SheetLayout]) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    for layout in layouts {
        let sheet = workbook.add_worksheet();
        render_sheet(sheet, layout)?;
    }
    Ok(workbook)
}

pub fn write_workbook(layouts: &[SheetLayout], path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(layouts)?;
    workbook.save(path)?;
    Ok(())
}

fn render_sheet(sheet: &mut Worksheet, layout: &SheetLayout) -> Result<(), ExportError> {
    sheet.set_name(&layout.name)?;

    let bold = Format::new().set_bold();
    let percent = Format::new().set_num_format(PERCENT_FORMAT);

    for placed in &layout.blocks {
        render_block(sheet, &layout.name, placed, &bold, &percent)?;
    }

    if layout.freezes_first_column() {
        sheet.set_freeze_panes(0, 1)?;
    }
    sheet.autofit();
    Ok(())
}

fn render_block(
    sheet: &mut Worksheet,
    sheet_name: &str,
    placed: &PlacedBlock,
    bold: &Format,
    percent: &Format,
) -> Result<(), ExportError> {
    let block = &placed.block;
    let width = block.grid.width();
    if ColNum::try_from(width).is_err() {
        return Err(ExportError::TooWide {
            sheet: sheet_name.to_string(),
            width,
        });
    }

    if block.header {
        for (col, name) in block.grid.header.iter().enumerate() {
            sheet.write_string_with_format(placed.first_row, col as ColNum, name, bold)?;
        }
    }

    for (offset, cells) in block.grid.rows.iter().enumerate() {
        let row = placed.data_row() + offset as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as ColNum;
            match cell {
                Cell::Text(s) if col == 0 && block.bold_labels => {
                    sheet.write_string_with_format(row, col, s, bold)?;
                }
                Cell::Text(s) => {
                    sheet.write_string(row, col, s)?;
                }
                Cell::Count(n) => {
                    sheet.write_number(row, col, *n as f64)?;
                }
                Cell::Percent(p) => {
                    sheet.write_number_with_format(row, col, *p, percent)?;
                }
            }
        }
    }

    Ok(())
}
