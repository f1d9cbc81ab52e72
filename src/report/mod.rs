pub mod chart;
pub mod json;
pub mod text;
pub mod xlsx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sheet {sheet:?} is {width} columns wide, more than a worksheet holds")]
    TooWide { sheet: String, width: usize },
}
