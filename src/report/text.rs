use std::borrow::Cow;
use std::fmt::Write;

use crate::layout::long::{LongTable, MOUSE_COLUMN, PERCENT_COLUMN};
use crate::model::CountTable;
use crate::model::table::LABEL_COLUMN;

/// Tab-separated preview of a count table with a header row.
pub fn render_count_table(table: &CountTable) -> String {
    let mut out = String::new();
    out.push_str(LABEL_COLUMN);
    for col in &table.columns {
        out.push('\t');
        out.push_str(&tsv_field(col));
    }
    out.push('\n');
    for row in &table.rows {
        out.push_str(&tsv_field(&row.label));
        for v in &row.values {
            let _ = write!(out, "\t{v}");
        }
        out.push('\n');
    }
    out
}

/// `Category, percent, mouse, <metadata...>`; percent printed with six decimals.
pub fn render_long_tsv(table: &LongTable) -> String {
    let mut header = vec![LABEL_COLUMN.into(), PERCENT_COLUMN.into(), MOUSE_COLUMN.into()];
    header.extend(table.metadata_columns.iter().map(|c| tsv_field(c)));

    let mut out = header.join("\t");
    out.push('\n');
    for row in &table.rows {
        let _ = write!(
            out,
            "{}\t{:.6}\t{}",
            tsv_field(&row.category),
            row.percent,
            tsv_field(&row.mouse)
        );
        for value in &row.metadata {
            out.push('\t');
            out.push_str(&tsv_field(value.as_deref().unwrap_or("")));
        }
        out.push('\n');
    }
    out
}

/// Backslash-escapes tabs, line breaks and backslashes so a value stays in
/// its column.
pub fn tsv_field(value: &str) -> Cow<'_, str> {
    if !value.contains(['\t', '\n', '\r', '\\']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
