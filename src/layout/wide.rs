use crate::layout::{Block, SheetLayout};
use crate::pipeline::CellStats;

pub const SUMMARY_SHEET: &str = "Cell Count Summary";
pub const PRISM_SHEET: &str = "Prism Friendly";

/// Totals, pairwise and combination counts, one blank row apart.
pub fn summary_sheet(stats: &CellStats) -> SheetLayout {
    SheetLayout::builder(SUMMARY_SHEET)
        .stack(Block::new(&stats.totals))
        .stack(Block::new(&stats.pairwise))
        .stack(Block::new(&stats.combinations).freeze_first_column())
        .build()
}

/// Specimen labels over each percentage table, laid out for pasting into
/// Prism: labels carry the header, the percent rows follow without one.
pub fn prism_sheet(stats: &CellStats) -> SheetLayout {
    let labels = stats.groups.label_table();
    SheetLayout::builder(PRISM_SHEET)
        .stack(Block::new(&labels).bold_labels())
        .attach(Block::new(&stats.top_percent).without_header().bold_labels())
        .stack(Block::new(&labels).bold_labels())
        .attach(
            Block::new(&stats.mid_percent)
                .without_header()
                .bold_labels()
                .freeze_first_column(),
        )
        .build()
}

pub fn wide_view(stats: &CellStats) -> Vec<SheetLayout> {
    vec![summary_sheet(stats), prism_sheet(stats)]
}

#[cfg(test)]
#[path = "../../tests/src_inline/layout/wide.rs"]
mod tests;
