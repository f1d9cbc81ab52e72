use crate::input::cells::CellRecord;
use crate::model::{CategoryDictionary, CategoryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMembership {
    pub specimen: String,
    /// One flag per dictionary entry, in dictionary order.
    pub flags: Vec<bool>,
}

/// Substring test against the rank's decimal code. Rank `1` therefore also
/// matches a `"10"` tag.
pub fn is_member(tag: &str, id: CategoryId) -> bool {
    tag.contains(id.code().as_str())
}

pub fn run_stage1(cells: &[CellRecord], dict: &CategoryDictionary) -> Vec<CellMembership> {
    cells
        .iter()
        .map(|cell| CellMembership {
            specimen: cell.filename.clone(),
            flags: dict
                .entries()
                .iter()
                .map(|c| is_member(&cell.category, c.id))
                .collect(),
        })
        .collect()
}
