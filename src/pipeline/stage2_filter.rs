use std::collections::{BTreeSet, HashMap};

use crate::model::{CategoryDictionary, SpecimenGroupTable};
use crate::pipeline::stage1_membership::CellMembership;

#[derive(Debug, Clone)]
pub struct SpecimenSelection {
    /// Group table minus dropped specimens; canonical order for every table.
    pub surviving: SpecimenGroupTable,
    /// Specimens without a single primary-category cell, in canonical order.
    pub dropped: Vec<String>,
    /// Cells that belong to a surviving specimen.
    pub cells: Vec<CellMembership>,
    /// Cells whose specimen is not listed in the group table.
    pub unlisted_cells: usize,
}

pub fn run_stage2(
    cells: Vec<CellMembership>,
    dict: &CategoryDictionary,
    groups: &SpecimenGroupTable,
) -> SpecimenSelection {
    let primary = dict.primary_index();

    let mut primary_counts: HashMap<&str, u64> = HashMap::new();
    for cell in &cells {
        if cell.flags[primary] {
            *primary_counts.entry(cell.specimen.as_str()).or_default() += 1;
        }
    }

    let mut dropped = Vec::new();
    for specimen in &groups.specimens {
        if primary_counts.get(specimen.id.as_str()).copied().unwrap_or(0) == 0 {
            tracing::debug!(
                specimen = %specimen.id,
                category = %dict.primary().label,
                "specimen has no primary-category cells; dropping"
            );
            dropped.push(specimen.id.clone());
        }
    }

    let dropped_set: BTreeSet<String> = dropped.iter().cloned().collect();
    let surviving = groups.without(&dropped_set);
    let listed: BTreeSet<&str> = groups.specimens.iter().map(|s| s.id.as_str()).collect();

    let mut unlisted_cells = 0usize;
    let mut kept = Vec::with_capacity(cells.len());
    for cell in cells {
        if !listed.contains(cell.specimen.as_str()) {
            unlisted_cells += 1;
            continue;
        }
        if dropped_set.contains(&cell.specimen) {
            continue;
        }
        kept.push(cell);
    }

    if unlisted_cells > 0 {
        tracing::info!(
            unlisted_cells,
            "cells for specimens missing from the group table were ignored"
        );
    }

    SpecimenSelection {
        surviving,
        dropped,
        cells: kept,
        unlisted_cells,
    }
}
