use std::collections::{BTreeSet, HashMap};

/// Header of the label column in the transposed specimen table.
pub const LABEL_HEADER: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specimen {
    pub id: String,
    pub metadata: Vec<String>,
}

/// The `Groups` sheet: specimen ids in canonical order plus their metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecimenGroupTable {
    pub id_column: String,
    pub metadata_columns: Vec<String>,
    pub specimens: Vec<Specimen>,
}

impl SpecimenGroupTable {
    pub fn order(&self) -> Vec<String> {
        self.specimens.iter().map(|s| s.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.specimens.len()
    }

    pub fn position_index(&self) -> HashMap<&str, usize> {
        self.specimens
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.id.as_str(), idx))
            .collect()
    }

    /// New table without the given specimens; relative order is kept.
    pub fn without(&self, dropped: &BTreeSet<String>) -> Self {
        Self {
            id_column: self.id_column.clone(),
            metadata_columns: self.metadata_columns.clone(),
            specimens: self
                .specimens
                .iter()
                .filter(|s| !dropped.contains(&s.id))
                .cloned()
                .collect(),
        }
    }

    /// Transposed view: one row per metadata column, one column per specimen.
    pub fn label_table(&self) -> SpecimenLabelTable {
        let rows = self
            .metadata_columns
            .iter()
            .enumerate()
            .map(|(col, name)| LabelRow {
                label: name.clone(),
                values: self
                    .specimens
                    .iter()
                    .map(|s| s.metadata.get(col).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect();
        SpecimenLabelTable {
            columns: self.order(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecimenLabelTable {
    pub columns: Vec<String>,
    pub rows: Vec<LabelRow>,
}

#[cfg(test)]
impl SpecimenLabelTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}
