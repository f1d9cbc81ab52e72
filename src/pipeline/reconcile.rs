use std::collections::HashMap;

use crate::model::{CountTable, Row};

/// Where a canonical column's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Index into the pivot's observed specimens.
    Observed(usize),
    /// Specimen never appeared in the grouped data; every value is 0.
    Filled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub columns: Vec<(String, ColumnSource)>,
    /// Observed specimens that are not part of the canonical order.
    pub ignored: Vec<String>,
}

impl ColumnMapping {
    pub fn filled(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, src)| *src == ColumnSource::Filled)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ReconciledTable {
    pub table: CountTable,
    pub mapping: ColumnMapping,
}

/// Label × observed-specimen counts, before alignment with the canonical order.
/// Row order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Pivot {
    labels: Vec<String>,
    observed: Vec<String>,
    counts: Vec<Vec<u64>>,
    label_index: HashMap<String, usize>,
    observed_index: HashMap<String, usize>,
}

impl Pivot {
    pub fn with_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut pivot = Self::default();
        for label in labels {
            pivot.label_slot(&label);
        }
        pivot
    }

    /// Registers a specimen as present in the grouped data, even with no counts.
    pub fn observe(&mut self, specimen: &str) -> usize {
        if let Some(&idx) = self.observed_index.get(specimen) {
            return idx;
        }
        let idx = self.observed.len();
        self.observed.push(specimen.to_string());
        self.observed_index.insert(specimen.to_string(), idx);
        for row in &mut self.counts {
            row.push(0);
        }
        idx
    }

    pub fn add(&mut self, label: &str, specimen: &str, n: u64) {
        let col = self.observe(specimen);
        let row = self.label_slot(label);
        self.counts[row][col] += n;
    }

    fn label_slot(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.label_index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), idx);
        self.counts.push(vec![0; self.observed.len()]);
        idx
    }

    /// Aligns the pivot to `order`: one column per canonical specimen, absent
    /// specimens filled with 0, extra observed specimens dropped.
    pub fn reconcile(&self, order: &[String]) -> ReconciledTable {
        let columns: Vec<(String, ColumnSource)> = order
            .iter()
            .map(|specimen| {
                let src = match self.observed_index.get(specimen.as_str()) {
                    Some(&idx) => ColumnSource::Observed(idx),
                    None => ColumnSource::Filled,
                };
                (specimen.clone(), src)
            })
            .collect();

        let ignored = self
            .observed
            .iter()
            .filter(|s| !order.contains(s))
            .cloned()
            .collect();

        let rows = self
            .labels
            .iter()
            .zip(&self.counts)
            .map(|(label, counts)| Row {
                label: label.clone(),
                values: columns
                    .iter()
                    .map(|(_, src)| match src {
                        ColumnSource::Observed(idx) => counts[*idx],
                        ColumnSource::Filled => 0,
                    })
                    .collect(),
            })
            .collect();

        ReconciledTable {
            table: CountTable {
                columns: order.to_vec(),
                rows,
            },
            mapping: ColumnMapping { columns, ignored },
        }
    }
}
