use std::collections::BTreeSet;

use thiserror::Error;

/// Rank that marks the reference category used as the universal denominator.
pub const PRIMARY_RANK: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Numeric code searched for inside a cell's `Category` tag.
    pub fn code(self) -> String {
        self.0.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("no category with rank {PRIMARY_RANK} (primary category) in dictionary")]
    MissingPrimary,
    #[error("duplicate category rank {0}")]
    DuplicateRank(u32),
    #[error("duplicate category label {0:?}")]
    DuplicateLabel(String),
    #[error("category rank {0} has an empty label")]
    EmptyLabel(u32),
}

/// Rejects empty labels and duplicate ranks or labels. Whether a primary
/// category exists is left to `CategoryDictionary::new`.
pub fn check_entries(entries: &[Category]) -> Result<(), DictionaryError> {
    let mut ranks = BTreeSet::new();
    let mut labels = BTreeSet::new();
    for entry in entries {
        if entry.label.is_empty() {
            return Err(DictionaryError::EmptyLabel(entry.id.0));
        }
        if !ranks.insert(entry.id) {
            return Err(DictionaryError::DuplicateRank(entry.id.0));
        }
        if !labels.insert(entry.label.as_str()) {
            return Err(DictionaryError::DuplicateLabel(entry.label.clone()));
        }
    }
    Ok(())
}

/// Rank → label dictionary in sheet order, with the primary category resolved
/// up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDictionary {
    entries: Vec<Category>,
    primary: usize,
}

impl CategoryDictionary {
    pub fn new(entries: Vec<Category>) -> Result<Self, DictionaryError> {
        check_entries(&entries)?;
        let primary = entries
            .iter()
            .position(|c| c.id.0 == PRIMARY_RANK)
            .ok_or(DictionaryError::MissingPrimary)?;
        Ok(Self { entries, primary })
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn primary(&self) -> &Category {
        &self.entries[self.primary]
    }

    /// Index of the primary category within `entries()`.
    pub fn primary_index(&self) -> usize {
        self.primary
    }

    /// Indices of every non-primary category, in dictionary order.
    pub fn secondary_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, c)| c.id.0 > PRIMARY_RANK)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Unordered secondary pairs `(i, j)` with `i` before `j` in dictionary order.
    pub fn secondary_pairs(&self) -> Vec<(usize, usize)> {
        let secondary = self.secondary_indices();
        let mut out = Vec::new();
        for (pos, &a) in secondary.iter().enumerate() {
            for &b in &secondary[pos + 1..] {
                out.push((a, b));
            }
        }
        out
    }

    /// Ordered secondary pairs: every unordered pair appears once per direction.
    pub fn secondary_permutations(&self) -> Vec<(usize, usize)> {
        let secondary = self.secondary_indices();
        let mut out = Vec::new();
        for &a in &secondary {
            for &b in &secondary {
                if a != b {
                    out.push((a, b));
                }
            }
        }
        out
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.label.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
