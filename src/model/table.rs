/// Name of the row-label column shared by every summary and percent table.
pub const LABEL_COLUMN: &str = "Category";

#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub label: String,
    pub values: Vec<T>,
}

/// Label × specimen table. `columns` is always the canonical specimen order and
/// every row carries exactly one value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    pub columns: Vec<String>,
    pub rows: Vec<Row<T>>,
}

pub type CountTable = Table<u64>;
pub type PercentTable = Table<f64>;

impl<T> Table<T> {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn row(&self, label: &str) -> Option<&Row<T>> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// Lookups used by assertions.
#[cfg(test)]
impl<T: Copy> Table<T> {
    pub fn column_index(&self, specimen: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == specimen)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn value(&self, label: &str, specimen: &str) -> Option<T> {
        let col = self.column_index(specimen)?;
        self.row(label).map(|r| r.values[col])
    }
}

impl CountTable {
    pub fn column_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.columns.len()];
        for row in &self.rows {
            for (sum, v) in sums.iter_mut().zip(&row.values) {
                *sum += *v;
            }
        }
        sums
    }
}

/// `numerator / denominator`, with 0/0 and x/0 both mapped to 0.
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let v = numerator as f64 / denominator as f64;
    if v.is_finite() { v } else { 0.0 }
}
