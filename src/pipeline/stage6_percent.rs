use crate::model::table::ratio;
use crate::model::{CategoryDictionary, CountTable, PercentTable, Row};

pub struct Stage6Inputs<'a> {
    pub dict: &'a CategoryDictionary,
    pub totals: &'a CountTable,
    pub pairwise: &'a CountTable,
    pub combinations: &'a CountTable,
}

#[derive(Debug, Clone)]
pub struct Stage6Output {
    pub top: PercentTable,
    pub mid: PercentTable,
}

pub fn run_stage6(inputs: &Stage6Inputs<'_>) -> Stage6Output {
    Stage6Output {
        top: top_percent(inputs),
        mid: mid_percent(inputs.dict, inputs.pairwise),
    }
}

/// Totals, pairwise and combination rows over each specimen's primary total.
/// The primary row itself is left out.
pub fn top_percent(inputs: &Stage6Inputs<'_>) -> PercentTable {
    let primary = inputs.dict.primary().label.as_str();
    let columns = inputs.totals.columns.clone();
    let denominators = inputs
        .totals
        .row(primary)
        .map(|r| r.values.clone())
        .unwrap_or_else(|| vec![0; columns.len()]);

    let rows = [inputs.totals, inputs.pairwise, inputs.combinations]
        .into_iter()
        .flat_map(|table| table.rows.iter())
        .filter(|row| row.label != primary)
        .map(|row| Row {
            label: format!("{}/{}", row.label, primary),
            values: row
                .values
                .iter()
                .zip(&denominators)
                .map(|(&v, &d)| ratio(v, d))
                .collect(),
        })
        .collect();

    PercentTable { columns, rows }
}

/// For every ordered secondary pair `(a, b)`, the pairwise rows where `a` is
/// present and `b` is mentioned, normalized by their own per-specimen sum.
///
/// Iterating ordered pairs means each unordered pair yields two slices, one
/// per reference category.
pub fn mid_percent(dict: &CategoryDictionary, pairwise: &CountTable) -> PercentTable {
    let entries = dict.entries();
    let mut rows = Vec::new();

    for (a, b) in dict.secondary_permutations() {
        let a_label = entries[a].label.as_str();
        let a_present = format!("{a_label}+");
        let b_label = entries[b].label.as_str();

        let selected: Vec<&Row<u64>> = pairwise
            .rows
            .iter()
            .filter(|r| r.label.contains(a_present.as_str()) && r.label.contains(b_label))
            .collect();

        let mut sums = vec![0u64; pairwise.columns.len()];
        for row in &selected {
            for (sum, v) in sums.iter_mut().zip(&row.values) {
                *sum += *v;
            }
        }

        for row in selected {
            rows.push(Row {
                label: format!("{}/{}", row.label, a_label),
                values: row
                    .values
                    .iter()
                    .zip(&sums)
                    .map(|(&v, &d)| ratio(v, d))
                    .collect(),
            });
        }
    }

    PercentTable {
        columns: pairwise.columns.clone(),
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_percent.rs"]
mod tests;
