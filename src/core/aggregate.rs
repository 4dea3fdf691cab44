use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::core::table::{TableRow, TabularDataset};

/// Occurrence count per distinct category.
///
/// Entries are sorted by count, highest first; ties keep first-occurrence
/// order so the table is deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    #[must_use]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(label, _)| label == category)
            .map(|(_, count)| *count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}

/// Counts rows per `Category`. Rows with a blank category are not counted.
#[must_use]
pub fn value_counts(table: &TabularDataset) -> FrequencyTable {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for category in table.rows().filter_map(TableRow::category) {
        *counts.entry(category).or_insert(0) += 1;
    }

    let mut entries = counts
        .into_iter()
        .map(|(label, count)| (label.to_owned(), count))
        .collect::<Vec<_>>();
    // Stable sort keeps first-occurrence order among equal counts.
    entries.sort_by(|left, right| right.1.cmp(&left.1));

    FrequencyTable { entries }
}

/// Distinct non-blank categories in first-occurrence order.
#[must_use]
pub fn distinct_categories(table: &TabularDataset) -> Vec<String> {
    table
        .rows()
        .filter_map(TableRow::category)
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Rows whose `Category` equals `category`, in table order.
#[must_use]
pub fn filter_by_category<'a>(table: &'a TabularDataset, category: &str) -> Vec<TableRow<'a>> {
    table
        .rows()
        .filter(|row| row.category() == Some(category))
        .collect()
}

/// First `count` entries of `values`, or all of them when shorter.
#[must_use]
pub fn head_values(values: &[Option<f64>], count: usize) -> Vec<Option<f64>> {
    values.iter().take(count).copied().collect()
}
