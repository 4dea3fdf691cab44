use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::core::numeric::parse_numeric;
use crate::error::{DashboardError, DashboardResult};

pub const CATEGORY_COLUMN: &str = "Category";
pub const VALUE_COLUMN: &str = "Value";

/// In-memory table parsed from the delimited input file.
///
/// Every header column is kept so previews can show full rows, while the
/// positions of `Category` and `Value` are resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    category_index: usize,
    value_index: usize,
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
    position: usize,
    cells: &'a [String],
    category_index: usize,
    value_index: usize,
}

impl<'a> TableRow<'a> {
    /// Zero-based row position in the source file, excluding the header.
    #[must_use]
    pub fn position(self) -> usize {
        self.position
    }

    #[must_use]
    pub fn cells(self) -> &'a [String] {
        self.cells
    }

    /// Category label, `None` when the cell is blank.
    #[must_use]
    pub fn category(self) -> Option<&'a str> {
        let text = self.cells[self.category_index].as_str();
        (!text.is_empty()).then_some(text)
    }

    #[must_use]
    pub fn value_text(self) -> &'a str {
        &self.cells[self.value_index]
    }

    #[must_use]
    pub fn value(self) -> Option<f64> {
        parse_numeric(self.value_text())
    }
}

/// First rows of a table, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

impl Default for TabularDataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl TabularDataset {
    /// Empty table exposing only the `Category` and `Value` columns.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: vec![CATEGORY_COLUMN.to_owned(), VALUE_COLUMN.to_owned()],
            rows: Vec::new(),
            category_index: 0,
            value_index: 1,
        }
    }

    /// Builds a table from a header and raw rows.
    ///
    /// Fails when either required column is absent or a row width differs
    /// from the header width.
    pub fn from_records(columns: Vec<String>, rows: Vec<Vec<String>>) -> DashboardResult<Self> {
        let category_index = column_position(&columns, CATEGORY_COLUMN)?;
        let value_index = column_position(&columns, VALUE_COLUMN)?;

        for (position, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DashboardError::MalformedTable(format!(
                    "row {position} has {} fields, expected {}",
                    row.len(),
                    columns.len()
                )));
            }
        }

        Ok(Self {
            columns,
            rows,
            category_index,
            value_index,
        })
    }

    /// Builds a two-column table from `(category, value)` pairs.
    #[must_use]
    pub fn from_pairs<C, V>(pairs: impl IntoIterator<Item = (C, V)>) -> Self
    where
        C: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        table.rows = pairs
            .into_iter()
            .map(|(category, value)| vec![category.into(), value.into()])
            .collect();
        table
    }

    /// Parses comma-delimited text with a mandatory header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> DashboardResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let columns = csv_reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Self::from_records(columns, rows)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row(&self, position: usize) -> Option<TableRow<'_>> {
        self.rows.get(position).map(|cells| self.row_view(position, cells))
    }

    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(position, cells)| self.row_view(position, cells))
    }

    #[must_use]
    pub fn head(&self, limit: usize) -> TablePreview {
        TablePreview {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(limit).cloned().collect(),
            total_rows: self.rows.len(),
        }
    }

    fn row_view<'a>(&self, position: usize, cells: &'a [String]) -> TableRow<'a> {
        TableRow {
            position,
            cells,
            category_index: self.category_index,
            value_index: self.value_index,
        }
    }
}

fn column_position(columns: &[String], name: &str) -> DashboardResult<usize> {
    columns
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| {
            DashboardError::MalformedTable(format!(
                "missing required column `{name}` (found: {})",
                columns.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_exposes_required_columns() {
        let table = TabularDataset::empty();
        assert_eq!(table.columns(), ["Category", "Value"]);
        assert!(table.is_empty());
    }

    #[test]
    fn extra_columns_are_kept_and_required_ones_located() {
        let table = TabularDataset::from_csv_reader("Id,Value,Category\n1,10,A\n".as_bytes())
            .expect("parse");
        let row = table.row(0).expect("row");
        assert_eq!(row.category(), Some("A"));
        assert_eq!(row.value(), Some(10.0));
        assert_eq!(row.cells().len(), 3);
    }

    #[test]
    fn blank_category_cell_is_missing() {
        let table = TabularDataset::from_pairs([("", "1")]);
        assert_eq!(table.row(0).expect("row").category(), None);
    }
}
