//! Category-resolving data source for bar graphs.

use tracing::debug;

use crate::axis::Axis;
use crate::geom::Point3;
use crate::series::{Series, SeriesKind};

/// One labeled bar value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRecord {
    /// Row category label.
    pub row: String,
    /// Column category label.
    pub column: String,
    /// Bar value.
    pub value: f64,
}

impl BarRecord {
    /// Create a record.
    pub fn new(row: impl Into<String>, column: impl Into<String>, value: f64) -> Self {
        Self {
            row: row.into(),
            column: column.into(),
            value,
        }
    }
}

/// Resolves labeled records into a rows by columns table.
///
/// When a category list is empty, it is derived from the records in first-seen order.
/// Otherwise the list acts as an allow-list and records with other labels are dropped.
#[derive(Debug, Clone, Default)]
pub struct BarDataProxy {
    row_categories: Vec<String>,
    column_categories: Vec<String>,
    records: Vec<BarRecord>,
}

impl BarDataProxy {
    /// Create a proxy with fixed category lists.
    pub fn new(row_categories: Vec<String>, column_categories: Vec<String>) -> Self {
        Self {
            row_categories,
            column_categories,
            records: Vec::new(),
        }
    }

    /// Add records.
    pub fn with_records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = BarRecord>,
    {
        self.records.extend(records);
        self
    }

    /// Append one record.
    pub fn add_record(&mut self, record: BarRecord) {
        self.records.push(record);
    }

    /// Replace all records.
    pub fn set_records(&mut self, records: Vec<BarRecord>) {
        self.records = records;
    }

    /// Access the raw records.
    pub fn records(&self) -> &[BarRecord] {
        &self.records
    }

    /// Set the row allow-list.
    pub fn set_row_categories(&mut self, categories: Vec<String>) {
        self.row_categories = categories;
    }

    /// Set the column allow-list.
    pub fn set_column_categories(&mut self, categories: Vec<String>) {
        self.column_categories = categories;
    }

    /// Row categories in effect.
    pub fn row_categories(&self) -> Vec<String> {
        effective_categories(&self.row_categories, self.records.iter().map(|r| &r.row))
    }

    /// Column categories in effect.
    pub fn column_categories(&self) -> Vec<String> {
        effective_categories(&self.column_categories, self.records.iter().map(|r| &r.column))
    }

    /// Build the value table. Cells without a record are `None`; later records win.
    pub fn resolve(&self) -> Vec<Vec<Option<f64>>> {
        let rows = self.row_categories();
        let columns = self.column_categories();
        let mut table = vec![vec![None; columns.len()]; rows.len()];
        let mut dropped = 0usize;
        for record in &self.records {
            let row = rows.iter().position(|label| *label == record.row);
            let column = columns.iter().position(|label| *label == record.column);
            match (row, column) {
                (Some(row), Some(column)) => table[row][column] = Some(record.value),
                _ => {
                    debug!(
                        row = %record.row,
                        column = %record.column,
                        "bar record outside categories dropped"
                    );
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            debug!(dropped, total = self.records.len(), "bar data resolved");
        }
        table
    }

    /// Category axis labeled with the rows, for the Z axis.
    pub fn row_axis(&self) -> Axis {
        Axis::category(self.row_categories())
    }

    /// Category axis labeled with the columns, for the X axis.
    pub fn column_axis(&self) -> Axis {
        Axis::category(self.column_categories())
    }

    /// Bar series with one item per filled cell at `(column, value, row)`.
    pub fn to_series(&self, name: impl Into<String>) -> Series {
        let items = self
            .resolve()
            .into_iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.into_iter().enumerate().filter_map(move |(column, value)| {
                    value.map(|value| Point3::new(column as f64, value, row as f64))
                })
            })
            .collect::<Vec<_>>();
        Series::from_iter_points(name, items, SeriesKind::Bar)
    }
}

fn effective_categories<'a>(
    configured: &[String],
    seen: impl Iterator<Item = &'a String>,
) -> Vec<String> {
    if !configured.is_empty() {
        return configured.to_vec();
    }
    let mut categories: Vec<String> = Vec::new();
    for label in seen {
        if !categories.contains(label) {
            categories.push(label.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn resolves_into_allowed_cells() {
        let proxy = BarDataProxy::new(labels(&["2024", "2025"]), labels(&["Jan", "Feb"]))
            .with_records([
                BarRecord::new("2024", "Jan", 1.0),
                BarRecord::new("2025", "Feb", 4.0),
                BarRecord::new("2026", "Jan", 9.0),
                BarRecord::new("2024", "Mar", 9.0),
            ]);
        assert_eq!(
            proxy.resolve(),
            vec![vec![Some(1.0), None], vec![None, Some(4.0)]]
        );
    }

    #[test]
    fn later_records_overwrite_cells() {
        let proxy = BarDataProxy::new(labels(&["r"]), labels(&["c"])).with_records([
            BarRecord::new("r", "c", 1.0),
            BarRecord::new("r", "c", 2.0),
        ]);
        assert_eq!(proxy.resolve(), vec![vec![Some(2.0)]]);
    }

    #[test]
    fn empty_lists_derive_categories_from_records() {
        let proxy = BarDataProxy::default().with_records([
            BarRecord::new("b", "x", 1.0),
            BarRecord::new("a", "y", 2.0),
            BarRecord::new("b", "y", 3.0),
        ]);
        assert_eq!(proxy.row_categories(), labels(&["b", "a"]));
        assert_eq!(proxy.column_categories(), labels(&["x", "y"]));
        assert_eq!(proxy.row_axis().range(), Range::new(0.0, 1.0));
    }

    #[test]
    fn series_places_bars_on_category_grid() {
        let proxy = BarDataProxy::new(labels(&["r0", "r1"]), labels(&["c0", "c1", "c2"]))
            .with_records([BarRecord::new("r1", "c2", 5.0)]);
        let series = proxy.to_series("bars");
        assert_eq!(series.items(), &[Point3::new(2.0, 5.0, 1.0)]);
        assert_eq!(proxy.column_axis().labels(), labels(&["c0", "c1", "c2"]).as_slice());
    }
}
