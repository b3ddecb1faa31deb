//! Typed Table, Row, and Cell data structures

use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::raw::RawTable;
use super::schema::{Column, ColumnType};
use crate::error::SchemaError;

/// A cell value with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            (CellValue::Date(a), CellValue::Date(b)) => a == b,
            (CellValue::Time(a), CellValue::Time(b)) => a == b,
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Null => {}
            CellValue::Int(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::String(s) => s.hash(state),
            CellValue::Date(d) => d.hash(state),
            CellValue::Time(t) => t.hash(state),
            CellValue::DateTime(dt) => dt.hash(state),
        }
    }
}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Type of a non-null value
    pub fn cell_type(&self) -> Option<ColumnType> {
        match self {
            CellValue::Null => None,
            CellValue::Int(_) => Some(ColumnType::Int),
            CellValue::Float(_) => Some(ColumnType::Float),
            CellValue::String(_) => Some(ColumnType::String),
            CellValue::Date(_) => Some(ColumnType::Date),
            CellValue::Time(_) => Some(ColumnType::Time),
            CellValue::DateTime(_) => Some(ColumnType::DateTime),
        }
    }

    /// Whether this value may be stored in a column of the given type
    pub fn fits(&self, column_type: ColumnType) -> bool {
        match (self.cell_type(), column_type) {
            (None, _) => true,
            (Some(ColumnType::Int | ColumnType::Float), ColumnType::Mixed) => false,
            (Some(_), ColumnType::Mixed) => true,
            (Some(t), expected) => t == expected,
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_str()),
            CellValue::Date(d) => Cow::Owned(d.to_string()),
            CellValue::Time(t) => Cow::Owned(t.to_string()),
            CellValue::DateTime(dt) => Cow::Owned(dt.to_string()),
        }
    }

    /// Total order used for sorting; nulls sort last
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Null, _) => Ordering::Greater,
            (_, CellValue::Null) => Ordering::Less,
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => a.total_cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64).total_cmp(b),
            (CellValue::Float(a), CellValue::Int(b)) => a.total_cmp(&(*b as f64)),
            (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Time(a), CellValue::Time(b)) => a.cmp(b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Int(_) | CellValue::Float(_) => 0,
            CellValue::Date(_) => 1,
            CellValue::DateTime(_) => 2,
            CellValue::Time(_) => 3,
            CellValue::String(_) => 4,
            CellValue::Null => 5,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(t: NaiveTime) -> Self {
        CellValue::Time(t)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A named table of typed columns and rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Lift a raw table into an all-text typed table
    pub fn from_raw(name: impl Into<String>, raw: &RawTable) -> Self {
        let columns = raw.headers.iter().map(Column::new).collect();
        let rows = raw
            .rows
            .iter()
            .map(|values| Row::new(values.iter().map(|v| CellValue::from(v.as_str())).collect()))
            .collect();
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column index, or a schema error naming this table
    pub fn require_column(&self, name: &str) -> Result<usize, SchemaError> {
        self.column_index(name)
            .ok_or_else(|| SchemaError::missing_column(&self.name, name))
    }

    /// Column index, requiring the column to have the given type
    pub fn require_typed_column(
        &self,
        name: &str,
        expected: ColumnType,
    ) -> Result<usize, SchemaError> {
        let idx = self.require_column(name)?;
        let actual = self.columns[idx].column_type;
        if actual != expected {
            return Err(SchemaError::TypeMismatch {
                table: self.name.clone(),
                column: name.to_string(),
                expected,
                actual,
            });
        }
        Ok(idx)
    }

    /// Cell value by row index and column name
    pub fn value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }

    /// Values of one column in row order
    pub fn column_values(&self, name: &str) -> Result<impl Iterator<Item = &CellValue>, SchemaError> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |r| &r.cells[idx]))
    }

    /// Add a row, checking its width and cell types against the columns
    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<(), String> {
        self.check_row(&cells)?;
        self.rows.push(Row::new(cells));
        Ok(())
    }

    fn check_row(&self, cells: &[CellValue]) -> Result<(), String> {
        if cells.len() != self.columns.len() {
            return Err(format!(
                "row has {} cells, table '{}' has {} columns",
                cells.len(),
                self.name,
                self.columns.len()
            ));
        }
        for (cell, column) in cells.iter().zip(&self.columns) {
            if !cell.fits(column.column_type) {
                return Err(format!(
                    "value {:?} does not fit column '{}.{}' of type {}",
                    cell, self.name, column.name, column.column_type
                ));
            }
        }
        Ok(())
    }

    /// Check the table invariants: unique column names and well-typed rows
    pub fn validate(&self) -> Result<(), String> {
        for (i, column) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(format!(
                    "duplicate column '{}' in table '{}'",
                    column.name, self.name
                ));
            }
        }
        self.rows.iter().try_for_each(|row| self.check_row(&row.cells))
    }

    /// Project to the named columns, in the given order
    pub fn select(&self, names: &[&str]) -> Result<Table, SchemaError> {
        let indices = names
            .iter()
            .map(|n| self.require_column(n))
            .collect::<Result<Vec<_>, _>>()?;
        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|r| Row::new(indices.iter().map(|&i| r.cells[i].clone()).collect()))
            .collect();
        Ok(Table {
            name: self.name.clone(),
            columns,
            rows,
        })
    }

    /// Rename a column
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<(), SchemaError> {
        let idx = self.require_column(from)?;
        self.columns[idx].name = to.to_string();
        Ok(())
    }

    /// The first `n` rows
    pub fn head(&self, n: usize) -> Table {
        Table {
            name: self.name.clone(),
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Stable sort ascending by the named columns, in key order
    pub fn sort_by_columns(&mut self, names: &[&str]) -> Result<(), SchemaError> {
        let indices = names
            .iter()
            .map(|n| self.require_column(n))
            .collect::<Result<Vec<_>, _>>()?;
        self.rows.sort_by(|a, b| {
            indices
                .iter()
                .map(|&i| a.cells[i].sort_cmp(&b.cells[i]))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        Ok(())
    }

    /// Remove a column; returns false if it was not present
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(idx);
        for row in &mut self.rows {
            row.cells.remove(idx);
        }
        true
    }

    /// Overwrite a column's values and type, appending it if absent.
    /// `values` must hold one cell per row.
    pub(crate) fn set_column(&mut self, column: Column, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(&column.name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.cells[idx] = value;
                }
                self.columns[idx] = column;
            }
            None => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.cells.push(value);
                }
                self.columns.push(column);
            }
        }
    }

    /// Mutable access to one column's cells
    pub(crate) fn cells_mut(&mut self, idx: usize) -> impl Iterator<Item = &mut CellValue> {
        self.rows.iter_mut().map(move |r| &mut r.cells[idx])
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Build a table from parts produced by a join
    pub(crate) fn from_parts(name: String, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            name,
            columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(
            "races",
            vec![
                Column::with_type("year", ColumnType::Int),
                Column::with_type("round", ColumnType::Int),
                Column::new("name"),
            ],
        );
        for (year, round, name) in [(2010_i64, 2_i64, "B"), (2009, 5, "A"), (2010, 1, "C")] {
            table
                .push_row(vec![year.into(), round.into(), name.into()])
                .unwrap();
        }
        table
    }

    #[test]
    fn test_sort_by_columns() {
        let mut table = sample();
        table.sort_by_columns(&["year", "round"]).unwrap();
        let names: Vec<_> = table
            .column_values("name")
            .unwrap()
            .map(|v| v.display().into_owned())
            .collect();
        assert_eq!(names, ["A", "C", "B"]);
    }

    #[test]
    fn test_push_row_rejects_wrong_type() {
        let mut table = sample();
        let err = table
            .push_row(vec!["2011".into(), CellValue::Int(1), "D".into()])
            .unwrap_err();
        assert!(err.contains("races.year"));
        assert!(table
            .push_row(vec![CellValue::Null, CellValue::Int(1), "D".into()])
            .is_ok());
    }

    #[test]
    fn test_select_and_drop() {
        let table = sample();
        let projected = table.select(&["name", "year"]).unwrap();
        assert_eq!(projected.column_names().collect::<Vec<_>>(), ["name", "year"]);
        assert_eq!(projected.value(0, "name"), Some(&CellValue::from("B")));

        let mut dropped = table.clone();
        assert!(dropped.drop_column("round"));
        assert!(!dropped.drop_column("round"));
        assert_eq!(dropped.column_count(), 2);
        assert_eq!(dropped.rows()[0].cells.len(), 2);
    }

    #[test]
    fn test_select_missing_column() {
        let err = sample().select(&["circuitId"]).unwrap_err();
        assert_eq!(err, SchemaError::missing_column("races", "circuitId"));
    }

    #[test]
    fn test_nulls_sort_last() {
        assert_eq!(CellValue::Null.sort_cmp(&CellValue::Int(1)), Ordering::Greater);
        assert_eq!(CellValue::Int(2).sort_cmp(&CellValue::Float(2.5)), Ordering::Less);
    }

    #[test]
    fn test_fits_mixed() {
        assert!(CellValue::from("1:2x").fits(ColumnType::Mixed));
        assert!(!CellValue::Int(1).fits(ColumnType::Mixed));
        assert!(CellValue::Null.fits(ColumnType::Int));
    }
}
