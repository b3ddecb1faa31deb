//! Key lookup and inner joins between tables

use rustc_hash::FxHashMap;

use super::table::{CellValue, Row, Table};
use crate::error::SchemaError;

/// Index from the values of one key column to the rows holding them
pub struct KeyIndex<'a> {
    column: usize,
    rows: FxHashMap<&'a CellValue, Vec<usize>>,
}

impl<'a> KeyIndex<'a> {
    /// Index a table by the named column. Null keys are not indexed.
    pub fn build(table: &'a Table, key: &str) -> Result<Self, SchemaError> {
        let column = table.require_column(key)?;
        let mut rows: FxHashMap<&'a CellValue, Vec<usize>> = FxHashMap::default();
        for (idx, row) in table.rows().iter().enumerate() {
            let cell = &row.cells[column];
            if !cell.is_null() {
                rows.entry(cell).or_default().push(idx);
            }
        }
        Ok(Self { column, rows })
    }

    /// Row indices holding the given key, in table order
    pub fn lookup(&self, key: &CellValue) -> &[usize] {
        self.rows.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Position of the key column in the indexed table
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Inner join `left` with `right` on a key column present in both.
///
/// Output columns are the left columns followed by the right columns other
/// than the key. Left row order is kept; a left row matching several right
/// rows yields one output row per match, in right order. Rows whose key has
/// no match (or is null) are dropped.
pub fn inner_join(left: &Table, right: &Table, on: &str) -> Result<Table, SchemaError> {
    let left_key = left.require_column(on)?;
    let index = KeyIndex::build(right, on)?;
    let right_key = index.column();

    let mut columns = left.columns().to_vec();
    for (i, column) in right.columns().iter().enumerate() {
        if i == right_key {
            continue;
        }
        if columns.iter().any(|c| c.name == column.name) {
            return Err(SchemaError::DuplicateColumn {
                table: left.name().to_string(),
                column: column.name.clone(),
            });
        }
        columns.push(column.clone());
    }

    let mut rows = Vec::new();
    for left_row in left.rows() {
        for &r in index.lookup(&left_row.cells[left_key]) {
            let right_row = &right.rows()[r];
            let mut cells = left_row.cells.clone();
            cells.extend(
                right_row
                    .cells
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != right_key)
                    .map(|(_, c)| c.clone()),
            );
            rows.push(Row::new(cells));
        }
    }

    Ok(Table::from_parts(left.name().to_string(), columns, rows))
}
