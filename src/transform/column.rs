//! Column rewrite primitives
//!
//! Each primitive mutates a table owned by the normalizer during a single
//! normalization pass. Inputs must be text columns; the primitives declare
//! the resulting column type.

use crate::error::{ParseError, Result, SchemaError};
use crate::model::{CellValue, Column, ColumnType, Table, MISSING};

use super::temporal::parse_datetime;

/// Policy for date/time values that are present but unparseable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Keep the original text; the column becomes `Mixed` if any value stays
    Ignore,
    /// Replace with null
    Coerce,
}

/// Component kept from a merged datetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    DateTime,
    Date,
    Time,
}

/// Trim surrounding whitespace from every value of the named text columns
pub fn strip(table: &mut Table, columns: &[&str]) -> std::result::Result<(), SchemaError> {
    for column in columns {
        let idx = table.require_typed_column(column, ColumnType::String)?;
        for cell in table.cells_mut(idx) {
            if let CellValue::String(s) = cell {
                let trimmed = s.trim();
                if trimmed.len() != s.len() {
                    *s = trimmed.to_string();
                }
            }
        }
    }
    Ok(())
}

/// Parse text columns as integers; missing values become `default`
pub fn coerce_int(table: &mut Table, columns: &[&str], default: i64) -> Result<()> {
    for column in columns {
        coerce_column(table, column, ColumnType::Int, CellValue::Int(default), |s| {
            s.parse::<i64>().ok().map(CellValue::Int)
        })?;
    }
    Ok(())
}

/// Parse text columns as floats; missing values become `default`.
/// `NaN` and infinities are rejected.
pub fn coerce_float(table: &mut Table, columns: &[&str], default: f64) -> Result<()> {
    for column in columns {
        coerce_column(table, column, ColumnType::Float, CellValue::Float(default), |s| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(CellValue::Float)
        })?;
    }
    Ok(())
}

fn coerce_column<F>(
    table: &mut Table,
    column: &str,
    target: ColumnType,
    default: CellValue,
    parse: F,
) -> Result<()>
where
    F: Fn(&str) -> Option<CellValue>,
{
    table.require_typed_column(column, ColumnType::String)?;
    let mut values = Vec::with_capacity(table.row_count());
    for (row, cell) in table.column_values(column)?.enumerate() {
        let text = cell.as_str().unwrap_or(MISSING).trim();
        if text.is_empty() {
            values.push(default.clone());
            continue;
        }
        let value = parse(text).ok_or_else(|| ParseError {
            table: table.name().to_string(),
            column: column.to_string(),
            row,
            value: text.to_string(),
            target,
        })?;
        values.push(value);
    }
    table.set_column(Column::with_type(column, target), values);
    Ok(())
}

/// Parse a date column (optionally joined with a time column) into datetimes.
///
/// With a time column the two values are joined by one space before
/// parsing. Blank values, and times whose date is blank, become null.
/// When `target_column` names a new column the result is appended under it
/// and both source columns are dropped; otherwise the date column is
/// overwritten and only the time column is dropped.
pub fn merge_datetime(
    table: &mut Table,
    date_column: &str,
    time_column: Option<&str>,
    target_column: Option<&str>,
    on_error: OnError,
) -> std::result::Result<(), SchemaError> {
    convert_temporal(
        table,
        date_column,
        time_column,
        target_column,
        on_error,
        Projection::DateTime,
    )
}

/// [`merge_datetime`], keeping only the time of day
pub fn to_time_only(
    table: &mut Table,
    date_column: &str,
    time_column: Option<&str>,
    target_column: Option<&str>,
    on_error: OnError,
) -> std::result::Result<(), SchemaError> {
    convert_temporal(
        table,
        date_column,
        time_column,
        target_column,
        on_error,
        Projection::Time,
    )
}

/// [`merge_datetime`], keeping only the calendar date
pub fn to_date_only(
    table: &mut Table,
    date_column: &str,
    time_column: Option<&str>,
    target_column: Option<&str>,
    on_error: OnError,
) -> std::result::Result<(), SchemaError> {
    convert_temporal(
        table,
        date_column,
        time_column,
        target_column,
        on_error,
        Projection::Date,
    )
}

pub(crate) fn convert_temporal(
    table: &mut Table,
    date_column: &str,
    time_column: Option<&str>,
    target_column: Option<&str>,
    on_error: OnError,
    projection: Projection,
) -> std::result::Result<(), SchemaError> {
    let date_idx = table.require_typed_column(date_column, ColumnType::String)?;
    let time_idx = time_column
        .map(|c| table.require_typed_column(c, ColumnType::String))
        .transpose()?;

    let mut unparsed = 0usize;
    let values: Vec<CellValue> = table
        .rows()
        .iter()
        .map(|row| {
            let date = row.cells[date_idx].as_str().unwrap_or(MISSING);
            let text = match time_idx {
                // a time without its date is missing, not a clock value
                Some(_) if date.trim().is_empty() => return CellValue::Null,
                Some(t) => format!("{} {}", date, row.cells[t].as_str().unwrap_or(MISSING)),
                None => date.to_string(),
            };
            match parse_datetime(&text) {
                Some(dt) => match projection {
                    Projection::DateTime => CellValue::DateTime(dt),
                    Projection::Date => CellValue::Date(dt.date()),
                    Projection::Time => CellValue::Time(dt.time()),
                },
                None if text.trim().is_empty() => CellValue::Null,
                None => match on_error {
                    OnError::Ignore => {
                        unparsed += 1;
                        CellValue::String(text)
                    }
                    OnError::Coerce => CellValue::Null,
                },
            }
        })
        .collect();

    if unparsed > 0 {
        tracing::debug!(
            table = table.name(),
            column = date_column,
            unparsed,
            "kept unparseable temporal values as text"
        );
    }

    let column_type = if unparsed > 0 {
        ColumnType::Mixed
    } else {
        match projection {
            Projection::DateTime => ColumnType::DateTime,
            Projection::Date => ColumnType::Date,
            Projection::Time => ColumnType::Time,
        }
    };

    let target = target_column.unwrap_or(date_column);
    if target != date_column {
        table.drop_column(date_column);
    }
    if let Some(time_column) = time_column {
        if time_column != target {
            table.drop_column(time_column);
        }
    }
    table.set_column(Column::with_type(target, column_type), values);
    Ok(())
}

/// Remove columns; absent columns are ignored
pub fn drop_columns(table: &mut Table, columns: &[&str]) {
    for column in columns {
        table.drop_column(column);
    }
}

/// Append `left + separator + right` as a new text column
pub fn concat(
    table: &mut Table,
    target: &str,
    left: &str,
    right: &str,
    separator: &str,
) -> std::result::Result<(), SchemaError> {
    let l = table.require_typed_column(left, ColumnType::String)?;
    let r = table.require_typed_column(right, ColumnType::String)?;
    let values = table
        .rows()
        .iter()
        .map(|row| match (row.cells[l].as_str(), row.cells[r].as_str()) {
            (Some(a), Some(b)) => CellValue::String(format!("{a}{separator}{b}")),
            _ => CellValue::Null,
        })
        .collect();
    table.set_column(Column::new(target), values);
    Ok(())
}
