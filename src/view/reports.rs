//! Aggregate reports over the race-results view

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::SchemaError;
use crate::model::{CellValue, Table};

/// Rows returned by a report unless asked otherwise
pub const DEFAULT_LIMIT: usize = 25;

/// One aggregated row: a label and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub count: usize,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// An ordered report with its two output column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub label_column: &'static str,
    pub count_column: &'static str,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// `(label, count)` pairs in report order
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.rows.iter().map(|r| (r.label.as_str(), r.count)).collect()
    }
}

/// Drivers by number of race wins
pub fn most_wins(view: &Table, n: usize, ascending: bool) -> Result<Report, SchemaError> {
    Ok(Report {
        label_column: "driver",
        count_column: "wins",
        rows: count_winners_by(view, "driver", n, ascending)?,
    })
}

/// Race names by number of recorded winners.
///
/// Only first-place rows are counted, so each edition of a race with a
/// winner contributes one. This is not the number of participants.
pub fn most_races(view: &Table, n: usize, ascending: bool) -> Result<Report, SchemaError> {
    Ok(Report {
        label_column: "race",
        count_column: "num",
        rows: count_winners_by(view, "race", n, ascending)?,
    })
}

/// Count first-place rows per value of `column`, sorted by count in the
/// requested direction and then by label ascending, truncated to `n`.
fn count_winners_by(
    view: &Table,
    column: &str,
    n: usize,
    ascending: bool,
) -> Result<Vec<ReportRow>, SchemaError> {
    let position = view.require_column("position")?;
    let group = view.require_column(column)?;

    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for row in view.rows() {
        if row.cells[position] != CellValue::Int(1) {
            continue;
        }
        let key = &row.cells[group];
        if key.is_null() {
            continue;
        }
        *counts.entry(key.display().into_owned()).or_default() += 1;
    }

    let mut rows: Vec<ReportRow> = counts
        .into_iter()
        .map(|(label, count)| ReportRow { label, count })
        .collect();
    rows.sort_by(|a, b| {
        let by_count = if ascending {
            a.count.cmp(&b.count)
        } else {
            b.count.cmp(&a.count)
        };
        by_count.then_with(|| a.label.cmp(&b.label))
    });
    rows.truncate(n);
    Ok(rows)
}
