//! JSON output format

use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value};

use crate::model::{CellValue, Table};
use crate::view::Report;

use super::OutputFormatter;

/// JSON output formatter: one object per row
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn write(&self, value: &Value, writer: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, value)?;
        } else {
            serde_json::to_writer(&mut *writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_value_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Null => Value::Null,
        CellValue::Int(i) => serde_json::json!(*i),
        CellValue::Float(f) => serde_json::json!(*f),
        CellValue::String(s) => Value::String(s.clone()),
        CellValue::Date(d) => Value::String(d.to_string()),
        CellValue::Time(t) => Value::String(t.to_string()),
        CellValue::DateTime(dt) => Value::String(dt.to_string()),
    }
}

impl OutputFormatter for JsonOutput {
    fn render_report(&self, report: &Report, writer: &mut dyn Write) -> Result<()> {
        let rows = report
            .pairs()
            .into_iter()
            .map(|(label, count)| {
                let mut object = Map::new();
                object.insert(report.label_column.to_string(), Value::String(label.to_string()));
                object.insert(report.count_column.to_string(), serde_json::json!(count));
                Value::Object(object)
            })
            .collect();
        self.write(&Value::Array(rows), writer)
    }

    fn render_table(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let object: Map<String, Value> = table
                    .column_names()
                    .zip(&row.cells)
                    .map(|(name, cell)| (name.to_string(), cell_value_to_json(cell)))
                    .collect();
                Value::Object(object)
            })
            .collect();
        self.write(&Value::Array(rows), writer)
    }
}
