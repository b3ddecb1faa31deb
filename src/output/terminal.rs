//! Boxed text tables for the terminal

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::Table;
use crate::view::Report;

use super::OutputFormatter;

/// Terminal output as aligned box tables
pub struct TerminalOutput {
    show_row_count: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            show_row_count: true,
        }
    }

    /// Omit the trailing "N rows" line
    pub fn without_row_count() -> Self {
        Self {
            show_row_count: false,
        }
    }

    fn write_footer(&self, rows: usize, writer: &mut dyn Write) -> Result<()> {
        if self.show_row_count {
            writeln!(writer, "{} row{}", rows, if rows == 1 { "" } else { "s" })?;
        }
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render_report(&self, report: &Report, writer: &mut dyn Write) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record([report.label_column.to_string(), report.count_column.to_string()]);
        for (label, count) in report.pairs() {
            builder.push_record([label.to_string(), count.to_string()]);
        }
        writeln!(writer, "{}", build_table(builder))?;
        self.write_footer(report.rows.len(), writer)
    }

    fn render_table(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(table.column_names().map(str::to_string));
        for row in table.rows() {
            builder.push_record(row.cells.iter().map(|c| c.display().into_owned()));
        }
        writeln!(writer, "{}", build_table(builder))?;
        self.write_footer(table.row_count(), writer)
    }
}

fn build_table(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}
