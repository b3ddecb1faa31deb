//! Output formatting for reports and views

mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::model::Table;
use crate::view::Report;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render an aggregate report to a writer
    fn render_report(&self, report: &Report, writer: &mut dyn Write) -> Result<()>;

    /// Render a table (typically the race-results view) to a writer
    fn render_table(&self, table: &Table, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type.
    ///
    /// `compact` selects single-line JSON, or terminal tables without the
    /// row-count footer.
    pub fn create(format: OutputFormat, compact: bool) -> Box<dyn OutputFormatter> {
        match (format, compact) {
            (OutputFormat::Terminal, false) => Box::new(TerminalOutput::new()),
            (OutputFormat::Terminal, true) => Box::new(TerminalOutput::without_row_count()),
            (OutputFormat::Json, false) => Box::new(JsonOutput::new()),
            (OutputFormat::Json, true) => Box::new(JsonOutput::compact()),
        }
    }
}
