//! Applies the per-table rule lists to a raw table set

use tracing::{debug, info};

use crate::error::{Result, SchemaError};
use crate::model::{Dataset, RawTableSet, Table};

use super::column;
use super::rules::{Rule, TableRules, TABLE_RULES};

/// Turns a [`RawTableSet`] into a typed [`Dataset`]
#[derive(Debug, Clone, Copy)]
pub struct SchemaNormalizer {
    rules: &'static [TableRules],
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaNormalizer {
    /// Normalizer for the Ergast tables
    pub fn new() -> Self {
        Self { rules: TABLE_RULES }
    }

    /// Normalizer with a custom rule set
    pub fn with_rules(rules: &'static [TableRules]) -> Self {
        Self { rules }
    }

    /// Normalize every table of `raw`.
    ///
    /// Tables with rules are rewritten in declared rule order; other tables
    /// pass through as text. Every ruled table must be present. The input
    /// is only borrowed, so repeated calls give equal datasets.
    pub fn normalize(&self, raw: &RawTableSet) -> Result<Dataset> {
        if let Some(missing) = self.rules.iter().find(|t| !raw.contains_key(t.table)) {
            return Err(SchemaError::missing_table(missing.table).into());
        }

        let mut tables = Vec::with_capacity(raw.len());
        for (name, raw_table) in raw {
            let mut table = Table::from_raw(name.as_str(), raw_table);
            match self.rules.iter().find(|t| t.table == name) {
                Some(table_rules) => {
                    for rule in table_rules.rules {
                        debug!(table = %name, ?rule, "applying rule");
                        apply(&mut table, rule)?;
                    }
                    info!(
                        table = %name,
                        rows = table.row_count(),
                        columns = table.column_count(),
                        "normalized table"
                    );
                }
                None => debug!(table = %name, "no rules, keeping text columns"),
            }
            tables.push(table);
        }

        Dataset::from_tables(tables)
    }
}

/// Normalize with the Ergast rules
pub fn normalize(raw: &RawTableSet) -> Result<Dataset> {
    SchemaNormalizer::new().normalize(raw)
}

fn apply(table: &mut Table, rule: &Rule) -> Result<()> {
    match *rule {
        Rule::Strip(columns) => column::strip(table, columns)?,
        Rule::Int { columns, default } => column::coerce_int(table, columns, default)?,
        Rule::Float { columns, default } => column::coerce_float(table, columns, default)?,
        Rule::Temporal {
            date,
            time,
            target,
            on_error,
            projection,
        } => column::convert_temporal(table, date, time, target, on_error, projection)?,
        Rule::Concat {
            target,
            left,
            right,
            separator,
        } => column::concat(table, target, left, right, separator)?,
        Rule::Drop(columns) => column::drop_columns(table, columns),
    }
    Ok(())
}
