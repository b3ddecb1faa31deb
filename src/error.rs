//! Error types for normalization, views and the dataset cache

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ColumnType;

/// An expected table or column is absent, or a column has the wrong type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Table not present in the input or dataset.
    #[error("table '{table}' not found")]
    MissingTable { table: String },

    /// Column not present in a table.
    #[error("column '{column}' not found in table '{table}'")]
    MissingColumn { table: String, column: String },

    /// Two columns of one table would share a name.
    #[error("duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    /// Transform applied to a column of an unexpected type.
    #[error("column '{table}.{column}' has type {actual}, expected {expected}")]
    TypeMismatch {
        table: String,
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },
}

impl SchemaError {
    pub(crate) fn missing_table(table: &str) -> Self {
        SchemaError::MissingTable {
            table: table.to_string(),
        }
    }

    pub(crate) fn missing_column(table: &str, column: &str) -> Self {
        SchemaError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

/// A present value that could not be coerced to its declared type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse {value:?} as {target} in '{table}.{column}' at row {row}")]
pub struct ParseError {
    pub table: String,
    pub column: String,
    /// 0-based row index within the table
    pub row: usize,
    pub value: String,
    pub target: ColumnType,
}

/// Errors surfaced by the library
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Failed to read or decode a CSV file.
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A CSV record that cannot be mapped onto the header.
    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Failed filesystem operation.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A deserialized dataset violates the normalized invariants.
    #[error("invalid dataset: {reason}")]
    InvalidDataset { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
