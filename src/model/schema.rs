//! Column metadata and declared semantic types

use serde::{Deserialize, Serialize};

/// Declared semantic type of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Int,
    Float,
    Date,
    Time,
    DateTime,
    /// Parsed temporal values mixed with untouched strings (lenient `ignore` parse)
    Mixed,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::String => write!(f, "string"),
            ColumnType::Int => write!(f, "int"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::Time => write!(f, "time"),
            ColumnType::DateTime => write!(f, "datetime"),
            ColumnType::Mixed => write!(f, "mixed"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (from header)
    pub name: String,
    /// Declared type of every non-null value
    pub column_type: ColumnType,
}

impl Column {
    /// Create a text column
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_type(name, ColumnType::String)
    }

    /// Create a column with a declared type
    pub fn with_type(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}
