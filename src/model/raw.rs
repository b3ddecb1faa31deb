//! Untyped text tables as delivered by the ingestion layer

use indexmap::IndexMap;

/// Placeholder marking a missing value in raw text data
pub const MISSING: &str = "";

/// A table whose every value is text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names, in file order
    pub headers: Vec<String>,
    /// Each row, one value per header
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a raw table from string slices; handy for fixtures
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }
}

/// Raw tables keyed by table name (the source file stem)
pub type RawTableSet = IndexMap<String, RawTable>;
