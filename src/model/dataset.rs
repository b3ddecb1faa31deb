//! The normalized, read-only collection of typed tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use super::table::Table;
use crate::error::{Error, Result, SchemaError};

/// Typed tables keyed by table name.
///
/// A dataset is assembled once (by normalization or from the cache) and
/// exposes only shared access afterwards, so its table names and column
/// sets never change.
///
/// Deserializing goes through [`Dataset::validate`], so a decoded dataset
/// holds the same invariants as a normalized one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "IndexMap<String, Table>")]
pub struct Dataset {
    tables: IndexMap<String, Table>,
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.tables.serialize(serializer)
    }
}

impl TryFrom<IndexMap<String, Table>> for Dataset {
    type Error = Error;

    fn try_from(tables: IndexMap<String, Table>) -> Result<Self> {
        let dataset = Self { tables };
        dataset.validate()?;
        Ok(dataset)
    }
}

impl Dataset {
    /// Build a dataset from tables, checking every table's invariants
    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Result<Self> {
        let mut map = IndexMap::new();
        for table in tables {
            let name = table.name().to_string();
            if map.insert(name.clone(), table).is_some() {
                return Err(Error::InvalidDataset {
                    reason: format!("duplicate table '{name}'"),
                });
            }
        }
        let dataset = Self { tables: map };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Look up a table, or a schema error naming it
    pub fn table(&self, name: &str) -> std::result::Result<&Table, SchemaError> {
        self.get(name).ok_or_else(|| SchemaError::missing_table(name))
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Check that keys match table names and every table is well-formed
    pub fn validate(&self) -> Result<()> {
        for (name, table) in &self.tables {
            if name != table.name() {
                return Err(Error::InvalidDataset {
                    reason: format!("table '{}' stored under key '{}'", table.name(), name),
                });
            }
            table
                .validate()
                .map_err(|reason| Error::InvalidDataset { reason })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, ColumnType};

    #[test]
    fn test_duplicate_table_rejected() {
        let a = Table::new("races", vec![Column::new("name")]);
        let err = Dataset::from_tables([a.clone(), a]).unwrap_err();
        assert!(err.to_string().contains("duplicate table 'races'"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok = r#"{"drivers":{"name":"drivers","columns":[{"name":"driverId","column_type":"int"}],"rows":[[{"Int":1}]]}}"#;
        let dataset: Dataset = serde_json::from_str(ok).unwrap();
        assert_eq!(dataset.table("drivers").unwrap().row_count(), 1);

        let misnamed = r#"{"races":{"name":"drivers","columns":[],"rows":[]}}"#;
        let err = serde_json::from_str::<Dataset>(misnamed).unwrap_err();
        assert!(err.to_string().contains("stored under key 'races'"));

        let ill_typed = r#"{"drivers":{"name":"drivers","columns":[{"name":"driverId","column_type":"int"}],"rows":[[{"String":"x"}]]}}"#;
        assert!(serde_json::from_str::<Dataset>(ill_typed).is_err());
    }

    #[test]
    fn test_missing_table_is_schema_error() {
        let dataset = Dataset::from_tables([Table::new(
            "drivers",
            vec![Column::with_type("driverId", ColumnType::Int)],
        )])
        .unwrap();
        assert!(dataset.table("drivers").is_ok());
        assert_eq!(
            dataset.table("races").unwrap_err(),
            SchemaError::missing_table("races")
        );
        assert_eq!(dataset.table_names().collect::<Vec<_>>(), ["drivers"]);
    }
}
