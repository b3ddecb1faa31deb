//! JSON cache of a normalized dataset

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Dataset, Table};

/// Write a dataset to `path` as JSON
pub fn save(dataset: &Dataset, path: &Path) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, dataset)?;
    writer.flush().map_err(io_error)?;
    info!(path = %path.display(), tables = dataset.len(), "saved dataset cache");
    Ok(())
}

/// Read a dataset written by [`save`], re-checking its invariants
pub fn load(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // invariant violations are `InvalidDataset`, not JSON errors
    let tables: IndexMap<String, Table> = serde_json::from_reader(BufReader::new(file))?;
    let dataset = Dataset::try_from(tables)?;
    info!(path = %path.display(), tables = dataset.len(), "loaded dataset cache");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, ColumnType};

    #[test]
    fn test_rejects_ill_typed_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        // an int column holding text
        std::fs::write(
            &path,
            r#"{"drivers":{"name":"drivers","columns":[{"name":"driverId","column_type":"int"}],"rows":[[{"String":"x"}]]}}"#,
        )
        .unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let mut drivers = Table::new(
            "drivers",
            vec![
                Column::with_type("driverId", ColumnType::Int),
                Column::new("code"),
            ],
        );
        drivers.push_row(vec![1.into(), "HAM".into()]).unwrap();
        let dataset = Dataset::from_tables([drivers]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f1stats.json");
        save(&dataset, &path).unwrap();
        assert_eq!(load(&path).unwrap(), dataset);
    }
}
