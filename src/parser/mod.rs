//! Loading raw tables from an extracted CSV dump

mod csv;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::RawTableSet;

pub use self::csv::{parse_csv, read_csv, NULL_MARKER};

/// Load every `*.csv` file of a directory, keyed by file stem.
///
/// Files are read in name order so the resulting set is deterministic.
pub fn load_dir(dir: &Path) -> Result<RawTableSet> {
    let io_error = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(io_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .map_err(io_error)?;
    paths.retain(|p| is_csv(p));
    paths.sort();

    let mut tables = RawTableSet::new();
    for path in paths {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let table = read_csv(&path)?;
        debug!(table = name, rows = table.rows.len(), "read CSV table");
        tables.insert(name.to_string(), table);
    }

    info!(dir = %dir.display(), tables = tables.len(), "loaded raw tables");
    Ok(tables)
}

fn is_csv(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
