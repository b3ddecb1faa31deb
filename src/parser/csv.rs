//! CSV reader for extracted Ergast tables

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{RawTable, MISSING};

/// Literal used by the Ergast dump for missing values
pub const NULL_MARKER: &str = "\\N";

/// Read one CSV file into a raw table
pub fn read_csv(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(BufReader::new(file), path)
}

/// Parse CSV text with a header row.
///
/// `\N` and empty fields become the missing sentinel. Short records are
/// padded with the sentinel; records wider than the header are rejected.
pub fn parse_csv<R: Read>(reader: R, path: &Path) -> Result<RawTable> {
    let csv_error = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut table = RawTable::new(headers);
    let width = table.headers.len();

    for result in csv_reader.records() {
        let record = result.map_err(csv_error)?;
        if record.len() > width {
            return Err(Error::Malformed {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                reason: format!("{} fields, header has {}", record.len(), width),
            });
        }

        let mut values: Vec<String> = record
            .iter()
            .map(|v| {
                if v == NULL_MARKER {
                    MISSING.to_string()
                } else {
                    v.to_string()
                }
            })
            .collect();
        // Pad with the sentinel if the record has fewer fields
        values.resize(width, MISSING.to_string());
        table.rows.push(values);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<RawTable> {
        parse_csv(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_null_marker_becomes_sentinel() {
        let table = parse(
            "driverId,driverRef,number,code\n1,\"hamilton\",44,\"HAM\"\n2,\"heidfeld\",\\N,\"HEI\"\n",
        )
        .unwrap();
        assert_eq!(table.headers, ["driverId", "driverRef", "number", "code"]);
        assert_eq!(table.rows[0], ["1", "hamilton", "44", "HAM"]);
        assert_eq!(table.rows[1][2], MISSING);
    }

    #[test]
    fn test_short_rows_padded() {
        let table = parse("a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows[0], ["1", "2", ""]);
    }

    #[test]
    fn test_wide_rows_rejected() {
        let err = parse("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_keeps_surrounding_whitespace() {
        let table = parse("name\n\" Monaco Grand Prix \"\n").unwrap();
        assert_eq!(table.rows[0][0], " Monaco Grand Prix ");
    }
}
