#![allow(dead_code)]

use std::path::PathBuf;

use f1stats::model::{CellValue, Column, ColumnType, Dataset, Table};
use f1stats::parser::load_dir;

/// Small extract of the Ergast dump checked into the repository
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/f1db")
}

pub fn fixture_dataset() -> Dataset {
    let raw = load_dir(&fixture_dir()).expect("fixture CSVs load");
    f1stats::normalize(&raw).expect("fixture normalizes")
}

fn typed_table(name: &str, columns: &[(&str, ColumnType)], rows: Vec<Vec<CellValue>>) -> Table {
    let mut table = Table::new(
        name,
        columns
            .iter()
            .map(|(n, t)| Column::with_type(*n, *t))
            .collect(),
    );
    for row in rows {
        table.push_row(row).expect("well-typed fixture row");
    }
    table
}

/// A result: (resultId, raceId, driverId, constructorId, position)
pub type ResultRow = (i64, i64, i64, i64, i64);

/// Build a normalized-shaped dataset with just the tables the view reads.
///
/// `races` are (raceId, year, round, name), `drivers` (driverId, name),
/// `constructors` (constructorId, name).
pub fn view_dataset(
    races: &[(i64, i64, i64, &str)],
    drivers: &[(i64, &str)],
    constructors: &[(i64, &str)],
    results: &[ResultRow],
) -> Dataset {
    let results = typed_table(
        "results",
        &[
            ("resultId", ColumnType::Int),
            ("raceId", ColumnType::Int),
            ("driverId", ColumnType::Int),
            ("constructorId", ColumnType::Int),
            ("grid", ColumnType::Int),
            ("position", ColumnType::Int),
            ("positionText", ColumnType::String),
            ("points", ColumnType::Float),
        ],
        results
            .iter()
            .map(|&(id, race, driver, constructor, position)| {
                vec![
                    id.into(),
                    race.into(),
                    driver.into(),
                    constructor.into(),
                    0.into(),
                    position.into(),
                    position.to_string().into(),
                    0.0.into(),
                ]
            })
            .collect(),
    );
    let races = typed_table(
        "races",
        &[
            ("raceId", ColumnType::Int),
            ("year", ColumnType::Int),
            ("round", ColumnType::Int),
            ("name", ColumnType::String),
            ("date", ColumnType::DateTime),
        ],
        races
            .iter()
            .map(|&(id, year, round, name)| {
                vec![id.into(), year.into(), round.into(), name.into(), CellValue::Null]
            })
            .collect(),
    );
    let drivers = typed_table(
        "drivers",
        &[
            ("driverId", ColumnType::Int),
            ("number", ColumnType::Int),
            ("code", ColumnType::String),
            ("name", ColumnType::String),
        ],
        drivers
            .iter()
            .map(|&(id, name)| vec![id.into(), 0.into(), CellValue::Null, name.into()])
            .collect(),
    );
    let constructors = typed_table(
        "constructors",
        &[("constructorId", ColumnType::Int), ("name", ColumnType::String)],
        constructors
            .iter()
            .map(|&(id, name)| vec![id.into(), name.into()])
            .collect(),
    );
    Dataset::from_tables([results, races, drivers, constructors]).expect("valid dataset")
}
