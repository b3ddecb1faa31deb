mod common;

use f1stats::model::{CellValue, KeyIndex};
use f1stats::view::{most_races, most_wins, VIEW_NAME};
use f1stats::{build_race_results_view, RaceStats, SchemaError};

use common::{fixture_dataset, view_dataset};

fn ints(table: &f1stats::Table, column: &str) -> Vec<i64> {
    table
        .column_values(column)
        .unwrap()
        .map(|v| v.as_int().expect("int cell"))
        .collect()
}

#[test]
fn fixture_view_keeps_only_fully_referenced_results() {
    let dataset = fixture_dataset();
    let view = build_race_results_view(&dataset).unwrap();

    assert_eq!(view.name(), VIEW_NAME);
    // resultId 10 has an unknown constructor, 13 an unknown race
    assert_eq!(view.row_count(), 11);
    assert!(view.column("resultId").is_none());

    let names: Vec<_> = view.column_names().collect();
    assert_eq!(
        names,
        [
            "raceId",
            "driverId",
            "constructorId",
            "grid",
            "position",
            "positionText",
            "points",
            "year",
            "round",
            "race",
            "date",
            "number",
            "driver",
            "code",
            "constructor"
        ]
    );

    let races = KeyIndex::build(dataset.table("races").unwrap(), "raceId").unwrap();
    let drivers = KeyIndex::build(dataset.table("drivers").unwrap(), "driverId").unwrap();
    let constructors =
        KeyIndex::build(dataset.table("constructors").unwrap(), "constructorId").unwrap();
    for row in 0..view.row_count() {
        assert!(!races.lookup(view.value(row, "raceId").unwrap()).is_empty());
        assert!(!drivers.lookup(view.value(row, "driverId").unwrap()).is_empty());
        assert!(!constructors
            .lookup(view.value(row, "constructorId").unwrap())
            .is_empty());
    }
}

#[test]
fn fixture_view_is_ordered_by_year_round_position() {
    let view = build_race_results_view(&fixture_dataset()).unwrap();

    let keys: Vec<_> = ints(&view, "year")
        .into_iter()
        .zip(ints(&view, "round"))
        .zip(ints(&view, "position"))
        .map(|((y, r), p)| (y, r, p))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let drivers: Vec<_> = view
        .column_values("driver")
        .unwrap()
        .map(|v| v.display().into_owned())
        .collect();
    assert_eq!(
        drivers,
        [
            "Jenson Button",
            "Sebastian Vettel",
            "Lewis Hamilton",
            "Lewis Hamilton",
            "Jenson Button",
            "Sebastian Vettel",
            "Jenson Button",
            "Lewis Hamilton",
            "Sebastian Vettel",
            "Max Verstappen",
            "Lewis Hamilton",
        ]
    );
}

#[test]
fn fixture_reports() {
    let stats = RaceStats::new(fixture_dataset());

    let wins = stats.most_wins(25, false).unwrap();
    assert_eq!(wins.pairs(), [("Jenson Button", 3), ("Lewis Hamilton", 1)]);

    let races = stats.most_races(25, false).unwrap();
    assert_eq!(
        races.pairs(),
        [
            ("Australian Grand Prix", 2),
            ("British Grand Prix", 1),
            ("Malaysian Grand Prix", 1)
        ]
    );

    let fewest = stats.most_races(1, true).unwrap();
    assert_eq!(fewest.pairs(), [("British Grand Prix", 1)]);
}

#[test]
fn earlier_season_sorts_first() {
    let dataset = view_dataset(
        &[(1, 2010, 1, "Race B"), (2, 2009, 3, "Race A")],
        &[(1, "Ann Driver")],
        &[(1, "Team")],
        &[(1, 1, 1, 1, 1), (2, 2, 1, 1, 1)],
    );
    let view = build_race_results_view(&dataset).unwrap();
    assert_eq!(view.value(0, "race"), Some(&CellValue::from("Race A")));
    assert_eq!(view.value(1, "race"), Some(&CellValue::from("Race B")));
}

#[test]
fn wins_across_seasons() {
    let races: Vec<_> = (1..=4).map(|id| (id, 2000 + id, 1, "Grand Prix")).collect();
    let dataset = view_dataset(
        &races,
        &[(1, "Smith"), (2, "Jones")],
        &[(1, "Team")],
        &[
            (1, 1, 1, 1, 1),
            (2, 2, 1, 1, 1),
            (3, 3, 1, 1, 1),
            (4, 4, 2, 1, 1),
            (5, 4, 1, 1, 2),
        ],
    );
    let view = build_race_results_view(&dataset).unwrap();
    assert_eq!(
        most_wins(&view, 25, false).unwrap().pairs(),
        [("Smith", 3), ("Jones", 1)]
    );
    assert_eq!(
        most_races(&view, 25, false).unwrap().pairs(),
        [("Grand Prix", 4)]
    );
}

#[test]
fn unknown_constructor_is_excluded_without_error() {
    let dataset = view_dataset(
        &[(1, 2020, 1, "Race")],
        &[(1, "Smith"), (2, "Jones")],
        &[(1, "Team")],
        &[(1, 1, 1, 1, 1), (2, 1, 2, 7, 2)],
    );
    let view = build_race_results_view(&dataset).unwrap();
    assert_eq!(view.row_count(), 1);
    assert_eq!(view.value(0, "driver"), Some(&CellValue::from("Smith")));
}

#[test]
fn view_needs_every_source_table() {
    let dataset = fixture_dataset();
    let tables: Vec<_> = dataset
        .tables()
        .filter(|t| t.name() != "constructors")
        .cloned()
        .collect();
    let without_constructors = f1stats::Dataset::from_tables(tables).unwrap();
    assert_eq!(
        build_race_results_view(&without_constructors).unwrap_err(),
        SchemaError::MissingTable {
            table: "constructors".to_string()
        }
    );
}
