//! The denormalized race-results view

use tracing::debug;

use crate::error::SchemaError;
use crate::model::{inner_join, Dataset, Table};

const RESULT_COLUMNS: &[&str] = &[
    "resultId",
    "raceId",
    "driverId",
    "constructorId",
    "grid",
    "position",
    "positionText",
    "points",
];
const RACE_COLUMNS: &[&str] = &["raceId", "year", "round", "name", "date"];
const DRIVER_COLUMNS: &[&str] = &["driverId", "number", "name", "code"];
const CONSTRUCTOR_COLUMNS: &[&str] = &["constructorId", "name"];

/// Name carried by the view table
pub const VIEW_NAME: &str = "race_results";

/// Sort key of the view
pub const VIEW_ORDER: &[&str] = &["year", "round", "position"];

/// Join results with their race, driver and constructor.
///
/// Strict inner joins: a result whose race, driver or constructor is unknown
/// is left out. Race, driver and constructor names appear as `race`,
/// `driver` and `constructor`. Rows are ordered by [`VIEW_ORDER`].
pub fn build_race_results_view(dataset: &Dataset) -> Result<Table, SchemaError> {
    let results = dataset.table("results")?.select(RESULT_COLUMNS)?;

    let mut races = dataset.table("races")?.select(RACE_COLUMNS)?;
    races.rename_column("name", "race")?;

    let mut drivers = dataset.table("drivers")?.select(DRIVER_COLUMNS)?;
    drivers.rename_column("name", "driver")?;

    let mut constructors = dataset.table("constructors")?.select(CONSTRUCTOR_COLUMNS)?;
    constructors.rename_column("name", "constructor")?;

    let total = results.row_count();
    let view = inner_join(&results, &races, "raceId")?;
    let view = inner_join(&view, &drivers, "driverId")?;
    let mut view = inner_join(&view, &constructors, "constructorId")?;

    view.drop_column("resultId");
    view.set_name(VIEW_NAME);
    view.sort_by_columns(VIEW_ORDER)?;

    debug!(
        rows = view.row_count(),
        dropped = total.saturating_sub(view.row_count()),
        "built race results view"
    );
    Ok(view)
}
