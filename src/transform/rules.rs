//! Per-table normalization rules for the Ergast dataset
//!
//! Rules run in declared order; later rules see the columns produced by
//! earlier ones.

use super::column::{OnError, Projection};

/// One column rewrite
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Trim surrounding whitespace
    Strip(&'static [&'static str]),
    /// Parse as integers, missing values become `default`
    Int {
        columns: &'static [&'static str],
        default: i64,
    },
    /// Parse as floats, missing values become `default`
    Float {
        columns: &'static [&'static str],
        default: f64,
    },
    /// Merge a date (and optional time) column into a temporal column
    Temporal {
        date: &'static str,
        time: Option<&'static str>,
        target: Option<&'static str>,
        on_error: OnError,
        projection: Projection,
    },
    /// Derive `target = left + separator + right`
    Concat {
        target: &'static str,
        left: &'static str,
        right: &'static str,
        separator: &'static str,
    },
    /// Remove columns (absent columns are ignored)
    Drop(&'static [&'static str]),
}

/// The ordered rules of one table
#[derive(Debug, Clone, Copy)]
pub struct TableRules {
    pub table: &'static str,
    pub rules: &'static [Rule],
}

const fn ints(columns: &'static [&'static str]) -> Rule {
    Rule::Int {
        columns,
        default: 0,
    }
}

const fn floats(columns: &'static [&'static str]) -> Rule {
    Rule::Float {
        columns,
        default: 0.0,
    }
}

/// `date` + `time` merged into the datetime column `target`
const fn session(date: &'static str, time: &'static str, target: &'static str) -> Rule {
    Rule::Temporal {
        date,
        time: Some(time),
        target: Some(target),
        on_error: OnError::Ignore,
        projection: Projection::DateTime,
    }
}

/// A single column reduced to its time of day
const fn time_only(column: &'static str, on_error: OnError) -> Rule {
    Rule::Temporal {
        date: column,
        time: None,
        target: None,
        on_error,
        projection: Projection::Time,
    }
}

const URL: &[&str] = &["url"];
const POSITION_TEXT: &[&str] = &["positionText"];

pub const RACES: &[Rule] = &[
    ints(&["raceId", "year", "round", "circuitId"]),
    Rule::Strip(&["name"]),
    Rule::Temporal {
        date: "date",
        time: Some("time"),
        target: None,
        on_error: OnError::Ignore,
        projection: Projection::DateTime,
    },
    session("fp1_date", "fp1_time", "fp1"),
    session("fp2_date", "fp2_time", "fp2"),
    session("fp3_date", "fp3_time", "fp3"),
    session("quali_date", "quali_time", "quali"),
    session("sprint_date", "sprint_time", "sprint"),
    Rule::Drop(URL),
];

pub const RESULTS: &[Rule] = &[
    ints(&[
        "resultId",
        "raceId",
        "driverId",
        "constructorId",
        "grid",
        "positionOrder",
        "laps",
        "statusId",
    ]),
    ints(&["position", "number", "fastestLap", "rank"]),
    floats(&["points"]),
    floats(&["fastestLapSpeed"]),
    Rule::Strip(POSITION_TEXT),
    time_only("fastestLapTime", OnError::Coerce),
];

pub const DRIVERS: &[Rule] = &[
    ints(&["driverId"]),
    ints(&["number"]),
    Rule::Strip(&["driverRef", "code", "forename", "surname", "nationality"]),
    Rule::Temporal {
        date: "dob",
        time: None,
        target: None,
        on_error: OnError::Ignore,
        projection: Projection::Date,
    },
    Rule::Concat {
        target: "name",
        left: "forename",
        right: "surname",
        separator: " ",
    },
    Rule::Drop(URL),
];

pub const CONSTRUCTORS: &[Rule] = &[
    ints(&["constructorId"]),
    Rule::Strip(&["constructorRef", "name", "nationality"]),
    Rule::Drop(URL),
];

pub const QUALIFYING: &[Rule] = &[
    ints(&[
        "qualifyId",
        "raceId",
        "driverId",
        "constructorId",
        "number",
        "position",
    ]),
    time_only("q1", OnError::Ignore),
    time_only("q2", OnError::Ignore),
    time_only("q3", OnError::Ignore),
];

pub const SPRINT_RESULTS: &[Rule] = &[
    ints(&[
        "resultId",
        "raceId",
        "driverId",
        "constructorId",
        "grid",
        "positionOrder",
        "laps",
        "statusId",
    ]),
    ints(&["position", "number", "fastestLap"]),
    floats(&["points"]),
    Rule::Strip(POSITION_TEXT),
    time_only("fastestLapTime", OnError::Coerce),
];

pub const DRIVER_STANDINGS: &[Rule] = &[
    ints(&["driverStandingsId", "raceId", "driverId", "position", "wins"]),
    floats(&["points"]),
    Rule::Strip(POSITION_TEXT),
];

pub const CONSTRUCTOR_STANDINGS: &[Rule] = &[
    ints(&[
        "constructorStandingsId",
        "raceId",
        "constructorId",
        "position",
        "wins",
    ]),
    floats(&["points"]),
    Rule::Strip(POSITION_TEXT),
];

pub const LAP_TIMES: &[Rule] = &[
    ints(&["raceId", "driverId", "lap", "position", "milliseconds"]),
    time_only("time", OnError::Coerce),
];

pub const PIT_STOPS: &[Rule] = &[
    ints(&["raceId", "driverId", "stop", "lap", "milliseconds"]),
    time_only("time", OnError::Coerce),
];

/// Rules for every normalized table, in application order
pub const TABLE_RULES: &[TableRules] = &[
    TableRules {
        table: "races",
        rules: RACES,
    },
    TableRules {
        table: "results",
        rules: RESULTS,
    },
    TableRules {
        table: "drivers",
        rules: DRIVERS,
    },
    TableRules {
        table: "constructors",
        rules: CONSTRUCTORS,
    },
    TableRules {
        table: "qualifying",
        rules: QUALIFYING,
    },
    TableRules {
        table: "sprint_results",
        rules: SPRINT_RESULTS,
    },
    TableRules {
        table: "driver_standings",
        rules: DRIVER_STANDINGS,
    },
    TableRules {
        table: "constructor_standings",
        rules: CONSTRUCTOR_STANDINGS,
    },
    TableRules {
        table: "lap_times",
        rules: LAP_TIMES,
    },
    TableRules {
        table: "pit_stops",
        rules: PIT_STOPS,
    },
];
