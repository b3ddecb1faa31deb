//! Denormalized views and reports over a normalized dataset

mod race_results;
mod reports;

use crate::error::SchemaError;
use crate::model::{Dataset, Table};

pub use race_results::{build_race_results_view, VIEW_NAME, VIEW_ORDER};
pub use reports::{most_races, most_wins, Report, ReportRow, DEFAULT_LIMIT};

/// Query context owning a normalized dataset.
///
/// Built once by the caller and passed by reference to whatever needs to
/// run reports.
#[derive(Debug, Clone)]
pub struct RaceStats {
    dataset: Dataset,
}

impl RaceStats {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The joined race-results view
    pub fn race_results(&self) -> Result<Table, SchemaError> {
        build_race_results_view(&self.dataset)
    }

    /// Drivers with the most wins
    pub fn most_wins(&self, n: usize, ascending: bool) -> Result<Report, SchemaError> {
        most_wins(&self.race_results()?, n, ascending)
    }

    /// Race names with the most recorded winners
    pub fn most_races(&self, n: usize, ascending: bool) -> Result<Report, SchemaError> {
        most_races(&self.race_results()?, n, ascending)
    }
}
