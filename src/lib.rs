//! f1stats - Schema normalization and race reports for the Ergast F1 dataset
//!
//! Raw CSV tables are normalized into a typed [`Dataset`] by a fixed set of
//! per-table rules, then joined into a race-results view that the
//! aggregate reports read from.

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod transform;
pub mod view;

pub use config::Config;
pub use error::{Error, ParseError, Result, SchemaError};
pub use model::{Dataset, RawTable, RawTableSet, Table};
pub use transform::{normalize, SchemaNormalizer};
pub use view::{build_race_results_view, RaceStats, Report, ReportRow};
