//! End-to-end run: CSV or cache to dataset, dataset to rendered report

use std::io::Write;

use tracing::{info, warn};

use crate::cache;
use crate::config::{Config, ReportKind};
use crate::error::Result;
use crate::model::Dataset;
use crate::output::OutputFactory;
use crate::parser;
use crate::transform::normalize;
use crate::view::RaceStats;

/// Load the normalized dataset for a run.
///
/// An existing cache is used unless `refresh` is set; otherwise the CSV
/// directory is normalized and, when a cache file is configured, saved.
pub fn load_dataset(config: &Config) -> Result<Dataset> {
    if let Some(cache_file) = &config.cache_file {
        if !config.refresh && cache_file.is_file() {
            return cache::load(cache_file);
        }
    }

    let raw = parser::load_dir(&config.data_dir)?;
    let dataset = normalize(&raw)?;
    info!(tables = dataset.len(), "normalized dataset");

    if let Some(cache_file) = &config.cache_file {
        if let Err(e) = cache::save(&dataset, cache_file) {
            warn!(path = %cache_file.display(), error = %e, "could not write dataset cache");
        }
    }
    Ok(dataset)
}

/// Run the configured report and render it
pub fn run_report(config: &Config, stats: &RaceStats, writer: &mut dyn Write) -> anyhow::Result<()> {
    let formatter = OutputFactory::create(config.output_format, config.compact);
    match config.report {
        ReportKind::Wins => {
            let report = stats.most_wins(config.limit, config.ascending)?;
            formatter.render_report(&report, writer)
        }
        ReportKind::Races => {
            let report = stats.most_races(config.limit, config.ascending)?;
            formatter.render_report(&report, writer)
        }
        ReportKind::Results => {
            let view = stats.race_results()?.head(config.limit);
            formatter.render_table(&view, writer)
        }
    }
}
