//! Configuration handling for f1stats

use std::path::PathBuf;

use crate::view::DEFAULT_LIMIT;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Which report to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportKind {
    /// Drivers by wins
    #[default]
    Wins,
    /// Race names by recorded winners
    Races,
    /// The joined race-results view itself
    Results,
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wins" => Ok(ReportKind::Wins),
            "races" => Ok(ReportKind::Races),
            "results" => Ok(ReportKind::Results),
            _ => Err(format!("Unknown report: {}", s)),
        }
    }
}

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the extracted CSV tables
    pub data_dir: PathBuf,
    /// Normalized dataset cache; unused when `None`
    pub cache_file: Option<PathBuf>,
    /// Re-normalize from CSV even when the cache exists
    pub refresh: bool,
    /// Report to produce
    pub report: ReportKind,
    /// Maximum number of report rows
    pub limit: usize,
    /// Sort counts ascending instead of descending
    pub ascending: bool,
    /// Output format
    pub output_format: OutputFormat,
    /// Single-line JSON; no row-count footer in the terminal
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("f1db_csv"),
            cache_file: None,
            refresh: false,
            report: ReportKind::default(),
            limit: DEFAULT_LIMIT,
            ascending: false,
            output_format: OutputFormat::default(),
            compact: false,
        }
    }
}

impl Config {
    /// Create a new Config reading from a data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Set the dataset cache file
    pub fn with_cache_file(mut self, path: PathBuf) -> Self {
        self.cache_file = Some(path);
        self
    }

    /// Force re-normalization from CSV
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Set the report to produce
    pub fn with_report(mut self, report: ReportKind) -> Self {
        self.report = report;
        self
    }

    /// Set the maximum number of report rows
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sort counts ascending
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Use compact output
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("races".parse::<ReportKind>(), Ok(ReportKind::Races));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let config = Config::new(PathBuf::from("data")).with_limit(10);
        assert_eq!(config.limit, 10);
        assert_eq!(config.report, ReportKind::Wins);
        assert!(!config.ascending);
        assert!(config.cache_file.is_none());
        assert!(!config.compact);
        assert!(config.with_compact(true).compact);
    }
}
