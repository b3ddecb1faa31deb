//! f1stats - race reports over the Ergast F1 CSV dataset

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use f1stats::config::{Config, OutputFormat, ReportKind};
use f1stats::logging::init_logging;
use f1stats::pipeline::{load_dataset, run_report};
use f1stats::view::{RaceStats, DEFAULT_LIMIT};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReport {
    /// Drivers with the most wins
    Wins,
    /// Race names with the most recorded winners
    Races,
    /// The joined race-results view
    Results,
}

impl From<CliReport> for ReportKind {
    fn from(r: CliReport) -> Self {
        match r {
            CliReport::Wins => ReportKind::Wins,
            CliReport::Races => ReportKind::Races,
            CliReport::Results => ReportKind::Results,
        }
    }
}

/// Race statistics from the Ergast Formula 1 CSV dump
#[derive(Parser, Debug)]
#[command(name = "f1stats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Report to produce
    #[arg(value_enum, default_value = "wins")]
    report: CliReport,

    /// Directory holding the extracted CSV files
    #[arg(short, long, default_value = "f1db_csv")]
    data_dir: PathBuf,

    /// Normalized dataset cache (JSON); read when present, written otherwise
    #[arg(short, long)]
    cache: Option<PathBuf>,

    /// Re-normalize from CSV even if the cache exists
    #[arg(long)]
    refresh: bool,

    /// Number of rows to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Sort counts ascending
    #[arg(long)]
    ascending: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Compact output: single-line JSON, no row-count footer
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = Config::new(cli.data_dir)
        .with_refresh(cli.refresh)
        .with_report(cli.report.into())
        .with_limit(cli.limit)
        .with_ascending(cli.ascending)
        .with_output_format(cli.format.into())
        .with_compact(cli.compact);
    if let Some(cache) = cli.cache {
        config = config.with_cache_file(cache);
    }

    let dataset = load_dataset(&config).with_context(|| {
        format!("Failed to load dataset from {}", config.data_dir.display())
    })?;
    let stats = RaceStats::new(dataset);

    let mut stdout = std::io::stdout().lock();
    run_report(&config, &stats, &mut stdout)
}
