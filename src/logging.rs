//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! - `warn`: default, non-fatal issues such as an unwritable cache
//! - `info` (`-v`): pipeline stages and table counts
//! - `debug` (`-vv`): every applied rule and join
//! - `trace` (`-vvv`)
//!
//! `RUST_LOG`, when set, takes precedence over the verbosity count.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count onto a log level
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity).as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::TRACE);
    }
}
