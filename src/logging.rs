// src/logging.rs
//! Tracing subscriber setup for the binary. Logs go to stderr.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level name for a `-v` count; zero defers to `fallback`.
#[must_use]
pub fn level_for(verbose: u8, fallback: &str) -> &str {
    match verbose {
        0 => fallback,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` wins when set.
///
/// # Errors
/// Returns error if the filter is invalid or a subscriber is already set.
pub fn init(verbose: u8, config_level: &str) -> Result<()> {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::try_from_default_env()?
    } else {
        let level = level_for(verbose, config_level);
        EnvFilter::try_new(format!("error,lineage_core={level},lineage={level}"))?
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_for(0, "warn"), "warn");
        assert_eq!(level_for(1, "warn"), "info");
        assert_eq!(level_for(2, "warn"), "debug");
        assert_eq!(level_for(7, "warn"), "trace");
    }
}
