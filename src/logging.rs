//! Tracing subscriber setup for the command-line driver.
//!
//! Logs go to stderr so that stdout only carries state transitions and
//! rendered snapshots. `SNAPSHOT_LOG` takes an `EnvFilter` directive and
//! overrides the level picked from the flags.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SNAPSHOT_LOG";

/// Default filter directive for the given verbosity.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init_tracing(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre!("failed to initialize tracing subscriber: {}", e))?;

    Ok(())
}
