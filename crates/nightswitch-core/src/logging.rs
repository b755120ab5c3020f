//! File logging
//!
//! The switch screen owns the terminal, so every run logs to a daily file:
//! `--log-dir`, else `$NIGHTSWITCH_LOG_DIR`, else
//! `<data_local_dir>/nightswitch/logs`. `NIGHTSWITCH_LOG` takes an
//! `EnvFilter` directive, e.g. `NIGHTSWITCH_LOG=nightswitch_app=debug`.

use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "NIGHTSWITCH_LOG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV_VAR: &str = "NIGHTSWITCH_LOG_DIR";

const LOG_FILE_PREFIX: &str = "nightswitch.log";
const DEFAULT_FILTER: &str = "nightswitch=info,warn";

/// Pick the log directory: `explicit`, then `$NIGHTSWITCH_LOG_DIR`, then the
/// platform data dir.
pub fn resolve_log_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    match std::env::var(LOG_DIR_ENV_VAR) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nightswitch")
            .join("logs"),
    }
}

/// Install the global subscriber. Returns the directory logs go to.
pub fn init(log_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = resolve_log_dir(log_dir);
    std::fs::create_dir_all(&dir)
        .map_err(|e| Error::logging(format!("cannot create {}: {}", dir.display(), e)))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("nightswitch {} logging to {}", env!("CARGO_PKG_VERSION"), dir.display());
    Ok(dir)
}
