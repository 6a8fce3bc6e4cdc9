//! Logging configuration using tracing
//!
//! The TUI owns the terminal, so nothing is ever printed. When enabled,
//! events go to a daily rolling file under the platform data dir:
//! `~/.local/share/foliotui/logs/foliotui.log.YYYY-MM-DD` on Linux.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter, e.g. `FOLIOTUI_LOG=debug`
pub const LOG_ENV: &str = "FOLIOTUI_LOG";

const LOG_FILE: &str = "foliotui.log";

/// Initialize the logging subsystem
///
/// Logging is off unless `debug` is set or `FOLIOTUI_LOG` holds a valid
/// filter. Returns the log directory when a subscriber was installed.
pub fn init(debug: bool) -> Result<Option<PathBuf>> {
    let env_filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) if debug => EnvFilter::new("foliotui=debug,warn"),
        Err(_) => return Ok(None),
    };

    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("a tracing subscriber is already installed")?;

    tracing::info!("foliotui {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(Some(log_dir))
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("foliotui").join("logs")
}
