//! File logging setup.
//!
//! The terminal belongs to the board, so log lines go to a file through a
//! non-blocking writer. `RUST_LOG` takes precedence over the configured
//! level.

use std::fs;

use anyhow::Context;
use idea_board_config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const FALLBACK_FILE_NAME: &str = "idea-board.log";

/// Installs the global subscriber described by `config`.
///
/// Returns the writer guard, which must be held until exit so buffered
/// lines are flushed. Returns `None` when logging is disabled or there is
/// nowhere to write.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }
    let Some(path) = config.file_path() else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| ".".into());
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| FALLBACK_FILE_NAME.into(), ToOwned::to_owned);

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(Some(guard))
}
