//! Tracing subscriber setup.
//!
//! The interactive picker owns the terminal, so anything chattier than
//! warnings goes to a file there. `--log-file` always wins.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, LogLevel};
use crate::config::RosterConfig;

/// Environment variable holding a log level.
pub const LOG_LEVEL_ENV: &str = "ROSTER_LOG_LEVEL";

/// Pick the level from flags, environment and config, in that order.
pub fn resolve_level(cli: &Cli, config: &RosterConfig) -> LogLevel {
    let env = std::env::var(LOG_LEVEL_ENV).ok();
    resolve_level_from(cli.verbose, cli.log_level, env.as_deref(), config)
}

fn resolve_level_from(
    verbose: bool,
    flag: Option<LogLevel>,
    env: Option<&str>,
    config: &RosterConfig,
) -> LogLevel {
    if verbose {
        return LogLevel::Debug;
    }
    flag.or_else(|| env.and_then(LogLevel::from_str_loose))
        .or_else(|| config.log_level())
        .unwrap_or_default()
}

/// Default log file for the interactive picker.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("roster")
        .join("roster.log")
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init(level: LogLevel, log_file: Option<&Path>, interactive: bool) -> Result<Option<WorkerGuard>> {
    // RUST_LOG, when set, replaces the level entirely.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    let file = match log_file {
        Some(path) => Some(path.to_path_buf()),
        None if interactive && level.is_chatty() => Some(default_log_file()),
        None => None,
    };

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("Failed to install logger: {e}"))?;
        return Ok(None);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    Ok(Some(guard))
}
