//! Roster CLI - Main entry point.
//!
//! - `roster pick` - interactive autocomplete picker
//! - `roster match` - non-interactive filtering and exact matching
//! - `roster catalog` - list the built-in option catalogs

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use roster_cli::cli::{Cli, dispatch_command};
use roster_cli::config::RosterConfig;
use roster_cli::logging;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = RosterConfig::load(cli.config.as_deref())?;

    let level = logging::resolve_level(&cli, &config);
    let _log_guard = logging::init(level, cli.log_file.as_deref(), cli.is_interactive())?;
    tracing::debug!(?level, "logging initialized");

    dispatch_command(cli, config)
}
