//! Command dispatch.

use std::process::ExitCode;

use anyhow::Result;

use super::args::{Cli, Commands};
use crate::config::RosterConfig;

/// Route a parsed command line to its command.
pub fn dispatch_command(cli: Cli, config: RosterConfig) -> Result<ExitCode> {
    match cli.command {
        Commands::Pick(pick_cli) => pick_cli.run(&config),
        Commands::Match(match_cli) => match_cli.run(&config).map(|()| ExitCode::SUCCESS),
        Commands::Catalog(catalog_cli) => catalog_cli.run().map(|()| ExitCode::SUCCESS),
    }
}
