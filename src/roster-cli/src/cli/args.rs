//! Command-line argument structures.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roster_catalog::CatalogKind;

use super::styles::{AFTER_HELP, get_styles};
use crate::catalog_cmd::CatalogCli;
use crate::match_cmd::MatchCli;
use crate::pick_cmd::PickCli;

/// Log level for the subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    /// Whether this level lets through more than warnings.
    pub fn is_chatty(&self) -> bool {
        matches!(self, LogLevel::Info | LogLevel::Debug | LogLevel::Trace)
    }
}

/// Built-in catalog selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogArg {
    Types,
    Factions,
    Natures,
    Characteristics,
    Berries,
}

impl From<CatalogArg> for CatalogKind {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Types => CatalogKind::Types,
            CatalogArg::Factions => CatalogKind::Factions,
            CatalogArg::Natures => CatalogKind::Natures,
            CatalogArg::Characteristics => CatalogKind::Characteristics,
            CatalogArg::Berries => CatalogKind::Berries,
        }
    }
}

/// Roster - autocomplete pickers for trainer and monster forms.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Roster - autocomplete pickers for the terminal", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, Commands::Pick(_))
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick one option interactively and print it as JSON
    #[command(visible_alias = "p")]
    Pick(PickCli),

    /// Filter options against a query and report the exact match
    #[command(visible_alias = "m")]
    Match(MatchCli),

    /// List a built-in catalog, or all catalogs
    #[command(visible_alias = "ls")]
    Catalog(CatalogCli),
}

/// Where the options come from. Exactly one source is required.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// JSON option file (strings or {name, value, description, matchNames})
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Built-in catalog
    #[arg(long, value_enum)]
    pub catalog: Option<CatalogArg>,

    /// JSON monster list; options read "Name (Lv. n, Types)"
    #[arg(long, value_name = "FILE")]
    pub monsters: Option<PathBuf>,

    /// JSON trainer list; options read "Name (Lv. n)"
    #[arg(long, value_name = "FILE")]
    pub trainers: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_from_str_loose() {
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose(" debug "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str_loose("loud"), None);
    }

    #[test]
    fn test_log_level_chatty() {
        assert!(!LogLevel::Warn.is_chatty());
        assert!(LogLevel::Info.is_chatty());
    }

    #[test]
    fn test_source_group_requires_one() {
        let err = Cli::try_parse_from(["roster", "match", "fi"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from([
            "roster", "match", "fi", "--catalog", "types", "--options", "x.json",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "catalog", "types", "--log-level", "debug", "-v"])
            .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(cli.verbose);
        assert!(!cli.is_interactive());
    }
}
