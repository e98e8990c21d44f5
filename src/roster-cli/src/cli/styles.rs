//! CLI styling for help output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Help theme matching the picker's cyan accent.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section with examples and environment variables.
pub const AFTER_HELP: &str = "\
EXAMPLES:
    roster pick --catalog natures --label Nature
    roster pick --monsters team.json --selected 12
    roster match fi --catalog types
    roster catalog berries --json

ENVIRONMENT VARIABLES:
    ROSTER_LOG_LEVEL     Log verbosity (error, warn, info, debug, trace)
    RUST_LOG             Full tracing filter, overrides the level

PATHS:
    Config      <config dir>/roster/config.toml
    Logs        <cache dir>/roster/roster.log (interactive picker)";
