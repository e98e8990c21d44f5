//! Roster CLI library.
//!
//! - `cli/` - argument parsing and dispatch
//! - `config` - TOML configuration
//! - `logging` - tracing subscriber setup
//! - `source` - where options come from (files, catalogs, records)
//! - `*_cmd.rs` - individual command implementations

pub mod catalog_cmd;
pub mod cli;
pub mod config;
pub mod logging;
pub mod match_cmd;
pub mod pick_cmd;
pub mod source;

/// Roster CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
