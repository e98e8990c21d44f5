//! `roster match` - filter options against a query without a terminal UI.
//!
//! Runs the same matcher the picker uses: substring filtering capped at
//! twenty entries and a case-insensitive exact match that also accepts
//! aliases.

use anyhow::Result;
use clap::Parser;
use roster_components::autocomplete::{
    AutocompleteOption, MAX_FILTERED_OPTIONS, MatchKind, filter_options, find_exact_match,
};
use serde::Serialize;

use crate::cli::args::SourceArgs;
use crate::config::RosterConfig;
use crate::source::Source;

/// Match CLI command.
#[derive(Debug, Parser)]
pub struct MatchCli {
    /// Text as typed into the field
    pub query: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Include ownership descriptions for trainers
    #[arg(long)]
    pub show_ownership: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Exact match as reported by the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExactReport {
    pub option: AutocompleteOption,
    /// `"name"` or `"alias"`.
    pub kind: &'static str,
}

/// Result of matching one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub query: String,
    pub matches: Vec<AutocompleteOption>,
    pub exact: Option<ExactReport>,
}

impl MatchReport {
    pub fn build(options: &[AutocompleteOption], query: &str) -> Self {
        let matches = filter_options(options, query, MAX_FILTERED_OPTIONS)
            .into_iter()
            .map(|i| options[i].clone())
            .collect();
        let exact = find_exact_match(options, query).map(|m| ExactReport {
            option: options[m.index].clone(),
            kind: match m.kind {
                MatchKind::Name => "name",
                MatchKind::Alias => "alias",
            },
        });
        Self {
            query: query.to_string(),
            matches,
            exact,
        }
    }

    /// Plain-text rendering.
    pub fn to_text(&self) -> String {
        let mut out = format!("Matches for \"{}\" ({}):\n", self.query, self.matches.len());
        if self.matches.is_empty() {
            out.push_str("  (none)\n");
        }
        for option in &self.matches {
            match &option.description {
                Some(description) => out.push_str(&format!("  {} - {}\n", option.name, description)),
                None => out.push_str(&format!("  {}\n", option.name)),
            }
        }
        match &self.exact {
            Some(exact) => out.push_str(&format!(
                "Exact match: {} (value: {}, by {})\n",
                exact.option.name, exact.option.value, exact.kind
            )),
            None => out.push_str("Exact match: none\n"),
        }
        out
    }
}

impl MatchCli {
    pub fn run(self, _config: &RosterConfig) -> Result<()> {
        let source = Source::from_args(&self.source)?;
        let options = source.load_options(self.show_ownership)?;
        let report = MatchReport::build(&options, &self.query);
        tracing::info!(
            query = %self.query,
            matches = report.matches.len(),
            exact = report.exact.is_some(),
            "matched"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report.to_text());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn elements() -> Vec<AutocompleteOption> {
        vec![
            AutocompleteOption::new("Fire"),
            AutocompleteOption::new("Water").with_match_name("Aqua"),
            AutocompleteOption::new("Grass").with_description("Leafy"),
        ]
    }

    #[test]
    fn test_report_alias_match() {
        let report = MatchReport::build(&elements(), "aqua");
        assert_eq!(report.matches.len(), 1);
        let exact = report.exact.unwrap();
        assert_eq!(exact.option.name, "Water");
        assert_eq!(exact.kind, "alias");
    }

    #[test]
    fn test_report_text() {
        let report = MatchReport::build(&elements(), "r");
        assert_eq!(
            report.to_text(),
            "Matches for \"r\" (3):\n  Fire\n  Water\n  Grass - Leafy\nExact match: none\n"
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = MatchReport::build(&elements(), "fire");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["exact"]["kind"], "name");
        assert_eq!(json["exact"]["option"]["value"], "Fire");
        assert_eq!(json["matches"].as_array().unwrap().len(), 1);
    }
}
