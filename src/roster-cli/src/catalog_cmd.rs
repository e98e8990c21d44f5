//! `roster catalog` - list the built-in option catalogs.

use anyhow::Result;
use clap::Parser;
use roster_catalog::CatalogKind;
use serde::Serialize;

use crate::cli::CatalogArg;

/// Catalog CLI command.
#[derive(Debug, Parser)]
pub struct CatalogCli {
    /// Catalog to list; lists the catalogs themselves when omitted
    #[arg(value_enum)]
    pub kind: Option<CatalogArg>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CatalogSummary {
    name: &'static str,
    label: &'static str,
    count: usize,
}

impl CatalogCli {
    pub fn run(self) -> Result<()> {
        match self.kind {
            Some(kind) => list_entries(kind.into(), self.json),
            None => list_catalogs(self.json),
        }
    }
}

fn list_entries(kind: CatalogKind, json: bool) -> Result<()> {
    let options = kind.options();
    tracing::info!(catalog = %kind, count = options.len(), "listing catalog");

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }
    let width = options.iter().map(|o| o.name.chars().count()).max().unwrap_or(0);
    for option in &options {
        match &option.description {
            Some(description) => println!("{:<width$}  {}", option.name, description),
            None => println!("{}", option.name),
        }
    }
    Ok(())
}

fn list_catalogs(json: bool) -> Result<()> {
    let summaries: Vec<CatalogSummary> = CatalogKind::all()
        .iter()
        .map(|&kind| CatalogSummary {
            name: kind.name(),
            label: kind.label(),
            count: kind.options().len(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{:<16} {:>3} entries", summary.name, summary.count);
        }
    }
    Ok(())
}
