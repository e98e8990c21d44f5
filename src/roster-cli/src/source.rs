//! Option sources shared by `pick` and `match`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use roster_catalog::{
    CatalogKind, load_monsters, load_options, load_trainers, monster_option, trainer_option,
};
use roster_components::autocomplete::AutocompleteOption;

use crate::cli::args::SourceArgs;

/// One resolved `--options | --catalog | --monsters | --trainers` choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Options(PathBuf),
    Catalog(CatalogKind),
    Monsters(PathBuf),
    Trainers(PathBuf),
}

impl Source {
    pub fn from_args(args: &SourceArgs) -> Result<Self> {
        let source = match args {
            SourceArgs { options: Some(path), .. } => Source::Options(path.clone()),
            SourceArgs { catalog: Some(kind), .. } => Source::Catalog((*kind).into()),
            SourceArgs { monsters: Some(path), .. } => Source::Monsters(path.clone()),
            SourceArgs { trainers: Some(path), .. } => Source::Trainers(path.clone()),
            _ => bail!("One of --options, --catalog, --monsters or --trainers is required"),
        };
        Ok(source)
    }

    /// Field label used when none is given.
    pub fn default_label(&self) -> String {
        match self {
            Source::Catalog(kind) => kind.label().to_string(),
            Source::Monsters(_) => "Monster".to_string(),
            Source::Trainers(_) => "Trainer".to_string(),
            Source::Options(path) => path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(capitalize)
                .unwrap_or_else(|| "Option".to_string()),
        }
    }

    /// Whether entries are likely to carry descriptions.
    pub fn has_descriptions(&self) -> bool {
        match self {
            Source::Catalog(kind) => kind.has_descriptions(),
            Source::Trainers(_) | Source::Options(_) => true,
            Source::Monsters(_) => false,
        }
    }

    /// Flatten the source into plain options.
    pub fn load_options(&self, show_ownership: bool) -> Result<Vec<AutocompleteOption>> {
        let options = match self {
            Source::Options(path) => load_options(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            Source::Catalog(kind) => kind.options(),
            Source::Monsters(path) => load_monsters(path)
                .with_context(|| format!("Failed to load monsters from {}", path.display()))?
                .iter()
                .map(monster_option)
                .collect(),
            Source::Trainers(path) => load_trainers(path)
                .with_context(|| format!("Failed to load trainers from {}", path.display()))?
                .iter()
                .map(|t| trainer_option(t, show_ownership))
                .collect(),
        };
        Ok(options)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CatalogArg;

    fn args() -> SourceArgs {
        SourceArgs {
            options: None,
            catalog: None,
            monsters: None,
            trainers: None,
        }
    }

    #[test]
    fn test_from_args() {
        let source = Source::from_args(&SourceArgs {
            catalog: Some(CatalogArg::Natures),
            ..args()
        })
        .unwrap();
        assert_eq!(source, Source::Catalog(CatalogKind::Natures));
        assert!(Source::from_args(&args()).is_err());
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(Source::Catalog(CatalogKind::Berries).default_label(), "Berry");
        assert_eq!(
            Source::Options(PathBuf::from("data/abilities.json")).default_label(),
            "Abilities"
        );
        assert_eq!(Source::Monsters(PathBuf::from("m.json")).default_label(), "Monster");
    }

    #[test]
    fn test_catalog_options() {
        let options = Source::Catalog(CatalogKind::Types).load_options(false).unwrap();
        assert_eq!(options[0].name, "Normal");
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Source::Options(PathBuf::from("/nonexistent/opts.json"))
            .load_options(false)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load options"));
    }
}
