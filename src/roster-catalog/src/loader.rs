//! JSON loading for option files and record lists.
//!
//! Option files are arrays whose entries are either plain strings or
//! `{name, value?, description?, matchNames?}` objects. Record files are
//! arrays of [`MonsterRecord`](crate::records::MonsterRecord) or
//! [`TrainerRecord`](crate::records::TrainerRecord) objects.

use std::fs;
use std::path::Path;

use roster_components::autocomplete::{AutocompleteOption, OptionSource, normalize_options};
use serde::de::DeserializeOwned;

use crate::error::{CatalogError, CatalogResult};
use crate::records::{MonsterRecord, TrainerRecord};

/// Read and normalize an option file.
pub fn load_options(path: &Path) -> CatalogResult<Vec<AutocompleteOption>> {
    let content = read(path)?;
    let options = parse_options(&content, path)?;
    tracing::info!(path = %path.display(), count = options.len(), "loaded options");
    Ok(options)
}

/// Parse option JSON. `origin` is only used in error messages.
pub fn parse_options(content: &str, origin: &Path) -> CatalogResult<Vec<AutocompleteOption>> {
    let sources: Vec<OptionSource> =
        serde_json::from_str(content).map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

    if let Some(index) = sources.iter().position(|s| s.name().trim().is_empty()) {
        tracing::warn!(path = %origin.display(), index, "option without a name");
        return Err(CatalogError::EmptyOptionName { index });
    }

    Ok(normalize_options(sources))
}

/// Read a monster list.
pub fn load_monsters(path: &Path) -> CatalogResult<Vec<MonsterRecord>> {
    load_records(path)
}

/// Read a trainer list.
pub fn load_trainers(path: &Path) -> CatalogResult<Vec<TrainerRecord>> {
    load_records(path)
}

/// Read a JSON array of records of any deserializable shape.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let content = read(path)?;
    let records: Vec<T> = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

fn read(path: &Path) -> CatalogResult<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}
