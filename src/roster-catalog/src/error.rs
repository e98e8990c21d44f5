//! Error types for catalog and record loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading options or records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No built-in catalog has this name.
    #[error("Unknown catalog '{0}' (expected one of: types, factions, natures, characteristics, berries)")]
    UnknownCatalog(String),

    /// An option entry has an empty name.
    #[error("Option at index {index} has an empty name")]
    EmptyOptionName { index: usize },
}

impl CatalogError {
    /// Check if this error came from the filesystem rather than the content.
    pub fn is_io(&self) -> bool {
        matches!(self, CatalogError::Read { .. })
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
