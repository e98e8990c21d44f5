//! # Roster Catalog
//!
//! The domain side of Roster forms: monster and trainer records, the typed
//! pickers that present them through an autocomplete input, and the
//! built-in option catalogs (types, factions, natures, characteristics,
//! berries).
//!
//! ```rust,ignore
//! use roster_catalog::{CatalogKind, MonsterPicker, load_monsters};
//!
//! let monsters = load_monsters(Path::new("monsters.json"))?;
//! let mut picker = MonsterPicker::new(&monsters, None, AutocompleteConfig::default());
//! for event in picker.picker_mut().on_key(key, Instant::now()) { /* ... */ }
//!
//! let factions = CatalogKind::Factions.options();
//! ```

pub mod builtin;
pub mod error;
pub mod loader;
pub mod pickers;
pub mod records;

pub use builtin::CatalogKind;
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_monsters, load_options, load_records, load_trainers, parse_options};
pub use pickers::{
    MonsterPicker, PickerEvent, RecordPicker, TrainerPicker, monster_option, trainer_option,
};
pub use records::{MonsterRecord, RecordId, TrainerRecord};
