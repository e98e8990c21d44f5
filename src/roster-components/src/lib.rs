//! # Roster Components
//!
//! Terminal components for Roster forms, built on ratatui.
//!
//! The centerpiece is the [`AutocompleteInput`](autocomplete::AutocompleteInput):
//! a headless state machine for a type-ahead field plus the widgets that draw
//! it. Around it sit the pieces every form screen needs: a grapheme-aware
//! [`TextField`](text_field::TextField), a [`ScrollState`](scroll::ScrollState)
//! window, bordered containers, a key hints bar and the
//! [`ModalRegistry`](modal::ModalRegistry) that orders stacked dialogs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │               roster-catalog / roster-cli                │
//! │        (monster + trainer pickers, picker screen)        │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────────────────▼─────────────────────────────┐
//! │                   roster-components                      │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ autocomplete │  │    modal     │  │  text_field,   │  │
//! │  │ state, view, │  │  registry,   │  │  scroll, ...   │  │
//! │  │  dropdown    │  │  frame       │  │                │  │
//! │  └──────┬───────┘  └──────┬───────┘  └───────┬────────┘  │
//! │  ┌──────▼─────────────────▼──────────────────▼────────┐  │
//! │  │                  Component trait                   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────────────────▼─────────────────────────────┐
//! │                roster-core (theme) + ratatui             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod autocomplete;
pub mod borders;
pub mod component;
pub mod key_hints;
pub mod modal;
pub mod scroll;
pub mod text_field;

/// Commonly used types and traits for quick imports.
///
/// ```rust,ignore
/// use roster_components::prelude::*;
/// ```
pub mod prelude {
    pub use crate::autocomplete::{
        AutocompleteConfig, AutocompleteInput, AutocompleteLayout, AutocompleteListener,
        AutocompleteOption, AutocompleteView, FocusTarget, Notification, Notifications,
        OptionSource, PointerTarget, Validity, normalize_options,
    };
    pub use crate::borders::RoundedBorder;
    pub use crate::component::{Component, ComponentResult, FocusState};
    pub use crate::key_hints::{KeyHint, KeyHintsBar};
    pub use crate::modal::{Modal, ModalLease, ModalRegistry};
    pub use crate::scroll::ScrollState;
    pub use crate::text_field::TextField;
}

// Re-export roster-core style for convenience
pub use roster_core::style;

/// Roster components version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
