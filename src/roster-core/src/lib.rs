//! # Roster Core
//!
//! Shared visual identity for the Roster terminal components.
//!
//! Every component in `roster-components` pulls its colors and glyphs from
//! [`style`], so a form built from several autocomplete inputs, a modal and a
//! key hints bar reads as one surface.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │ roster-cli (picker screen, commands)      │
//! ├───────────────────────────────────────────┤
//! │ roster-catalog (records, typed pickers)   │
//! ├───────────────────────────────────────────┤
//! │ roster-components (autocomplete, modal)   │
//! ├───────────────────────────────────────────┤
//! │ roster-core (colors, glyphs, styles)      │
//! └───────────────────────────────────────────┘
//! ```

pub mod style;

pub use style::{
    ACCENT, BORDER, BORDER_FOCUS, ERROR, RosterStyle, SUCCESS, SURFACE_0, SURFACE_1, SURFACE_2,
    TEXT, TEXT_DIM, TEXT_MUTED, WARNING,
};

/// Roster Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
