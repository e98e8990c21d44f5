//! Autocomplete input: a text field with type-ahead suggestions.
//!
//! - [`option`]: the option model and string-or-object normalization
//! - [`matcher`]: exact matching and substring filtering
//! - [`state`]: the [`AutocompleteInput`] state machine
//! - [`notify`]: notifications reported to the caller
//! - [`layout`]: dropdown placement and pointer hit testing
//! - [`view`] and [`dropdown`]: rendering
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use roster_components::autocomplete::{AutocompleteConfig, AutocompleteInput};
//!
//! let mut input = AutocompleteInput::new(options, "", AutocompleteConfig::default());
//! input.focus(Instant::now());
//! for note in input.insert_char('r') {
//!     // Changed("r"), ...
//! }
//! frame.render_widget(input.view(), area);
//! ```

pub mod dropdown;
pub mod layout;
pub mod matcher;
pub mod notify;
pub mod option;
pub mod state;
pub mod view;

pub use dropdown::{AutocompleteDropdown, NO_MATCHES};
pub use layout::{AutocompleteLayout, DropdownPlacement, FocusTarget, PointerTarget};
pub use matcher::{ExactMatch, MAX_FILTERED_OPTIONS, MatchKind, filter_options, find_exact_match};
pub use notify::{AutocompleteListener, Notification, Notifications};
pub use option::{AutocompleteOption, OptionSource, normalize_options};
pub use state::{
    AutocompleteConfig, AutocompleteInput, DEFAULT_BLUR_DELAY, DEFAULT_MAX_VISIBLE_ROWS, Validity,
};
pub use view::AutocompleteView;
