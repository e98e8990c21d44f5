//! Roster Theme - warm amber accents on a slate base.
//!
//! All colors are constants so widgets can use them in `const` contexts and
//! never allocate while rendering.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// BRAND COLORS
// ============================================================

/// Amber - main accent color (focus, highlighted rows, titles)
pub const ACCENT: Color = Color::Rgb(255, 183, 77); // #FFB74D

/// Deep amber - pressed / secondary accent
pub const ACCENT_DEEP: Color = Color::Rgb(230, 145, 40); // #E69128

// ============================================================
// BACKGROUND COLORS
// ============================================================

/// Surface level 0 - modal background
pub const SURFACE_0: Color = Color::Rgb(22, 24, 32); // #161820

/// Surface level 1 - input fields and dropdown rows
pub const SURFACE_1: Color = Color::Rgb(34, 38, 50); // #222632

/// Surface level 2 - highlighted dropdown row
pub const SURFACE_2: Color = Color::Rgb(52, 58, 76); // #343A4C

// ============================================================
// TEXT COLORS
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(240, 240, 245); // #F0F0F5

/// Dimmed text - descriptions, help text
pub const TEXT_DIM: Color = Color::Rgb(150, 156, 175); // #969CAF

/// Muted text - placeholders, separators, disabled content
pub const TEXT_MUTED: Color = Color::Rgb(96, 102, 122); // #60667A

// ============================================================
// SEMANTIC COLORS
// ============================================================

/// Success - the value matches an option
pub const SUCCESS: Color = Color::Rgb(102, 214, 140); // #66D68C

/// Warning - required markers
pub const WARNING: Color = Color::Rgb(255, 209, 102); // #FFD166

/// Error - the value matches nothing
pub const ERROR: Color = Color::Rgb(239, 96, 96); // #EF6060

// ============================================================
// BORDER COLORS
// ============================================================

/// Normal border
pub const BORDER: Color = Color::Rgb(64, 70, 92); // #40465C

/// Focused border
pub const BORDER_FOCUS: Color = ACCENT;

// ============================================================
// GLYPHS
// ============================================================

/// Trailing glyph shown when the input matches an option.
pub const VALID_GLYPH: char = '✓';

/// Trailing glyph shown when the input matches nothing.
pub const INVALID_GLYPH: char = '✗';

/// Marker appended to the label of a required field.
pub const REQUIRED_MARKER: &str = "*";

/// Marker for the dropdown row that equals the current value.
pub const SELECTED_MARKER: char = '•';

/// Marker for the highlighted dropdown row.
pub const HIGHLIGHT_MARKER: char = '›';

// ============================================================
// STYLE HELPERS
// ============================================================

/// Pre-configured styles for the common component states.
///
/// All methods return fresh `Style` values; there is no internal state.
pub struct RosterStyle;

impl RosterStyle {
    /// Field label
    #[inline]
    pub fn label() -> Style {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    }

    /// Text typed into a field
    #[inline]
    pub fn input(focused: bool) -> Style {
        let style = Style::default().fg(TEXT).bg(SURFACE_1);
        if focused {
            style
        } else {
            style.fg(TEXT_DIM)
        }
    }

    /// Placeholder shown in an empty field
    #[inline]
    pub fn placeholder() -> Style {
        Style::default().fg(TEXT_MUTED).bg(SURFACE_1)
    }

    /// Disabled field
    #[inline]
    pub fn disabled() -> Style {
        Style::default()
            .fg(TEXT_MUTED)
            .bg(SURFACE_0)
            .add_modifier(Modifier::DIM)
    }

    /// Cursor cell
    #[inline]
    pub fn cursor() -> Style {
        Style::default().fg(SURFACE_1).bg(ACCENT)
    }

    /// Validity glyph for a matching value
    #[inline]
    pub fn valid() -> Style {
        Style::default().fg(SUCCESS).bg(SURFACE_1)
    }

    /// Validity glyph for a value matching nothing
    #[inline]
    pub fn invalid() -> Style {
        Style::default().fg(ERROR).bg(SURFACE_1)
    }

    /// Required marker next to a label
    #[inline]
    pub fn required() -> Style {
        Style::default().fg(WARNING).add_modifier(Modifier::BOLD)
    }

    /// Help text below a field
    #[inline]
    pub fn help() -> Style {
        Style::default().fg(TEXT_MUTED)
    }

    /// Description panel below a field
    #[inline]
    pub fn description() -> Style {
        Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
    }

    /// Dropdown row background, highlighted or not
    #[inline]
    pub fn row(highlighted: bool) -> Style {
        if highlighted {
            Style::default().fg(ACCENT).bg(SURFACE_2).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).bg(SURFACE_1)
        }
    }

    /// Border, focused or not
    #[inline]
    pub fn border(focused: bool) -> Style {
        Style::default().fg(if focused { BORDER_FOCUS } else { BORDER })
    }

    /// Dialog title
    #[inline]
    pub fn title() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }
}
