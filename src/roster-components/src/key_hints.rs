//! Key hints bar.
//!
//! Renders `↑↓ Navigate · Enter Select · Esc Close` along the bottom of a
//! dialog, dropping hints from the right when the row is too narrow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use roster_core::style::{ACCENT, SURFACE_1, TEXT_DIM};
use unicode_width::UnicodeWidthStr;

/// A single key hint (key + description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.width() + 1 + self.description.width()
    }
}

impl From<(&str, &str)> for KeyHint {
    fn from((key, desc): (&str, &str)) -> Self {
        Self::new(key, desc)
    }
}

/// A horizontal bar of key hints.
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
    separator: String,
}

impl KeyHintsBar {
    pub fn new() -> Self {
        Self {
            hints: Vec::new(),
            separator: " · ".to_string(),
        }
    }

    /// Build from the `(key, description)` tuples a [`Component`](crate::component::Component) reports.
    pub fn from_tuples(hints: &[(&str, &str)]) -> Self {
        Self::new().hints(hints.iter().map(|&h| h.into()))
    }

    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    pub fn hints(mut self, hints: impl IntoIterator<Item = KeyHint>) -> Self {
        self.hints.extend(hints);
        self
    }

    /// Hints that fit within `max_width`, in order; later hints are dropped first.
    fn hints_that_fit(&self, max_width: usize) -> Vec<&KeyHint> {
        let sep = self.separator.width();
        let mut used = 0;
        let mut result = Vec::new();

        for hint in &self.hints {
            let needed = if result.is_empty() {
                hint.width()
            } else {
                sep + hint.width()
            };
            if used + needed > max_width {
                break;
            }
            used += needed;
            result.push(hint);
        }

        result
    }
}

impl Default for KeyHintsBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }

        let bg = Style::default().bg(SURFACE_1);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), bg);

        let key_style = bg.fg(ACCENT);
        let desc_style = bg.fg(TEXT_DIM);

        let mut x = area.x + 1;
        let right = area.right();
        for (i, hint) in self.hints_that_fit(area.width as usize - 1).into_iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, &self.separator, (right - x) as usize, desc_style).0;
            }
            x = buf.set_stringn(x, area.y, &hint.key, (right - x) as usize, key_style).0;
            x = buf.set_stringn(x, area.y, " ", (right - x) as usize, desc_style).0;
            x = buf
                .set_stringn(x, area.y, &hint.description, (right - x) as usize, desc_style)
                .0;
        }
    }
}
