//! Viewport over the filtered suggestion rows.
//!
//! Up to twenty rows can match but only `max_visible_rows` are drawn; the
//! window follows the highlight.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};
use roster_core::style::{SURFACE_1, TEXT_MUTED};

/// First row on screen, for `rows` rows shown `height` at a time.
///
/// ```rust
/// use roster_components::scroll::ScrollState;
///
/// let mut scroll = ScrollState::new(20, 8);
/// scroll.ensure_visible(12);
/// assert_eq!(scroll.offset(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    rows: usize,
    height: usize,
    offset: usize,
}

impl ScrollState {
    pub fn new(rows: usize, height: usize) -> Self {
        Self {
            rows,
            height,
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The filter changed; keep the window inside the new row count.
    pub fn set_total(&mut self, rows: usize) {
        self.rows = rows;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Slide the window the least distance that shows `row`.
    pub fn ensure_visible(&mut self, row: usize) {
        if self.height == 0 {
            return;
        }
        let last_shown = self.offset + self.height - 1;
        if row < self.offset {
            self.offset = row;
        } else if row > last_shown {
            self.offset = row + 1 - self.height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.rows > self.height
    }

    /// Rows currently drawn.
    pub fn window(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.rows);
        self.offset.min(end)..end
    }

    fn max_offset(&self) -> usize {
        self.rows.saturating_sub(self.height)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 8)
    }
}

/// Thin track-and-thumb bar along the right edge of `area`.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, scroll: &ScrollState) {
    if !scroll.needs_scrollbar() || area.is_empty() {
        return;
    }

    let mut state = ScrollbarState::new(scroll.max_offset()).position(scroll.offset);
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .track_style(Style::default().fg(SURFACE_1))
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(TEXT_MUTED))
        .render(area, buf, &mut state);
}
