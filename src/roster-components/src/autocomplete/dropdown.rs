//! Dropdown panel listing the filtered options.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};
use roster_core::RosterStyle;
use roster_core::style::{HIGHLIGHT_MARKER, SELECTED_MARKER, SUCCESS, TEXT_DIM, TEXT_MUTED};

use super::layout::AutocompleteLayout;
use super::option::AutocompleteOption;
use super::state::AutocompleteInput;
use crate::borders::RoundedBorder;
use crate::scroll::render_scrollbar;

/// Text of the row shown when the typed value matches nothing.
pub const NO_MATCHES: &str = "No matches found";

/// Columns before the option name: highlight marker, selected marker, gap.
const GUTTER: u16 = 3;

/// Renders the open dropdown of an [`AutocompleteInput`] at the rectangle
/// chosen by an [`AutocompleteLayout`].
pub struct AutocompleteDropdown<'a> {
    input: &'a AutocompleteInput,
    layout: AutocompleteLayout,
}

impl<'a> AutocompleteDropdown<'a> {
    pub fn new(input: &'a AutocompleteInput, layout: AutocompleteLayout) -> Self {
        Self { input, layout }
    }

    fn render_row(
        &self,
        option: &AutocompleteOption,
        highlighted: bool,
        current: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let style = RosterStyle::row(highlighted);
        buf.set_style(area, style);

        if highlighted && let Some(cell) = buf.cell_mut((area.x, area.y)) {
            cell.set_char(HIGHLIGHT_MARKER).set_style(style);
        }
        if current && let Some(cell) = buf.cell_mut((area.x + 1, area.y)) {
            cell.set_char(SELECTED_MARKER).set_style(style.fg(SUCCESS));
        }

        if area.width <= GUTTER {
            return;
        }
        let right = area.right();
        let mut x = area.x + GUTTER;
        x = buf
            .set_stringn(x, area.y, &option.name, (right - x) as usize, style)
            .0;

        // Description only when at least a few characters of it fit.
        if let Some(description) = &option.description
            && x + 5 < right
        {
            let sep_style = style.fg(TEXT_MUTED).remove_modifier(Modifier::BOLD);
            x = buf.set_stringn(x, area.y, " - ", (right - x) as usize, sep_style).0;
            let desc_style = style.fg(TEXT_DIM).remove_modifier(Modifier::BOLD);
            buf.set_stringn(x, area.y, description, (right - x) as usize, desc_style);
        }
    }

    fn render_no_matches(area: Rect, buf: &mut Buffer) {
        let style = RosterStyle::row(false).fg(TEXT_MUTED).add_modifier(Modifier::ITALIC);
        buf.set_style(area, style);
        if area.width > GUTTER {
            buf.set_stringn(
                area.x + GUTTER,
                area.y,
                NO_MATCHES,
                (area.width - GUTTER) as usize,
                style,
            );
        }
    }
}

impl Widget for AutocompleteDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dropdown) = self.layout.dropdown else {
            return;
        };
        let dropdown = dropdown.intersection(area);
        if dropdown.height < 3 || dropdown.width < 3 {
            return;
        }

        Clear.render(dropdown, buf);
        let border = RoundedBorder::new().focused(self.input.is_focused());
        let inner = border.inner(dropdown);
        border.render(dropdown, buf);
        buf.set_style(inner, Style::default().bg(roster_core::SURFACE_1));

        if self.input.filtered_len() == 0 {
            Self::render_no_matches(Rect::new(inner.x, inner.y, inner.width, 1), buf);
            return;
        }

        let scroll = self.input.scroll();
        let row_width = if scroll.needs_scrollbar() {
            inner.width.saturating_sub(1)
        } else {
            inner.width
        };

        let rows = self.input.filtered_options().enumerate().skip(self.layout.first_row);
        for (line, (row, option)) in rows.take(self.layout.row_count).enumerate() {
            let y = inner.y + line as u16;
            if y >= inner.bottom() {
                break;
            }
            let highlighted = self.input.highlighted_index() == Some(row);
            let current = self.input.row_is_current(row);
            self.render_row(option, highlighted, current, Rect::new(inner.x, y, row_width, 1), buf);
        }

        if scroll.needs_scrollbar() {
            let bar = Rect::new(inner.right().saturating_sub(1), inner.y, 1, inner.height);
            render_scrollbar(bar, buf, scroll);
        }
    }
}
