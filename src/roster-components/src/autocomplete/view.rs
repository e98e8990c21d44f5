//! Field rendering: label, text box, validity glyph, description and help.
//!
//! ```text
//! Faction *
//! Nyak█                                ✗
//! ╭──────────────────────────────────────╮
//! │› Nyakuza - Feline pirates            │   (dropdown overlays what follows)
//! ╰──────────────────────────────────────╯
//! Feline pirates out of Pirate's Bay        (description panel)
//! Pick the faction your trainer serves      (help text)
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use roster_core::RosterStyle;
use roster_core::style::{INVALID_GLYPH, REQUIRED_MARKER, VALID_GLYPH};
use unicode_width::UnicodeWidthChar;

use super::dropdown::AutocompleteDropdown;
use super::layout::AutocompleteLayout;
use super::state::{AutocompleteInput, Validity};

/// Renderable borrow of an [`AutocompleteInput`].
///
/// The dropdown is drawn last so it overlays the rows below the field. It
/// may extend past the area given to `render`, up to the `screen` bounds
/// (the whole buffer unless set).
pub struct AutocompleteView<'a> {
    input: &'a AutocompleteInput,
    screen: Option<Rect>,
}

impl<'a> AutocompleteView<'a> {
    pub fn new(input: &'a AutocompleteInput) -> Self {
        Self {
            input,
            screen: None,
        }
    }

    /// Bounds the dropdown may occupy.
    pub fn screen(mut self, screen: Rect) -> Self {
        self.screen = Some(screen);
        self
    }

    fn label_rows(&self) -> u16 {
        u16::from(self.input.config().label.is_some())
    }

    fn description_below(&self) -> Option<&'a str> {
        if self.input.config().show_description_below {
            self.input.current_description()
        } else {
            None
        }
    }

    /// Rows the field needs, not counting the dropdown.
    pub fn height(&self) -> u16 {
        let config = self.input.config();
        self.label_rows()
            + 1
            + u16::from(self.description_below().is_some())
            + u16::from(config.help_text.is_some())
    }

    /// The text box row inside `area`.
    pub fn input_area(&self, area: Rect) -> Rect {
        Rect::new(area.x, area.y + self.label_rows(), area.width, 1).intersection(area)
    }

    /// Geometry of this frame, for rendering and hit testing.
    pub fn layout(&self, area: Rect, screen: Rect) -> AutocompleteLayout {
        AutocompleteLayout::compute(
            self.input_area(area),
            screen,
            self.input.dropdown_rows(),
            self.input.scroll().offset(),
        )
        .keep_visible(self.input.highlighted_index())
    }

    fn render_label(&self, area: Rect, buf: &mut Buffer) {
        let Some(label) = &self.input.config().label else {
            return;
        };
        let right = area.right();
        let x = buf
            .set_stringn(area.x, area.y, label, area.width as usize, RosterStyle::label())
            .0;
        if self.input.config().required && x + 1 < right {
            buf.set_stringn(x + 1, area.y, REQUIRED_MARKER, (right - x - 1) as usize, RosterStyle::required());
        }
    }

    fn render_text_box(&self, area: Rect, buf: &mut Buffer) {
        let disabled = self.input.is_disabled();
        let focused = self.input.is_focused();
        let base = if disabled {
            RosterStyle::disabled()
        } else {
            RosterStyle::input(focused)
        };
        buf.set_style(area, base);

        // One column on the right is reserved for the validity glyph.
        let text_width = area.width.saturating_sub(2) as usize;
        let field = self.input.field();

        if field.is_empty() {
            if let Some(placeholder) = &self.input.config().placeholder {
                let style = if disabled { base } else { RosterStyle::placeholder() };
                buf.set_stringn(area.x, area.y, placeholder, text_width, style);
            }
        } else {
            // Scroll horizontally so the cursor stays on screen.
            let cursor_col = field.cursor_column();
            let skip = cursor_col.saturating_sub(text_width.saturating_sub(1));
            let visible = skip_columns(field.text(), skip);
            buf.set_stringn(area.x, area.y, visible, text_width, base);
        }

        if focused && !disabled {
            let col = field.cursor_column().min(text_width.saturating_sub(1)) as u16;
            if let Some(cell) = buf.cell_mut((area.x + col, area.y)) {
                cell.set_style(RosterStyle::cursor());
            }
        }

        let glyph = match self.input.validity() {
            Validity::Empty => None,
            Validity::Valid => Some((VALID_GLYPH, RosterStyle::valid())),
            Validity::Invalid => Some((INVALID_GLYPH, RosterStyle::invalid())),
        };
        if let Some((glyph, style)) = glyph
            && area.width >= 2
            && let Some(cell) = buf.cell_mut((area.right() - 1, area.y))
        {
            cell.set_char(glyph).set_style(style);
        }
    }
}

/// Suffix of `text` after dropping `columns` display columns.
fn skip_columns(text: &str, columns: usize) -> &str {
    if columns == 0 {
        return text;
    }
    let mut width = 0;
    for (byte, ch) in text.char_indices() {
        if width >= columns {
            return &text[byte..];
        }
        width += ch.width().unwrap_or(0);
    }
    ""
}

impl Widget for AutocompleteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut y = area.y;

        if self.label_rows() > 0 {
            self.render_label(Rect::new(area.x, y, area.width, 1), buf);
            y += 1;
        }

        if y >= area.bottom() {
            return;
        }
        self.render_text_box(Rect::new(area.x, y, area.width, 1), buf);
        y += 1;

        if let Some(description) = self.description_below()
            && y < area.bottom()
        {
            buf.set_stringn(area.x, y, description, area.width as usize, RosterStyle::description());
            y += 1;
        }

        if let Some(help) = &self.input.config().help_text
            && y < area.bottom()
        {
            buf.set_stringn(area.x, y, help, area.width as usize, RosterStyle::help());
        }

        let screen = self.screen.unwrap_or(buf.area);
        let layout = self.layout(area, screen);
        AutocompleteDropdown::new(self.input, layout).render(screen, buf);
    }
}
