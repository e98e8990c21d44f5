//! Rounded borders for the suggestion list and dialogs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::border::Set as BorderSet;
use ratatui::widgets::{Block, Borders, Widget};
use roster_core::RosterStyle;

/// Rounded border character set used by dropdowns and dialogs.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

/// A rounded, optionally titled border.
#[derive(Clone, Default)]
pub struct RoundedBorder<'a> {
    title: Option<&'a str>,
    focused: bool,
}

impl<'a> RoundedBorder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the ratatui block for this configuration.
    pub fn to_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDER)
            .border_style(RosterStyle::border(self.focused));

        if let Some(title) = self.title {
            block = block
                .title(format!(" {} ", title))
                .title_style(RosterStyle::title());
        }

        block
    }

    /// Area left inside the border.
    pub fn inner(&self, area: Rect) -> Rect {
        self.to_block().inner(area)
    }
}

impl Widget for RoundedBorder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_block().render(area, buf);
    }
}
