//! Screen geometry of an autocomplete input and its dropdown.
//!
//! The layout is computed once per frame from the input's anchor row and the
//! screen bounds. The same value is then used for rendering and for mapping
//! mouse presses back to [`PointerTarget`]s.

use ratatui::layout::{Position, Rect};

/// Where a pointer press landed, relative to one autocomplete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The text field itself.
    Input,
    /// A dropdown row; the index is into the filtered list, not the screen.
    DropdownRow(usize),
    /// Dropdown chrome: border, scrollbar or the "No matches found" row.
    Dropdown,
    /// Anywhere else.
    Outside,
}

/// Where focus goes when the input blurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Focus stays with the input (e.g. the field was clicked again).
    Input,
    /// Focus moves into the input's own dropdown.
    Dropdown,
    /// Focus moves to something unrelated.
    Outside,
}

impl FocusTarget {
    /// Whether focus remains within the input or its dropdown.
    pub fn is_inside(self) -> bool {
        matches!(self, FocusTarget::Input | FocusTarget::Dropdown)
    }
}

impl From<PointerTarget> for FocusTarget {
    fn from(target: PointerTarget) -> Self {
        match target {
            PointerTarget::Input => FocusTarget::Input,
            PointerTarget::DropdownRow(_) | PointerTarget::Dropdown => FocusTarget::Dropdown,
            PointerTarget::Outside => FocusTarget::Outside,
        }
    }
}

/// Which side of the input the dropdown opens on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownPlacement {
    #[default]
    Below,
    Above,
}

/// Resolved rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocompleteLayout {
    /// The one-row text field.
    pub input: Rect,
    /// Dropdown including its border, when open.
    pub dropdown: Option<Rect>,
    pub placement: DropdownPlacement,
    /// Index of the filtered option drawn on the first dropdown row.
    pub first_row: usize,
    /// Number of option rows drawn.
    pub row_count: usize,
}

impl AutocompleteLayout {
    /// Place the dropdown for `rows` visible rows next to `input`.
    ///
    /// The dropdown goes below the input when it fits inside `screen`, above
    /// when only that side has room, and otherwise on the larger side,
    /// shrunk to fit.
    pub fn compute(input: Rect, screen: Rect, rows: usize, first_row: usize) -> Self {
        if rows == 0 {
            return Self::closed(input);
        }

        let wanted = rows as u16 + 2;
        let room_below = screen.bottom().saturating_sub(input.bottom());
        let room_above = input.y.saturating_sub(screen.y);

        let (placement, height) = if room_below >= wanted {
            (DropdownPlacement::Below, wanted)
        } else if room_above >= wanted {
            (DropdownPlacement::Above, wanted)
        } else if room_below >= room_above {
            (DropdownPlacement::Below, room_below)
        } else {
            (DropdownPlacement::Above, room_above)
        };

        // Border alone with no row is useless.
        if height < 3 {
            return Self::closed(input);
        }

        let y = match placement {
            DropdownPlacement::Below => input.bottom(),
            DropdownPlacement::Above => input.y - height,
        };
        let dropdown = Rect::new(input.x, y, input.width, height);

        Self {
            input,
            dropdown: Some(dropdown),
            placement,
            first_row,
            row_count: (height - 2) as usize,
        }
    }

    /// Slide the drawn window so `highlighted` stays on screen when the
    /// dropdown was shrunk below the scroll height.
    pub fn keep_visible(mut self, highlighted: Option<usize>) -> Self {
        if let Some(row) = highlighted
            && self.row_count > 0
        {
            if row < self.first_row {
                self.first_row = row;
            } else if row >= self.first_row + self.row_count {
                self.first_row = row + 1 - self.row_count;
            }
        }
        self
    }

    /// Layout with no dropdown.
    pub fn closed(input: Rect) -> Self {
        Self {
            input,
            dropdown: None,
            placement: DropdownPlacement::Below,
            first_row: 0,
            row_count: 0,
        }
    }

    /// Area inside the dropdown border.
    pub fn rows_area(&self) -> Option<Rect> {
        self.dropdown.map(|d| {
            Rect::new(
                d.x + 1,
                d.y + 1,
                d.width.saturating_sub(2),
                d.height.saturating_sub(2),
            )
        })
    }

    /// Map a terminal cell to a pointer target.
    ///
    /// `filtered_len` bounds the row hit so a press on an empty row of a
    /// short list counts as dropdown chrome.
    pub fn hit_test(&self, column: u16, row: u16, filtered_len: usize) -> PointerTarget {
        let position = Position::new(column, row);
        if self.input.contains(position) {
            return PointerTarget::Input;
        }

        let Some(dropdown) = self.dropdown else {
            return PointerTarget::Outside;
        };
        if !dropdown.contains(position) {
            return PointerTarget::Outside;
        }

        if let Some(rows) = self.rows_area()
            && rows.contains(position)
        {
            let index = self.first_row + (row - rows.y) as usize;
            if index < filtered_len {
                return PointerTarget::DropdownRow(index);
            }
        }
        PointerTarget::Dropdown
    }
}
