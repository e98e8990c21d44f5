//! Grapheme-aware single-line text buffer.
//!
//! [`TextField`] owns the text and cursor of an input box. It knows nothing
//! about options or matching; the autocomplete state machine drives it and
//! decides what each edit means.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Text plus a cursor measured in graphemes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    /// Create a field holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.graphemes(true).count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in graphemes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> usize {
        let byte = self.byte_offset(self.cursor);
        self.text[..byte].width()
    }

    /// Replace the whole text, moving the cursor to the end.
    ///
    /// Returns false when the text was already equal.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            self.cursor = self.grapheme_len();
            return false;
        }
        self.text = text.to_string();
        self.cursor = self.grapheme_len();
        true
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte = self.byte_offset(self.cursor);
        self.text.insert(byte, c);
        // A combining mark merges into the previous grapheme.
        self.cursor = self.text[..byte + c.len_utf8()].graphemes(true).count();
    }

    /// Insert a string at the cursor (paste). Newlines are dropped.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let clean: String = s.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if clean.is_empty() {
            return false;
        }
        let byte = self.byte_offset(self.cursor);
        self.text.insert_str(byte, &clean);
        self.cursor = self.text[..byte + clean.len()].graphemes(true).count();
        true
    }

    /// Delete the grapheme before the cursor. Returns true if text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the grapheme at the cursor. Returns true if text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.grapheme_len() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    /// Remove everything. Returns true if text changed.
    pub fn clear(&mut self) -> bool {
        self.cursor = 0;
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.grapheme_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_len();
    }

    fn grapheme_len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_offset(&self, grapheme_idx: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
