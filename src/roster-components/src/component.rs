//! The field contract shared by form widgets.
//!
//! A form screen holds several fields and only knows them through
//! [`Component`]: it forwards keys and pastes to the active one, moves focus,
//! and collects a field's value once it reports [`ComponentResult::Done`].

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// What a field did with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// Consumed; the form keeps the field active.
    Handled,
    /// Not for this field; the form may use it for its own bindings.
    NotHandled,
    /// The field committed a value.
    Done(T),
    /// The user backed out of the field.
    Cancelled,
}

impl<T> ComponentResult<T> {
    pub fn is_handled(&self) -> bool {
        matches!(self, ComponentResult::Handled | ComponentResult::Done(_))
    }

    /// Committed or cancelled.
    pub fn is_done(&self) -> bool {
        matches!(self, ComponentResult::Done(_) | ComponentResult::Cancelled)
    }
}

/// Focus as a form draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused,
    /// Focused with a suggestion list open.
    Expanded,
}

/// A form field.
///
/// Implementors own their state and draw themselves into the area the form
/// assigns; popups such as a suggestion list may draw outside it.
pub trait Component {
    /// The value a field hands back when it completes.
    type Output;

    fn render(&self, area: Rect, buf: &mut Buffer);

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    fn focus_state(&self) -> FocusState;

    fn set_focus(&mut self, focused: bool);

    /// `(key, action)` pairs for the form's hint bar.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Bracketed paste. Returns false when the field does not take text.
    fn handle_paste(&mut self, _text: &str) -> bool {
        false
    }

    /// Disabled fields are skipped when focus moves.
    fn can_focus(&self) -> bool {
        true
    }
}
