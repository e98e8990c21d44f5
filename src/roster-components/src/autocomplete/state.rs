//! The autocomplete state machine.
//!
//! [`AutocompleteInput`] owns the text, the open/closed flag, the filtered
//! rows and the highlight. It performs no I/O and reads no clock: every
//! time-dependent handler takes the current [`Instant`] so tests can drive
//! the blur grace window deterministically.
//!
//! # Event ordering
//!
//! For a single event the input updates its text first, then recomputes the
//! filter and validity, then reports. `Changed` therefore always leads the
//! notification list of an edit, and a selection reports `Changed`,
//! `DescriptionFound` (when the match moved) and `Selected` in that order.
//!
//! # Blur
//!
//! [`AutocompleteInput::blur`] takes the next focus target when the caller
//! knows it. Focus moving into the dropdown is ignored so the row press that
//! follows can land; focus moving elsewhere closes at once. When the target
//! is unknown the close is deferred by [`AutocompleteConfig::blur_delay`] and
//! carried out by [`AutocompleteInput::tick`].

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::layout::{FocusTarget, PointerTarget};
use super::matcher::{ExactMatch, MAX_FILTERED_OPTIONS, MatchKind, filter_options, find_exact_match};
use super::notify::{Notification, Notifications};
use super::option::AutocompleteOption;
use super::view::AutocompleteView;
use crate::component::{Component, ComponentResult, FocusState};
use crate::scroll::ScrollState;
use crate::text_field::TextField;

/// Default grace window between a blur and the close it causes.
pub const DEFAULT_BLUR_DELAY: Duration = Duration::from_millis(200);

/// Default dropdown viewport height.
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 8;

/// Static configuration of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteConfig {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub required: bool,
    pub disabled: bool,
    /// Show the matched option's description under the field.
    pub show_description_below: bool,
    /// Grace window for deferred blur and the "just selected" flag.
    pub blur_delay: Duration,
    /// Dropdown rows shown at once; the rest scroll.
    pub max_visible_rows: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: None,
            help_text: None,
            required: false,
            disabled: false,
            show_description_below: false,
            blur_delay: DEFAULT_BLUR_DELAY,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }
}

impl AutocompleteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn show_description_below(mut self, show: bool) -> Self {
        self.show_description_below = show;
        self
    }

    pub fn blur_delay(mut self, delay: Duration) -> Self {
        self.blur_delay = delay;
        self
    }

    pub fn max_visible_rows(mut self, rows: usize) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }
}

/// Whether the current text names an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Nothing typed. Neutral: counts as valid, shows no glyph.
    Empty,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        !matches!(self, Validity::Invalid)
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingBlur {
    blurred_at: Instant,
    deadline: Instant,
    suppress: bool,
}

/// How a key was disposed of, before notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyDisposition {
    Consumed,
    Ignored,
    Cancel,
}

/// A text field with type-ahead suggestions drawn from a fixed option set.
#[derive(Debug, Clone)]
pub struct AutocompleteInput {
    config: AutocompleteConfig,
    options: Vec<AutocompleteOption>,
    field: TextField,
    focused: bool,
    is_open: bool,
    /// Indices into `options`; at most [`MAX_FILTERED_OPTIONS`].
    filtered: Vec<usize>,
    /// Index into `filtered`.
    highlighted: Option<usize>,
    scroll: ScrollState,
    matched: Option<ExactMatch>,
    validity: Validity,
    current_description: Option<String>,
    pending_blur: Option<PendingBlur>,
    just_selected_at: Option<Instant>,
    mounted: bool,
    /// Notifications produced through the [`Component`] interface.
    outbox: Notifications,
}

impl AutocompleteInput {
    /// Mount an input with an initial value. Construction reports nothing.
    pub fn new(
        options: Vec<AutocompleteOption>,
        value: impl Into<String>,
        config: AutocompleteConfig,
    ) -> Self {
        let scroll = ScrollState::new(0, config.max_visible_rows);
        let mut input = Self {
            config,
            options,
            field: TextField::new(value),
            focused: false,
            is_open: false,
            filtered: Vec::new(),
            highlighted: None,
            scroll,
            matched: None,
            validity: Validity::Empty,
            current_description: None,
            pending_blur: None,
            just_selected_at: None,
            mounted: true,
            outbox: Notifications::new(),
        };
        input.recompute_match();
        input
    }

    // ------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn value(&self) -> &str {
        self.field.text()
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn options(&self) -> &[AutocompleteOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Filtered rows in display order.
    pub fn filtered_options(&self) -> impl ExactSizeIterator<Item = &AutocompleteOption> + '_ {
        self.filtered.iter().map(|&i| &self.options[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Row of the filtered list under keyboard focus.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether filtered row `row` is the option the text currently names.
    pub fn row_is_current(&self, row: usize) -> bool {
        self.matched
            .is_some_and(|m| self.filtered.get(row) == Some(&m.index))
    }

    /// Number of dropdown rows to draw: option rows up to the viewport
    /// height, one row for "No matches found", or none.
    pub fn dropdown_rows(&self) -> usize {
        if !self.is_open {
            return 0;
        }
        if self.filtered.is_empty() {
            return usize::from(!self.field.is_empty());
        }
        self.filtered.len().min(self.config.max_visible_rows)
    }

    pub fn highlighted_option(&self) -> Option<&AutocompleteOption> {
        self.highlighted
            .and_then(|i| self.filtered.get(i))
            .map(|&i| &self.options[i])
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Option the current text names, through its name or an alias.
    pub fn matched_option(&self) -> Option<&AutocompleteOption> {
        self.matched.map(|m| &self.options[m.index])
    }

    pub fn current_description(&self) -> Option<&str> {
        self.current_description.as_deref()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Whether a deferred blur is waiting for [`tick`](Self::tick).
    pub fn has_pending_blur(&self) -> bool {
        self.pending_blur.is_some()
    }

    /// Drain notifications produced through [`Component::handle_key`] and
    /// [`Component::handle_paste`].
    pub fn take_notifications(&mut self) -> Notifications {
        std::mem::take(&mut self.outbox)
    }

    /// Borrow a renderable view of the current state.
    pub fn view(&self) -> AutocompleteView<'_> {
        AutocompleteView::new(self)
    }

    fn is_interactive(&self) -> bool {
        self.mounted && !self.config.disabled
    }

    // ------------------------------------------------------------
    // Controlled updates
    // ------------------------------------------------------------

    /// Replace the option snapshot.
    pub fn set_options(&mut self, options: Vec<AutocompleteOption>) -> Notifications {
        let mut notes = Notifications::new();
        if !self.mounted {
            return notes;
        }
        let before = self.matched_option().cloned();
        self.options = options;
        self.matched = None;
        self.refresh(before.as_ref(), false, &mut notes);
        notes
    }

    /// Overwrite the text from the caller's side. No `Changed` is reported.
    pub fn set_value(&mut self, value: &str) -> Notifications {
        let mut notes = Notifications::new();
        if !self.mounted {
            return notes;
        }
        let before = self.matched_option().cloned();
        if self.field.set_text(value) {
            self.highlighted = None;
            self.refresh(before.as_ref(), false, &mut notes);
        }
        notes
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.focused = false;
            self.pending_blur = None;
            self.close();
        }
    }

    /// Tear the input down. Pending timers are dropped and every later
    /// handler returns no notifications.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        tracing::debug!(value = %self.value(), "autocomplete unmounted");
        self.mounted = false;
        self.pending_blur = None;
        self.just_selected_at = None;
        self.focused = false;
        self.is_open = false;
        self.highlighted = None;
        self.outbox = Notifications::new();
    }

    // ------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------

    /// Give the input focus and open the dropdown.
    pub fn focus(&mut self, _now: Instant) -> Notifications {
        if !self.is_interactive() {
            return Notifications::new();
        }
        if self.pending_blur.take().is_some() {
            tracing::trace!("focus returned before deferred blur fired");
        }
        self.focused = true;
        self.open();
        Notifications::new()
    }

    /// Report that focus left the text field.
    ///
    /// `next` is where focus went, when known.
    pub fn blur(&mut self, now: Instant, next: Option<FocusTarget>) -> Notifications {
        let mut notes = Notifications::new();
        if !self.is_interactive() || !self.focused {
            return notes;
        }

        match next {
            Some(target) if target.is_inside() => {
                tracing::trace!(?target, "blur into own dropdown ignored");
            }
            Some(_) => {
                self.focused = false;
                self.pending_blur = None;
                let suppress = self.recently_selected(now);
                self.finish_blur(suppress, &mut notes);
            }
            None => {
                self.focused = false;
                let deadline = now + self.config.blur_delay;
                self.pending_blur = Some(PendingBlur {
                    blurred_at: now,
                    deadline,
                    suppress: self.recently_selected(now),
                });
                tracing::trace!(delay_ms = self.config.blur_delay.as_millis() as u64, "blur deferred");
            }
        }
        notes
    }

    /// Advance timers: run a due deferred blur and expire the "just
    /// selected" flag.
    pub fn tick(&mut self, now: Instant) -> Notifications {
        let mut notes = Notifications::new();
        if !self.mounted {
            return notes;
        }

        if let Some(pending) = self.pending_blur
            && now >= pending.deadline
        {
            self.pending_blur = None;
            // A row press between the blur and the deadline also counts.
            let selected_after_blur = self
                .just_selected_at
                .is_some_and(|at| at >= pending.blurred_at);
            self.finish_blur(pending.suppress || selected_after_blur, &mut notes);
        }

        if self.just_selected_at.is_some() && !self.recently_selected(now) && self.pending_blur.is_none() {
            self.just_selected_at = None;
        }
        notes
    }

    fn recently_selected(&self, now: Instant) -> bool {
        self.just_selected_at
            .is_some_and(|at| now < at + self.config.blur_delay)
    }

    fn finish_blur(&mut self, suppress: bool, notes: &mut Notifications) {
        self.close();
        if suppress {
            tracing::debug!("blur right after a selection; not re-selecting");
            return;
        }

        match self.matched {
            Some(ExactMatch {
                index,
                kind: MatchKind::Alias,
            }) => {
                let option = self.options[index].clone();
                tracing::debug!(alias = %self.value(), name = %option.name, "alias corrected on blur");
                let before = self.matched_option().cloned();
                self.field.set_text(&option.name);
                notes.push(Notification::Changed(option.name.clone()));
                self.refresh(before.as_ref(), false, notes);
                notes.push(Notification::Selected(Some(option)));
            }
            Some(ExactMatch { index, .. }) => {
                notes.push(Notification::Selected(Some(self.options[index].clone())));
            }
            None => {
                notes.push(Notification::Selected(None));
            }
        }
    }

    // ------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------

    /// Insert typed text at the cursor.
    pub fn insert_char(&mut self, c: char) -> Notifications {
        let mut notes = Notifications::new();
        if !self.is_interactive() || c.is_control() {
            return notes;
        }
        self.field.insert(c);
        self.after_edit(&mut notes);
        notes
    }

    /// Insert pasted text at the cursor. Newlines are dropped.
    pub fn paste(&mut self, text: &str) -> Notifications {
        let mut notes = Notifications::new();
        if !self.is_interactive() {
            return notes;
        }
        if self.field.insert_str(text) {
            self.after_edit(&mut notes);
        }
        notes
    }

    pub fn backspace(&mut self) -> Notifications {
        let mut notes = Notifications::new();
        if self.is_interactive() && self.field.backspace() {
            self.after_edit(&mut notes);
        }
        notes
    }

    pub fn delete(&mut self) -> Notifications {
        let mut notes = Notifications::new();
        if self.is_interactive() && self.field.delete() {
            self.after_edit(&mut notes);
        }
        notes
    }

    /// Empty the field.
    pub fn clear(&mut self) -> Notifications {
        let mut notes = Notifications::new();
        if self.is_interactive() && self.field.clear() {
            self.after_edit(&mut notes);
        }
        notes
    }

    fn after_edit(&mut self, notes: &mut Notifications) {
        // Typed text is no longer the selection that was just made.
        self.just_selected_at = None;
        notes.push(Notification::Changed(self.value().to_string()));
        let before = self.matched_option().cloned();
        self.highlighted = None;
        if !self.is_open {
            self.open();
        } else {
            self.scroll.reset();
        }
        let cleared = self.field.is_empty();
        self.refresh(before.as_ref(), cleared, notes);
        if cleared {
            notes.push(Notification::Selected(None));
        }
    }

    // ------------------------------------------------------------
    // Navigation and selection
    // ------------------------------------------------------------

    /// Arrow-Down: open when closed, otherwise move the highlight forward.
    pub fn highlight_next(&mut self) {
        if !self.is_interactive() {
            return;
        }
        if !self.is_open {
            self.open();
            return;
        }
        if self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
        self.follow_highlight();
    }

    /// Arrow-Up: open when closed, otherwise move the highlight back. Moving
    /// up from the first row clears the highlight.
    pub fn highlight_prev(&mut self) {
        if !self.is_interactive() {
            return;
        }
        if !self.is_open {
            self.open();
            return;
        }
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        self.follow_highlight();
    }

    /// Enter: commit the highlighted row, if any.
    pub fn commit_highlighted(&mut self, now: Instant) -> Notifications {
        match (self.is_open, self.highlighted) {
            (true, Some(row)) => self.select_row(row, now),
            _ => Notifications::new(),
        }
    }

    /// Commit row `row` of the filtered list.
    pub fn select_row(&mut self, row: usize, now: Instant) -> Notifications {
        let mut notes = Notifications::new();
        if !self.is_interactive() {
            return notes;
        }
        let Some(&index) = self.filtered.get(row) else {
            tracing::warn!(row, rows = self.filtered.len(), "selection outside the filtered list");
            return notes;
        };
        let option = self.options[index].clone();
        let before = self.matched_option().cloned();

        if self.field.set_text(&option.name) {
            notes.push(Notification::Changed(option.name.clone()));
        }
        self.refresh(before.as_ref(), false, &mut notes);
        self.close();
        self.just_selected_at = Some(now);

        tracing::debug!(name = %option.name, value = %option.value, "option selected");
        notes.push(Notification::Selected(Some(option)));
        notes
    }

    /// Escape: close without selecting.
    pub fn dismiss(&mut self) {
        if self.is_interactive() && self.is_open {
            self.close();
        }
    }

    /// A pointer press landed on `target`.
    pub fn pointer_down(&mut self, target: PointerTarget, now: Instant) -> Notifications {
        if !self.is_interactive() {
            return Notifications::new();
        }
        match target {
            PointerTarget::Input => {
                if self.focused && self.is_open {
                    Notifications::new()
                } else {
                    self.focus(now)
                }
            }
            PointerTarget::DropdownRow(row) if self.is_open => {
                self.focused = true;
                self.pending_blur = None;
                self.select_row(row, now)
            }
            PointerTarget::DropdownRow(_) | PointerTarget::Dropdown => Notifications::new(),
            PointerTarget::Outside => {
                if self.is_open {
                    tracing::debug!("pointer outside; closing");
                    self.close();
                }
                Notifications::new()
            }
        }
    }

    /// Route a key press. Returns the notifications it produced.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Notifications {
        self.process_key(key, now).1
    }

    fn process_key(&mut self, key: KeyEvent, now: Instant) -> (KeyDisposition, Notifications) {
        if !self.is_interactive() || key.kind == KeyEventKind::Release {
            return (KeyDisposition::Ignored, Notifications::new());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => {
                if self.is_open {
                    self.dismiss();
                    (KeyDisposition::Consumed, Notifications::new())
                } else {
                    (KeyDisposition::Cancel, Notifications::new())
                }
            }
            KeyCode::Down => {
                self.highlight_next();
                (KeyDisposition::Consumed, Notifications::new())
            }
            KeyCode::Up => {
                self.highlight_prev();
                (KeyDisposition::Consumed, Notifications::new())
            }
            KeyCode::Enter => {
                if self.is_open && self.highlighted.is_some() {
                    (KeyDisposition::Consumed, self.commit_highlighted(now))
                } else {
                    (KeyDisposition::Ignored, Notifications::new())
                }
            }
            KeyCode::Char('u') if ctrl => (KeyDisposition::Consumed, self.clear()),
            KeyCode::Char(c) if !ctrl && !alt => (KeyDisposition::Consumed, self.insert_char(c)),
            KeyCode::Backspace => (KeyDisposition::Consumed, self.backspace()),
            KeyCode::Delete => (KeyDisposition::Consumed, self.delete()),
            KeyCode::Left => {
                self.field.move_left();
                (KeyDisposition::Consumed, Notifications::new())
            }
            KeyCode::Right => {
                self.field.move_right();
                (KeyDisposition::Consumed, Notifications::new())
            }
            KeyCode::Home => {
                self.field.move_home();
                (KeyDisposition::Consumed, Notifications::new())
            }
            KeyCode::End => {
                self.field.move_end();
                (KeyDisposition::Consumed, Notifications::new())
            }
            _ => (KeyDisposition::Ignored, Notifications::new()),
        }
    }

    // ------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------

    fn open(&mut self) {
        if !self.is_open {
            tracing::debug!(value = %self.value(), "dropdown opened");
        }
        self.is_open = true;
        self.highlighted = None;
        self.scroll.reset();
        self.refilter();
    }

    fn close(&mut self) {
        if self.is_open {
            tracing::debug!(value = %self.value(), "dropdown closed");
        }
        self.is_open = false;
        self.highlighted = None;
        self.scroll.reset();
    }

    fn refilter(&mut self) {
        self.filtered = filter_options(&self.options, self.field.text(), MAX_FILTERED_OPTIONS);
        tracing::trace!(value = %self.value(), rows = self.filtered.len(), "filtered options");
        self.scroll.set_total(self.filtered.len());
        if let Some(i) = self.highlighted
            && i >= self.filtered.len()
        {
            self.highlighted = self.filtered.len().checked_sub(1);
        }
    }

    fn follow_highlight(&mut self) {
        match self.highlighted {
            Some(i) => self.scroll.ensure_visible(i),
            None => self.scroll.reset(),
        }
    }

    fn recompute_match(&mut self) {
        self.matched = find_exact_match(&self.options, self.field.text());
        self.validity = if self.field.is_empty() {
            Validity::Empty
        } else if self.matched.is_some() {
            Validity::Valid
        } else {
            Validity::Invalid
        };
        self.current_description = self.matched_option().and_then(|o| o.description.clone());
    }

    /// Recompute derived state after the text or options changed and report
    /// a moved match. `force_description` reports even when the match did
    /// not move.
    fn refresh(
        &mut self,
        before: Option<&AutocompleteOption>,
        force_description: bool,
        notes: &mut Notifications,
    ) {
        if self.is_open {
            self.refilter();
        }
        self.recompute_match();
        if force_description || self.matched_option() != before {
            notes.push(Notification::DescriptionFound(self.current_description.clone()));
        }
    }
}

impl Component for AutocompleteInput {
    type Output = AutocompleteOption;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Widget::render(self.view(), area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<AutocompleteOption> {
        let (disposition, notes) = self.process_key(key, Instant::now());
        let selected = notes.selected_option().cloned();
        self.outbox.extend(notes);

        match (disposition, selected) {
            (_, Some(option)) => ComponentResult::Done(option),
            (KeyDisposition::Cancel, _) => ComponentResult::Cancelled,
            (KeyDisposition::Consumed, _) => ComponentResult::Handled,
            (KeyDisposition::Ignored, _) => ComponentResult::NotHandled,
        }
    }

    fn focus_state(&self) -> FocusState {
        match (self.focused, self.is_open) {
            (false, _) => FocusState::Unfocused,
            (true, false) => FocusState::Focused,
            (true, true) => FocusState::Expanded,
        }
    }

    fn set_focus(&mut self, focused: bool) {
        let now = Instant::now();
        let notes = if focused {
            self.focus(now)
        } else {
            self.blur(now, Some(FocusTarget::Outside))
        };
        self.outbox.extend(notes);
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.is_open {
            vec![("↑↓", "Navigate"), ("Enter", "Select"), ("Esc", "Close")]
        } else {
            vec![("↓", "Suggestions"), ("Esc", "Cancel")]
        }
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        if !self.is_interactive() {
            return false;
        }
        let notes = self.paste(text);
        self.outbox.extend(notes);
        true
    }

    fn can_focus(&self) -> bool {
        self.is_interactive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::notify::Notification::{Changed, DescriptionFound, Selected};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn elements() -> Vec<AutocompleteOption> {
        ["Fire", "Water", "Grass"]
            .into_iter()
            .map(AutocompleteOption::from)
            .collect()
    }

    fn factions() -> Vec<AutocompleteOption> {
        vec![
            AutocompleteOption::new("Nyakuza").with_description("Feline pirates"),
            AutocompleteOption::new("Rangers").with_description("Protect the wilds"),
        ]
    }

    fn mounted(options: Vec<AutocompleteOption>) -> AutocompleteInput {
        AutocompleteInput::new(options, "", AutocompleteConfig::default())
    }

    fn type_str(input: &mut AutocompleteInput, text: &str) -> Notifications {
        let mut all = Notifications::new();
        for c in text.chars() {
            all.extend(input.insert_char(c));
        }
        all
    }

    #[test]
    fn test_construction_is_silent_and_computes_validity() {
        let input = AutocompleteInput::new(factions(), "nyakuza", AutocompleteConfig::default());
        assert_eq!(input.validity(), Validity::Valid);
        assert_eq!(input.current_description(), Some("Feline pirates"));
        assert!(!input.is_open());

        let input = mounted(factions());
        assert_eq!(input.validity(), Validity::Empty);
        assert!(input.is_valid());
    }

    #[test]
    fn test_focus_opens_with_leading_options() {
        let mut input = mounted(elements());
        let notes = input.focus(Instant::now());
        assert!(notes.is_empty());
        assert!(input.is_open());
        assert_eq!(input.filtered_len(), 3);
        assert_eq!(input.highlighted_index(), None);
        assert_eq!(input.focus_state(), FocusState::Expanded);
    }

    #[test]
    fn test_typing_reports_change_first() {
        let mut input = mounted(factions());
        let notes = type_str(&mut input, "Rangers");

        assert_eq!(notes.as_slice()[0], Changed("R".into()));
        assert_eq!(
            &notes.as_slice()[notes.len() - 2..],
            &[
                Changed("Rangers".into()),
                DescriptionFound(Some("Protect the wilds".into())),
            ]
        );
        assert!(input.is_open());
        assert_eq!(input.validity(), Validity::Valid);
    }

    #[test]
    fn test_typing_resets_highlight() {
        let mut input = mounted(elements());
        input.focus(Instant::now());
        input.highlight_next();
        input.highlight_next();
        assert_eq!(input.highlighted_index(), Some(1));

        input.insert_char('a');
        assert_eq!(input.highlighted_index(), None);
    }

    #[test]
    fn test_clearing_resets_description_and_selection() {
        let mut input = AutocompleteInput::new(factions(), "Rangers", AutocompleteConfig::default());
        let notes = input.clear();
        assert_eq!(
            notes.as_slice(),
            [Changed(String::new()), DescriptionFound(None), Selected(None)]
        );
        assert_eq!(input.validity(), Validity::Empty);
        assert_eq!(input.current_description(), None);
    }

    #[test]
    fn test_arrow_down_while_closed_only_opens() {
        let mut input = AutocompleteInput::new(elements(), "r", AutocompleteConfig::default());
        input.highlight_next();
        assert!(input.is_open());
        assert_eq!(input.filtered_len(), 2);
        assert_eq!(input.highlighted_index(), None);
    }

    #[test]
    fn test_highlight_clamps_without_wrapping() {
        let mut input = mounted(elements());
        input.focus(Instant::now());

        input.highlight_prev();
        assert_eq!(input.highlighted_index(), None);

        for _ in 0..5 {
            input.highlight_next();
        }
        assert_eq!(input.highlighted_index(), Some(2));

        input.highlight_prev();
        input.highlight_prev();
        input.highlight_prev();
        assert_eq!(input.highlighted_index(), None);
    }

    #[test]
    fn test_enter_without_highlight_is_noop() {
        let mut input = mounted(elements());
        input.focus(Instant::now());
        let notes = input.on_key(key(KeyCode::Enter), Instant::now());
        assert!(notes.is_empty());
        assert!(input.is_open());
    }

    #[test]
    fn test_escape_closes_without_selecting() {
        let mut input = mounted(elements());
        input.focus(Instant::now());
        input.highlight_next();
        let notes = input.on_key(key(KeyCode::Esc), Instant::now());
        assert!(notes.is_empty());
        assert!(!input.is_open());
        assert_eq!(input.highlighted_index(), None);
    }

    #[test]
    fn test_blur_with_canonical_match_selects() {
        let mut input = mounted(factions());
        let now = Instant::now();
        input.focus(now);
        type_str(&mut input, "NYAKUZA");

        let notes = input.blur(now, Some(FocusTarget::Outside));
        assert_eq!(notes.selection_count(), 1);
        assert_eq!(notes.selected_option().map(|o| o.name.as_str()), Some("Nyakuza"));
        assert_eq!(notes.last_change(), None);
        assert!(!input.is_open());
    }

    #[test]
    fn test_blur_without_match_selects_none() {
        let mut input = mounted(factions());
        let now = Instant::now();
        input.focus(now);
        type_str(&mut input, "Pirates");
        let notes = input.blur(now, Some(FocusTarget::Outside));
        assert_eq!(notes.as_slice(), [Selected(None)]);
        assert_eq!(input.validity(), Validity::Invalid);
    }

    #[test]
    fn test_blur_only_counts_while_focused() {
        let mut input = mounted(elements());
        let now = Instant::now();
        assert!(input.blur(now, Some(FocusTarget::Outside)).is_empty());

        input.focus(now);
        assert_eq!(input.blur(now, Some(FocusTarget::Outside)).as_slice(), [Selected(None)]);
        assert!(input.blur(now, Some(FocusTarget::Outside)).is_empty());
        assert!(input.blur(now, None).is_empty());
        assert!(!input.has_pending_blur());
    }

    #[test]
    fn test_unfocusing_idle_field_reports_nothing() {
        let mut input = AutocompleteInput::new(elements(), "Water", AutocompleteConfig::default());
        input.set_focus(false);
        assert!(input.take_notifications().is_empty());
    }

    #[test]
    fn test_blur_into_dropdown_is_ignored() {
        let mut input = mounted(elements());
        let now = Instant::now();
        input.focus(now);
        let notes = input.blur(now, Some(FocusTarget::Dropdown));
        assert!(notes.is_empty());
        assert!(input.is_open());
        assert!(!input.has_pending_blur());
    }

    #[test]
    fn test_unknown_blur_target_defers_close() {
        let mut input = mounted(elements());
        let start = Instant::now();
        input.focus(start);
        input.blur(start, None);
        assert!(input.is_open());
        assert!(input.has_pending_blur());

        assert!(input.tick(start + Duration::from_millis(100)).is_empty());
        assert!(input.is_open());

        let notes = input.tick(start + DEFAULT_BLUR_DELAY);
        assert_eq!(notes.as_slice(), [Selected(None)]);
        assert!(!input.is_open());
    }

    #[test]
    fn test_refocus_cancels_deferred_blur() {
        let mut input = mounted(elements());
        let start = Instant::now();
        input.focus(start);
        input.blur(start, None);
        input.focus(start + Duration::from_millis(50));
        assert!(!input.has_pending_blur());
        assert!(input.tick(start + Duration::from_secs(1)).is_empty());
        assert!(input.is_open());
    }

    #[test]
    fn test_row_press_after_deferred_blur_selects_once() {
        let mut input = mounted(elements());
        let start = Instant::now();
        input.focus(start);

        let mut all = input.blur(start, None);
        all.extend(input.select_row(1, start + Duration::from_millis(20)));
        all.extend(input.tick(start + Duration::from_millis(250)));

        assert_eq!(all.selection_count(), 1);
        assert_eq!(all.selected_option().map(|o| o.name.as_str()), Some("Water"));
    }

    #[test]
    fn test_configurable_blur_delay() {
        let config = AutocompleteConfig::default().blur_delay(Duration::from_millis(50));
        let mut input = AutocompleteInput::new(elements(), "", config);
        let start = Instant::now();
        input.focus(start);
        input.blur(start, None);
        input.tick(start + Duration::from_millis(50));
        assert!(!input.is_open());
    }

    #[test]
    fn test_set_options_clamps_highlight_and_reports_match() {
        let mut input = mounted(elements());
        input.focus(Instant::now());
        for _ in 0..3 {
            input.highlight_next();
        }
        assert_eq!(input.highlighted_index(), Some(2));

        let notes = input.set_options(vec![AutocompleteOption::new("Fire")]);
        assert!(notes.is_empty());
        assert_eq!(input.highlighted_index(), Some(0));

        input.set_value("Ice");
        let notes = input.set_options(vec![AutocompleteOption::new("Ice").with_description("Cold")]);
        assert_eq!(notes.as_slice(), [DescriptionFound(Some("Cold".into()))]);
        assert_eq!(input.validity(), Validity::Valid);
    }

    #[test]
    fn test_set_value_is_not_reported_as_change() {
        let mut input = mounted(factions());
        let notes = input.set_value("Rangers");
        assert_eq!(notes.as_slice(), [DescriptionFound(Some("Protect the wilds".into()))]);
        assert!(input.set_value("Rangers").is_empty());
    }

    #[test]
    fn test_disabled_ignores_events() {
        let config = AutocompleteConfig::default().disabled(true);
        let mut input = AutocompleteInput::new(elements(), "", config);
        let now = Instant::now();

        assert!(input.focus(now).is_empty());
        assert!(input.insert_char('F').is_empty());
        assert!(input.on_key(key(KeyCode::Down), now).is_empty());
        assert!(input.pointer_down(PointerTarget::Input, now).is_empty());
        assert!(!input.is_open());
        assert_eq!(input.value(), "");
        assert!(!input.can_focus());
    }

    #[test]
    fn test_component_handle_key_reports_done() {
        let mut input = mounted(elements());
        input.set_focus(true);
        input.take_notifications();

        assert_eq!(input.handle_key(key(KeyCode::Down)), ComponentResult::Handled);
        let result = input.handle_key(key(KeyCode::Enter));
        assert_eq!(result, ComponentResult::Done(AutocompleteOption::new("Fire")));

        let notes = input.take_notifications();
        assert_eq!(notes.as_slice()[0], Changed("Fire".into()));
        assert!(input.take_notifications().is_empty());

        assert_eq!(input.handle_key(key(KeyCode::Esc)), ComponentResult::Cancelled);
        assert_eq!(input.handle_key(key(KeyCode::Tab)), ComponentResult::NotHandled);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = AutocompleteInput::new(elements(), "Fire", AutocompleteConfig::default());
        let notes = input.on_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert_eq!(input.value(), "");
        assert_eq!(notes.selection(), Some(None));
    }

    #[test]
    fn test_scroll_follows_highlight() {
        let options: Vec<_> = (0..15)
            .map(|i| AutocompleteOption::new(format!("Berry {i}")))
            .collect();
        let config = AutocompleteConfig::default().max_visible_rows(4);
        let mut input = AutocompleteInput::new(options, "", config);
        input.focus(Instant::now());
        for _ in 0..6 {
            input.highlight_next();
        }
        assert_eq!(input.highlighted_index(), Some(5));
        assert_eq!(input.scroll().offset(), 2);
    }
}
