//! Notifications reported upward by the autocomplete input.
//!
//! Every handler returns the notifications it produced, in the order they
//! happened. Callers can inspect the list directly or hand it to an
//! [`AutocompleteListener`].

use super::option::AutocompleteOption;

/// One upward report from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Raw text of the field after an edit or auto-correction.
    Changed(String),
    /// A discrete selection. `None` when the value was cleared or matched nothing on blur.
    Selected(Option<AutocompleteOption>),
    /// The matched option changed; carries its description, if any.
    DescriptionFound(Option<String>),
}

/// Ordered notifications produced by a single event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.0.push(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Notification] {
        &self.0
    }

    /// The last `Selected` payload, if the event produced one.
    pub fn selection(&self) -> Option<Option<&AutocompleteOption>> {
        self.0.iter().rev().find_map(|n| match n {
            Notification::Selected(option) => Some(option.as_ref()),
            _ => None,
        })
    }

    /// The option committed by this event, if any.
    pub fn selected_option(&self) -> Option<&AutocompleteOption> {
        self.selection().flatten()
    }

    /// Number of `Selected` notifications, used to check single-fire behaviour.
    pub fn selection_count(&self) -> usize {
        self.0
            .iter()
            .filter(|n| matches!(n, Notification::Selected(_)))
            .count()
    }

    /// The last text reported through `Changed`.
    pub fn last_change(&self) -> Option<&str> {
        self.0.iter().rev().find_map(|n| match n {
            Notification::Changed(value) => Some(value.as_str()),
            _ => None,
        })
    }

    /// Deliver every notification, in order, to `listener`.
    pub fn dispatch<L: AutocompleteListener + ?Sized>(&self, listener: &mut L) {
        for notification in &self.0 {
            match notification {
                Notification::Changed(value) => listener.on_change(value),
                Notification::Selected(option) => listener.on_select(option.as_ref()),
                Notification::DescriptionFound(description) => {
                    listener.on_description_found(description.as_deref())
                }
            }
        }
    }
}

impl Extend<Notification> for Notifications {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notifications {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Notification>> for Notifications {
    fn from(notifications: Vec<Notification>) -> Self {
        Self(notifications)
    }
}

/// Callback-style receiver for [`Notifications::dispatch`].
///
/// All methods default to doing nothing so a listener only implements what
/// it cares about.
pub trait AutocompleteListener {
    fn on_change(&mut self, _value: &str) {}

    fn on_select(&mut self, _option: Option<&AutocompleteOption>) {}

    fn on_description_found(&mut self, _description: Option<&str>) {}
}
