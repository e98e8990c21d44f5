//! Typed pickers over monster and trainer lists.
//!
//! Each picker adapts its records into autocomplete options, with a
//! decorated display name and the bare name as an alias, so typing
//! "Pikachu" and leaving the field snaps to "Pikachu (Lv. 12, Electric)".
//! Selections come back as record ids instead of options.

use std::time::Instant;

use crossterm::event::KeyEvent;
use roster_components::autocomplete::{
    AutocompleteConfig, AutocompleteInput, AutocompleteOption, AutocompleteView, FocusTarget,
    Notification, Notifications, PointerTarget,
};

use crate::records::{MonsterRecord, RecordId, TrainerRecord};

/// What a picker reports to its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// A record was chosen, or the choice was cleared.
    Selected(Option<RecordId>),
}

/// Display name, value and alias for one monster.
pub fn monster_option(monster: &MonsterRecord) -> AutocompleteOption {
    let mut details = Vec::new();
    if let Some(level) = monster.level {
        details.push(format!("Lv. {level}"));
    }
    let types: Vec<&str> = monster.types().collect();
    if !types.is_empty() {
        details.push(types.join("/"));
    }
    decorated(&monster.name, &details, &monster.id)
}

/// Display name, value, aliases and ownership note for one trainer.
///
/// Besides the bare name, the nickname and the owning player's display and
/// user names all match the trainer.
pub fn trainer_option(trainer: &TrainerRecord, show_ownership: bool) -> AutocompleteOption {
    let mut details: Vec<String> = trainer.level.map(|l| format!("Lv. {l}")).into_iter().collect();
    details.extend(trainer.player().map(str::to_string));
    let mut option = decorated(&trainer.name, &details, &trainer.id);

    let extra = [&trainer.nickname, &trainer.player_display_name, &trainer.player_username]
        .into_iter()
        .filter_map(|alias| alias.as_deref().map(str::trim))
        .filter(|alias| !alias.is_empty());
    for alias in extra {
        if alias != option.name && !option.match_names.iter().any(|m| m == alias) {
            option.match_names.push(alias.to_string());
        }
    }
    if show_ownership {
        option.with_description(if trainer.is_owned {
            "Your Trainer"
        } else {
            "Other Trainer"
        })
    } else {
        option
    }
}

fn decorated(name: &str, details: &[String], id: &RecordId) -> AutocompleteOption {
    if details.is_empty() {
        return AutocompleteOption::new(name).with_value(id.to_string());
    }
    AutocompleteOption::new(format!("{name} ({})", details.join(", ")))
        .with_value(id.to_string())
        .with_match_name(name)
}

/// An autocomplete input whose options stand for records.
#[derive(Debug, Clone)]
pub struct RecordPicker {
    input: AutocompleteInput,
    /// Parallel to the input's options.
    ids: Vec<RecordId>,
    selected: Option<RecordId>,
}

impl RecordPicker {
    fn new(
        entries: Vec<(RecordId, AutocompleteOption)>,
        selected: Option<RecordId>,
        config: AutocompleteConfig,
    ) -> Self {
        let (ids, options): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let selected = selected.filter(|id| ids.contains(id));
        let value = selected
            .as_ref()
            .and_then(|id| ids.iter().position(|i| i == id))
            .map(|i| options[i].name.clone())
            .unwrap_or_default();

        Self {
            input: AutocompleteInput::new(options, value, config),
            ids,
            selected,
        }
    }

    fn replace(&mut self, entries: Vec<(RecordId, AutocompleteOption)>) -> Vec<PickerEvent> {
        let (ids, options): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let kept = self
            .selected
            .as_ref()
            .and_then(|id| ids.iter().position(|i| i == id))
            .map(|i| options[i].name.clone());
        self.ids = ids;

        let mut events = Vec::new();
        self.input.set_options(options);
        match kept {
            Some(name) => {
                // Names are re-rendered, e.g. after a level-up.
                self.input.set_value(&name);
            }
            None if self.selected.is_some() => {
                tracing::debug!(selected = ?self.selected, "selected record disappeared");
                self.selected = None;
                self.input.set_value("");
                events.push(PickerEvent::Selected(None));
            }
            None => {}
        }
        events
    }

    /// The inner input.
    pub fn input(&self) -> &AutocompleteInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut AutocompleteInput {
        &mut self.input
    }

    /// Currently chosen record.
    pub fn selected_id(&self) -> Option<&RecordId> {
        self.selected.as_ref()
    }

    pub fn view(&self) -> AutocompleteView<'_> {
        self.input.view()
    }

    pub fn focus(&mut self, now: Instant) -> Vec<PickerEvent> {
        let notes = self.input.focus(now);
        self.translate(notes)
    }

    pub fn blur(&mut self, now: Instant, next: Option<FocusTarget>) -> Vec<PickerEvent> {
        let notes = self.input.blur(now, next);
        self.translate(notes)
    }

    pub fn tick(&mut self, now: Instant) -> Vec<PickerEvent> {
        let notes = self.input.tick(now);
        self.translate(notes)
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Vec<PickerEvent> {
        let notes = self.input.on_key(key, now);
        self.translate(notes)
    }

    pub fn paste(&mut self, text: &str) -> Vec<PickerEvent> {
        let notes = self.input.paste(text);
        self.translate(notes)
    }

    pub fn pointer_down(&mut self, target: PointerTarget, now: Instant) -> Vec<PickerEvent> {
        let notes = self.input.pointer_down(target, now);
        self.translate(notes)
    }

    pub fn unmount(&mut self) {
        self.input.unmount();
    }

    fn translate(&mut self, notes: Notifications) -> Vec<PickerEvent> {
        let mut events = Vec::new();
        for note in notes {
            let Notification::Selected(option) = note else {
                continue;
            };
            let id = option.and_then(|o| self.id_for_value(&o.value));
            tracing::debug!(id = ?id, "picker selection");
            self.selected = id.clone();
            events.push(PickerEvent::Selected(id));
        }
        events
    }

    fn id_for_value(&self, value: &str) -> Option<RecordId> {
        self.ids.iter().find(|id| id.to_string() == value).cloned()
    }
}

/// Picker over a trainer's monsters.
///
/// Options read `"<Name> (Lv. <level>, <Type1>/<Type2>...)"` with the bare
/// name as an alias; selection reports the monster id.
#[derive(Debug, Clone)]
pub struct MonsterPicker {
    picker: RecordPicker,
}

impl MonsterPicker {
    pub fn new(
        monsters: &[MonsterRecord],
        selected_monster_id: Option<RecordId>,
        config: AutocompleteConfig,
    ) -> Self {
        Self {
            picker: RecordPicker::new(Self::entries(monsters), selected_monster_id, config),
        }
    }

    /// Replace the monster list, keeping the selection when it survives.
    pub fn set_monsters(&mut self, monsters: &[MonsterRecord]) -> Vec<PickerEvent> {
        self.picker.replace(Self::entries(monsters))
    }

    fn entries(monsters: &[MonsterRecord]) -> Vec<(RecordId, AutocompleteOption)> {
        monsters
            .iter()
            .map(|m| (m.id.clone(), monster_option(m)))
            .collect()
    }

    pub fn picker(&self) -> &RecordPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut RecordPicker {
        &mut self.picker
    }
}

/// Picker over trainers.
///
/// Options read `"<Name> (Lv. <level>)"`. With ownership shown, each row
/// notes whether the trainer is the player's own.
#[derive(Debug, Clone)]
pub struct TrainerPicker {
    picker: RecordPicker,
    show_ownership: bool,
}

impl TrainerPicker {
    pub fn new(
        trainers: &[TrainerRecord],
        selected_trainer_id: Option<RecordId>,
        show_ownership: bool,
        config: AutocompleteConfig,
    ) -> Self {
        Self {
            picker: RecordPicker::new(
                Self::entries(trainers, show_ownership),
                selected_trainer_id,
                config,
            ),
            show_ownership,
        }
    }

    pub fn set_trainers(&mut self, trainers: &[TrainerRecord]) -> Vec<PickerEvent> {
        self.picker.replace(Self::entries(trainers, self.show_ownership))
    }

    fn entries(
        trainers: &[TrainerRecord],
        show_ownership: bool,
    ) -> Vec<(RecordId, AutocompleteOption)> {
        trainers
            .iter()
            .map(|t| (t.id.clone(), trainer_option(t, show_ownership)))
            .collect()
    }

    pub fn picker(&self) -> &RecordPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut RecordPicker {
        &mut self.picker
    }
}
