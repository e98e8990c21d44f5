//! `roster pick` - interactive autocomplete picker.
//!
//! Draws a modal with one autocomplete field on stderr, so stdout stays
//! free for the JSON result:
//!
//! ```text
//! roster pick --catalog natures > nature.json
//! ```
//!
//! Exit status is 1 when the user cancels.

use std::io::{IsTerminal, Stderr, stderr};
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use roster_catalog::{
    MonsterPicker, PickerEvent, RecordId, RecordPicker, TrainerPicker, load_monsters,
    load_trainers,
};
use roster_components::autocomplete::{
    AutocompleteConfig, AutocompleteInput, AutocompleteLayout, AutocompleteOption, FocusTarget,
    Notifications, PointerTarget,
};
use roster_components::component::Component;
use roster_components::modal::{Modal, ModalLease, ModalRegistry};
use serde::Serialize;

use crate::cli::args::SourceArgs;
use crate::config::RosterConfig;
use crate::source::Source;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Pick CLI command.
#[derive(Debug, Parser)]
pub struct PickCli {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Field label (defaults to the source's name)
    #[arg(long)]
    pub label: Option<String>,

    /// Initial text in the field
    #[arg(long)]
    pub value: Option<String>,

    /// Id of the initially selected monster or trainer
    #[arg(long, value_name = "ID")]
    pub selected: Option<String>,

    /// Placeholder shown while the field is empty
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Help line under the field
    #[arg(long = "help-text")]
    pub help_text: Option<String>,

    /// Show the matched option's description under the field
    #[arg(long = "show-description")]
    pub show_description: bool,

    /// Mark the field as required
    #[arg(long)]
    pub required: bool,

    /// Note whether each trainer is your own
    #[arg(long = "show-ownership")]
    pub show_ownership: bool,
}

/// A committed choice, printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    #[serde(flatten)]
    pub option: AutocompleteOption,
    /// Record id for monster and trainer sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

/// How the picker ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(Selection),
    Cancelled,
}

/// The field behind the picker.
#[derive(Debug)]
pub enum PickTarget {
    Options(AutocompleteInput),
    Monsters(MonsterPicker),
    Trainers(TrainerPicker),
}

/// One thing that can happen to the field.
#[derive(Debug, Clone)]
enum Action {
    Focus,
    Key(KeyEvent),
    Paste(String),
    Pointer(PointerTarget),
    Blur(Option<FocusTarget>),
    Tick,
}

impl PickTarget {
    pub fn input(&self) -> &AutocompleteInput {
        match self {
            PickTarget::Options(input) => input,
            PickTarget::Monsters(picker) => picker.picker().input(),
            PickTarget::Trainers(picker) => picker.picker().input(),
        }
    }

    fn perform(&mut self, action: Action, now: Instant) -> Option<Selection> {
        match self {
            PickTarget::Options(input) => {
                let notes = match action {
                    Action::Focus => input.focus(now),
                    Action::Key(key) => input.on_key(key, now),
                    Action::Paste(text) => input.paste(&text),
                    Action::Pointer(target) => input.pointer_down(target, now),
                    Action::Blur(next) => input.blur(now, next),
                    Action::Tick => input.tick(now),
                };
                selection_from_notes(&notes)
            }
            PickTarget::Monsters(picker) => perform_record(picker.picker_mut(), action, now),
            PickTarget::Trainers(picker) => perform_record(picker.picker_mut(), action, now),
        }
    }
}

fn selection_from_notes(notes: &Notifications) -> Option<Selection> {
    notes.selected_option().map(|option| Selection {
        option: option.clone(),
        id: None,
    })
}

fn perform_record(picker: &mut RecordPicker, action: Action, now: Instant) -> Option<Selection> {
    let events = match action {
        Action::Focus => picker.focus(now),
        Action::Key(key) => picker.on_key(key, now),
        Action::Paste(text) => picker.paste(&text),
        Action::Pointer(target) => picker.pointer_down(target, now),
        Action::Blur(next) => picker.blur(now, next),
        Action::Tick => picker.tick(now),
    };
    let id = events
        .into_iter()
        .rev()
        .map(|PickerEvent::Selected(id)| id)
        .next()
        .flatten()?;
    let option = picker.input().matched_option()?.clone();
    Some(Selection {
        option,
        id: Some(id),
    })
}

/// Modal picker state, independent of the terminal.
pub struct PickScreen {
    title: String,
    target: PickTarget,
    lease: ModalLease,
    layout: Option<AutocompleteLayout>,
}

impl PickScreen {
    pub fn new(
        title: impl Into<String>,
        target: PickTarget,
        registry: &ModalRegistry,
        now: Instant,
    ) -> Self {
        let lease = registry.acquire();
        tracing::debug!(z_index = lease.z_index(), "picker modal mounted");
        let mut screen = Self {
            title: title.into(),
            target,
            lease,
            layout: None,
        };
        screen.target.perform(Action::Focus, now);
        screen
    }

    pub fn target(&self) -> &PickTarget {
        &self.target
    }

    /// Field geometry from the last render.
    pub fn layout(&self) -> Option<&AutocompleteLayout> {
        self.layout.as_ref()
    }

    pub fn z_index(&self) -> u32 {
        self.lease.z_index()
    }

    fn modal(&self) -> Modal<'_> {
        let input = self.target.input();
        let mut hints = input.key_hints();
        hints.push(("Tab", "Confirm"));
        let dropdown_rows = input.config().max_visible_rows.min(64) as u16 + 2;
        Modal::new(&self.title)
            .width_percent(60)
            .height(input.view().height() + dropdown_rows + 3)
            .key_hints(hints)
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let modal = self.modal();
        let inner = modal.inner(area);
        modal.render(area, buf);

        let view = self.target.input().view().screen(area);
        let field = Rect {
            height: view.height().min(inner.height),
            ..inner
        };
        self.layout = Some(view.layout(field, area));
        view.render(field, buf);
    }

    /// Route one terminal event. Returns how the picker ended, if it did.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Option<PickOutcome> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key, now),
            Event::Paste(text) => self
                .target
                .perform(Action::Paste(text), now)
                .map(PickOutcome::Selected),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::FocusLost => {
                self.target.perform(Action::Blur(None), now);
                None
            }
            Event::FocusGained => {
                self.target.perform(Action::Focus, now);
                None
            }
            _ => None,
        }
    }

    /// Fire any deferred blur that is due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(selection) = self.target.perform(Action::Tick, now) {
            tracing::debug!(value = %selection.option.value, "committed while unfocused");
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<PickOutcome> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(PickOutcome::Cancelled);
        }

        let input = self.target.input();
        let is_open = input.is_open();
        let row_highlighted = is_open && input.highlighted_index().is_some();
        match key.code {
            KeyCode::Esc if !is_open => Some(PickOutcome::Cancelled),
            KeyCode::Tab => self.confirm(now),
            KeyCode::Enter if !row_highlighted => self.confirm(now),
            _ => self
                .target
                .perform(Action::Key(key), now)
                .map(PickOutcome::Selected),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<PickOutcome> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let filtered = self.target.input().filtered_len();
                let target = self
                    .layout
                    .map(|layout| layout.hit_test(mouse.column, mouse.row, filtered))
                    .unwrap_or(PointerTarget::Outside);
                self.target
                    .perform(Action::Pointer(target), now)
                    .map(PickOutcome::Selected)
            }
            MouseEventKind::ScrollDown if self.target.input().is_open() => self
                .target
                .perform(Action::Key(KeyEvent::from(KeyCode::Down)), now)
                .map(PickOutcome::Selected),
            MouseEventKind::ScrollUp if self.target.input().is_open() => self
                .target
                .perform(Action::Key(KeyEvent::from(KeyCode::Up)), now)
                .map(PickOutcome::Selected),
            _ => None,
        }
    }

    /// Commit the typed text as if focus left the field.
    fn confirm(&mut self, now: Instant) -> Option<PickOutcome> {
        // The terminal may have reported focus loss; a blur only counts from focus.
        if !self.target.input().is_focused() {
            self.target.perform(Action::Focus, now);
        }
        if let Some(selection) = self.target.perform(Action::Blur(Some(FocusTarget::Outside)), now) {
            return Some(PickOutcome::Selected(selection));
        }
        tracing::debug!(value = %self.target.input().value(), "nothing to confirm");
        self.target.perform(Action::Focus, now);
        None
    }
}

impl PickCli {
    pub fn run(self, config: &RosterConfig) -> Result<ExitCode> {
        let source = Source::from_args(&self.source)?;
        let label = self.label.clone().unwrap_or_else(|| source.default_label());
        let target = self.build_target(&source, config, &label)?;

        if !stderr().is_terminal() {
            bail!("roster pick needs an interactive terminal; try `roster match` instead");
        }

        let registry = ModalRegistry::new();
        let mut screen = PickScreen::new(format!("Select {label}"), target, &registry, Instant::now());
        let outcome = run_terminal(&mut screen)?;

        match outcome {
            PickOutcome::Selected(selection) => {
                tracing::info!(value = %selection.option.value, "picked");
                println!("{}", serde_json::to_string_pretty(&selection)?);
                Ok(ExitCode::SUCCESS)
            }
            PickOutcome::Cancelled => {
                tracing::info!("pick cancelled");
                Ok(ExitCode::from(1))
            }
        }
    }

    fn input_config(&self, config: &RosterConfig, label: &str) -> AutocompleteConfig {
        let mut input = config
            .autocomplete_config()
            .label(label)
            .required(self.required);
        if self.show_description {
            input = input.show_description_below(true);
        }
        if let Some(placeholder) = &self.placeholder {
            input = input.placeholder(placeholder);
        }
        if let Some(help) = &self.help_text {
            input = input.help_text(help);
        }
        input
    }

    fn build_target(&self, source: &Source, config: &RosterConfig, label: &str) -> Result<PickTarget> {
        let input_config = self.input_config(config, label);
        let selected = self.selected.as_deref().map(RecordId::parse);
        let value = self.value.as_deref().unwrap_or("");

        let mut target = match source {
            Source::Monsters(path) => {
                let monsters = load_monsters(path).with_context(|| load_failed("monsters", path))?;
                PickTarget::Monsters(MonsterPicker::new(&monsters, selected, input_config))
            }
            Source::Trainers(path) => {
                let trainers = load_trainers(path).with_context(|| load_failed("trainers", path))?;
                PickTarget::Trainers(TrainerPicker::new(
                    &trainers,
                    selected,
                    self.show_ownership,
                    input_config,
                ))
            }
            Source::Options(_) | Source::Catalog(_) => {
                let options = source.load_options(self.show_ownership)?;
                PickTarget::Options(AutocompleteInput::new(options, value, input_config))
            }
        };

        if !value.is_empty() {
            match &mut target {
                PickTarget::Monsters(picker) if picker.picker().selected_id().is_none() => {
                    picker.picker_mut().input_mut().set_value(value);
                }
                PickTarget::Trainers(picker) if picker.picker().selected_id().is_none() => {
                    picker.picker_mut().input_mut().set_value(value);
                }
                _ => {}
            }
        }
        Ok(target)
    }
}

fn load_failed(what: &str, path: &Path) -> String {
    format!("Failed to load {what} from {}", path.display())
}

fn run_terminal(screen: &mut PickScreen) -> Result<PickOutcome> {
    crossterm::terminal::enable_raw_mode()?;
    let mut err = stderr();
    crossterm::execute!(
        err,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange,
    )?;

    let backend = CrosstermBackend::new(err);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, screen);

    // Cleanup
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        DisableFocusChange,
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    screen: &mut PickScreen,
) -> Result<PickOutcome> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            screen.render(area, f.buffer_mut());
        })?;

        if event::poll(POLL_INTERVAL)?
            && let Some(outcome) = screen.handle_event(event::read()?, Instant::now())
        {
            return Ok(outcome);
        }
        screen.tick(Instant::now());
    }
}
