//! Behavioural tests for the autocomplete input, driven through its public
//! handlers the way a screen would drive it.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use roster_components::autocomplete::{
    AutocompleteConfig, AutocompleteInput, AutocompleteListener, AutocompleteOption, FocusTarget,
    MAX_FILTERED_OPTIONS, Notification, Notifications, PointerTarget, Validity,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn options(names: &[&str]) -> Vec<AutocompleteOption> {
    names.iter().map(|&n| AutocompleteOption::from(n)).collect()
}

fn input_with(options: Vec<AutocompleteOption>) -> AutocompleteInput {
    AutocompleteInput::new(options, "", AutocompleteConfig::default())
}

fn type_text(input: &mut AutocompleteInput, text: &str, now: Instant) -> Notifications {
    let mut notes = Notifications::new();
    for c in text.chars() {
        notes.extend(input.on_key(key(KeyCode::Char(c)), now));
    }
    notes
}

fn filtered_names(input: &AutocompleteInput) -> Vec<String> {
    input.filtered_options().map(|o| o.name.clone()).collect()
}

// ============================================================================
// FILTERING
// ============================================================================

mod filtering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_never_exceeds_cap() {
        let many: Vec<_> = (0..60)
            .map(|i| AutocompleteOption::new(format!("Trainer {i}")))
            .collect();
        let mut input = input_with(many);
        let now = Instant::now();
        input.focus(now);
        assert_eq!(input.filtered_len(), MAX_FILTERED_OPTIONS);

        for query in ["t", "trainer", "1", "5", "59", "zzz"] {
            input.clear();
            type_text(&mut input, query, now);
            assert!(
                input.filtered_len() <= MAX_FILTERED_OPTIONS,
                "query {query:?} produced {} rows",
                input.filtered_len()
            );
        }
    }

    #[test]
    fn test_filter_respects_match_count() {
        let mut input = input_with(options(&["Fire", "Water", "Grass", "Electric"]));
        let now = Instant::now();
        input.focus(now);
        type_text(&mut input, "ter", now);
        assert_eq!(filtered_names(&input), vec!["Water"]);
    }

    #[test]
    fn test_filter_matches_aliases_but_shows_names() {
        let mut input = input_with(vec![
            AutocompleteOption::new("Sparky (Lv. 14, Electric)").with_match_name("Pikachu"),
            AutocompleteOption::new("Bulbasaur (Lv. 5, Grass/Poison)").with_match_name("Bulbasaur"),
        ]);
        let now = Instant::now();
        input.focus(now);
        type_text(&mut input, "pika", now);
        assert_eq!(filtered_names(&input), vec!["Sparky (Lv. 14, Electric)"]);
    }
}

// ============================================================================
// MATCHING AND BLUR
// ============================================================================

mod blur {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_insensitive_exact_match_on_blur() {
        let mut input = input_with(options(&["Pikachu", "Raichu"]));
        let now = Instant::now();
        input.focus(now);
        type_text(&mut input, "PIKACHU", now);

        assert!(input.is_valid());
        let notes = input.blur(now, Some(FocusTarget::Outside));
        assert_eq!(
            notes.as_slice(),
            &[Notification::Selected(Some(AutocompleteOption::new("Pikachu")))]
        );
    }

    #[test]
    fn test_alias_is_canonicalized_on_blur() {
        let pikachu = AutocompleteOption::new("Pikachu (Lv. 12, Electric)").with_match_name("Pikachu");
        let mut input = input_with(vec![pikachu.clone()]);
        let now = Instant::now();
        input.focus(now);
        type_text(&mut input, "pikachu", now);

        let notes = input.blur(now, Some(FocusTarget::Outside));
        assert_eq!(
            notes.as_slice(),
            &[
                Notification::Changed("Pikachu (Lv. 12, Electric)".to_string()),
                Notification::Selected(Some(pikachu)),
            ]
        );
        assert_eq!(input.value(), "Pikachu (Lv. 12, Electric)");
        assert_eq!(input.validity(), Validity::Valid);
    }

    #[test]
    fn test_alias_is_canonicalized_after_deferred_blur() {
        let pikachu = AutocompleteOption::new("Pikachu (Lv. 12, Electric)").with_match_name("Pikachu");
        let mut input = input_with(vec![pikachu]);
        let start = Instant::now();
        input.focus(start);
        type_text(&mut input, "Pikachu", start);

        assert!(input.blur(start, None).is_empty());
        let notes = input.tick(start + Duration::from_millis(200));
        assert_eq!(notes.last_change(), Some("Pikachu (Lv. 12, Electric)"));
        assert_eq!(notes.selection_count(), 1);
    }

    #[test]
    fn test_edit_after_selection_is_judged_on_blur() {
        let mut input = input_with(options(&["Fire", "Water", "Grass"]));
        let start = Instant::now();
        input.focus(start);
        input.on_key(key(KeyCode::Down), start);
        let picked = input.on_key(key(KeyCode::Enter), start);
        assert_eq!(picked.selection(), Some(Some(&AutocompleteOption::new("Fire"))));

        type_text(&mut input, "x", start + Duration::from_millis(20));
        assert_eq!(input.validity(), Validity::Invalid);

        let notes = input.blur(start + Duration::from_millis(50), Some(FocusTarget::Outside));
        assert_eq!(input.value(), "Firex");
        assert_eq!(notes.as_slice(), &[Notification::Selected(None)]);
    }

    #[test]
    fn test_blur_reports_once_per_focus() {
        let mut input = input_with(options(&["Fire", "Water"]));
        let now = Instant::now();
        assert!(input.blur(now, Some(FocusTarget::Outside)).is_empty());

        input.focus(now);
        type_text(&mut input, "water", now);
        let first = input.blur(now, Some(FocusTarget::Outside));
        let second = input.blur(now, Some(FocusTarget::Outside));
        assert_eq!(first.selection_count(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_empty_value_reset() {
        let mut input = AutocompleteInput::new(
            vec![AutocompleteOption::new("League").with_description("Gyms and tournaments")],
            "League",
            AutocompleteConfig::default(),
        );
        assert_eq!(input.current_description(), Some("Gyms and tournaments"));

        let now = Instant::now();
        input.focus(now);
        let mut notes = Notifications::new();
        for _ in 0.."League".len() {
            notes.extend(input.on_key(key(KeyCode::Backspace), now));
        }

        assert_eq!(input.value(), "");
        assert!(input.is_valid());
        assert_eq!(input.validity(), Validity::Empty);
        assert_eq!(input.current_description(), None);
        assert!(notes.iter().any(|n| *n == Notification::DescriptionFound(None)));
        assert_eq!(notes.selection(), Some(None));
    }
}

// ============================================================================
// KEYBOARD
// ============================================================================

mod keyboard {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_down_down_enter_selects_second_row() {
        let mut input = input_with(options(&["Alpha", "Beta", "Gamma"]));
        let now = Instant::now();
        input.focus(now);

        let mut notes = input.on_key(key(KeyCode::Down), now);
        notes.extend(input.on_key(key(KeyCode::Down), now));
        notes.extend(input.on_key(key(KeyCode::Enter), now));

        assert_eq!(notes.selection_count(), 1);
        assert_eq!(notes.selected_option(), Some(&AutocompleteOption::new("Beta")));
        assert!(!input.is_open());
        assert_eq!(input.value(), "Beta");
    }

    #[test]
    fn test_no_wraparound() {
        let mut input = input_with(options(&["Alpha", "Beta", "Gamma"]));
        let now = Instant::now();
        input.focus(now);

        input.on_key(key(KeyCode::Up), now);
        assert_eq!(input.highlighted_index(), None);

        for _ in 0..3 {
            input.on_key(key(KeyCode::Down), now);
        }
        assert_eq!(input.highlighted_index(), Some(2));
        input.on_key(key(KeyCode::Down), now);
        assert_eq!(input.highlighted_index(), Some(2));
    }

    #[test]
    fn test_typing_reopens_after_escape() {
        let mut input = input_with(options(&["Alpha", "Beta"]));
        let now = Instant::now();
        input.focus(now);
        input.on_key(key(KeyCode::Esc), now);
        assert!(!input.is_open());

        let notes = input.on_key(key(KeyCode::Char('b')), now);
        assert_eq!(notes.as_slice()[0], Notification::Changed("b".into()));
        assert!(input.is_open());
        assert_eq!(filtered_names(&input), vec!["Beta"]);
    }

    #[test]
    fn test_fire_water_grass_scenario() {
        let mut input = input_with(options(&["Fire", "Water", "Grass"]));
        let now = Instant::now();
        input.focus(now);

        let typed = type_text(&mut input, "r", now);
        assert_eq!(typed.as_slice()[0], Notification::Changed("r".into()));
        assert_eq!(filtered_names(&input), vec!["Fire", "Grass"]);

        input.on_key(key(KeyCode::Down), now);
        let notes = input.on_key(key(KeyCode::Enter), now);

        let changed = notes
            .iter()
            .position(|n| *n == Notification::Changed("Fire".into()))
            .expect("Changed(Fire) reported");
        let selected = notes
            .iter()
            .position(|n| *n == Notification::Selected(Some(AutocompleteOption::new("Fire"))))
            .expect("Selected(Fire) reported");
        assert!(changed < selected);
        assert_eq!(notes.selection_count(), 1);
        assert!(!input.is_open());
    }
}

// ============================================================================
// POINTER
// ============================================================================

mod pointer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_click_outside_closes_without_selecting() {
        let mut input = input_with(options(&["Fire", "Water"]));
        let now = Instant::now();
        input.focus(now);
        type_text(&mut input, "Fire", now);

        let notes = input.pointer_down(PointerTarget::Outside, now);
        assert!(!input.is_open());
        assert_eq!(notes.selection_count(), 0);
    }

    #[test]
    fn test_row_click_selects_once_with_deferred_blur() {
        let mut input = input_with(options(&["Fire", "Water", "Grass"]));
        let start = Instant::now();
        input.focus(start);

        let mut all = input.blur(start, None);
        all.extend(input.pointer_down(PointerTarget::DropdownRow(2), start + Duration::from_millis(5)));
        all.extend(input.tick(start + Duration::from_millis(400)));

        assert_eq!(all.selection_count(), 1);
        assert_eq!(all.selected_option(), Some(&AutocompleteOption::new("Grass")));
    }

    #[test]
    fn test_row_click_then_outside_blur_does_not_refire() {
        let pikachu = AutocompleteOption::new("Pikachu (Lv. 12, Electric)").with_match_name("Pikachu");
        let mut input = input_with(vec![pikachu]);
        let start = Instant::now();
        input.focus(start);

        let first = input.blur(start, Some(FocusTarget::Dropdown));
        assert!(first.is_empty());
        let click = input.pointer_down(PointerTarget::DropdownRow(0), start);
        assert_eq!(click.selection_count(), 1);

        let blur = input.blur(start + Duration::from_millis(50), Some(FocusTarget::Outside));
        assert!(blur.is_empty());

        // Once the grace window has passed, a fresh blur commits again.
        input.focus(start + Duration::from_secs(1));
        let later = input.blur(start + Duration::from_secs(1), Some(FocusTarget::Outside));
        assert_eq!(later.selection_count(), 1);
    }

    #[test]
    fn test_dropdown_chrome_press_keeps_state() {
        let mut input = input_with(options(&["Fire"]));
        let now = Instant::now();
        input.focus(now);
        assert!(input.pointer_down(PointerTarget::Dropdown, now).is_empty());
        assert!(input.is_open());
    }
}

// ============================================================================
// LIFECYCLE
// ============================================================================

mod lifecycle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unmount_drops_pending_blur() {
        let mut input = input_with(options(&["Fire"]));
        let start = Instant::now();
        input.focus(start);
        input.blur(start, None);
        assert!(input.has_pending_blur());

        input.unmount();
        assert!(!input.has_pending_blur());
        assert!(input.tick(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_unmounted_input_ignores_everything() {
        let mut input = input_with(options(&["Fire"]));
        let now = Instant::now();
        input.unmount();

        assert!(input.focus(now).is_empty());
        assert!(input.on_key(key(KeyCode::Char('F')), now).is_empty());
        assert!(input.paste("Fire").is_empty());
        assert!(input.pointer_down(PointerTarget::DropdownRow(0), now).is_empty());
        assert!(input.set_value("Fire").is_empty());
        assert!(input.set_options(options(&["Water"])).is_empty());
        assert!(!input.is_open());
        assert!(!input.is_mounted());
    }

    #[test]
    fn test_disabling_closes_and_blocks_input() {
        let mut input = input_with(options(&["Fire"]));
        let now = Instant::now();
        input.focus(now);
        input.set_disabled(true);

        assert!(!input.is_open());
        assert!(input.on_key(key(KeyCode::Char('x')), now).is_empty());
        assert_eq!(input.value(), "");

        input.set_disabled(false);
        input.focus(now);
        assert!(input.is_open());
    }
}

// ============================================================================
// LISTENER
// ============================================================================

#[derive(Default)]
struct FormState {
    value: String,
    committed: Option<String>,
    description: Option<String>,
}

impl AutocompleteListener for FormState {
    fn on_change(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn on_select(&mut self, option: Option<&AutocompleteOption>) {
        self.committed = option.map(|o| o.value.clone());
    }

    fn on_description_found(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_string);
    }
}

#[test]
fn test_listener_tracks_form_state() {
    let mut input = input_with(vec![
        AutocompleteOption::new("Rangers")
            .with_value("rangers")
            .with_description("Protect the wilds"),
    ]);
    let mut form = FormState::default();
    let now = Instant::now();

    input.focus(now).dispatch(&mut form);
    type_text(&mut input, "range", now).dispatch(&mut form);
    assert_eq!(form.value, "range");
    assert_eq!(form.description, None);

    input.on_key(key(KeyCode::Down), now).dispatch(&mut form);
    input.on_key(key(KeyCode::Enter), now).dispatch(&mut form);
    assert_eq!(form.value, "Rangers");
    assert_eq!(form.committed.as_deref(), Some("rangers"));
    assert_eq!(form.description.as_deref(), Some("Protect the wilds"));
}
