//! Case-insensitive matching and filtering over an option snapshot.
//!
//! Both functions work on indices into the caller's slice so the state
//! machine never clones options just to show them.

use super::option::AutocompleteOption;

/// Hard cap on the number of rows the dropdown is ever given.
pub const MAX_FILTERED_OPTIONS: usize = 20;

/// How an exact match was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The value equals the option's display name.
    Name,
    /// The value equals one of the option's aliases only.
    Alias,
}

/// An option whose name or alias equals the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactMatch {
    /// Index into the option slice.
    pub index: usize,
    pub kind: MatchKind,
}

/// Find the option the value names exactly, ignoring case.
///
/// Display names win over aliases: the first option whose `name` matches is
/// returned, and aliases are consulted only when no name matches. An empty
/// value never matches.
pub fn find_exact_match(options: &[AutocompleteOption], value: &str) -> Option<ExactMatch> {
    if value.is_empty() {
        return None;
    }
    let needle = value.to_lowercase();

    if let Some(index) = options.iter().position(|o| o.name.to_lowercase() == needle) {
        return Some(ExactMatch {
            index,
            kind: MatchKind::Name,
        });
    }

    options
        .iter()
        .position(|o| o.match_names.iter().any(|m| m.to_lowercase() == needle))
        .map(|index| ExactMatch {
            index,
            kind: MatchKind::Alias,
        })
}

/// Indices of the options to list for `value`, in their original order.
///
/// An empty value lists the first `limit` options. Otherwise an option is
/// kept when its name or any alias contains the value as a substring.
pub fn filter_options(options: &[AutocompleteOption], value: &str, limit: usize) -> Vec<usize> {
    let limit = limit.min(MAX_FILTERED_OPTIONS);
    if value.is_empty() {
        return (0..options.len().min(limit)).collect();
    }

    let needle = value.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, o)| {
            o.name.to_lowercase().contains(&needle)
                || o.match_names.iter().any(|m| m.to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<AutocompleteOption> {
        ["Fire", "Water", "Grass"]
            .into_iter()
            .map(AutocompleteOption::from)
            .collect()
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let options = vec![AutocompleteOption::new("Pikachu")];
        assert_eq!(
            find_exact_match(&options, "PIKACHU"),
            Some(ExactMatch {
                index: 0,
                kind: MatchKind::Name
            })
        );
        assert_eq!(find_exact_match(&options, "Pika"), None);
        assert_eq!(find_exact_match(&options, ""), None);
    }

    #[test]
    fn test_exact_match_prefers_names_over_aliases() {
        let options = vec![
            AutocompleteOption::new("Raichu (Lv. 30)").with_match_name("Pikachu"),
            AutocompleteOption::new("Pikachu"),
        ];
        let found = find_exact_match(&options, "pikachu").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.kind, MatchKind::Name);
    }

    #[test]
    fn test_exact_match_through_alias() {
        let options = vec![
            AutocompleteOption::new("Eevee (Lv. 5, Normal)").with_match_name("Eevee"),
            AutocompleteOption::new("Pikachu (Lv. 12, Electric)").with_match_name("Pikachu"),
        ];
        let found = find_exact_match(&options, "pikachu").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.kind, MatchKind::Alias);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let options = vec![
            AutocompleteOption::new("Sparky").with_value("1"),
            AutocompleteOption::new("Sparky").with_value("2"),
        ];
        assert_eq!(find_exact_match(&options, "sparky").unwrap().index, 0);
    }

    #[test]
    fn test_filter_substring_preserves_order() {
        assert_eq!(filter_options(&types(), "r", MAX_FILTERED_OPTIONS), vec![0, 2]);
        assert_eq!(filter_options(&types(), "WAT", MAX_FILTERED_OPTIONS), vec![1]);
        assert!(filter_options(&types(), "xyz", MAX_FILTERED_OPTIONS).is_empty());
    }

    #[test]
    fn test_filter_matches_aliases() {
        let options = vec![
            AutocompleteOption::new("Sparky (Lv. 3)").with_match_name("Pikachu"),
            AutocompleteOption::new("Bulbasaur"),
        ];
        assert_eq!(filter_options(&options, "kach", MAX_FILTERED_OPTIONS), vec![0]);
    }

    #[test]
    fn test_filter_empty_value_takes_leading_options() {
        let options: Vec<_> = (0..50)
            .map(|i| AutocompleteOption::new(format!("Option {i}")))
            .collect();
        let filtered = filter_options(&options, "", MAX_FILTERED_OPTIONS);
        assert_eq!(filtered, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_cap_is_absolute() {
        let options: Vec<_> = (0..50)
            .map(|i| AutocompleteOption::new(format!("Berry {i}")))
            .collect();
        assert_eq!(filter_options(&options, "berry", 100).len(), MAX_FILTERED_OPTIONS);
        assert_eq!(filter_options(&options, "berry", 5).len(), 5);
        assert_eq!(filter_options(&options, "berry 4", 100), vec![4, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49]);
    }
}
