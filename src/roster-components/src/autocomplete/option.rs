//! Option model for the autocomplete input.
//!
//! Callers hand options over either as bare strings or as full objects;
//! [`normalize_options`] converts both into [`AutocompleteOption`] once, so
//! the matcher and state machine only ever see one shape.

use serde::{Deserialize, Serialize};

/// One candidate value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteOption {
    /// Display string shown in the input and the dropdown.
    pub name: String,
    /// Identifier handed back on selection. Defaults to `name`.
    pub value: String,
    /// Supplementary text shown in the row and the description panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Aliases that match like `name` but are never displayed.
    #[serde(
        default,
        rename = "matchNames",
        alias = "match_names",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub match_names: Vec<String>,
}

impl AutocompleteOption {
    /// Option whose value equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            name,
            description: None,
            match_names: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// Add an alias, e.g. the bare species name of a decorated monster entry.
    pub fn with_match_name(mut self, alias: impl Into<String>) -> Self {
        self.match_names.push(alias.into());
        self
    }

    pub fn with_match_names<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.match_names.extend(aliases.into_iter().map(Into::into));
        self
    }
}

impl From<&str> for AutocompleteOption {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AutocompleteOption {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// An option as it arrives from a caller or an option file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionSource {
    /// `"Fire"` is shorthand for `{ name: "Fire", value: "Fire" }`.
    Plain(String),
    /// Full object; `value` may be omitted.
    Detailed {
        name: String,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default, rename = "matchNames", alias = "match_names")]
        match_names: Vec<String>,
    },
}

impl OptionSource {
    /// Display name of the entry, whatever its shape.
    pub fn name(&self) -> &str {
        match self {
            OptionSource::Plain(name) => name,
            OptionSource::Detailed { name, .. } => name,
        }
    }
}

impl From<OptionSource> for AutocompleteOption {
    fn from(source: OptionSource) -> Self {
        match source {
            OptionSource::Plain(name) => AutocompleteOption::new(name),
            OptionSource::Detailed {
                name,
                value,
                description,
                match_names,
            } => AutocompleteOption {
                value: value.unwrap_or_else(|| name.clone()),
                name,
                description: description.filter(|d| !d.is_empty()),
                match_names,
            },
        }
    }
}

/// Convert mixed string/object entries into the full option shape.
pub fn normalize_options<I>(sources: I) -> Vec<AutocompleteOption>
where
    I: IntoIterator<Item = OptionSource>,
{
    sources.into_iter().map(AutocompleteOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_string_defaults_value_to_name() {
        let option = AutocompleteOption::from("Fire");
        assert_eq!(option.name, "Fire");
        assert_eq!(option.value, "Fire");
        assert!(option.description.is_none());
    }

    #[test]
    fn test_builder() {
        let option = AutocompleteOption::new("Pikachu (Lv. 12, Electric)")
            .with_value("42")
            .with_description("")
            .with_match_name("Pikachu");
        assert_eq!(option.value, "42");
        assert_eq!(option.description, None);
        assert_eq!(option.match_names, vec!["Pikachu".to_string()]);
    }

    #[test]
    fn test_normalize_mixed_sources() {
        let sources: Vec<OptionSource> = serde_json::from_str(
            r#"[
                "Water",
                {"name": "Nyakuza", "description": "Feline pirates"},
                {"name": "Pikachu (Lv. 12)", "value": "7", "matchNames": ["Pikachu"]},
                {"name": "Oran Berry", "match_names": ["Oran"]}
            ]"#,
        )
        .unwrap();

        let options = normalize_options(sources);
        assert_eq!(
            options,
            vec![
                AutocompleteOption::new("Water"),
                AutocompleteOption::new("Nyakuza").with_description("Feline pirates"),
                AutocompleteOption::new("Pikachu (Lv. 12)")
                    .with_value("7")
                    .with_match_name("Pikachu"),
                AutocompleteOption::new("Oran Berry").with_match_name("Oran"),
            ]
        );
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let json = serde_json::to_string(&AutocompleteOption::new("Grass")).unwrap();
        assert_eq!(json, r#"{"name":"Grass","value":"Grass"}"#);
    }
}
