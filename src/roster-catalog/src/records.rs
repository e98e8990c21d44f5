//! Monster and trainer records as they arrive from the game backend.
//!
//! Only the fields the pickers need are modelled; anything else in the JSON
//! is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Record identifier. The backend mixes numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Parse a user-supplied id, preferring the numeric form.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Text(s.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A monster owned by some trainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<RecordId>,
}

impl MonsterRecord {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: None,
            type1: None,
            type2: None,
            type3: None,
            type4: None,
            type5: None,
            trainer_id: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Fill type slots in order; extra types beyond five are ignored.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = [
            &mut self.type1,
            &mut self.type2,
            &mut self.type3,
            &mut self.type4,
            &mut self.type5,
        ];
        for (slot, ty) in slots.into_iter().zip(types) {
            *slot = Some(ty.into());
        }
        self
    }

    pub fn with_trainer(mut self, trainer_id: impl Into<RecordId>) -> Self {
        self.trainer_id = Some(trainer_id.into());
        self
    }

    /// Non-empty types in slot order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        [&self.type1, &self.type2, &self.type3, &self.type4, &self.type5]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// A trainer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Shown next to the trainer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_username: Option<String>,
    /// Whether the signed-in player owns this trainer.
    #[serde(default)]
    pub is_owned: bool,
}

impl TrainerRecord {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: None,
            nickname: None,
            player_display_name: None,
            player_username: None,
            is_owned: false,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_player(mut self, display_name: impl Into<String>, username: impl Into<String>) -> Self {
        self.player_display_name = Some(display_name.into());
        self.player_username = Some(username.into());
        self
    }

    /// Player display name, if set and not blank.
    pub fn player(&self) -> Option<&str> {
        self.player_display_name
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn owned(mut self, owned: bool) -> Self {
        self.is_owned = owned;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[12, "abc-3"]"#).unwrap();
        assert_eq!(ids, vec![RecordId::Int(12), RecordId::Text("abc-3".into())]);
        assert_eq!(ids[0].to_string(), "12");
        assert_eq!(ids[1].to_string(), "abc-3");
    }

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse(" 42 "), RecordId::Int(42));
        assert_eq!(RecordId::parse("m-42"), RecordId::Text("m-42".into()));
    }

    #[test]
    fn test_monster_types_skip_blanks() {
        let monster: MonsterRecord = serde_json::from_str(
            r#"{"id": 1, "name": "Sparky", "level": 14, "type1": "Electric", "type2": "", "type3": "Steel", "species1": "Pikachu"}"#,
        )
        .unwrap();
        assert_eq!(monster.types().collect::<Vec<_>>(), vec!["Electric", "Steel"]);
        assert_eq!(monster.level, Some(14));
    }

    #[test]
    fn test_with_types_fills_slots() {
        let monster = MonsterRecord::new(1, "Bulbasaur").with_types(["Grass", "Poison"]);
        assert_eq!(monster.type1.as_deref(), Some("Grass"));
        assert_eq!(monster.type2.as_deref(), Some("Poison"));
        assert_eq!(monster.type3, None);
    }

    #[test]
    fn test_trainer_defaults() {
        let trainer: TrainerRecord = serde_json::from_str(r#"{"id": "t1", "name": "Ash"}"#).unwrap();
        assert!(!trainer.is_owned);
        assert_eq!(trainer.level, None);
        assert_eq!(trainer.player(), None);
    }

    #[test]
    fn test_trainer_player_fields() {
        let trainer: TrainerRecord = serde_json::from_str(
            r#"{"id": 4, "name": "Ash", "nickname": "Satoshi", "player_display_name": " ", "player_username": "red"}"#,
        )
        .unwrap();
        assert_eq!(trainer.nickname.as_deref(), Some("Satoshi"));
        assert_eq!(trainer.player_username.as_deref(), Some("red"));
        assert_eq!(trainer.player(), None);
    }
}
