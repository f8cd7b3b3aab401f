//! Contains the representation of one card's data.

use crate::data::StatKey;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Player attributes, stats and image references.
///
/// Empty strings are treated as absent throughout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CardData {
    pub player_name: String,
    pub team_name: String,
    pub position: String,
    pub year: Option<i32>,
    pub hometown: String,
    pub height: String,
    pub weight: String,
    pub bats_throws: String,
    pub player_image: Option<String>,
    pub team_logo: Option<String>,
    pub stats: BTreeMap<StatKey, String>,
}

fn present(s: &str) -> Option<&str> {
    Some(s).filter(|s| !s.is_empty())
}

impl CardData {
    pub fn stat(&self, key: StatKey) -> Option<&str> {
        self.stats.get(&key).and_then(|v| present(v))
    }

    pub fn stat_or<'a>(&'a self, key: StatKey, placeholder: &'a str) -> &'a str {
        self.stat(key).unwrap_or(placeholder)
    }

    pub fn set_stat(&mut self, key: StatKey, value: impl Into<String>) {
        self.stats.insert(key, value.into());
    }

    /// Pitching lines appear on the back only when one of these is filled.
    pub fn has_pitching(&self) -> bool {
        [StatKey::Era, StatKey::Wins, StatKey::Ip]
            .into_iter()
            .any(|k| self.stat(k).is_some())
    }

    pub fn photo(&self) -> Option<&str> {
        self.player_image.as_deref().and_then(present)
    }

    pub fn logo(&self) -> Option<&str> {
        self.team_logo.as_deref().and_then(present)
    }

    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_absent() {
        let mut card = CardData {
            player_image: Some(String::new()),
            team_logo: Some("logo.png".into()),
            ..Default::default()
        };
        card.set_stat(StatKey::Avg, "");
        card.set_stat(StatKey::Hr, "60");
        assert_eq!(card.stat(StatKey::Avg), None);
        assert_eq!(card.stat_or(StatKey::Avg, ".000"), ".000");
        assert_eq!(card.stat_or(StatKey::Hr, "0"), "60");
        assert_eq!(card.photo(), None);
        assert_eq!(card.logo(), Some("logo.png"));
        assert!(!card.has_pitching());

        card.set_stat(StatKey::Ip, "120.1");
        assert!(card.has_pitching());
    }

    #[test]
    fn deserializes_kebab_case_fields() {
        let card: CardData = toml::from_str(
            r#"
            player-name = "Babe Ruth"
            team-name = "Yankees"
            year = 1927
            bats-throws = "L/L"

            [stats]
            avg = ".356"
            atBats = "540"
            "#,
        )
        .unwrap();
        assert_eq!(card.player_name, "Babe Ruth");
        assert_eq!(card.bats_throws, "L/L");
        assert_eq!(card.year_label(), "1927");
        assert_eq!(card.stat(StatKey::AtBats), Some("540"));
        assert!(card.position.is_empty());
    }

    #[test]
    fn whitespace_values_are_present() {
        let mut card = CardData {
            team_logo: Some(" ".into()),
            ..Default::default()
        };
        card.set_stat(StatKey::Era, "  ");
        assert_eq!(card.stat(StatKey::Era), Some("  "));
        assert_eq!(card.logo(), Some(" "));
        assert!(card.has_pitching());
    }
}
