//! Statistic keys and the featured stats selection.

use crate::error::{Error, Result};

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatKey {
    Avg,
    Hr,
    Rbi,
    Games,
    Hits,
    Sb,
    AtBats,
    Doubles,
    Triples,
    Walks,
    Strikeouts,
    Obp,
    Slg,
    Era,
    Wins,
    Losses,
    Saves,
    Ip,
    StrikeoutsP,
    Whip,
}

impl StatKey {
    pub const ALL: [StatKey; 20] = [
        Self::Avg,
        Self::Hr,
        Self::Rbi,
        Self::Games,
        Self::Hits,
        Self::Sb,
        Self::AtBats,
        Self::Doubles,
        Self::Triples,
        Self::Walks,
        Self::Strikeouts,
        Self::Obp,
        Self::Slg,
        Self::Era,
        Self::Wins,
        Self::Losses,
        Self::Saves,
        Self::Ip,
        Self::StrikeoutsP,
        Self::Whip,
    ];

    /// The key as it appears in card files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Hr => "hr",
            Self::Rbi => "rbi",
            Self::Games => "games",
            Self::Hits => "hits",
            Self::Sb => "sb",
            Self::AtBats => "atBats",
            Self::Doubles => "doubles",
            Self::Triples => "triples",
            Self::Walks => "walks",
            Self::Strikeouts => "strikeouts",
            Self::Obp => "obp",
            Self::Slg => "slg",
            Self::Era => "era",
            Self::Wins => "wins",
            Self::Losses => "losses",
            Self::Saves => "saves",
            Self::Ip => "ip",
            Self::StrikeoutsP => "strikeoutsP",
            Self::Whip => "whip",
        }
    }

    /// Short label printed on the card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Avg => "AVG",
            Self::Hr => "HR",
            Self::Rbi => "RBI",
            Self::Games => "G",
            Self::Hits => "H",
            Self::Sb => "SB",
            Self::AtBats => "AB",
            Self::Doubles => "2B",
            Self::Triples => "3B",
            Self::Walks => "BB",
            Self::Strikeouts => "SO",
            Self::Obp => "OBP",
            Self::Slg => "SLG",
            Self::Era => "ERA",
            Self::Wins => "W",
            Self::Losses => "L",
            Self::Saves => "SV",
            Self::Ip => "IP",
            Self::StrikeoutsP => "K",
            Self::Whip => "WHIP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Avg => "Batting Average",
            Self::Hr => "Home Runs",
            Self::Rbi => "RBIs",
            Self::Games => "Games Played",
            Self::Hits => "Hits",
            Self::Sb => "Stolen Bases",
            Self::AtBats => "At Bats",
            Self::Doubles => "Doubles",
            Self::Triples => "Triples",
            Self::Walks => "Walks",
            Self::Strikeouts => "Strikeouts",
            Self::Obp => "OBP",
            Self::Slg => "SLG",
            Self::Era => "ERA",
            Self::Wins => "Wins",
            Self::Losses => "Losses",
            Self::Saves => "Saves",
            Self::Ip => "Innings Pitched",
            Self::StrikeoutsP => "Strikeouts (P)",
            Self::Whip => "WHIP",
        }
    }

    pub fn is_pitching(&self) -> bool {
        matches!(
            self,
            Self::Era
                | Self::Wins
                | Self::Losses
                | Self::Saves
                | Self::Ip
                | Self::StrikeoutsP
                | Self::Whip
        )
    }
}

impl FromStr for StatKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| Error::UnknownStat(s.to_string()))
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

struct StatKeyVisitor;

impl<'de> Visitor<'de> for StatKeyVisitor {
    type Value = StatKey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a stat key such as avg, hr, atBats or strikeoutsP")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<StatKey>().map_err(|e| E::custom(e))
    }
}

impl<'de> Deserialize<'de> for StatKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<StatKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(StatKeyVisitor)
    }
}

impl Serialize for StatKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

/// Up to [`FeaturedStats::MAX`] distinct stats highlighted on the card front, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedStats(Vec<StatKey>);

impl FeaturedStats {
    pub const MAX: usize = 3;

    pub fn new() -> Self {
        Self(Vec::with_capacity(Self::MAX))
    }

    pub fn select(&mut self, key: StatKey) -> Result<()> {
        if self.contains(key) {
            return Err(Error::DuplicateFeaturedStat(key.key().to_string()));
        }
        if self.0.len() >= Self::MAX {
            return Err(Error::FeaturedStatsFull(Self::MAX));
        }
        self.0.push(key);
        Ok(())
    }

    pub fn deselect(&mut self, key: StatKey) -> bool {
        let before = self.0.len();
        self.0.retain(|k| *k != key);
        self.0.len() != before
    }

    /// Removes `key` if selected, selects it otherwise. Returns whether it ends up selected.
    pub fn toggle(&mut self, key: StatKey) -> Result<bool> {
        if self.deselect(key) {
            Ok(false)
        } else {
            self.select(key).map(|_| true)
        }
    }

    pub fn contains(&self, key: StatKey) -> bool {
        self.0.contains(&key)
    }

    pub fn as_slice(&self) -> &[StatKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<StatKey>> for FeaturedStats {
    type Error = Error;

    fn try_from(keys: Vec<StatKey>) -> Result<Self> {
        let mut featured = Self::new();
        for key in keys {
            featured.select(key)?;
        }
        Ok(featured)
    }
}

struct FeaturedVisitor;

impl<'de> Visitor<'de> for FeaturedVisitor {
    type Value = FeaturedStats;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a list of at most {} distinct stat keys", FeaturedStats::MAX)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut featured = FeaturedStats::new();
        while let Some(key) = seq.next_element::<StatKey>()? {
            featured.select(key).map_err(de::Error::custom)?;
        }
        Ok(featured)
    }
}

impl<'de> Deserialize<'de> for FeaturedStats {
    fn deserialize<D>(deserializer: D) -> std::result::Result<FeaturedStats, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(FeaturedVisitor)
    }
}

impl Serialize for FeaturedStats {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_names() {
        for key in StatKey::ALL {
            assert_eq!(key.key().parse::<StatKey>().unwrap(), key);
        }
        assert!(matches!("AVG".parse::<StatKey>(), Err(Error::UnknownStat(_))));
        assert_eq!(StatKey::StrikeoutsP.label(), "K");
        assert_eq!(StatKey::Avg.description(), "Batting Average");
    }

    #[test]
    fn pitching_keys() {
        let pitching: Vec<_> = StatKey::ALL.into_iter().filter(|k| k.is_pitching()).collect();
        assert_eq!(pitching.len(), 7);
        assert_eq!(pitching[0], StatKey::Era);
    }

    #[test]
    fn select_rejects_fourth_key_and_duplicates() {
        let mut featured = FeaturedStats::new();
        featured.select(StatKey::Avg).unwrap();
        assert!(matches!(
            featured.select(StatKey::Avg),
            Err(Error::DuplicateFeaturedStat(k)) if k == "avg"
        ));
        featured.select(StatKey::Hr).unwrap();
        featured.select(StatKey::Rbi).unwrap();
        assert!(matches!(
            featured.select(StatKey::Era),
            Err(Error::FeaturedStatsFull(3))
        ));
        assert_eq!(featured.as_slice(), &[StatKey::Avg, StatKey::Hr, StatKey::Rbi]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut featured = FeaturedStats::try_from(vec![StatKey::Avg, StatKey::Hr]).unwrap();
        assert!(!featured.toggle(StatKey::Avg).unwrap());
        assert_eq!(featured.as_slice(), &[StatKey::Hr]);
        assert!(featured.toggle(StatKey::Whip).unwrap());
        assert_eq!(featured.as_slice(), &[StatKey::Hr, StatKey::Whip]);
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        featured: FeaturedStats,
    }

    #[test]
    fn deserializes_bounded_lists() {
        let holder: Holder = toml::from_str(r#"featured = ["avg", "atBats"]"#).unwrap();
        assert_eq!(holder.featured.as_slice(), &[StatKey::Avg, StatKey::AtBats]);

        let long = r#"featured = ["avg", "hr", "rbi", "era"]"#;
        assert!(toml::from_str::<Holder>(long).is_err());
        assert!(toml::from_str::<Holder>(r#"featured = ["avg", "avg"]"#).is_err());
        assert!(toml::from_str::<Holder>(r#"featured = ["batting"]"#).is_err());
    }
}
