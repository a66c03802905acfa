//! The 24 ability stats and the record that holds them
//!
//! `StatKey::ALL` is the single canonical list. Generation, development,
//! personality scoring and serialization all iterate it, so no engine can
//! drift out of sync with another about which stats exist.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const STAT_COUNT: usize = 24;
pub const STAT_MIN: f32 = 1.0;
pub const STAT_MAX: f32 = 99.0;

/// Semantic grouping of stats, six per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatCategory {
    Cognitive,
    Social,
    Physical,
    Personality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StatKey {
    // Cognitive
    Intelligence,
    Memory,
    Creativity,
    Discipline,
    Judgment,
    Adaptability,
    // Social
    Charisma,
    Leadership,
    Empathy,
    Communication,
    Confidence,
    Negotiation,
    // Physical
    Strength,
    Endurance,
    Athleticism,
    Vitality,
    Reflexes,
    Appearance,
    // Personality
    Ambition,
    Integrity,
    RiskTaking,
    Patience,
    Agreeableness,
    Stability,
}

impl StatKey {
    pub const ALL: [StatKey; STAT_COUNT] = [
        StatKey::Intelligence,
        StatKey::Memory,
        StatKey::Creativity,
        StatKey::Discipline,
        StatKey::Judgment,
        StatKey::Adaptability,
        StatKey::Charisma,
        StatKey::Leadership,
        StatKey::Empathy,
        StatKey::Communication,
        StatKey::Confidence,
        StatKey::Negotiation,
        StatKey::Strength,
        StatKey::Endurance,
        StatKey::Athleticism,
        StatKey::Vitality,
        StatKey::Reflexes,
        StatKey::Appearance,
        StatKey::Ambition,
        StatKey::Integrity,
        StatKey::RiskTaking,
        StatKey::Patience,
        StatKey::Agreeableness,
        StatKey::Stability,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn category(self) -> StatCategory {
        match self.index() / 6 {
            0 => StatCategory::Cognitive,
            1 => StatCategory::Social,
            2 => StatCategory::Physical,
            _ => StatCategory::Personality,
        }
    }

    /// Stable key used in serialized stat maps
    pub fn name(self) -> &'static str {
        match self {
            StatKey::Intelligence => "intelligence",
            StatKey::Memory => "memory",
            StatKey::Creativity => "creativity",
            StatKey::Discipline => "discipline",
            StatKey::Judgment => "judgment",
            StatKey::Adaptability => "adaptability",
            StatKey::Charisma => "charisma",
            StatKey::Leadership => "leadership",
            StatKey::Empathy => "empathy",
            StatKey::Communication => "communication",
            StatKey::Confidence => "confidence",
            StatKey::Negotiation => "negotiation",
            StatKey::Strength => "strength",
            StatKey::Endurance => "endurance",
            StatKey::Athleticism => "athleticism",
            StatKey::Vitality => "vitality",
            StatKey::Reflexes => "reflexes",
            StatKey::Appearance => "appearance",
            StatKey::Ambition => "ambition",
            StatKey::Integrity => "integrity",
            StatKey::RiskTaking => "riskTaking",
            StatKey::Patience => "patience",
            StatKey::Agreeableness => "agreeableness",
            StatKey::Stability => "stability",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A full ability profile, one value per [`StatKey`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats([f32; STAT_COUNT]);

impl Default for Stats {
    fn default() -> Self {
        Self([50.0; STAT_COUNT])
    }
}

impl Stats {
    /// Build from raw values, clamping every one into [1, 99]
    pub fn from_values(values: [f32; STAT_COUNT]) -> Self {
        let mut stats = Self(values);
        stats.clamp_all();
        stats
    }

    /// Every stat set to the same value (clamped)
    pub fn uniform(value: f32) -> Self {
        Self::from_values([value; STAT_COUNT])
    }

    pub fn get(&self, key: StatKey) -> f32 {
        self.0[key.index()]
    }

    /// Set a stat, clamped into [1, 99]
    pub fn set(&mut self, key: StatKey, value: f32) {
        self.0[key.index()] = clamp_stat(value);
    }

    /// Builder-style [`Stats::set`]
    pub fn with(mut self, key: StatKey, value: f32) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f32)> + '_ {
        StatKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }

    pub fn values(&self) -> &[f32; STAT_COUNT] {
        &self.0
    }

    /// Mean of the given stats
    pub fn average_of(&self, keys: &[StatKey]) -> f32 {
        if keys.is_empty() {
            return 0.0;
        }
        keys.iter().map(|&k| self.get(k)).sum::<f32>() / keys.len() as f32
    }

    /// Unrounded mean of all 24 stats
    pub fn mean(&self) -> f32 {
        self.0.iter().sum::<f32>() / STAT_COUNT as f32
    }

    /// Rounded mean of all 24 stats
    pub fn overall(&self) -> u32 {
        self.mean().round() as u32
    }

    pub fn clamp_all(&mut self) {
        for value in self.0.iter_mut() {
            *value = clamp_stat(*value);
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.0.iter().all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}

fn clamp_stat(value: f32) -> f32 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

impl std::ops::Index<StatKey> for Stats {
    type Output = f32;

    fn index(&self, key: StatKey) -> &f32 {
        &self.0[key.index()]
    }
}

// Stats serialize as a name-keyed map so stored rows stay readable and
// survive reordering of the enum.
impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STAT_COUNT))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Stats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatsVisitor;

        impl<'de> Visitor<'de> for StatsVisitor {
            type Value = Stats;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of all 24 stat names to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Stats, A::Error> {
                let mut values = [f32::NAN; STAT_COUNT];
                while let Some((name, value)) = access.next_entry::<String, f32>()? {
                    let key = StatKey::from_name(&name)
                        .ok_or_else(|| de::Error::unknown_field(&name, &[]))?;
                    values[key.index()] = value;
                }
                if let Some(missing) = StatKey::ALL.iter().find(|k| values[k.index()].is_nan()) {
                    return Err(de::Error::missing_field(missing.name()));
                }
                Ok(Stats::from_values(values))
            }
        }

        deserializer.deserialize_map(StatsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_have_six_stats_each() {
        for category in [
            StatCategory::Cognitive,
            StatCategory::Social,
            StatCategory::Physical,
            StatCategory::Personality,
        ] {
            let count = StatKey::ALL.iter().filter(|k| k.category() == category).count();
            assert_eq!(count, 6, "{:?}", category);
        }
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, key) in StatKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(StatKey::from_name(key.name()), Some(*key));
        }
        assert_eq!(StatKey::RiskTaking.name(), "riskTaking");
        assert_eq!(StatKey::Vitality.category(), StatCategory::Physical);
    }

    #[test]
    fn test_set_clamps() {
        let mut stats = Stats::default();
        stats.set(StatKey::Strength, 150.0);
        stats.set(StatKey::Memory, -3.0);
        assert_eq!(stats.get(StatKey::Strength), 99.0);
        assert_eq!(stats.get(StatKey::Memory), 1.0);
        assert!(stats.in_bounds());
    }

    #[test]
    fn test_overall_rounds_mean() {
        let stats = Stats::uniform(60.0).with(StatKey::Charisma, 72.0);
        // (23 * 60 + 72) / 24 = 60.5 -> 61
        assert_eq!(stats.overall(), 61);
    }

    #[test]
    fn test_json_shape() {
        let stats = Stats::uniform(40.0).with(StatKey::RiskTaking, 77.0);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["riskTaking"], 77.0);
        assert_eq!(json.as_object().unwrap().len(), STAT_COUNT);
    }

    #[test]
    fn test_json_missing_stat_rejected() {
        let err = serde_json::from_str::<Stats>(r#"{"intelligence": 50}"#);
        assert!(err.is_err());
    }
}
