//! Personality archetypes and their stat affinities

use serde::{Deserialize, Serialize};

use crate::stats::{StatKey, Stats};

/// No archetype ever scores below this, so every one stays possible
pub const MIN_ARCHETYPE_SCORE: f64 = 0.05;

/// Coarse personality category assigned once at birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    Visionary,
    Leader,
    Pragmatist,
    Caregiver,
    Rebel,
    Analyst,
    Opportunist,
    Traditionalist,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::Visionary,
        Archetype::Leader,
        Archetype::Pragmatist,
        Archetype::Caregiver,
        Archetype::Rebel,
        Archetype::Analyst,
        Archetype::Opportunist,
        Archetype::Traditionalist,
    ];

    /// Linear weights over normalized stats
    pub fn weights(self) -> &'static [(StatKey, f64)] {
        use StatKey::*;
        match self {
            Archetype::Visionary => &[
                (Creativity, 1.0),
                (Intelligence, 0.6),
                (Ambition, 0.7),
                (RiskTaking, 0.5),
                (Adaptability, 0.4),
            ],
            Archetype::Leader => &[
                (Communication, 0.7),
                (Charisma, 0.8),
                (Leadership, 1.0),
                (Confidence, 0.5),
            ],
            Archetype::Pragmatist => &[
                (Judgment, 0.9),
                (Discipline, 0.7),
                (Adaptability, 0.6),
                (Stability, 0.5),
                (Patience, 0.3),
            ],
            Archetype::Caregiver => &[
                (Empathy, 1.0),
                (Agreeableness, 0.8),
                (Patience, 0.6),
                (Integrity, 0.4),
                (Communication, 0.3),
            ],
            Archetype::Rebel => &[
                (RiskTaking, 1.0),
                (Confidence, 0.6),
                (Creativity, 0.5),
                (Ambition, 0.4),
                (Agreeableness, -0.6),
                (Patience, -0.3),
            ],
            Archetype::Analyst => &[
                (Intelligence, 1.0),
                (Memory, 0.7),
                (Judgment, 0.6),
                (Discipline, 0.5),
                (Charisma, -0.2),
            ],
            Archetype::Opportunist => &[
                (Ambition, 1.0),
                (Negotiation, 0.8),
                (Adaptability, 0.6),
                (RiskTaking, 0.4),
                (Integrity, -0.5),
            ],
            Archetype::Traditionalist => &[
                (Stability, 0.9),
                (Integrity, 0.7),
                (Discipline, 0.6),
                (Patience, 0.5),
                (RiskTaking, -0.5),
                (Creativity, -0.3),
            ],
        }
    }

    /// Weighted score for a stat profile, floored at [`MIN_ARCHETYPE_SCORE`]
    pub fn score(self, stats: &Stats) -> f64 {
        let raw: f64 = self
            .weights()
            .iter()
            .map(|&(key, weight)| normalize(stats.get(key)) * weight)
            .sum();
        raw.max(MIN_ARCHETYPE_SCORE)
    }
}

/// Map a stat onto the baseline range: 20 -> 0.0, 80 -> 1.0
///
/// Not clamped, so a 99 lands near 1.32 and pulls hard on its archetypes.
pub fn normalize(value: f32) -> f64 {
    (value as f64 - 20.0) / 60.0
}

/// Scores for every archetype in [`Archetype::ALL`] order
pub fn archetype_scores(stats: &Stats) -> [(Archetype, f64); 8] {
    Archetype::ALL.map(|archetype| (archetype, archetype.score(stats)))
}
