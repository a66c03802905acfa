//! Prospect scoring for youth scouting

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::AgeBand;
use crate::core::types::{CountryId, PersonId, Year};
use crate::entity::Person;
use crate::stats::{StatKey, Stats};
use crate::storage::WorldSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProspectGrade {
    A,
    B,
    C,
    D,
}

impl ProspectGrade {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => ProspectGrade::A,
            70..=84 => ProspectGrade::B,
            55..=69 => ProspectGrade::C,
            _ => ProspectGrade::D,
        }
    }
}

impl fmt::Display for ProspectGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ProspectGrade::A => "A",
            ProspectGrade::B => "B",
            ProspectGrade::C => "C",
            ProspectGrade::D => "D",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectScore {
    pub score: u32,
    pub grade: ProspectGrade,
}

/// 0-100 scouting score from potential and a few youth stats
pub fn prospect_score(stats: &Stats, potential_overall: u32) -> u32 {
    let aptitude =
        stats.average_of(&[StatKey::Intelligence, StatKey::Creativity, StatKey::Discipline]);
    let presence = stats.average_of(&[StatKey::Leadership, StatKey::Charisma]);
    let drive = stats.average_of(&[StatKey::Ambition, StatKey::Stability]);

    let raw = 0.5 * potential_overall as f64
        + 0.3 * aptitude as f64
        + 0.15 * presence as f64
        + 0.05 * drive as f64;
    raw.clamp(0.0, 100.0).round() as u32
}

pub fn evaluate(stats: &Stats, potential_overall: u32) -> ProspectScore {
    let score = prospect_score(stats, potential_overall);
    ProspectScore {
        score,
        grade: ProspectGrade::from_score(score),
    }
}

/// One row of a scouting report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectEntry {
    pub person_id: PersonId,
    pub name: String,
    pub age: u32,
    pub score: u32,
    pub grade: ProspectGrade,
}

impl ProspectEntry {
    fn from_person(person: &Person, year: Year) -> Self {
        let ProspectScore { score, grade } = evaluate(&person.stats, person.potential_overall);
        Self {
            person_id: person.id,
            name: person.name.clone(),
            age: person.age(year),
            score,
            grade,
        }
    }
}

/// Living youths of a country ranked by prospect score (ties by id)
pub fn scout_prospects(
    snapshot: &WorldSnapshot,
    country: CountryId,
    youth_ages: AgeBand,
) -> Vec<ProspectEntry> {
    let year = snapshot.world.current_year;
    let mut entries: Vec<ProspectEntry> = snapshot
        .living_persons()
        .filter(|p| p.country_id == Some(country) && youth_ages.contains(p.age(year)))
        .map(|p| ProspectEntry::from_person(p, year))
        .collect();

    entries.sort_by_key(|e| (Reverse(e.score), e.person_id));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(ProspectGrade::from_score(100), ProspectGrade::A);
        assert_eq!(ProspectGrade::from_score(85), ProspectGrade::A);
        assert_eq!(ProspectGrade::from_score(84), ProspectGrade::B);
        assert_eq!(ProspectGrade::from_score(70), ProspectGrade::B);
        assert_eq!(ProspectGrade::from_score(69), ProspectGrade::C);
        assert_eq!(ProspectGrade::from_score(55), ProspectGrade::C);
        assert_eq!(ProspectGrade::from_score(54), ProspectGrade::D);
        assert_eq!(ProspectGrade::from_score(0), ProspectGrade::D);
    }

    #[test]
    fn test_score_formula() {
        // potential 80, every stat 60: 40 + 18 + 9 + 3 = 70
        let stats = Stats::uniform(60.0);
        assert_eq!(prospect_score(&stats, 80), 70);
        assert_eq!(evaluate(&stats, 80).grade, ProspectGrade::B);
    }

    #[test]
    fn test_score_is_clamped() {
        let stats = Stats::uniform(99.0);
        assert!(prospect_score(&stats, 99) <= 100);
        assert!(prospect_score(&Stats::uniform(1.0), 0) <= 1);
    }

    #[test]
    fn test_weighting_favors_potential() {
        let stats = Stats::uniform(50.0);
        assert!(prospect_score(&stats, 90) > prospect_score(&stats, 60));
    }
}
