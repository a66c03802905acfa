//! Government overview and office fitness

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::core::types::{CountryId, OfficeId, PersonId, Year};
use crate::entity::{OfficeLevel, Term};
use crate::stats::{StatKey, Stats};
use crate::storage::WorldSnapshot;

/// 0-100 fitness for public office
///
/// Also the election weight, so the overview and the yearly elections agree
/// on who is suited to govern.
pub fn office_fit(stats: &Stats) -> f64 {
    let fit = 0.35 * stats.get(StatKey::Leadership) as f64
        + 0.25 * stats.get(StatKey::Judgment) as f64
        + 0.20 * stats.get(StatKey::Integrity) as f64
        + 0.20 * stats.get(StatKey::Charisma) as f64;
    fit.clamp(0.0, 100.0)
}

/// Years left in a term, `None` for open-ended offices
pub fn years_remaining(term_length: Option<u32>, years_served: u32) -> Option<u32> {
    term_length.map(|length| length.saturating_sub(years_served))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeHolder {
    pub person_id: PersonId,
    pub name: String,
    pub fit: f64,
    pub years_served: u32,
    pub years_remaining: Option<u32>,
    pub player_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeOverview {
    pub office_id: OfficeId,
    pub title: String,
    pub prestige: u32,
    pub term_length: Option<u32>,
    /// `None` when the office is vacant
    pub holder: Option<OfficeHolder>,
}

/// The `limit` most prestigious national offices of a country and who holds them
pub fn government_overview(
    snapshot: &WorldSnapshot,
    country_id: CountryId,
    year: Year,
    limit: usize,
) -> Vec<OfficeOverview> {
    let mut offices: Vec<_> = snapshot
        .offices_in(country_id)
        .filter(|o| o.level == OfficeLevel::National)
        .collect();
    offices.sort_by_key(|o| (Reverse(o.prestige), o.id));
    offices.truncate(limit);

    offices
        .into_iter()
        .map(|office| {
            let holder = snapshot
                .active_term_for_office(office.id)
                .and_then(|term| holder_summary(snapshot, term, office.term_length, year));
            OfficeOverview {
                office_id: office.id,
                title: office.title.clone(),
                prestige: office.prestige,
                term_length: office.term_length,
                holder,
            }
        })
        .collect()
}

fn holder_summary(
    snapshot: &WorldSnapshot,
    term: &Term,
    term_length: Option<u32>,
    year: Year,
) -> Option<OfficeHolder> {
    let person = snapshot.persons.get(&term.person_id)?;
    let years_served = term.years_served(year);
    Some(OfficeHolder {
        person_id: person.id,
        name: person.name.clone(),
        fit: office_fit(&person.stats),
        years_served,
        years_remaining: years_remaining(term_length, years_served),
        player_locked: term.player_locked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_fit_weights() {
        let stats = Stats::uniform(10.0)
            .with(StatKey::Leadership, 80.0)
            .with(StatKey::Judgment, 60.0)
            .with(StatKey::Integrity, 50.0)
            .with(StatKey::Charisma, 40.0);
        // 28 + 15 + 10 + 8
        assert!((office_fit(&stats) - 61.0).abs() < 1e-6);
    }

    #[test]
    fn test_office_fit_range() {
        assert!(office_fit(&Stats::uniform(99.0)) <= 100.0);
        assert!(office_fit(&Stats::uniform(1.0)) >= 0.0);
    }

    #[test]
    fn test_years_remaining() {
        assert_eq!(years_remaining(Some(4), 1), Some(3));
        assert_eq!(years_remaining(Some(4), 6), Some(0));
        assert_eq!(years_remaining(None, 6), None);
    }
}
