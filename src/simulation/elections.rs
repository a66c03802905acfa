//! Office terms and elections

use std::cmp::Reverse;

use ahash::{AHashMap, AHashSet};

use crate::aggregate::office_fit;
use crate::core::random::weighted_pick;
use crate::core::types::{CountryId, OfficeId, PersonId, TermId};
use crate::entity::Term;
use crate::simulation::context::TickContext;

/// Election weights never drop below this, so weak candidates can still win
pub const MIN_ELECTION_WEIGHT: f64 = 1.0;

pub fn resolve_elections(ctx: &mut TickContext) {
    let year = ctx.year;

    let mut offices: Vec<_> = ctx
        .state
        .offices
        .values()
        .map(|o| (o.id, o.country_id, o.prestige, o.term_length, o.min_age))
        .collect();
    offices.sort_by_key(|&(id, _, prestige, _, _)| (Reverse(prestige), id));

    let mut sitting: AHashMap<OfficeId, TermId> = AHashMap::new();
    let mut office_holders: AHashSet<PersonId> = AHashSet::new();
    for term in ctx.state.terms.values().filter(|t| t.is_active()) {
        sitting.insert(term.office_id, term.id);
        office_holders.insert(term.person_id);
    }

    let mut residents: AHashMap<CountryId, Vec<PersonId>> = AHashMap::new();
    for person in ctx.state.living_persons() {
        if let Some(country) = person.country_id {
            residents.entry(country).or_default().push(person.id);
        }
    }

    for (office_id, country_id, _, term_length, min_age) in offices {
        if let Some(term_id) = sitting.get(&office_id).copied() {
            let Some(term) = ctx.state.terms.get_mut(&term_id) else {
                continue;
            };
            let expired = term_length.is_some_and(|length| term.years_served(year) >= length);
            let holder_alive = ctx.state.persons.get(&term.person_id).is_some_and(|p| p.alive);
            if term.player_locked || (holder_alive && !expired) {
                continue;
            }
            term.close(year);
            office_holders.remove(&term.person_id);
        }

        let candidates: Vec<(PersonId, f64)> = residents
            .get(&country_id)
            .into_iter()
            .flatten()
            .filter(|id| !office_holders.contains(*id))
            .filter_map(|id| ctx.state.persons.get(id))
            .filter(|p| !p.is_player && p.age(year) >= min_age)
            .map(|p| (p.id, office_fit(&p.stats).max(MIN_ELECTION_WEIGHT)))
            .collect();

        let Some(&winner) = weighted_pick(&mut ctx.rng, &candidates) else {
            tracing::trace!(office = %office_id, "no eligible candidates, office stays vacant");
            continue;
        };

        let term = Term {
            id: TermId::generate(&mut ctx.rng),
            office_id,
            person_id: winner,
            start_year: year,
            end_year: None,
            player_locked: false,
        };
        ctx.state.terms.insert(term.id, term);
        office_holders.insert(winner);
        ctx.result.elections_held += 1;
    }

    tracing::debug!(elections = ctx.result.elections_held, "elections resolved");
}
