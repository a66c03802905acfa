//! Aging and mortality pass

use ahash::AHashSet;

use crate::core::random::chance;
use crate::core::types::{PersonId, Year};
use crate::simulation::context::TickContext;
use crate::storage::WorldSnapshot;

/// Age every living person and roll their death for the new year
pub fn resolve_mortality(ctx: &mut TickContext) {
    let year = ctx.year;
    let mut dead = AHashSet::new();

    for person in ctx.state.persons.values_mut().filter(|p| p.alive) {
        ctx.result.persons_aged += 1;
        let probability = ctx.config.death_probability(person.age(year));
        if chance(&mut ctx.rng, probability) {
            person.mark_dead(year);
            dead.insert(person.id);
        }
    }

    ctx.result.deaths = dead.len() as u32;
    if !dead.is_empty() {
        release_dead(&mut ctx.state, &dead, year);
    }

    tracing::debug!(
        aged = ctx.result.persons_aged,
        deaths = ctx.result.deaths,
        "mortality resolved"
    );
}

/// Close everything the dead held, except player-locked slots
fn release_dead(state: &mut WorldSnapshot, dead: &AHashSet<PersonId>, year: Year) {
    for employment in state.employments.values_mut() {
        if dead.contains(&employment.person_id) {
            employment.close(year);
        }
    }
    for enrollment in state.enrollments.values_mut() {
        if dead.contains(&enrollment.person_id) {
            enrollment.close(year);
        }
    }
    for position in state.positions.values_mut() {
        if !position.locked && dead.contains(&position.person_id) {
            position.close(year);
        }
    }
    for term in state.terms.values_mut() {
        if !term.player_locked && dead.contains(&term.person_id) {
            term.close(year);
        }
    }
    for marriage in state.marriages.values_mut() {
        if dead.contains(&marriage.pair.low()) || dead.contains(&marriage.pair.high()) {
            marriage.close(year);
        }
    }
}
