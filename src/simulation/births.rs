//! Births to married couples

use crate::core::random::chance;
use crate::core::types::{CountryId, PairKey};
use crate::entity::names::child_name;
use crate::entity::{Birth, Person};
use crate::simulation::context::TickContext;

pub fn resolve_births(ctx: &mut TickContext) {
    let year = ctx.year;
    let fertile = ctx.config.fertile_ages;

    // (pair, country, surname) for every couple able to have a child
    let couples: Vec<(PairKey, Option<CountryId>, String)> = ctx
        .state
        .marriages
        .values()
        .filter(|m| m.is_active())
        .filter_map(|m| {
            let first = ctx.state.persons.get(&m.pair.low())?;
            let second = ctx.state.persons.get(&m.pair.high())?;
            let able = |p: &Person| p.alive && fertile.contains(p.age(year));
            if !able(first) || !able(second) {
                return None;
            }
            let country = first.country_id.or(second.country_id);
            Some((m.pair, country, first.surname().to_string()))
        })
        .collect();

    for (pair, country_id, surname) in couples {
        if !chance(&mut ctx.rng, ctx.config.birth_chance) {
            continue;
        }
        let name = child_name(&mut ctx.rng, &surname);
        let child = Person::born(
            Birth {
                world_id: ctx.state.world.id,
                country_id,
                name,
                birth_year: year,
            },
            &mut ctx.rng,
        );
        tracing::trace!(child = %child.id, parents = ?pair, "birth");
        ctx.state.persons.insert(child.id, child);
        ctx.result.births += 1;
    }

    tracing::debug!(births = ctx.result.births, "births resolved");
}
