//! Marriages and friendships

use ahash::AHashMap;
use rand::Rng;

use crate::core::random::{chance, pick};
use crate::core::types::{CountryId, PairKey, PersonId};
use crate::entity::{Friendship, Marriage};
use crate::simulation::context::TickContext;

pub const ADULT_AGE: u32 = 18;
pub const MAX_FRIENDSHIP_STRENGTH: u8 = 100;

pub fn resolve_relationships(ctx: &mut TickContext) {
    resolve_marriages(ctx);
    resolve_friendships(ctx);
    tracing::debug!(
        marriages = ctx.result.marriages,
        friendships = ctx.result.friendships_formed,
        "relationships resolved"
    );
}

fn resolve_marriages(ctx: &mut TickContext) {
    let year = ctx.year;
    let band = ctx.config.marriage_ages;
    let mut married = ctx.married_persons();

    // Id-ordered singles of marriage age, per country
    let mut singles: AHashMap<CountryId, Vec<PersonId>> = AHashMap::new();
    for person in ctx.state.living_persons() {
        if person.is_player || married.contains(&person.id) || !band.contains(person.age(year)) {
            continue;
        }
        if let Some(country) = person.country_id {
            singles.entry(country).or_default().push(person.id);
        }
    }

    let mut singles: Vec<(CountryId, Vec<PersonId>)> = singles.into_iter().collect();
    singles.sort_by_key(|(country, _)| *country);

    for (_, pool) in &singles {
        for &person in pool {
            if married.contains(&person) || !chance(&mut ctx.rng, ctx.config.marriage_chance) {
                continue;
            }
            let partners: Vec<PersonId> = pool
                .iter()
                .copied()
                .filter(|&other| other != person && !married.contains(&other))
                .filter(|&other| !ctx.state.marriages.contains_key(&PairKey::new(person, other)))
                .collect();
            let Some(&partner) = pick(&mut ctx.rng, &partners) else {
                continue;
            };

            let pair = PairKey::new(person, partner);
            ctx.state.marriages.insert(
                pair,
                Marriage {
                    pair,
                    start_year: year,
                    end_year: None,
                },
            );
            married.insert(person);
            married.insert(partner);
            ctx.result.marriages += 1;
        }
    }
}

fn resolve_friendships(ctx: &mut TickContext) {
    let year = ctx.year;
    let growth = ctx.config.friendship_growth;

    let mut adults: AHashMap<CountryId, Vec<PersonId>> = AHashMap::new();
    for person in ctx.state.living_persons().filter(|p| p.age(year) >= ADULT_AGE) {
        if let Some(country) = person.country_id {
            adults.entry(country).or_default().push(person.id);
        }
    }

    let mut adults: Vec<(CountryId, Vec<PersonId>)> = adults.into_iter().collect();
    adults.sort_by_key(|(country, _)| *country);

    for (_, pool) in &adults {
        if pool.len() < 2 {
            continue;
        }
        for (index, &person) in pool.iter().enumerate() {
            if !chance(&mut ctx.rng, ctx.config.friendship_chance) {
                continue;
            }
            // Uniform over everyone in the pool except `person`
            let mut other = ctx.rng.gen_range(0..pool.len() - 1);
            if other >= index {
                other += 1;
            }
            let pair = PairKey::new(person, pool[other]);

            match ctx.state.friendships.get_mut(&pair) {
                Some(friendship) => {
                    friendship.strength = friendship
                        .strength
                        .saturating_add(growth)
                        .min(MAX_FRIENDSHIP_STRENGTH);
                }
                None => {
                    let strength = ctx.rng.gen_range(10..=30);
                    ctx.state.friendships.insert(
                        pair,
                        Friendship {
                            pair,
                            strength,
                            since_year: year,
                        },
                    );
                    ctx.result.friendships_formed += 1;
                }
            }
        }
    }
}
