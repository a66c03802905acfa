//! Development pass
//!
//! Each person draws from their own ChaCha stream, selected by the tick seed
//! and their id, so the result is the same whether the pass runs on one
//! thread or many.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::core::types::{PersonId, Year};
use crate::development::develop;
use crate::entity::Person;
use crate::simulation::context::TickContext;

/// Deterministic development stream for one person in one tick
pub fn person_rng(seed: u64, person: PersonId) -> ChaCha8Rng {
    let bits = person.0.as_u128();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream((bits as u64) ^ ((bits >> 64) as u64));
    rng
}

fn develop_person(person: &mut Person, year: Year, seed: u64) {
    let mut rng = person_rng(seed, person.id);
    let profile = person.development_profile();
    person.stats = develop(&person.stats, person.age(year), &profile, &mut rng);
}

/// Replace every living person's stats with next year's
pub fn develop_population(ctx: &mut TickContext) {
    let year = ctx.year;
    let seed = ctx.seed;
    let mut living: Vec<&mut Person> = ctx.state.persons.values_mut().filter(|p| p.alive).collect();

    if living.len() >= ctx.config.parallel_threshold {
        living
            .par_iter_mut()
            .for_each(|person| develop_person(person, year, seed));
    } else {
        for person in living.iter_mut() {
            develop_person(person, year, seed);
        }
    }

    ctx.result.developed = living.len() as u32;
    tracing::debug!(developed = ctx.result.developed, "development applied");
}
