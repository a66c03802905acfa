//! Yearly tick - orchestrates one simulated year for a world
//!
//! The passes run in a fixed order over a private copy of the world:
//! mortality -> development -> births -> schooling -> employment ->
//! hierarchy -> elections -> relationships -> performance rows.
//!
//! Nothing reaches the store unless every pass and the consistency check
//! succeed; the whole year is then committed as one write set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimConfig;
use crate::core::error::Result;
use crate::core::types::{WorldId, Year};
use crate::simulation::aggregates::record_performance;
use crate::simulation::births::resolve_births;
use crate::simulation::consistency::check_consistency;
use crate::simulation::context::TickContext;
use crate::simulation::elections::resolve_elections;
use crate::simulation::employment::resolve_employment;
use crate::simulation::growth::develop_population;
use crate::simulation::hierarchy::resolve_hierarchy;
use crate::simulation::lock::TickLocks;
use crate::simulation::mortality::resolve_mortality;
use crate::simulation::relationships::resolve_relationships;
use crate::simulation::schooling::resolve_schooling;
use crate::storage::{Write, WorldStore};

/// Counts of everything one tick changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickResult {
    pub world_id: WorldId,
    pub new_year: Year,
    pub persons_aged: u32,
    pub deaths: u32,
    pub births: u32,
    pub developed: u32,
    pub enrollments_opened: u32,
    pub enrollments_closed: u32,
    pub new_employments: u32,
    pub promotions: u32,
    pub retirements: u32,
    pub positions_filled: u32,
    pub positions_vacated: u32,
    pub elections_held: u32,
    pub marriages: u32,
    pub friendships_formed: u32,
    pub performance_rows: u32,
}

impl TickResult {
    pub fn new(world_id: WorldId, new_year: Year) -> Self {
        Self {
            world_id,
            new_year,
            persons_aged: 0,
            deaths: 0,
            births: 0,
            developed: 0,
            enrollments_opened: 0,
            enrollments_closed: 0,
            new_employments: 0,
            promotions: 0,
            retirements: 0,
            positions_filled: 0,
            positions_vacated: 0,
            elections_held: 0,
            marriages: 0,
            friendships_formed: 0,
            performance_rows: 0,
        }
    }
}

/// Runs yearly ticks against a store
///
/// Shareable across threads; ticks for different worlds proceed in
/// parallel, a second tick for the same world is refused.
pub struct YearlySimulator<S: WorldStore> {
    store: S,
    config: SimConfig,
    locks: TickLocks,
}

impl<S: WorldStore> YearlySimulator<S> {
    pub fn new(store: S, config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            locks: TickLocks::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn locks(&self) -> &TickLocks {
        &self.locks
    }

    /// Advance a world by one year using OS entropy
    pub fn run_yearly_tick(&self, world_id: WorldId) -> Result<TickResult> {
        let mut rng = ChaCha8Rng::from_entropy();
        self.run_yearly_tick_with_rng(world_id, &mut rng)
    }

    /// Advance a world by one year; the same rng state gives the same year
    pub fn run_yearly_tick_with_rng<R: Rng + ?Sized>(
        &self,
        world_id: WorldId,
        rng: &mut R,
    ) -> Result<TickResult> {
        let _guard = self.locks.acquire(world_id)?;

        match self.tick(world_id, rng) {
            Ok(result) => {
                tracing::info!(
                    world = %world_id,
                    year = result.new_year,
                    deaths = result.deaths,
                    births = result.births,
                    hires = result.new_employments,
                    elections = result.elections_held,
                    "yearly tick committed"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(world = %world_id, error = %err, "yearly tick aborted");
                Err(err)
            }
        }
    }

    fn tick<R: Rng + ?Sized>(&self, world_id: WorldId, rng: &mut R) -> Result<TickResult> {
        let base = self.store.load_world(world_id)?;
        base.validate()?;

        let base_year = base.world.current_year;
        let new_year = base_year + 1;
        tracing::info!(
            world = %world_id,
            year = new_year,
            population = base.persons.len(),
            "yearly tick started"
        );

        let mut ctx = TickContext {
            state: base.clone(),
            year: new_year,
            config: &self.config,
            rng: ChaCha8Rng::seed_from_u64(rng.gen()),
            seed: rng.gen(),
            result: TickResult::new(world_id, new_year),
        };

        resolve_mortality(&mut ctx);
        develop_population(&mut ctx);
        resolve_births(&mut ctx);
        resolve_schooling(&mut ctx);
        resolve_employment(&mut ctx);
        resolve_hierarchy(&mut ctx);
        resolve_elections(&mut ctx);
        resolve_relationships(&mut ctx);
        record_performance(&mut ctx)?;

        ctx.state.world.current_year = new_year;
        check_consistency(&base, &ctx.state)?;

        let mut writes = ctx.state.diff(&base);
        if !writes.iter().any(|w| matches!(w, Write::SetCurrentYear(_))) {
            writes.push(Write::SetCurrentYear(new_year));
        }
        tracing::debug!(writes = writes.len(), "committing tick");
        self.store.commit(world_id, base_year, writes)?;

        Ok(ctx.result)
    }
}
