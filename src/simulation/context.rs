//! Mutable state threaded through the passes of one tick

use ahash::{AHashMap, AHashSet};
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimConfig;
use crate::core::types::{EmploymentId, EnrollmentId, PersonId, Year};
use crate::simulation::tick::TickResult;
use crate::storage::WorldSnapshot;

pub struct TickContext<'a> {
    /// Private working copy; diffed against the loaded snapshot at commit
    pub state: WorldSnapshot,
    pub year: Year,
    pub config: &'a SimConfig,
    /// Sequential draws for every pass except development
    pub rng: ChaCha8Rng,
    /// Root of the per-person development streams
    pub seed: u64,
    pub result: TickResult,
}

impl<'a> TickContext<'a> {
    /// Living persons in id order
    pub fn living_ids(&self) -> Vec<PersonId> {
        self.state.living_persons().map(|p| p.id).collect()
    }

    /// Person -> their active employment, at the moment of the call
    pub fn employment_index(&self) -> AHashMap<PersonId, EmploymentId> {
        self.state
            .employments
            .values()
            .filter(|e| e.is_active())
            .map(|e| (e.person_id, e.id))
            .collect()
    }

    pub fn enrollment_index(&self) -> AHashMap<PersonId, EnrollmentId> {
        self.state
            .enrollments
            .values()
            .filter(|e| e.is_active())
            .map(|e| (e.person_id, e.id))
            .collect()
    }

    pub fn married_persons(&self) -> AHashSet<PersonId> {
        self.state
            .marriages
            .values()
            .filter(|m| m.is_active())
            .flat_map(|m| [m.pair.low(), m.pair.high()])
            .collect()
    }
}
