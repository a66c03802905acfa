//! Per-world tick exclusion

use std::sync::{Mutex, MutexGuard};

use ahash::AHashSet;

use crate::core::error::{Result, SimError};
use crate::core::types::WorldId;

/// Registry of worlds with a tick in flight
///
/// Ticks on different worlds never contend; a second tick on the same world
/// is refused instead of queued.
#[derive(Debug, Default)]
pub struct TickLocks {
    active: Mutex<AHashSet<WorldId>>,
}

impl TickLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, world_id: WorldId) -> Result<TickGuard<'_>> {
        let mut active = self.lock_set();
        if !active.insert(world_id) {
            return Err(SimError::TickInProgress(world_id));
        }
        Ok(TickGuard {
            locks: self,
            world_id,
        })
    }

    pub fn is_locked(&self, world_id: WorldId) -> bool {
        self.lock_set().contains(&world_id)
    }

    fn lock_set(&self) -> MutexGuard<'_, AHashSet<WorldId>> {
        // The set is only ever inserted into or removed from, so a panic
        // elsewhere cannot leave it half-updated.
        self.active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases the world when dropped, including on early error returns
#[derive(Debug)]
pub struct TickGuard<'a> {
    locks: &'a TickLocks,
    world_id: WorldId,
}

impl Drop for TickGuard<'_> {
    fn drop(&mut self) {
        self.locks.lock_set().remove(&self.world_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_refused() {
        let locks = TickLocks::new();
        let world = WorldId::new();

        let guard = locks.acquire(world).unwrap();
        assert!(matches!(locks.acquire(world), Err(SimError::TickInProgress(_))));
        assert!(locks.is_locked(world));

        drop(guard);
        assert!(!locks.is_locked(world));
        assert!(locks.acquire(world).is_ok());
    }

    #[test]
    fn test_different_worlds_independent() {
        let locks = TickLocks::new();
        let _a = locks.acquire(WorldId::new()).unwrap();
        let _b = locks.acquire(WorldId::new()).unwrap();
    }
}
