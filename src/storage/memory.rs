//! In-memory reference store
//!
//! A commit applies its writes to a clone of the world and swaps the clone in
//! only when every write succeeded, so a failed commit leaves nothing behind.

use std::sync::RwLock;

use ahash::AHashMap;

use crate::core::error::{Result, SimError};
use crate::core::types::{WorldId, Year};
use crate::entity::World;
use crate::storage::snapshot::WorldSnapshot;
use crate::storage::write::WriteSet;
use crate::storage::WorldStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    worlds: RwLock<AHashMap<WorldId, WorldSnapshot>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty world
    pub fn create_world(&self, world: World) -> Result<()> {
        let mut worlds = self
            .worlds
            .write()
            .map_err(|_| SimError::Storage("store lock poisoned".into()))?;
        if worlds.contains_key(&world.id) {
            return Err(SimError::Storage(format!("world {} already exists", world.id)));
        }
        worlds.insert(world.id, WorldSnapshot::new(world));
        Ok(())
    }

    /// Store a fully built snapshot, replacing any previous one
    pub fn insert_snapshot(&self, snapshot: WorldSnapshot) -> Result<()> {
        let mut worlds = self
            .worlds
            .write()
            .map_err(|_| SimError::Storage("store lock poisoned".into()))?;
        worlds.insert(snapshot.world.id, snapshot);
        Ok(())
    }

    pub fn world_ids(&self) -> Result<Vec<WorldId>> {
        let worlds = self
            .worlds
            .read()
            .map_err(|_| SimError::Storage("store lock poisoned".into()))?;
        let mut ids: Vec<WorldId> = worlds.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}

impl WorldStore for InMemoryStore {
    fn load_world(&self, world_id: WorldId) -> Result<WorldSnapshot> {
        let worlds = self
            .worlds
            .read()
            .map_err(|_| SimError::Storage("store lock poisoned".into()))?;
        worlds
            .get(&world_id)
            .cloned()
            .ok_or_else(|| SimError::Validation(format!("world {} not found", world_id)))
    }

    fn commit(&self, world_id: WorldId, base_year: Year, writes: WriteSet) -> Result<()> {
        let mut worlds = self
            .worlds
            .write()
            .map_err(|_| SimError::Storage("store lock poisoned".into()))?;
        let current = worlds
            .get(&world_id)
            .ok_or_else(|| {
                SimError::Storage(format!("world {} vanished before commit", world_id))
            })?;

        if current.world.current_year != base_year {
            return Err(SimError::Storage(format!(
                "world {} moved from year {} to {} during the tick",
                world_id, base_year, current.world.current_year
            )));
        }

        let mut next = current.clone();
        for write in writes {
            next.apply(write)?;
        }
        worlds.insert(world_id, next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CountryId;
    use crate::entity::{Country, CountryYearPerformance};
    use crate::storage::write::Write;

    fn store_with_world() -> (InMemoryStore, WorldId) {
        let store = InMemoryStore::new();
        let world = World {
            id: WorldId::new(),
            name: "Test".into(),
            current_year: 2000,
        };
        let id = world.id;
        store.create_world(world).unwrap();
        (store, id)
    }

    #[test]
    fn test_world_ids_sorted() {
        let (store, first) = store_with_world();
        let second = WorldId::new();
        store
            .create_world(World {
                id: second,
                name: "Other".into(),
                current_year: 1990,
            })
            .unwrap();

        let mut expected = vec![first, second];
        expected.sort();
        assert_eq!(store.world_ids().unwrap(), expected);
        assert!(store
            .create_world(World {
                id: first,
                name: "Duplicate".into(),
                current_year: 2000,
            })
            .is_err());
    }

    #[test]
    fn test_missing_world_is_validation_error() {
        let store = InMemoryStore::new();
        assert!(matches!(store.load_world(WorldId::new()), Err(SimError::Validation(_))));
    }

    #[test]
    fn test_stale_base_year_rejected() {
        let (store, id) = store_with_world();
        let writes: WriteSet = vec![Write::SetCurrentYear(2001)].into_iter().collect();
        assert!(matches!(store.commit(id, 1999, writes), Err(SimError::Storage(_))));
        assert_eq!(store.load_world(id).unwrap().world.current_year, 2000);
    }

    #[test]
    fn test_failed_commit_applies_nothing() {
        let (store, id) = store_with_world();
        let country = Country {
            id: CountryId::new(),
            world_id: id,
            name: "Avalon".into(),
        };
        let perf = CountryYearPerformance {
            country_id: country.id,
            year: 2000,
            company_count: 0,
            total_output: 0.0,
            average_output: 0.0,
            population: 0,
            employed: 0,
            average_overall: 0.0,
        };

        let writes: WriteSet = vec![
            Write::UpsertCountry(country),
            Write::SetCurrentYear(2001),
            Write::InsertCountryPerformance(perf.clone()),
            Write::InsertCountryPerformance(perf),
        ]
        .into_iter()
        .collect();

        assert!(store.commit(id, 2000, writes).is_err());
        let snapshot = store.load_world(id).unwrap();
        assert!(snapshot.countries.is_empty());
        assert_eq!(snapshot.world.current_year, 2000);
    }
}
