//! Storage boundary
//!
//! The tick only ever talks to a [`WorldStore`]: one read of the whole world
//! at the start, one atomic commit at the end.

pub mod memory;
pub mod snapshot;
pub mod write;

pub use memory::InMemoryStore;
pub use snapshot::WorldSnapshot;
pub use write::{Write, WriteSet};

use crate::core::error::Result;
use crate::core::types::{WorldId, Year};

pub trait WorldStore: Send + Sync {
    /// Fetch every row belonging to a world
    ///
    /// A missing world is a validation error.
    fn load_world(&self, world_id: WorldId) -> Result<WorldSnapshot>;

    /// Apply all writes atomically
    ///
    /// Must fail without applying anything if the stored year no longer
    /// equals `base_year` or if any single write is rejected.
    fn commit(&self, world_id: WorldId, base_year: Year, writes: WriteSet) -> Result<()>;
}

impl<S: WorldStore + ?Sized> WorldStore for std::sync::Arc<S> {
    fn load_world(&self, world_id: WorldId) -> Result<WorldSnapshot> {
        (**self).load_world(world_id)
    }

    fn commit(&self, world_id: WorldId, base_year: Year, writes: WriteSet) -> Result<()> {
        (**self).commit(world_id, base_year, writes)
    }
}
