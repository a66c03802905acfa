//! Core type definitions used throughout the codebase

use derive_more::Display;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simulated calendar year
pub type Year = i32;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Display,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Draw an id from a caller-supplied random source.
            ///
            /// Rows created inside a tick use this so a seeded tick
            /// produces the same ids every run.
            pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

id_type!(
    /// Unique identifier for a simulated world
    WorldId
);
id_type!(
    /// Unique identifier for countries
    CountryId
);
id_type!(
    /// Unique identifier for persons
    PersonId
);
id_type!(CompanyId);
id_type!(SchoolId);
id_type!(
    /// Unique identifier for political offices
    OfficeId
);
id_type!(
    /// Unique identifier for a ranked industry role
    RoleId
);
id_type!(EmploymentId);
id_type!(EnrollmentId);
id_type!(PositionId);
id_type!(TermId);

/// Order-independent key for undirected person relations
///
/// `PairKey::new(a, b) == PairKey::new(b, a)`, so a marriage or friendship
/// can only ever be stored once per pair. The fields stay private and
/// deserialization goes through [`PairKey::new`], so `low <= high` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawPairKey")]
pub struct PairKey {
    low: PersonId,
    high: PersonId,
}

#[derive(Deserialize)]
struct RawPairKey {
    low: PersonId,
    high: PersonId,
}

impl From<RawPairKey> for PairKey {
    fn from(raw: RawPairKey) -> Self {
        PairKey::new(raw.low, raw.high)
    }
}

impl PairKey {
    pub fn new(a: PersonId, b: PersonId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> PersonId {
        self.low
    }

    pub fn high(&self) -> PersonId {
        self.high
    }

    /// A person paired with themself
    pub fn is_self_pair(&self) -> bool {
        self.low == self.high
    }

    pub fn contains(&self, person: PersonId) -> bool {
        self.low == person || self.high == person
    }

    /// The other member of the pair, if `person` is one of them
    pub fn partner_of(&self, person: PersonId) -> Option<PersonId> {
        if self.low == person {
            Some(self.high)
        } else if self.high == person {
            Some(self.low)
        } else {
            None
        }
    }
}
