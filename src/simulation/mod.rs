//! Yearly simulation tick
//!
//! [`YearlySimulator`] owns the orchestration; each pass lives in its own
//! module and works on the shared [`context::TickContext`].

pub mod aggregates;
pub mod births;
pub mod consistency;
pub mod context;
pub mod elections;
pub mod employment;
pub mod growth;
pub mod hierarchy;
pub mod lock;
pub mod mortality;
pub mod relationships;
pub mod schooling;
pub mod tick;

pub use consistency::check_consistency;
pub use elections::MIN_ELECTION_WEIGHT;
pub use employment::{next_title, starting_salary, JOB_LADDER};
pub use hierarchy::role_fit;
pub use lock::{TickGuard, TickLocks};
pub use schooling::admission_probability;
pub use tick::{TickResult, YearlySimulator};
