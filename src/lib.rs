//! Populace - yearly population and institution simulation

pub mod aggregate;
pub mod core;
pub mod development;
pub mod entity;
pub mod personality;
pub mod prospect;
pub mod simulation;
pub mod stats;
pub mod storage;
