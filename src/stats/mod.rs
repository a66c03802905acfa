//! Stat model: the 24 ability attributes, their generation and rating

pub mod generation;
pub mod model;

pub use generation::{
    compute_overall_rating, generate_development_style, generate_peak_age,
    generate_potential_overall, generate_stat, DevelopmentStyle,
};
pub use model::{StatCategory, StatKey, Stats, STAT_COUNT, STAT_MAX, STAT_MIN};
