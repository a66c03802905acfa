//! Random generation of birth stats, potential, and development profile

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::random::{gaussian, weighted_pick};
use crate::stats::model::{Stats, StatKey, STAT_COUNT};

/// Baseline draw parameters. Narrower than the lifetime [1, 99] range so
/// newborns cluster centrally and development produces the extremes.
pub const BASELINE_MEAN: f64 = 50.0;
pub const BASELINE_SD: f64 = 15.0;
pub const BASELINE_MIN: f64 = 20.0;
pub const BASELINE_MAX: f64 = 80.0;

/// How a person's growth curve is shaped around their peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevelopmentStyle {
    Early,
    Normal,
    Late,
    Volatile,
}

impl DevelopmentStyle {
    /// Inclusive peak-age range for this style
    pub fn peak_age_range(self) -> (u32, u32) {
        match self {
            DevelopmentStyle::Early => (25, 35),
            DevelopmentStyle::Normal => (30, 45),
            DevelopmentStyle::Late => (40, 55),
            DevelopmentStyle::Volatile => (25, 50),
        }
    }
}

/// Normal draw, rounded and clamped to `[min, max]`
pub fn generate_stat<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64, min: f64, max: f64) -> f64 {
    gaussian(rng, mean, sd).round().clamp(min, max)
}

/// Rounded arithmetic mean of all 24 stats
pub fn compute_overall_rating(stats: &Stats) -> u32 {
    stats.overall()
}

/// Lifetime ceiling for a newborn
///
/// Biased upward from current ability with a floor of 45 on the mean, so
/// weak rolls still have upside. Never below `current_overall`.
pub fn generate_potential_overall<R: Rng + ?Sized>(rng: &mut R, current_overall: u32) -> u32 {
    let mean = (current_overall as f64).max(45.0) + 5.0;
    let potential = generate_stat(rng, mean, 12.0, 40.0, 99.0) as u32;
    potential.max(current_overall)
}

pub fn generate_development_style<R: Rng + ?Sized>(rng: &mut R) -> DevelopmentStyle {
    const STYLES: [(DevelopmentStyle, f64); 4] = [
        (DevelopmentStyle::Early, 0.20),
        (DevelopmentStyle::Normal, 0.50),
        (DevelopmentStyle::Late, 0.20),
        (DevelopmentStyle::Volatile, 0.10),
    ];
    weighted_pick(rng, &STYLES)
        .copied()
        .unwrap_or(DevelopmentStyle::Normal)
}

pub fn generate_peak_age<R: Rng + ?Sized>(rng: &mut R, style: DevelopmentStyle) -> u32 {
    let (lo, hi) = style.peak_age_range();
    rng.gen_range(lo..=hi)
}

impl Stats {
    /// 24 independent baseline draws
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = [0.0f32; STAT_COUNT];
        for key in StatKey::ALL {
            values[key.index()] =
                generate_stat(rng, BASELINE_MEAN, BASELINE_SD, BASELINE_MIN, BASELINE_MAX) as f32;
        }
        Stats::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_stat_bounds_and_rounding() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..5_000 {
            let v = generate_stat(&mut rng, 50.0, 15.0, 20.0, 80.0);
            assert!((20.0..=80.0).contains(&v));
            assert_eq!(v, v.round());
        }
    }

    #[test]
    fn test_baseline_stats_cluster_centrally() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let stats = Stats::generate(&mut rng);
        assert!(stats.values().iter().all(|v| (20.0..=80.0).contains(v)));
    }

    #[test]
    fn test_potential_never_below_current() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for current in [20, 45, 70, 80, 95] {
            for _ in 0..500 {
                let p = generate_potential_overall(&mut rng, current);
                assert!(p >= current);
                assert!(p <= 99);
            }
        }
    }

    #[test]
    fn test_elite_potential_is_rare() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let elite = (0..10_000)
            .filter(|_| generate_potential_overall(&mut rng, 50) >= 85)
            .count();
        // mean 55, sd 12: 85+ is roughly 2.5 sd out
        assert!(elite < 300, "{} elite potentials", elite);
    }

    #[test]
    fn test_style_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let mut counts = [0usize; 4];
        for _ in 0..10_000 {
            let idx = match generate_development_style(&mut rng) {
                DevelopmentStyle::Early => 0,
                DevelopmentStyle::Normal => 1,
                DevelopmentStyle::Late => 2,
                DevelopmentStyle::Volatile => 3,
            };
            counts[idx] += 1;
        }
        assert!((1_700..2_300).contains(&counts[0]), "{:?}", counts);
        assert!((4_600..5_400).contains(&counts[1]), "{:?}", counts);
        assert!((1_700..2_300).contains(&counts[2]), "{:?}", counts);
        assert!((800..1_200).contains(&counts[3]), "{:?}", counts);
    }

    #[test]
    fn test_peak_age_within_style_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(16);
        for style in [
            DevelopmentStyle::Early,
            DevelopmentStyle::Normal,
            DevelopmentStyle::Late,
            DevelopmentStyle::Volatile,
        ] {
            let (lo, hi) = style.peak_age_range();
            for _ in 0..200 {
                let age = generate_peak_age(&mut rng, style);
                assert!(age >= lo && age <= hi);
            }
        }
    }
}
