//! Development engine - yearly stat evolution
//!
//! Each year every stat moves by a step sized by the gap between the
//! person's overall and their potential. The step is positive while they are
//! younger than the stat's peak age and negative afterwards. Growth is
//! strongest close to the peak. Physical stats peak earlier and cognitive
//! stats later than the person's overall peak, so bodies decline before minds.

use rand::Rng;

use crate::core::random::gaussian;
use crate::stats::{DevelopmentStyle, StatKey, Stats};

/// Physical stats peak this many years before the person's peak
pub const PHYSICAL_PEAK_OFFSET: i32 = -5;
/// Cognitive stats peak this many years after the person's peak
pub const COGNITIVE_PEAK_OFFSET: i32 = 5;

/// Share of the potential gap a stat targets each year
const TARGET_PULL: f32 = 0.4;
/// Share of the remaining distance to target closed per year
const STEP_FRACTION: f32 = 0.25;
/// Headroom added to the growth cap
const STEP_HEADROOM: f32 = 0.5;

/// Inputs the engine needs about one person
#[derive(Debug, Clone, Copy)]
pub struct DevelopmentProfile {
    pub potential_overall: u32,
    pub peak_age: u32,
    pub style: DevelopmentStyle,
}

/// Growth multipliers and noise per development style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleModifiers {
    pub pre_peak: f32,
    pub post_peak: f32,
    /// Standard deviation of the yearly per-stat noise
    pub volatility: f32,
}

impl StyleModifiers {
    pub fn for_style(style: DevelopmentStyle) -> Self {
        match style {
            DevelopmentStyle::Early => Self { pre_peak: 1.3, post_peak: 0.7, volatility: 0.4 },
            DevelopmentStyle::Normal => Self { pre_peak: 1.0, post_peak: 1.0, volatility: 0.4 },
            DevelopmentStyle::Late => Self { pre_peak: 0.7, post_peak: 1.3, volatility: 0.4 },
            DevelopmentStyle::Volatile => Self { pre_peak: 1.0, post_peak: 1.0, volatility: 1.2 },
        }
    }

    pub fn multiplier(&self, before_peak: bool) -> f32 {
        if before_peak {
            self.pre_peak
        } else {
            self.post_peak
        }
    }
}

/// Growth intensity as a step function of the distance to the peak age
pub fn base_growth(distance: u32) -> f32 {
    if distance > 15 {
        0.3
    } else if distance > 8 {
        0.7
    } else if distance > 3 {
        1.2
    } else {
        1.8
    }
}

/// Peak age for one stat, shifted for physical and cognitive stats
pub fn stat_peak_age(key: StatKey, peak_age: u32) -> u32 {
    let offset = match key {
        StatKey::Strength
        | StatKey::Endurance
        | StatKey::Athleticism
        | StatKey::Reflexes
        | StatKey::Appearance => PHYSICAL_PEAK_OFFSET,
        StatKey::Intelligence | StatKey::Judgment | StatKey::Memory => COGNITIVE_PEAK_OFFSET,
        _ => 0,
    };
    (peak_age as i32 + offset).max(0) as u32
}

/// Signed yearly growth for a given age and peak
///
/// Positive before the peak, negative from the peak onwards.
pub fn signed_growth(age: u32, peak_age: u32, modifiers: &StyleModifiers) -> f32 {
    let before_peak = age < peak_age;
    let direction = if before_peak { 1.0 } else { -1.0 };
    base_growth(age.abs_diff(peak_age)) * modifiers.multiplier(before_peak) * direction
}

/// Deterministic yearly change of one stat, before noise
///
/// The magnitude closes a quarter of the distance to the stat's target,
/// capped at `|growth| + 0.5`; the sign follows `growth`.
pub fn yearly_step(current: f32, current_overall: f32, potential_overall: u32, growth: f32) -> f32 {
    let target = current + (potential_overall as f32 - current_overall) * TARGET_PULL;
    let step = ((target - current).abs() * STEP_FRACTION).min(growth.abs() + STEP_HEADROOM);
    step * growth.signum()
}

/// Produce next year's stats for a person who has just turned `new_age`
///
/// The returned vector replaces the old one wholesale; every value is
/// clamped into [1, 99].
pub fn develop<R: Rng + ?Sized>(
    stats: &Stats,
    new_age: u32,
    profile: &DevelopmentProfile,
    rng: &mut R,
) -> Stats {
    let current_overall = stats.mean();
    let modifiers = StyleModifiers::for_style(profile.style);

    let mut next = *stats;
    for (key, current) in stats.iter() {
        let peak = stat_peak_age(key, profile.peak_age);
        let growth = signed_growth(new_age, peak, &modifiers);
        let delta = yearly_step(current, current_overall, profile.potential_overall, growth);

        let noise = gaussian(rng, 0.0, modifiers.volatility as f64) as f32;
        next.set(key, current + delta + noise);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn profile(potential: u32, peak: u32, style: DevelopmentStyle) -> DevelopmentProfile {
        DevelopmentProfile {
            potential_overall: potential,
            peak_age: peak,
            style,
        }
    }

    #[test]
    fn test_base_growth_steps() {
        assert_eq!(base_growth(0), 1.8);
        assert_eq!(base_growth(3), 1.8);
        assert_eq!(base_growth(4), 1.2);
        assert_eq!(base_growth(8), 1.2);
        assert_eq!(base_growth(9), 0.7);
        assert_eq!(base_growth(15), 0.7);
        assert_eq!(base_growth(16), 0.3);
        assert_eq!(base_growth(20), 0.3);
    }

    #[test]
    fn test_stat_peak_offsets() {
        assert_eq!(stat_peak_age(StatKey::Strength, 35), 30);
        assert_eq!(stat_peak_age(StatKey::Appearance, 35), 30);
        assert_eq!(stat_peak_age(StatKey::Judgment, 35), 40);
        assert_eq!(stat_peak_age(StatKey::Memory, 35), 40);
        assert_eq!(stat_peak_age(StatKey::Vitality, 35), 35);
        assert_eq!(stat_peak_age(StatKey::Charisma, 35), 35);
    }

    #[test]
    fn test_style_modifiers() {
        let early = StyleModifiers::for_style(DevelopmentStyle::Early);
        assert_eq!(early.multiplier(true), 1.3);
        assert_eq!(early.multiplier(false), 0.7);
        let late = StyleModifiers::for_style(DevelopmentStyle::Late);
        assert_eq!(late.multiplier(true), 0.7);
        assert_eq!(late.multiplier(false), 1.3);
        assert_eq!(StyleModifiers::for_style(DevelopmentStyle::Volatile).volatility, 1.2);
        assert_eq!(StyleModifiers::for_style(DevelopmentStyle::Normal).volatility, 0.4);
    }

    #[test]
    fn test_signed_growth_direction() {
        let normal = StyleModifiers::for_style(DevelopmentStyle::Normal);
        assert_eq!(signed_growth(20, 40, &normal), 0.3);
        assert_eq!(signed_growth(40, 40, &normal), -1.8);
        assert_eq!(signed_growth(45, 40, &normal), -1.2);
    }

    #[test]
    fn test_young_person_grows_toward_potential() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut stats = Stats::uniform(40.0);
        let p = profile(80, 35, DevelopmentStyle::Normal);

        for age in 15..30 {
            stats = develop(&stats, age, &p, &mut rng);
        }

        assert!(stats.mean() > 45.0, "mean {}", stats.mean());
    }

    #[test]
    fn test_yearly_step_formula() {
        // Gap of 20 pulls the target 8 away; a quarter of that is 2
        assert_eq!(yearly_step(50.0, 50.0, 70, 1.8), 2.0);
        // Capped at |growth| + 0.5
        assert_eq!(yearly_step(50.0, 50.0, 90, 0.3), 0.8);
        // Sign follows growth, not the side of the target
        assert_eq!(yearly_step(50.0, 50.0, 70, -1.8), -2.0);
        assert_eq!(yearly_step(60.0, 60.0, 50, 1.2), 1.0);
        // At potential there is nothing to close
        assert_eq!(yearly_step(60.0, 60.0, 60, -1.8), 0.0);
        assert_eq!(yearly_step(60.0, 60.0, 60, 1.8), 0.0);
    }

    #[test]
    fn test_at_potential_only_noise_moves_stats() {
        let stats = Stats::uniform(60.0);
        let p = profile(60, 40, DevelopmentStyle::Normal);

        let mut total = 0.0;
        for seed in 0..200 {
            let next = develop(&stats, 40, &p, &mut ChaCha8Rng::seed_from_u64(seed));
            total += next.mean() - stats.mean();
        }
        let mean_change = total / 200.0;
        assert!(mean_change.abs() < 0.1, "mean change {}", mean_change);
    }

    #[test]
    fn test_old_person_declines() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut stats = Stats::uniform(60.0);
        let p = profile(40, 35, DevelopmentStyle::Normal);

        for age in 50..70 {
            stats = develop(&stats, age, &p, &mut rng);
        }

        assert!(stats.mean() < 55.0, "mean {}", stats.mean());
    }

    #[test]
    fn test_physical_declines_before_cognitive() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut stats = Stats::uniform(60.0);
        let p = profile(50, 40, DevelopmentStyle::Normal);

        // Between the physical peak (35) and the cognitive peak (45)
        for age in 36..44 {
            stats = develop(&stats, age, &p, &mut rng);
        }

        assert!(stats.get(StatKey::Strength) < stats.get(StatKey::Intelligence));
    }

    #[test]
    fn test_development_is_seed_deterministic() {
        let stats = Stats::uniform(50.0);
        let p = profile(70, 30, DevelopmentStyle::Volatile);
        let a = develop(&stats, 22, &p, &mut ChaCha8Rng::seed_from_u64(5));
        let b = develop(&stats, 22, &p, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_extremes_stay_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let high_profile = profile(99, 40, DevelopmentStyle::Volatile);
        let low_profile = profile(40, 25, DevelopmentStyle::Volatile);
        let high = develop(&Stats::uniform(99.0), 20, &high_profile, &mut rng);
        let low = develop(&Stats::uniform(1.0), 90, &low_profile, &mut rng);
        assert!(high.in_bounds());
        assert!(low.in_bounds());
    }
}
