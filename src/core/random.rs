//! Random helpers shared by every stochastic system
//!
//! Everything takes `&mut R where R: Rng + ?Sized` so tests can hand in a
//! seeded `ChaCha8Rng` and production can hand in whatever it likes.

use rand::Rng;

/// Standard normal sample via the Box–Muller transform
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // u1 in (0, 1] so ln() stays finite
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Normal sample with the given mean and standard deviation
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    mean + standard_normal(rng) * sd
}

/// Bernoulli trial
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    if probability <= 0.0 {
        return false;
    }
    if probability >= 1.0 {
        return true;
    }
    rng.gen::<f64>() < probability
}

/// Pick one item with probability proportional to its weight
///
/// Non-positive and non-finite weights never win. Returns `None` only when
/// no item carries a positive weight.
pub fn weighted_pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [(T, f64)]) -> Option<&'a T> {
    weighted_index(rng, items.iter().map(|(_, w)| *w)).map(|idx| &items[idx].0)
}

/// Index form of [`weighted_pick`] for callers that keep weights separately
pub fn weighted_index<R, I>(rng: &mut R, weights: I) -> Option<usize>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let weights: Vec<f64> = weights
        .into_iter()
        .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    let mut roll = rng.gen::<f64>() * total;
    let mut last_positive = None;
    for (idx, weight) in weights.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }
        last_positive = Some(idx);
        if roll < *weight {
            return Some(idx);
        }
        roll -= weight;
    }

    // Float drift can leave a sliver of roll past the last bucket
    last_positive
}

/// Uniform pick, `None` on an empty slice
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.gen_range(0..items.len())])
    }
}
