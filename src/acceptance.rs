//! Metropolis move acceptance for simulated annealing.
//!
//! The acceptance probability is `exp(-(z_candidate - z_current) / T)`.
//! It is deliberately left unclamped: an improving move yields a value
//! above 1, which every uniform draw from `[0, 1)` falls under, so
//! improving moves are always accepted without a separate branch.

use rand::Rng;

/// Raw (unclamped) Metropolis acceptance probability.
///
/// `temperature` must be strictly positive.
pub fn acceptance_probability(temperature: f64, z_current: f64, z_candidate: f64) -> f64 {
    (-(z_candidate - z_current) / temperature).exp()
}

/// Decides whether to move from `z_current` to `z_candidate`.
///
/// Consumes exactly one uniform draw from `rng` on every call, improving
/// move or not, and accepts iff the draw is `<=` the probability.
pub fn metropolis_accept<R: Rng>(
    temperature: f64,
    z_current: f64,
    z_candidate: f64,
    rng: &mut R,
) -> bool {
    let draw: f64 = rng.random();
    draw <= acceptance_probability(temperature, z_current, z_candidate)
}
