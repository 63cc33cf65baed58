//! SA execution loop.

use log::{info, trace};
use rand::Rng;

use super::config::SaConfig;
use crate::acceptance::metropolis_accept;
use crate::error::ConfigError;
use crate::objective::Objective;
use crate::random::rng_from_seed;
use crate::types::{Path, Sample, SearchBounds};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Every accepted position, starting with the random initial point.
    pub path: Path,

    /// Position held when the temperature reached the floor.
    pub final_sample: Sample,

    /// Lowest position visited along the path.
    pub best: Sample,

    /// Number of cooling steps performed.
    pub temperature_steps: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Total number of trial candidates evaluated.
    pub trials: usize,

    /// Number of accepted moves (`path.len() - 1`).
    pub accepted_moves: usize,

    /// Number of accepted moves that strictly lowered the value.
    pub improving_moves: usize,
}

/// Executes the Simulated Annealing search.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG built from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &SaConfig,
        bounds: &SearchBounds,
    ) -> Result<SaResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, bounds, &mut rng)
    }

    /// Runs SA drawing from a caller-owned RNG; `config.seed` is ignored.
    ///
    /// `bounds` only matters when `config.domain` is
    /// [`SamplingDomain::Bounds`](super::SamplingDomain::Bounds).
    pub fn run_with_rng<O, R>(
        objective: &O,
        config: &SaConfig,
        bounds: &SearchBounds,
        rng: &mut R,
    ) -> Result<SaResult, ConfigError>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;
        let region = config.domain.region(bounds);
        region.validate()?;

        let (x, y) = region.sample_point(rng);
        let mut current = Sample::evaluate(objective, x, y);
        let mut best = current;
        let mut path = vec![current];

        let mut temperature = config.initial_temperature;
        let mut temperature_steps = 0usize;
        let mut trials = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            for _ in 0..config.trials_per_temperature {
                let (x, y) = region.sample_point(rng);
                let candidate = Sample::evaluate(objective, x, y);
                trials += 1;

                if metropolis_accept(temperature, current.z, candidate.z, rng) {
                    if candidate.z < current.z {
                        improving_moves += 1;
                    }
                    current = candidate;
                    path.push(current);

                    if current.z < best.z {
                        best = current;
                    }
                }
            }

            trace!(
                "step {temperature_steps}: T={temperature:.6e} z={:.6} accepted={}",
                current.z,
                path.len() - 1
            );

            temperature *= config.alpha;
            temperature_steps += 1;
        }

        info!(
            "annealing minimum: x = {}, y = {}, z = {} after {temperature_steps} cooling steps",
            current.x, current.y, current.z
        );

        let accepted_moves = path.len() - 1;
        Ok(SaResult {
            path,
            final_sample: current,
            best,
            temperature_steps,
            final_temperature: temperature,
            trials,
            accepted_moves,
            improving_moves,
        })
    }
}
