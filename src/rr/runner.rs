//! RR execution loop.

use log::{debug, info};
use rand::Rng;

use super::config::RrConfig;
use crate::error::ConfigError;
use crate::hc::HcRunner;
use crate::objective::Objective;
use crate::random::rng_from_seed;
use crate::types::{Path, Sample, SearchBounds};

/// Result of a random-restart run.
#[derive(Debug, Clone)]
pub struct RrResult {
    /// Concatenated paths of all restarts, in restart order.
    pub path: Path,

    /// Lowest local minimum over all restarts (first one wins on ties).
    pub best: Sample,

    /// Index of the restart that produced `best`.
    pub best_restart: usize,

    /// Final sample of each restart.
    pub extrema: Vec<Sample>,

    /// Path length of each restart; these sum to `path.len()`.
    pub restart_lengths: Vec<usize>,
}

/// Executes hillclimbing with random restarts.
pub struct RrRunner;

impl RrRunner {
    /// Runs RR with an RNG built from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &RrConfig,
        bounds: &SearchBounds,
    ) -> Result<RrResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, config, bounds, &mut rng)
    }

    /// Runs RR drawing restart corners from a caller-owned RNG.
    ///
    /// `config.seed` is ignored. Restart `i` climbs from a uniform
    /// `(x0, y0)` in `bounds` down to the `xmin`/`ymin` floor of `bounds`.
    pub fn run_with_rng<O, R>(
        objective: &O,
        config: &RrConfig,
        bounds: &SearchBounds,
        rng: &mut R,
    ) -> Result<RrResult, ConfigError>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;
        bounds.validate()?;

        let mut path = Path::new();
        let mut extrema = Vec::with_capacity(config.num_restarts);
        let mut restart_lengths = Vec::with_capacity(config.num_restarts);
        let mut best: Option<(usize, Sample)> = None;

        for restart in 0..config.num_restarts {
            let (x_start, y_start) = bounds.sample_point(rng);
            let corner = SearchBounds::new(bounds.xmin, x_start, bounds.ymin, y_start);

            let climb = HcRunner::climb(objective, config.step_size, &corner);
            let extremum = climb.final_sample;
            debug!(
                "restart {restart}: start=({x_start:.4}, {y_start:.4}) steps={} z={:.6}",
                climb.steps, extremum.z
            );

            restart_lengths.push(climb.path.len());
            path.extend(climb.path);
            extrema.push(extremum);

            match best {
                Some((_, b)) if extremum.z >= b.z => {}
                _ => best = Some((restart, extremum)),
            }
        }

        let (best_restart, best) = best.ok_or(ConfigError::NoRestarts)?;
        info!(
            "random restart minimum: x = {}, y = {}, z = {} (restart {best_restart} of {})",
            best.x, best.y, best.z, config.num_restarts
        );

        Ok(RrResult {
            path,
            best,
            best_restart,
            extrema,
            restart_lengths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::WavySurface;
    use crate::random::create_rng;

    fn config(n: usize) -> RrConfig {
        RrConfig::default()
            .with_step_size(0.1)
            .with_num_restarts(n)
            .with_seed(42)
    }

    #[test]
    fn test_path_length_is_sum_of_restarts() {
        let bounds = SearchBounds::square(-2.5, 2.5);
        let result = RrRunner::run(&WavySurface, &config(20), &bounds).unwrap();

        assert_eq!(result.extrema.len(), 20);
        assert_eq!(result.restart_lengths.len(), 20);
        assert_eq!(result.restart_lengths.iter().sum::<usize>(), result.path.len());
        assert!(result.restart_lengths.iter().all(|&n| n >= 1));
    }

    #[test]
    fn test_best_is_minimum_of_extrema() {
        let bounds = SearchBounds::square(-2.5, 2.5);
        let result = RrRunner::run(&WavySurface, &config(30), &bounds).unwrap();

        for e in &result.extrema {
            assert!(result.best.z <= e.z, "best {} above extremum {}", result.best.z, e.z);
        }
        assert_eq!(result.extrema[result.best_restart], result.best);
    }

    #[test]
    fn test_segments_are_hillclimbs() {
        let bounds = SearchBounds::new(-2.0, 2.0, -1.0, 3.0);
        let result = RrRunner::run(&WavySurface, &config(15), &bounds).unwrap();

        let mut offset = 0;
        for (i, &len) in result.restart_lengths.iter().enumerate() {
            let segment = &result.path[offset..offset + len];
            assert!(bounds.contains(segment[0].x, segment[0].y));
            for window in segment.windows(2) {
                assert!(window[1].z < window[0].z);
            }
            assert_eq!(segment[len - 1], result.extrema[i]);
            for s in segment {
                assert!(s.x >= bounds.xmin && s.y >= bounds.ymin);
            }
            offset += len;
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let bounds = SearchBounds::square(-2.5, 2.5);
        let a = RrRunner::run(&WavySurface, &config(10), &bounds).unwrap();
        let b = RrRunner::run(&WavySurface, &config(10), &bounds).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_single_restart_matches_hillclimb() {
        let bounds = SearchBounds::square(-2.5, 2.5);
        let mut rng = create_rng(5);
        let result = RrRunner::run_with_rng(&WavySurface, &config(1), &bounds, &mut rng).unwrap();

        let mut replay = create_rng(5);
        let (x0, y0) = bounds.sample_point(&mut replay);
        let corner = SearchBounds::new(bounds.xmin, x0, bounds.ymin, y0);
        let climb = HcRunner::climb(&WavySurface, 0.1, &corner);

        assert_eq!(result.path, climb.path);
        assert_eq!(result.best, climb.final_sample);
    }

    #[test]
    fn test_first_minimum_wins_ties() {
        // Flat surface: no climb moves, every extremum has z = 1.
        let flat = |_x: f64, _y: f64| 1.0;
        let bounds = SearchBounds::square(0.0, 1.0);
        let result = RrRunner::run(&flat, &config(5), &bounds).unwrap();

        assert_eq!(result.path.len(), 5);
        assert_eq!(result.best_restart, 0);
        assert_eq!(result.best, result.extrema[0]);
    }

    #[test]
    fn test_rejects_zero_restarts() {
        let bounds = SearchBounds::square(-1.0, 1.0);
        let err = RrRunner::run(&WavySurface, &config(0), &bounds).unwrap_err();
        assert_eq!(err, ConfigError::NoRestarts);
    }

    #[test]
    fn test_rejects_overflowing_bounds() {
        let bounds = SearchBounds::new(-1e308, 1e308, 0.0, 1.0);
        let err = RrRunner::run(&WavySurface, &config(1).with_seed(1), &bounds).unwrap_err();
        assert_eq!(err, ConfigError::UnboundedSpan { axis: 'x' });
    }
}
