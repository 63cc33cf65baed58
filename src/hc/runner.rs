//! HC execution loop.
//!
//! # Algorithm
//!
//! 1. Start at `(xmax, ymax)` and record it
//! 2. Candidates: `(x - step, y)` and `(x, y - step)`; a step that would
//!    cross `xmin`/`ymin` leaves that coordinate unchanged
//! 3. Pick the lower candidate, preferring x on ties
//! 4. Move if it is strictly lower than the current value, else stop

use super::config::HcConfig;
use crate::error::ConfigError;
use crate::objective::Objective;
use crate::types::{Path, Sample, SearchBounds};

/// Result of a hillclimbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// Every position moved to, starting with the corner.
    pub path: Path,

    /// The local minimum the climb stopped at (last entry of `path`).
    pub final_sample: Sample,

    /// Number of moves taken (`path.len() - 1`).
    pub steps: usize,
}

/// Executes hillclimbing.
pub struct HcRunner;

impl HcRunner {
    /// Validates `config` and `bounds`, then climbs from `(xmax, ymax)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_landscape::hc::{HcConfig, HcRunner};
    /// use u_landscape::{SearchBounds, WavySurface};
    ///
    /// let bounds = SearchBounds::square(-1.0, 1.0);
    /// let result = HcRunner::run(&WavySurface, &HcConfig::default(), &bounds).unwrap();
    /// assert_eq!((result.path[0].x, result.path[0].y), (1.0, 1.0));
    /// ```
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        config: &HcConfig,
        bounds: &SearchBounds,
    ) -> Result<HcResult, ConfigError> {
        config.validate()?;
        bounds.validate()?;
        Ok(Self::climb(objective, config.step_size, bounds))
    }

    /// Climbs without validating inputs.
    ///
    /// `step_size` must be positive for the walk to terminate on a
    /// bounded domain.
    pub(crate) fn climb<O: Objective + ?Sized>(
        objective: &O,
        step_size: f64,
        bounds: &SearchBounds,
    ) -> HcResult {
        let mut current = Sample::evaluate(objective, bounds.xmax, bounds.ymax);
        let mut path = vec![current];

        loop {
            let next_x = if current.x - step_size >= bounds.xmin {
                current.x - step_size
            } else {
                current.x
            };
            let next_y = if current.y - step_size >= bounds.ymin {
                current.y - step_size
            } else {
                current.y
            };

            let along_x = Sample::evaluate(objective, next_x, current.y);
            let along_y = Sample::evaluate(objective, current.x, next_y);

            let candidate = if along_x.z <= along_y.z {
                along_x
            } else {
                along_y
            };

            if candidate.z < current.z {
                current = candidate;
                path.push(current);
            } else {
                break;
            }
        }

        let steps = path.len() - 1;
        HcResult {
            path,
            final_sample: current,
            steps,
        }
    }
}
