//! Strategy selection: runs one search and hands back its path.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::ConfigError;
use crate::hc::{HcConfig, HcRunner};
use crate::objective::Objective;
use crate::rr::{RrConfig, RrRunner};
use crate::sa::{SaConfig, SaRunner, SamplingDomain};
use crate::types::{Path, Sample, SearchBounds};

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// `HC`: plain hillclimbing from the upper corner.
    HillClimb,
    /// `RR`: hillclimbing with random restarts.
    RandomRestart,
    /// `SA`: simulated annealing.
    SimulatedAnnealing,
}

impl SearchKind {
    /// The short code used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            SearchKind::HillClimb => "HC",
            SearchKind::RandomRestart => "RR",
            SearchKind::SimulatedAnnealing => "SA",
        }
    }
}

impl FromStr for SearchKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HC" => Ok(SearchKind::HillClimb),
            "RR" => Ok(SearchKind::RandomRestart),
            "SA" => Ok(SearchKind::SimulatedAnnealing),
            other => Err(ConfigError::UnknownSearchKind(other.to_string())),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything the driver needs to run any strategy.
///
/// Fields a strategy does not use are ignored (`num_restarts` outside
/// RR, `max_temperature` and `sa_domain` outside SA, `step_size` in SA).
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub kind: SearchKind,
    pub step_size: f64,
    pub bounds: SearchBounds,
    pub num_restarts: usize,
    pub max_temperature: f64,
    pub sa_domain: SamplingDomain,
}

/// What a search hands to the renderer.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub kind: SearchKind,

    /// Trajectory of accepted positions.
    pub path: Path,

    /// Best (RR) or final (SA) position. `None` for HC, whose minimum is
    /// simply the last entry of `path`.
    pub minimum: Option<Sample>,
}

/// Runs the strategy selected by `params.kind` with a driver-owned RNG.
///
/// # Examples
///
/// ```
/// use u_landscape::driver::{run_search, SearchKind, SearchParams};
/// use u_landscape::random::create_rng;
/// use u_landscape::sa::SamplingDomain;
/// use u_landscape::{SearchBounds, WavySurface};
///
/// let params = SearchParams {
///     kind: "RR".parse().unwrap(),
///     step_size: 0.1,
///     bounds: SearchBounds::square(-2.5, 2.5),
///     num_restarts: 5,
///     max_temperature: 0.0,
///     sa_domain: SamplingDomain::default(),
/// };
/// let outcome = run_search(&WavySurface, &params, &mut create_rng(1)).unwrap();
/// assert_eq!(outcome.kind, SearchKind::RandomRestart);
/// assert!(outcome.minimum.is_some());
/// ```
pub fn run_search<O, R>(
    objective: &O,
    params: &SearchParams,
    rng: &mut R,
) -> Result<SearchOutcome, ConfigError>
where
    O: Objective + ?Sized,
    R: Rng,
{
    let (path, minimum) = match params.kind {
        SearchKind::HillClimb => {
            let config = HcConfig::default().with_step_size(params.step_size);
            let result = HcRunner::run(objective, &config, &params.bounds)?;
            (result.path, None)
        }
        SearchKind::RandomRestart => {
            let config = RrConfig::default()
                .with_step_size(params.step_size)
                .with_num_restarts(params.num_restarts);
            let result = RrRunner::run_with_rng(objective, &config, &params.bounds, rng)?;
            (result.path, Some(result.best))
        }
        SearchKind::SimulatedAnnealing => {
            let config = SaConfig::default()
                .with_initial_temperature(params.max_temperature)
                .with_domain(params.sa_domain);
            let result = SaRunner::run_with_rng(objective, &config, &params.bounds, rng)?;
            (result.path, Some(result.final_sample))
        }
    };

    Ok(SearchOutcome {
        kind: params.kind,
        path,
        minimum,
    })
}
