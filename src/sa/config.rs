//! SA configuration and sampling domain.

use crate::error::ConfigError;
use crate::types::SearchBounds;

/// Region from which SA draws its starting point and every trial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingDomain {
    /// The fixed square `[lo, hi] x [lo, hi]`, independent of the
    /// bounds passed to the runner.
    Fixed { lo: f64, hi: f64 },

    /// The search bounds passed to the runner.
    Bounds,
}

impl Default for SamplingDomain {
    fn default() -> Self {
        SamplingDomain::Fixed { lo: -2.5, hi: 2.5 }
    }
}

impl SamplingDomain {
    /// Resolves the concrete sampling rectangle for `bounds`.
    pub fn region(&self, bounds: &SearchBounds) -> SearchBounds {
        match *self {
            SamplingDomain::Fixed { lo, hi } => SearchBounds::square(lo, hi),
            SamplingDomain::Bounds => *bounds,
        }
    }
}

/// Configuration for the Simulated Annealing search.
///
/// # Examples
///
/// ```
/// use u_landscape::sa::{SaConfig, SamplingDomain};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_domain(SamplingDomain::Bounds)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Must be positive.
    pub initial_temperature: f64,

    /// The search stops once the temperature is at or below this.
    pub min_temperature: f64,

    /// Geometric cooling factor: `T_{k+1} = alpha * T_k`.
    pub alpha: f64,

    /// Trial moves evaluated at each temperature level.
    pub trials_per_temperature: usize,

    /// Where candidates are drawn from.
    pub domain: SamplingDomain,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 1e-5,
            alpha: 0.99,
            trials_per_temperature: 50,
            domain: SamplingDomain::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_trials_per_temperature(mut self, n: usize) -> Self {
        self.trials_per_temperature = n;
        self
    }

    pub fn with_domain(mut self, domain: SamplingDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cooling steps until the temperature reaches the floor:
    /// `ceil(ln(min / initial) / ln(alpha))`, or 0 if already there.
    pub fn expected_temperature_steps(&self) -> usize {
        if self.initial_temperature <= self.min_temperature {
            return 0;
        }
        let k = (self.min_temperature / self.initial_temperature).ln() / self.alpha.ln();
        k.ceil() as usize
    }

    /// Validates the configuration.
    ///
    /// A starting temperature already at or below `min_temperature` is
    /// allowed; the search then returns just its starting point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if !(self.min_temperature > 0.0) {
            return Err(ConfigError::InvalidMinTemperature(self.min_temperature));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidCoolingFactor(self.alpha));
        }
        if self.trials_per_temperature == 0 {
            return Err(ConfigError::NoTrials);
        }
        if let SamplingDomain::Fixed { lo, hi } = self.domain {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(ConfigError::NonFiniteBounds);
            }
            if lo > hi {
                return Err(ConfigError::EmptyDomain { lo, hi });
            }
            if !(hi - lo).is_finite() {
                return Err(ConfigError::UnboundedSpan { axis: 'x' });
            }
        }
        Ok(())
    }
}
