//! RR configuration.

use crate::error::ConfigError;
use crate::hc::HcConfig;

/// Configuration for hillclimbing with random restarts.
///
/// # Examples
///
/// ```
/// use u_landscape::rr::RrConfig;
///
/// let config = RrConfig::default()
///     .with_step_size(0.05)
///     .with_num_restarts(25)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RrConfig {
    /// Step size of every hillclimb.
    pub step_size: f64,

    /// Number of hillclimbs to run. Must be at least 1.
    pub num_restarts: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RrConfig {
    fn default() -> Self {
        Self {
            step_size: 0.1,
            num_restarts: 10,
            seed: None,
        }
    }
}

impl RrConfig {
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        HcConfig::default()
            .with_step_size(self.step_size)
            .validate()?;
        if self.num_restarts == 0 {
            return Err(ConfigError::NoRestarts);
        }
        Ok(())
    }
}
