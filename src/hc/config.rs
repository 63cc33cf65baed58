//! HC configuration.

use crate::error::ConfigError;

/// Configuration for hillclimbing.
///
/// # Examples
///
/// ```
/// use u_landscape::hc::HcConfig;
///
/// let config = HcConfig::default().with_step_size(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Distance moved along an axis per step. Must be positive.
    pub step_size: f64,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self { step_size: 0.1 }
    }
}

impl HcConfig {
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_step_size(self.step_size)
    }
}

pub(crate) fn validate_step_size(step_size: f64) -> Result<(), ConfigError> {
    if step_size.is_finite() && step_size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidStepSize(step_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HcConfig::default();
        assert!((config.step_size - 0.1).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_step() {
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let config = HcConfig::default().with_step_size(step);
            assert!(config.validate().is_err(), "step {step} should be rejected");
        }
    }
}
