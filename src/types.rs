//! Core value types: samples, paths and search bounds.

use rand::Rng;

use crate::error::ConfigError;
use crate::objective::Objective;

/// One evaluated point `(x, y, z)` with `z = f(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Evaluates `objective` at `(x, y)` and wraps the result.
    pub fn evaluate<O: Objective + ?Sized>(objective: &O, x: f64, y: f64) -> Self {
        Self::new(x, y, objective.evaluate(x, y))
    }
}

/// Chronological trajectory of the positions a search moved to.
///
/// Only accepted positions are recorded, never rejected candidates.
pub type Path = Vec<Sample>;

/// Axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl SearchBounds {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// The square `[lo, hi] x [lo, hi]`.
    pub fn square(lo: f64, hi: f64) -> Self {
        Self::new(lo, hi, lo, hi)
    }

    /// Checks that every edge is finite, no axis is inverted and each
    /// axis width fits in an `f64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edges = [self.xmin, self.xmax, self.ymin, self.ymax];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteBounds);
        }
        if self.xmin > self.xmax {
            return Err(ConfigError::InvertedBounds {
                axis: 'x',
                min: self.xmin,
                max: self.xmax,
            });
        }
        if self.ymin > self.ymax {
            return Err(ConfigError::InvertedBounds {
                axis: 'y',
                min: self.ymin,
                max: self.ymax,
            });
        }
        if !(self.xmax - self.xmin).is_finite() {
            return Err(ConfigError::UnboundedSpan { axis: 'x' });
        }
        if !(self.ymax - self.ymin).is_finite() {
            return Err(ConfigError::UnboundedSpan { axis: 'y' });
        }
        Ok(())
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.xmin..=self.xmax).contains(&x) && (self.ymin..=self.ymax).contains(&y)
    }

    /// Draws a uniform point inside the rectangle, `x` first then `y`.
    ///
    /// The bounds must be valid (see [`validate`](Self::validate)).
    pub fn sample_point<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let x = rng.random_range(self.xmin..=self.xmax);
        let y = rng.random_range(self.ymin..=self.ymax);
        (x, y)
    }
}
