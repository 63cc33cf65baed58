//! Objective functions of two real variables.

use crate::error::ConfigError;
use crate::types::{Sample, SearchBounds};

/// Upper limit on the number of points [`surface_grid`] will evaluate.
pub const MAX_GRID_SAMPLES: usize = 1 << 24;

/// A scalar function `z = f(x, y)` to be minimised.
///
/// Any `Fn(f64, f64) -> f64` closure is an objective:
///
/// ```
/// use u_landscape::Objective;
///
/// let bowl = |x: f64, y: f64| x * x + y * y;
/// assert_eq!(bowl.evaluate(3.0, 4.0), 25.0);
/// ```
pub trait Objective {
    /// Evaluates the function at `(x, y)`. Lower is better.
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// The reference surface
///
/// ```text
/// r^2 = x^2 + y^2
/// z   = sin(x^2 + 3y^2) / (0.1 + r^2) + (x^2 + 5y^2) * exp(1 - r^2) / 2
/// ```
///
/// The origin is a local minimum with `z = 0`; the lowest basins
/// (`z ~ -0.15`) sit near `(+-2.17, 0)` beyond a ridge, so greedy
/// descent from most corners gets stuck. Only `x^2` and `y^2` appear, so the surface
/// is symmetric under sign flips of either coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WavySurface;

impl Objective for WavySurface {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        let x2 = x * x;
        let y2 = y * y;
        let r2 = x2 + y2;
        let ripple = (x2 + 3.0 * y2).sin() / (0.1 + r2);
        let bowl = (x2 + 5.0 * y2) * ((1.0 - r2).exp() / 2.0);
        ripple + bowl
    }
}

/// A regular lattice of evaluated samples covering a rectangle.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    /// Number of lattice points along x.
    pub columns: usize,
    /// Number of lattice points along y.
    pub rows: usize,
    /// Row-major samples: `samples[row * columns + column]`.
    pub samples: Vec<Sample>,
}

/// Samples `objective` on `x = xmin + i*spacing < xmax`,
/// `y = ymin + j*spacing < ymax`.
///
/// Upper edges are exclusive. A non-positive or non-finite `spacing`
/// yields an empty grid; a lattice of more than [`MAX_GRID_SAMPLES`]
/// points is rejected.
pub fn surface_grid<O: Objective + ?Sized>(
    objective: &O,
    bounds: &SearchBounds,
    spacing: f64,
) -> Result<SurfaceGrid, ConfigError> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Ok(SurfaceGrid {
            columns: 0,
            rows: 0,
            samples: Vec::new(),
        });
    }

    let columns = lattice_len(bounds.xmin, bounds.xmax, spacing);
    let rows = lattice_len(bounds.ymin, bounds.ymax, spacing);
    let len = columns
        .checked_mul(rows)
        .filter(|&n| n <= MAX_GRID_SAMPLES)
        .ok_or(ConfigError::GridTooLarge { columns, rows })?;

    let mut samples = Vec::with_capacity(len);
    for j in 0..rows {
        let y = bounds.ymin + j as f64 * spacing;
        for i in 0..columns {
            let x = bounds.xmin + i as f64 * spacing;
            samples.push(Sample::evaluate(objective, x, y));
        }
    }

    Ok(SurfaceGrid {
        columns,
        rows,
        samples,
    })
}

fn lattice_len(start: f64, stop: f64, spacing: f64) -> usize {
    let n = ((stop - start) / spacing).ceil();
    if n.is_finite() && n > 0.0 {
        // saturating cast
        n as usize
    } else {
        0
    }
}
