//! Configuration errors shared by every search.

use thiserror::Error;

/// A search was asked to run with parameters it cannot honour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("step_size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("bounds must be finite")]
    NonFiniteBounds,

    #[error("inverted bounds: {axis}min = {min} > {axis}max = {max}")]
    InvertedBounds { axis: char, min: f64, max: f64 },

    #[error("{axis} range is too wide to sample: its width overflows")]
    UnboundedSpan { axis: char },

    #[error("num_restarts must be at least 1")]
    NoRestarts,

    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("min_temperature must be positive, got {0}")]
    InvalidMinTemperature(f64),

    #[error("cooling factor alpha must be in (0, 1), got {0}")]
    InvalidCoolingFactor(f64),

    #[error("trials_per_temperature must be at least 1")]
    NoTrials,

    #[error("sampling domain is empty: lo = {lo} > hi = {hi}")]
    EmptyDomain { lo: f64, hi: f64 },

    #[error("surface grid of {columns} x {rows} points is too large")]
    GridTooLarge { columns: usize, rows: usize },

    #[error("unknown search type `{0}`, expected one of HC, RR, SA")]
    UnknownSearchKind(String),
}
