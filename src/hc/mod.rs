//! Hillclimbing (HC).
//!
//! Deterministic axis-aligned descent. From the upper corner
//! `(xmax, ymax)` of the bounds, each step tries `x - step` and
//! `y - step` and moves to the better of the two if it strictly
//! improves on the current value.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
