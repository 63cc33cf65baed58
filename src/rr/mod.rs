//! Hillclimbing with Random Restarts (RR).
//!
//! Runs hillclimbing repeatedly, each time from a uniformly random
//! corner inside the bounds, and keeps the lowest local minimum found.
//! The full trajectory of every restart is kept for inspection.

mod config;
mod runner;

pub use config::RrConfig;
pub use runner::{RrResult, RrRunner};
