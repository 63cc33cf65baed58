//! Simulated Annealing (SA).
//!
//! Each trial resamples a candidate uniformly from the whole sampling
//! domain (rather than perturbing the current point) and accepts it
//! under the Metropolis criterion. Temperature decays geometrically
//! after a fixed number of trials until it reaches the floor.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::{SaConfig, SamplingDomain};
pub use runner::{SaResult, SaRunner};
