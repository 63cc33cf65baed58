//! Local-search heuristics over a two-variable scalar surface.
//!
//! Provides three classic trajectory searches, each producing the ordered
//! [`Path`](types::Path) of positions it actually moved to:
//!
//! - **Hillclimbing (HC)**: axis-aligned steepest descent from the upper
//!   corner of the search bounds with a fixed step size.
//! - **Random Restarts (RR)**: repeated hillclimbing from uniformly random
//!   starting corners, keeping the best local minimum.
//! - **Simulated Annealing (SA)**: random resampling of the domain with
//!   Metropolis acceptance under a geometric cooling schedule.
//!
//! The objective is pluggable through the [`Objective`](objective::Objective)
//! trait; [`WavySurface`](objective::WavySurface) is the reference surface
//! used by the command-line driver.
//!
//! # Architecture
//!
//! Every search takes its random source as an explicit handle (or builds
//! one from a configured seed), so runs are reproducible under a fixed
//! seed. Rendering of the resulting path is left to consumers; the
//! [`export`] module writes paths and surface grids as CSV for them.

pub mod acceptance;
pub mod driver;
pub mod error;
pub mod export;
pub mod hc;
pub mod objective;
pub mod random;
pub mod rr;
pub mod sa;
pub mod types;

pub use error::ConfigError;
pub use objective::{Objective, WavySurface};
pub use types::{Path, Sample, SearchBounds};
