//! Simulated Annealing (SA) for permutation flow shops.
//!
//! A single-trajectory search over job orders. Each step perturbs the
//! current schedule with a [`NeighborMove`], accepts worsening moves with
//! the Metropolis probability `exp(-delta / T)`, and cools the temperature
//! geometrically. The best schedule ever generated is kept in the explicit
//! [`SearchState`] record.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Osman & Potts (1989), "Simulated annealing for permutation flow-shop scheduling"

mod config;
mod runner;
mod types;

pub use config::{InitialSchedule, NeighborMove, SaConfig, Termination};
pub use runner::{SaResult, SaRunner};
pub use types::{acceptance_probability, accepts, SearchState, StepOutcome};
