//! Genetic Algorithm for permutation flow shops.
//!
//! Each generation selects `num_parents` schedules, recombines random pairs
//! of them into `num_offspring` children, mutates children with a swap, and
//! forms the next population from parents and children. Fitness is the
//! makespan (lower is better).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, parents, offspring, rates)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best schedule of the final population with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Cut-and-fill and PMX crossover, swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, Replacement};
pub use operators::Crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::Candidate;
