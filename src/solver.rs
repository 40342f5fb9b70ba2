//! Common entry point over both optimizers.
//!
//! [`Solver`] lets callers pick a search strategy at runtime while the
//! evaluation, instance, and result types stay the same.

use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::instance::Instance;
use crate::sa::{SaConfig, SaRunner};

/// Best schedule found for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Job order, a permutation of `0..n`.
    pub schedule: Vec<usize>,
    /// Makespan of `schedule`.
    pub makespan: u64,
}

/// A search strategy over flow-shop schedules.
///
/// Implemented by each optimizer's configuration, so a configured strategy
/// is itself the solver.
pub trait Solver: Send + Sync {
    /// Short strategy name for reporting.
    fn name(&self) -> &'static str;

    /// Searches `instance` and returns the best schedule found.
    fn solve(&self, instance: &Instance) -> Result<Solution>;
}

impl Solver for SaConfig {
    fn name(&self) -> &'static str {
        "simulated annealing"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        let result = SaRunner::run(instance, self)?;
        Ok(Solution {
            schedule: result.best,
            makespan: result.best_cost,
        })
    }
}

impl Solver for GaConfig {
    fn name(&self) -> &'static str {
        "genetic algorithm"
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        let result = GaRunner::run(instance, self)?;
        Ok(Solution {
            schedule: result.best,
            makespan: result.best_fitness,
        })
    }
}
