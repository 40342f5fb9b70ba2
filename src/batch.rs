//! Solving a list of instances.
//!
//! Instances are independent, so with the `parallel` feature they are spread
//! over rayon's thread pool. Each search still runs on a single thread with
//! its own RNG.

use crate::error::Result;
use crate::instance::Instance;
use crate::solver::{Solution, Solver};
use log::info;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Solves every instance with `solver`, preserving input order.
pub fn solve_all<S: Solver + ?Sized>(solver: &S, instances: &[Instance]) -> Vec<Result<Solution>> {
    let solve_one = |(idx, instance): (usize, &Instance)| {
        let result = solver.solve(instance);
        if let Ok(solution) = &result {
            info!(
                "{} instance {} ({}x{}): makespan {}",
                solver.name(),
                idx,
                instance.jobs(),
                instance.machines(),
                solution.makespan
            );
        }
        result
    };

    #[cfg(feature = "parallel")]
    {
        instances.par_iter().enumerate().map(solve_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        instances.iter().enumerate().map(solve_one).collect()
    }
}
