//! Permutation flow-shop scheduling with metaheuristic search.
//!
//! Given `n` jobs that each visit `m` machines in the same fixed order, find
//! the job order minimizing the makespan (completion time of the last job on
//! the last machine).
//!
//! - **Makespan evaluation** ([`makespan`]): the completion-time recurrence
//!   every search builds on.
//! - **Simulated Annealing (SA)** ([`sa`]): single-trajectory search with
//!   swap or rotation neighbors, Metropolis acceptance, and geometric cooling.
//! - **Genetic Algorithm (GA)** ([`ga`]): population search with roulette,
//!   rank, or truncation selection, cut-and-fill or PMX crossover, and swap
//!   mutation.
//!
//! Both optimizers are configured with plain structs, validated before any
//! search step, and reproducible from a seed. [`Solver`] puts them behind a
//! single interface and [`batch::solve_all`] runs one over many instances.
//!
//! # Example
//!
//! ```
//! use u_flowshop::{Instance, Solver};
//! use u_flowshop::sa::SaConfig;
//!
//! let instance = Instance::new(vec![vec![2, 3], vec![4, 1], vec![3, 2]])?;
//! let solution = SaConfig::default().with_seed(7).solve(&instance)?;
//! assert_eq!(solution.makespan, 10);
//! # Ok::<(), u_flowshop::FlowShopError>(())
//! ```

pub mod batch;
pub mod error;
pub mod ga;
pub mod instance;
pub mod makespan;
pub mod permutation;
pub mod random;
pub mod sa;
pub mod solver;

pub use error::{FlowShopError, Result};
pub use instance::Instance;
pub use solver::{Solution, Solver};
