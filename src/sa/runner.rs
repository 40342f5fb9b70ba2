//! SA execution loop.

use super::config::{InitialSchedule, SaConfig, Termination};
use super::types::{SearchState, StepOutcome};
use crate::error::Result;
use crate::instance::Instance;
use crate::permutation::{identity, random_permutation};
use crate::random::rng_from_seed;
use log::{debug, trace};
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best schedule found.
    pub best: Vec<usize>,

    /// Makespan of the best schedule.
    pub best_cost: u64,

    /// Total number of steps (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best-so-far cost before the first step and after every step.
    pub cost_history: Vec<u64>,
}

/// Executes the Simulated Annealing algorithm.
///
/// # Usage
///
/// ```
/// use u_flowshop::instance::Instance;
/// use u_flowshop::sa::{SaConfig, SaRunner};
///
/// let instance = Instance::new(vec![vec![2, 3], vec![4, 1], vec![3, 2]]).unwrap();
/// let config = SaConfig::default().with_seed(42);
/// let result = SaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.best_cost, 10);
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// [`InvalidConfiguration`](crate::FlowShopError::InvalidConfiguration)
    /// before any step runs.
    pub fn run(instance: &Instance, config: &SaConfig) -> Result<SaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        config.validate()?;

        let n = instance.jobs();
        let initial = match config.initial_schedule {
            InitialSchedule::Identity => identity(n),
            InitialSchedule::Random => random_permutation(n, rng),
        };

        let mut state = SearchState::new(initial, instance, config.initial_temperature);
        let mut tally = Tally::new(state.best_cost);

        debug!(
            "sa start: jobs={} machines={} t0={} initial_cost={}",
            n,
            instance.machines(),
            config.initial_temperature,
            state.current_cost
        );

        match config.termination {
            Termination::IterationBudget(budget) => {
                for _ in 0..budget {
                    let (next, outcome) = state.step(instance, config.neighbor_move, rng);
                    tally.record(outcome, next.best_cost);
                    if outcome.new_best {
                        trace!("sa iter {}: new best {}", tally.iterations, next.best_cost);
                    }
                    state = next.cooled(config.cooling_rate);
                }
            }

            Termination::StoppingTemperature {
                threshold,
                iterations_per_temperature,
            } => {
                while state.temperature > threshold {
                    for _ in 0..iterations_per_temperature {
                        let (next, outcome) = state.step(instance, config.neighbor_move, rng);
                        tally.record(outcome, next.best_cost);
                        state = next;
                    }
                    trace!(
                        "sa level T={:.4}: current={} best={}",
                        state.temperature,
                        state.current_cost,
                        state.best_cost
                    );
                    state = state.cooled(config.cooling_rate);
                }
            }
        }

        debug!(
            "sa done: best={} iterations={} accepted={} improving={}",
            state.best_cost, tally.iterations, tally.accepted_moves, tally.improving_moves
        );

        Ok(SaResult {
            best: state.best,
            best_cost: state.best_cost,
            iterations: tally.iterations,
            final_temperature: state.temperature,
            accepted_moves: tally.accepted_moves,
            improving_moves: tally.improving_moves,
            cost_history: tally.cost_history,
        })
    }
}

/// Run counters accumulated alongside the search state.
struct Tally {
    iterations: usize,
    accepted_moves: usize,
    improving_moves: usize,
    cost_history: Vec<u64>,
}

impl Tally {
    fn new(initial_cost: u64) -> Self {
        Self {
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            cost_history: vec![initial_cost],
        }
    }

    fn record(&mut self, outcome: StepOutcome, best_cost: u64) {
        self.iterations += 1;
        if outcome.accepted {
            self.accepted_moves += 1;
        }
        if outcome.improving {
            self.improving_moves += 1;
        }
        self.cost_history.push(best_cost);
    }
}
