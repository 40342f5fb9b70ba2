//! SA configuration, neighbor moves, and termination policies.

use crate::error::{FlowShopError, Result};
use crate::instance::Instance;
use crate::permutation::{rotate_three, swap_two};
use rand::Rng;

/// Elementary perturbation used to generate a neighbor schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborMove {
    /// Swap the jobs at two distinct random positions.
    #[default]
    Swap,

    /// Rotate the jobs at three distinct random positions.
    ///
    /// Falls back to a swap on two-job instances.
    Rotate3,
}

impl NeighborMove {
    /// Applies the move to `schedule` in place.
    pub fn apply<R: Rng>(self, schedule: &mut [usize], rng: &mut R) {
        match self {
            NeighborMove::Swap => swap_two(schedule, rng),
            NeighborMove::Rotate3 => rotate_three(schedule, rng),
        }
    }
}

/// How the starting schedule is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialSchedule {
    /// Jobs in index order `[0, 1, ..., n-1]`.
    Identity,

    /// A uniformly random permutation.
    #[default]
    Random,
}

/// When the annealing loop stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Run exactly this many steps, cooling after every step.
    IterationBudget(usize),

    /// Run `iterations_per_temperature` steps per temperature level and cool
    /// once per level, until the temperature drops to `threshold` or below.
    StoppingTemperature {
        /// Stop once `T <= threshold`. Must be in
        /// `[f64::MIN_POSITIVE, initial_temperature)`, the range cooling can reach.
        threshold: f64,
        /// Steps executed at each temperature level.
        iterations_per_temperature: usize,
    },
}

impl Default for Termination {
    fn default() -> Self {
        Termination::IterationBudget(1000)
    }
}

/// Configuration for the Simulated Annealing optimizer.
///
/// Builders store values verbatim; out-of-range values are reported by
/// [`validate`](SaConfig::validate) when the run starts.
///
/// # Examples
///
/// ```
/// use u_flowshop::sa::{NeighborMove, SaConfig, Termination};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.995)
///     .with_termination(Termination::IterationBudget(5_000))
///     .with_neighbor_move(NeighborMove::Rotate3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Must be finite and positive.
    pub initial_temperature: f64,

    /// Geometric cooling factor `T <- T * cooling_rate`, in (0, 1).
    pub cooling_rate: f64,

    /// Termination policy.
    pub termination: Termination,

    /// Neighbor generation rule.
    pub neighbor_move: NeighborMove,

    /// Starting schedule.
    pub initial_schedule: InitialSchedule,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            termination: Termination::default(),
            neighbor_move: NeighborMove::default(),
            initial_schedule: InitialSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the initial temperature to the instance's mean processing time.
    ///
    /// Scales acceptance of worsening moves to the magnitude of the data.
    pub fn with_mean_processing_time_temperature(self, instance: &Instance) -> Self {
        self.with_initial_temperature(instance.mean_processing_time())
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Shorthand for [`Termination::IterationBudget`].
    pub fn with_iteration_budget(self, n: usize) -> Self {
        self.with_termination(Termination::IterationBudget(n))
    }

    pub fn with_neighbor_move(mut self, mv: NeighborMove) -> Self {
        self.neighbor_move = mv;
        self
    }

    pub fn with_initial_schedule(mut self, initial: InitialSchedule) -> Self {
        self.initial_schedule = initial;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`FlowShopError::InvalidConfiguration`] describing the first
    /// out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        let t0 = self.initial_temperature;
        if !t0.is_finite() || t0 <= 0.0 {
            return Err(FlowShopError::config(format!(
                "initial_temperature must be positive and finite, got {t0}"
            )));
        }
        let rate = self.cooling_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(FlowShopError::config(format!(
                "cooling_rate must be in (0, 1), got {rate}"
            )));
        }
        match self.termination {
            Termination::IterationBudget(0) => {
                return Err(FlowShopError::config("iteration budget must be at least 1"));
            }
            Termination::IterationBudget(_) => {}
            Termination::StoppingTemperature {
                threshold,
                iterations_per_temperature,
            } => {
                // Cooling floors at MIN_POSITIVE; a smaller threshold is never reached.
                if !(threshold >= f64::MIN_POSITIVE && threshold < t0) {
                    return Err(FlowShopError::config(format!(
                        "stopping temperature must be in [{:e}, {t0}), got {threshold}",
                        f64::MIN_POSITIVE
                    )));
                }
                if iterations_per_temperature == 0 {
                    return Err(FlowShopError::config(
                        "iterations_per_temperature must be at least 1",
                    ));
                }
            }
        }
        Ok(())
    }
}
