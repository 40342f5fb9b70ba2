//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::operators::Crossover;
use super::selection::Selection;
use super::types::Candidate;
use crate::error::{FlowShopError, Result};

/// How parents and offspring form the next population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// Next population = parents followed by offspring.
    ///
    /// Its size is `num_parents + num_offspring` from the first generation on.
    #[default]
    Union,

    /// Parents and offspring sorted by cost and cut to `population_size`.
    ///
    /// When there are fewer than `population_size` of them, the sorted list
    /// is repeated from the start until the size is reached.
    Constant,
}

impl Replacement {
    /// Forms the next population.
    pub fn apply(
        self,
        mut parents: Vec<Candidate>,
        offspring: Vec<Candidate>,
        population_size: usize,
    ) -> Vec<Candidate> {
        parents.extend(offspring);
        match self {
            Replacement::Union => parents,
            Replacement::Constant => {
                let mut pool = parents;
                pool.sort_by_key(|c| c.cost);
                let short = population_size.saturating_sub(pool.len());
                let padding: Vec<Candidate> = pool.iter().cycle().take(short).cloned().collect();
                pool.truncate(population_size);
                pool.extend(padding);
                pool
            }
        }
    }
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.num_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_flowshop::ga::{Crossover, GaConfig, Replacement, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_num_parents(30)
///     .with_num_offspring(50)
///     .with_selection(Selection::Roulette)
///     .with_crossover(Crossover::CutAndFill)
///     .with_replacement(Replacement::Constant)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of random schedules in the initial population.
    ///
    /// Also the fixed size under [`Replacement::Constant`].
    pub population_size: usize,

    /// Parents selected each generation.
    pub num_parents: usize,

    /// Offspring produced each generation.
    pub num_offspring: usize,

    /// Probability that an offspring receives a swap mutation, in [0, 1].
    pub mutation_rate: f64,

    /// Generations to run. There is no early stop.
    pub num_generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Crossover operator.
    pub crossover: Crossover,

    /// Replacement policy.
    pub replacement: Replacement,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            num_parents: 20,
            num_offspring: 30,
            mutation_rate: 0.1,
            num_generations: 100,
            selection: Selection::default(),
            crossover: Crossover::default(),
            replacement: Replacement::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of parents per generation.
    pub fn with_num_parents(mut self, n: usize) -> Self {
        self.num_parents = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_num_offspring(mut self, n: usize) -> Self {
        self.num_offspring = n;
        self
    }

    /// Sets the mutation rate. Not clamped; see [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the replacement policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Sets the random seed for reproducibility.
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
        let counts = [
            ("population_size", self.population_size),
            ("num_parents", self.num_parents),
            ("num_offspring", self.num_offspring),
            ("num_generations", self.num_generations),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, v)| *v == 0) {
            return Err(FlowShopError::config(format!("{name} must be at least 1")));
        }
        let rate = self.mutation_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(FlowShopError::config(format!(
                "mutation_rate must be in [0, 1], got {rate}"
            )));
        }
        Ok(())
    }
}
