//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement → repeat.

use super::config::GaConfig;
use super::operators::swap_mutation;
use super::types::{find_best, Candidate};
use crate::error::Result;
use crate::instance::Instance;
use crate::permutation::random_permutation;
use crate::random::rng_from_seed;
use log::{debug, trace};
use rand::seq::index;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Minimum-cost schedule of the final population.
    pub best: Vec<usize>,

    /// Makespan of `best`.
    pub best_fitness: u64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Size of the final population.
    pub final_population_size: usize,

    /// Lowest cost in the initial population, then in each generation's
    /// population.
    pub fitness_history: Vec<u64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_flowshop::ga::{GaConfig, GaRunner};
/// use u_flowshop::instance::Instance;
///
/// let instance = Instance::new(vec![vec![2, 3], vec![4, 1], vec![3, 2]]).unwrap();
/// let config = GaConfig::default().with_num_generations(20).with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.best_fitness, 10);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// [`InvalidConfiguration`](crate::FlowShopError::InvalidConfiguration)
    /// before the initial population is generated.
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;

        let n = instance.jobs();

        // 1. Initialize population
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::new(random_permutation(n, rng), instance))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.num_generations + 1);
        fitness_history.push(find_best(&population).cost);

        debug!(
            "ga start: jobs={} machines={} population={} initial_best={}",
            n,
            instance.machines(),
            population.len(),
            fitness_history[0]
        );

        // 2. Generational loop
        for generation in 0..config.num_generations {
            let parents: Vec<Candidate> = config
                .selection
                .select_parents(&population, config.num_parents, rng)
                .into_iter()
                .map(|i| population[i].clone())
                .collect();

            let offspring = breed(&parents, instance, config, rng);

            population = config
                .replacement
                .apply(parents, offspring, config.population_size);

            let gen_best = find_best(&population).cost;
            fitness_history.push(gen_best);
            trace!(
                "ga gen {}: best={} size={}",
                generation + 1,
                gen_best,
                population.len()
            );
        }

        let best = find_best(&population).clone();

        debug!(
            "ga done: best={} generations={}",
            best.cost, config.num_generations
        );

        Ok(GaResult {
            best_fitness: best.cost,
            best: best.schedule,
            generations: config.num_generations,
            final_population_size: population.len(),
            fitness_history,
        })
    }
}

/// Produce `num_offspring` children from random pairs of distinct parents.
fn breed<R: Rng>(
    parents: &[Candidate],
    instance: &Instance,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Candidate> {
    let mut offspring = Vec::with_capacity(config.num_offspring);

    while offspring.len() < config.num_offspring {
        let (i, j) = if parents.len() >= 2 {
            let picked = index::sample(rng, parents.len(), 2);
            (picked.index(0), picked.index(1))
        } else {
            (0, 0)
        };

        let (c1, c2) = config
            .crossover
            .apply(&parents[i].schedule, &parents[j].schedule, rng);

        for mut child in [c1, c2] {
            if offspring.len() >= config.num_offspring {
                break;
            }
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                swap_mutation(&mut child, rng);
            }
            offspring.push(Candidate::new(child, instance));
        }
    }

    offspring
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowShopError;
    use crate::ga::{Crossover, Replacement, Selection};
    use crate::makespan::evaluate;
    use crate::permutation::is_valid_permutation;
    use crate::random::create_rng;

    fn six_by_three() -> Instance {
        Instance::new(vec![
            vec![6, 2, 7],
            vec![3, 8, 1],
            vec![9, 4, 5],
            vec![2, 9, 3],
            vec![7, 1, 8],
            vec![4, 6, 2],
        ])
        .unwrap()
    }

    #[test]
    fn test_known_instance_reaches_optimum() {
        let inst = Instance::new(vec![vec![2, 3], vec![4, 1], vec![3, 2]]).unwrap();
        let config = GaConfig::default().with_num_generations(30).with_seed(42);
        let result = GaRunner::run(&inst, &config).unwrap();
        assert_eq!(result.best_fitness, 10);
        assert_eq!(evaluate(&result.best, &inst), 10);
    }

    #[test]
    fn test_union_population_size() {
        let inst = six_by_three();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_num_parents(12)
            .with_num_offspring(17)
            .with_num_generations(5)
            .with_seed(1);
        let result = GaRunner::run(&inst, &config).unwrap();
        assert_eq!(result.final_population_size, 29);
        assert_eq!(result.generations, 5);
        assert_eq!(result.fitness_history.len(), 6);
    }

    #[test]
    fn test_constant_population_size() {
        let inst = six_by_three();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_num_parents(12)
            .with_num_offspring(17)
            .with_replacement(Replacement::Constant)
            .with_num_generations(5)
            .with_seed(1);
        let result = GaRunner::run(&inst, &config).unwrap();
        assert_eq!(result.final_population_size, 40);
    }

    #[test]
    fn test_truncation_history_non_increasing() {
        // Truncation keeps the best individual among the parents.
        let inst = six_by_three();
        let config = GaConfig::default()
            .with_selection(Selection::Truncation)
            .with_num_generations(40)
            .with_seed(42);
        let result = GaRunner::run(&inst, &config).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "fitness should be non-increasing with truncation: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_all_operator_combinations_valid() {
        let inst = six_by_three();
        for selection in [Selection::Roulette, Selection::Rank, Selection::Truncation] {
            for crossover in [Crossover::CutAndFill, Crossover::Pmx] {
                for replacement in [Replacement::Union, Replacement::Constant] {
                    let config = GaConfig::default()
                        .with_selection(selection)
                        .with_crossover(crossover)
                        .with_replacement(replacement)
                        .with_mutation_rate(0.5)
                        .with_num_generations(15)
                        .with_seed(42);
                    let result = GaRunner::run(&inst, &config).unwrap();
                    assert!(
                        is_valid_permutation(&result.best, 6),
                        "{selection:?}/{crossover:?}/{replacement:?}: {:?}",
                        result.best
                    );
                    assert_eq!(evaluate(&result.best, &inst), result.best_fitness);
                }
            }
        }
    }

    #[test]
    fn test_breed_offspring_are_permutations() {
        let inst = six_by_three();
        let mut rng = create_rng(5);
        let parents: Vec<Candidate> = (0..4)
            .map(|_| Candidate::new(random_permutation(6, &mut rng), &inst))
            .collect();
        let config = GaConfig::default()
            .with_num_offspring(25)
            .with_mutation_rate(1.0);

        let offspring = breed(&parents, &inst, &config, &mut rng);
        assert_eq!(offspring.len(), 25);
        for child in &offspring {
            assert!(is_valid_permutation(&child.schedule, 6));
            assert_eq!(child.cost, evaluate(&child.schedule, &inst));
        }
    }

    #[test]
    fn test_single_parent() {
        let inst = six_by_three();
        let config = GaConfig::default()
            .with_num_parents(1)
            .with_num_offspring(3)
            .with_num_generations(10)
            .with_seed(8);
        let result = GaRunner::run(&inst, &config).unwrap();
        assert!(is_valid_permutation(&result.best, 6));
        assert_eq!(result.final_population_size, 4);
    }

    #[test]
    fn test_same_seed_same_run() {
        let inst = six_by_three();
        let config = GaConfig::default()
            .with_selection(Selection::Roulette)
            .with_num_generations(20)
            .with_seed(99);
        let a = GaRunner::run(&inst, &config).unwrap();
        let b = GaRunner::run(&inst, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_invalid_mutation_rate_rejected() {
        let inst = six_by_three();
        let config = GaConfig::default().with_mutation_rate(-0.1);
        let err = GaRunner::run(&inst, &config).unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidConfiguration(_)));
    }
}
