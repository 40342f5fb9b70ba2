//! Parent selection.
//!
//! Every strategy assumes **minimization**: a lower makespan must never
//! lower an individual's chance of being picked.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Candidate;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// One strategy is applied for the whole run.
///
/// # Examples
///
/// ```
/// use u_flowshop::ga::Selection;
///
/// // Keep the best individuals, in cost order
/// let sel = Selection::Truncation;
///
/// // Fitness-proportionate with weight = max_cost - cost + 1
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) sampling with replacement.
    ///
    /// Costs are inverted as `weight = max_cost - cost + 1`, so the worst
    /// individual keeps weight 1 and every unit of makespan saved adds one
    /// unit of weight.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear rank sampling with replacement.
    ///
    /// Individuals sorted best first get weights `n, n-1, ..., 1`.
    ///
    /// # Complexity
    /// O(n log n) per call (sort), O(n) per selection
    Rank,

    /// Truncation: individuals sorted by cost, taken best first.
    ///
    /// Asking for more parents than the population holds wraps around.
    /// Ties keep population order.
    #[default]
    Truncation,
}

impl Selection {
    /// Selects `count` parent indices from `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_parents<R: Rng>(
        &self,
        population: &[Candidate],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => {
                let weights = roulette_weights(population);
                (0..count).map(|_| spin(&weights, rng)).collect()
            }
            Selection::Rank => {
                let order = sorted_by_cost(population);
                let n = order.len() as u64;
                let weights: Vec<u64> = (0..n).map(|rank| n - rank).collect();
                (0..count).map(|_| order[spin(&weights, rng)]).collect()
            }
            Selection::Truncation => {
                let order = sorted_by_cost(population);
                (0..count).map(|i| order[i % order.len()]).collect()
            }
        }
    }
}

/// `max_cost - cost + 1` for every candidate.
fn roulette_weights(population: &[Candidate]) -> Vec<u64> {
    let max_cost = population.iter().map(|c| c.cost).max().unwrap_or(0);
    population.iter().map(|c| max_cost - c.cost + 1).collect()
}

/// Indices ordered by ascending cost (stable).
fn sorted_by_cost(population: &[Candidate]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by_key(|&i| population[i].cost);
    order
}

/// Draw an index with probability proportional to `weights[i]`.
///
/// All weights are at least 1.
fn spin<R: Rng>(weights: &[u64], rng: &mut R) -> usize {
    let total: u64 = weights.iter().sum();
    let threshold = rng.random_range(0..total);
    let mut cumulative = 0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(costs: &[u64]) -> Vec<Candidate> {
        costs
            .iter()
            .map(|&cost| Candidate {
                schedule: vec![0, 1],
                cost,
            })
            .collect()
    }

    #[test]
    fn test_roulette_weights_inverted() {
        let pop = make_population(&[10, 4, 7, 10]);
        assert_eq!(roulette_weights(&pop), vec![1, 7, 4, 1]);
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(&[100, 50, 1, 80]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for idx in Selection::Roulette.select_parents(&pop, 10_000, &mut rng) {
            counts[idx] += 1;
        }
        // Weights 1, 51, 100, 21: best ~58%, worst ~0.6%.
        assert!(
            counts[2] > counts[1] && counts[1] > counts[3] && counts[3] > counts[0],
            "selection frequency should follow cost order: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_equal_costs_uniform() {
        let pop = make_population(&[5, 5, 5, 5]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for idx in Selection::Roulette.select_parents(&pop, 10_000, &mut rng) {
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = make_population(&[100, 50, 1, 80]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for idx in Selection::Rank.select_parents(&pop, 10_000, &mut rng) {
            counts[idx] += 1;
        }
        let (best, worst) = (counts[2], counts[0]);
        assert!(
            best > worst,
            "best should be selected more: best={best}, worst={worst}"
        );
    }

    #[test]
    fn test_truncation_takes_best_in_order() {
        let pop = make_population(&[30, 10, 20, 10, 40]);
        let mut rng = create_rng(42);
        let parents = Selection::Truncation.select_parents(&pop, 3, &mut rng);
        assert_eq!(parents, vec![1, 3, 2]);
    }

    #[test]
    fn test_truncation_wraps() {
        let pop = make_population(&[2, 1]);
        let mut rng = create_rng(42);
        let parents = Selection::Truncation.select_parents(&pop, 5, &mut rng);
        assert_eq!(parents, vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);

        for sel in [Selection::Roulette, Selection::Rank, Selection::Truncation] {
            assert_eq!(sel.select_parents(&pop, 3, &mut rng), vec![0, 0, 0]);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Candidate> = vec![];
        let mut rng = create_rng(42);
        Selection::Roulette.select_parents(&pop, 1, &mut rng);
    }
}
