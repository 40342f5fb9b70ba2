//! Population members.

use crate::instance::Instance;
use crate::makespan::evaluate;

/// A schedule paired with its makespan.
///
/// Fitness is the makespan itself; lower is better.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub schedule: Vec<usize>,
    pub cost: u64,
}

impl Candidate {
    /// Evaluates `schedule` on `instance`.
    pub fn new(schedule: Vec<usize>, instance: &Instance) -> Self {
        let cost = evaluate(&schedule, instance);
        Self { schedule, cost }
    }
}

/// Find the candidate with the lowest cost; ties keep the earliest.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .min_by_key(|c| c.cost)
        .expect("population must not be empty")
}
