//! Search state and the Metropolis acceptance rule.

use super::config::NeighborMove;
use crate::instance::Instance;
use crate::makespan::evaluate;
use rand::Rng;

/// Probability of moving from a schedule costing `current_cost` to one
/// costing `neighbor_cost` at `temperature`.
///
/// Returns `1.0` for non-worsening moves (`exp(0) = 1` covers ties) and
/// `exp((current - neighbor) / T)` otherwise. A non-positive temperature
/// rejects every worsening move.
pub fn acceptance_probability(current_cost: u64, neighbor_cost: u64, temperature: f64) -> f64 {
    if neighbor_cost <= current_cost {
        return 1.0;
    }
    if temperature <= 0.0 {
        return 0.0;
    }
    let delta = (neighbor_cost - current_cost) as f64;
    (-delta / temperature).exp()
}

/// Metropolis criterion against a uniform `draw` in `[0, 1)`.
///
/// Strict improvements are always accepted; otherwise the move is accepted
/// iff `draw < acceptance_probability(..)`.
pub fn accepts(current_cost: u64, neighbor_cost: u64, temperature: f64, draw: f64) -> bool {
    neighbor_cost < current_cost
        || draw < acceptance_probability(current_cost, neighbor_cost, temperature)
}

/// What happened during one [`SearchState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// The neighbor became the current schedule.
    pub accepted: bool,
    /// The neighbor was strictly cheaper than the current schedule.
    pub improving: bool,
    /// The neighbor replaced best-so-far.
    pub new_best: bool,
}

/// Annealing state threaded through every iteration.
///
/// Each step consumes the state and returns its successor, so best-so-far
/// lives only here and is never shared across runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub current: Vec<usize>,
    pub current_cost: u64,
    pub best: Vec<usize>,
    pub best_cost: u64,
    pub temperature: f64,
}

impl SearchState {
    /// Starts a search from `schedule`.
    pub fn new(schedule: Vec<usize>, instance: &Instance, temperature: f64) -> Self {
        let cost = evaluate(&schedule, instance);
        Self {
            best: schedule.clone(),
            best_cost: cost,
            current: schedule,
            current_cost: cost,
            temperature,
        }
    }

    /// Generates one neighbor, applies the acceptance rule, and updates
    /// best-so-far.
    ///
    /// The best check uses the generated neighbor whether or not it was
    /// accepted. Temperature is left unchanged; see [`cooled`](Self::cooled).
    pub fn step<R: Rng>(
        mut self,
        instance: &Instance,
        neighbor_move: NeighborMove,
        rng: &mut R,
    ) -> (Self, StepOutcome) {
        let mut neighbor = self.current.clone();
        neighbor_move.apply(&mut neighbor, rng);
        let neighbor_cost = evaluate(&neighbor, instance);

        // Only worsening moves consume a draw.
        let draw = if neighbor_cost > self.current_cost {
            rng.random_range(0.0..1.0)
        } else {
            0.0
        };

        let outcome = StepOutcome {
            accepted: accepts(self.current_cost, neighbor_cost, self.temperature, draw),
            improving: neighbor_cost < self.current_cost,
            new_best: neighbor_cost < self.best_cost,
        };

        if outcome.new_best {
            self.best.clone_from(&neighbor);
            self.best_cost = neighbor_cost;
        }
        if outcome.accepted {
            self.current = neighbor;
            self.current_cost = neighbor_cost;
        }

        (self, outcome)
    }

    /// Applies one geometric cooling step.
    ///
    /// The result never reaches zero, so the acceptance formula stays defined.
    pub fn cooled(mut self, cooling_rate: f64) -> Self {
        self.temperature = (self.temperature * cooling_rate).max(f64::MIN_POSITIVE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::is_valid_permutation;
    use crate::random::create_rng;

    #[test]
    fn test_probability_improving_is_one() {
        assert_eq!(acceptance_probability(10, 7, 5.0), 1.0);
    }

    #[test]
    fn test_probability_equal_cost_is_exp_zero() {
        assert_eq!(acceptance_probability(10, 10, 5.0), 0.0f64.exp());
        assert_eq!(acceptance_probability(10, 10, 1e-300), 1.0);
    }

    #[test]
    fn test_equal_cost_always_accepted() {
        // Largest draw below 1.0 still passes `draw < exp(0)`.
        let max_draw = 1.0 - f64::EPSILON;
        for t in [1e-9, 1.0, 1e9] {
            assert!(accepts(42, 42, t, max_draw));
        }
    }

    #[test]
    fn test_probability_worsening() {
        let p = acceptance_probability(10, 12, 4.0);
        assert!((p - (-0.5f64).exp()).abs() < 1e-15);
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn test_probability_shrinks_with_temperature() {
        let hot = acceptance_probability(10, 20, 100.0);
        let cold = acceptance_probability(10, 20, 1.0);
        assert!(hot > cold);
    }

    #[test]
    fn test_probability_zero_temperature() {
        assert_eq!(acceptance_probability(10, 11, 0.0), 0.0);
        assert_eq!(acceptance_probability(10, 10, 0.0), 1.0);
    }

    #[test]
    fn test_accepts_uses_draw() {
        let p = acceptance_probability(10, 12, 4.0);
        assert!(accepts(10, 12, 4.0, p - 1e-9));
        assert!(!accepts(10, 12, 4.0, p));
        assert!(accepts(10, 3, 1e-12, 0.999));
    }

    #[test]
    fn test_new_state() {
        let inst = Instance::new(vec![vec![2, 3], vec![4, 1], vec![3, 2]]).unwrap();
        let state = SearchState::new(vec![0, 1, 2], &inst, 50.0);
        assert_eq!(state.current_cost, 11);
        assert_eq!(state.best_cost, 11);
        assert_eq!(state.best, state.current);
        assert!((state.temperature - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_keeps_invariants() {
        let inst = Instance::new(vec![
            vec![5, 9, 8],
            vec![9, 3, 10],
            vec![9, 4, 5],
            vec![4, 8, 8],
            vec![3, 5, 6],
        ])
        .unwrap();
        let mut rng = create_rng(42);
        let mut state = SearchState::new(vec![0, 1, 2, 3, 4], &inst, 20.0);

        for _ in 0..500 {
            let prev_best = state.best_cost;
            let (next, outcome) = state.step(&inst, NeighborMove::Swap, &mut rng);
            state = next.cooled(0.99);

            assert!(is_valid_permutation(&state.current, 5));
            assert!(is_valid_permutation(&state.best, 5));
            assert!(state.best_cost <= prev_best);
            assert_eq!(state.best_cost, evaluate(&state.best, &inst));
            assert_eq!(state.current_cost, evaluate(&state.current, &inst));
            assert_eq!(outcome.new_best, state.best_cost < prev_best);
            if outcome.improving {
                assert!(outcome.accepted);
            }
        }
    }

    #[test]
    fn test_cooled_stays_positive() {
        let mut state = SearchState {
            current: vec![0, 1],
            current_cost: 0,
            best: vec![0, 1],
            best_cost: 0,
            temperature: 1e-300,
        };
        for _ in 0..100 {
            state = state.cooled(0.01);
        }
        assert!(state.temperature > 0.0);
    }
}
