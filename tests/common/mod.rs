//! Helpers shared by the integration tests.

#![allow(dead_code)]

use rand::Rng;
use u_flowshop::makespan::evaluate;
use u_flowshop::random::create_rng;
use u_flowshop::Instance;

/// Random `jobs x machines` instance with times in `1..=max_time`.
pub fn random_instance(jobs: usize, machines: usize, max_time: u64, seed: u64) -> Instance {
    let mut rng = create_rng(seed);
    let grid = (0..jobs)
        .map(|_| (0..machines).map(|_| rng.random_range(1..=max_time)).collect())
        .collect();
    Instance::new(grid).expect("generated instance is valid")
}

/// Minimum makespan over all `n!` schedules.
pub fn brute_force_optimum(instance: &Instance) -> u64 {
    let mut perm: Vec<usize> = (0..instance.jobs()).collect();
    let mut best = u64::MAX;
    permute(&mut perm, 0, &mut |p| best = best.min(evaluate(p, instance)));
    best
}

fn permute(perm: &mut [usize], k: usize, visit: &mut impl FnMut(&[usize])) {
    if k == perm.len() {
        visit(perm);
        return;
    }
    for i in k..perm.len() {
        perm.swap(k, i);
        permute(perm, k + 1, visit);
        perm.swap(k, i);
    }
}
