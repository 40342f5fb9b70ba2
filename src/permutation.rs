//! Permutation helpers shared by both optimizers.
//!
//! Every schedule in the crate is a `Vec<usize>` holding each job index of
//! `0..n` exactly once. The moves here are the only ways schedules change
//! outside of crossover, and each of them preserves that property.

use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;

/// The schedule `[0, 1, ..., n-1]`.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm = identity(n);
    perm.shuffle(rng);
    perm
}

/// Checks that `perm` contains each of `0..n` exactly once.
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        match seen.get_mut(v) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Swaps two distinct, uniformly chosen positions.
///
/// No-op for `len < 2`.
pub fn swap_two<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 2 {
        return;
    }
    let picked = index::sample(rng, perm.len(), 2);
    perm.swap(picked.index(0), picked.index(1));
}

/// Rotates the jobs at three distinct positions `a <- b <- c <- a`.
///
/// Falls back to [`swap_two`] when there are fewer than three jobs.
pub fn rotate_three<R: Rng>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 3 {
        swap_two(perm, rng);
        return;
    }
    let picked = index::sample(rng, perm.len(), 3);
    let (a, b, c) = (picked.index(0), picked.index(1), picked.index(2));
    let first = perm[a];
    perm[a] = perm[b];
    perm[b] = perm[c];
    perm[c] = first;
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
pub(crate) fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
