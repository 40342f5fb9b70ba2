//! Permutation crossover and mutation operators.
//!
//! Both crossovers take two schedules over the same jobs and return two
//! children that are again permutations of those jobs.
//!
//! # Crossover Operators
//!
//! - [`cut_and_fill_crossover`]: single cut point; prefix from one parent,
//!   remaining jobs in the other parent's order
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), preserves absolute
//!   positions through the segment mapping
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing"

use crate::permutation::{random_segment, swap_two};
use rand::Rng;

/// Crossover operator used by the GA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single-point cut-and-fill.
    CutAndFill,

    /// Partially mapped crossover.
    #[default]
    Pmx,
}

impl Crossover {
    /// Recombines two parents into two children.
    pub fn apply<R: Rng>(
        self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Vec<usize>, Vec<usize>) {
        match self {
            Crossover::CutAndFill => cut_and_fill_crossover(parent1, parent2, rng),
            Crossover::Pmx => pmx_crossover(parent1, parent2, rng),
        }
    }
}

/// Single-point cut-and-fill crossover.
///
/// A cut point `c` in `1..n` is drawn. The first child keeps `parent1[..c]`
/// and appends the jobs of `parent2` not yet placed, in `parent2`'s order;
/// the second child is built symmetrically.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn cut_and_fill_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    (
        cut_and_fill_child(parent1, parent2, cut),
        cut_and_fill_child(parent2, parent1, cut),
    )
}

fn cut_and_fill_child(head: &[usize], tail: &[usize], cut: usize) -> Vec<usize> {
    let mut placed = vec![false; head.len()];
    let mut child = Vec::with_capacity(head.len());

    for &job in &head[..cut] {
        placed[job] = true;
        child.push(job);
    }
    for &job in tail {
        if !placed[job] {
            placed[job] = true;
            child.push(job);
        }
    }

    child
}

/// Partially Mapped Crossover (PMX).
///
/// # Algorithm
///
/// 1. Draw a segment `[start, end]`.
/// 2. Child 1 copies `parent1[start..=end]`; child 2 copies `parent2`'s.
/// 3. Every other position `i` of child 1 takes `parent2[i]`. If that job
///    already sits in the copied segment at position `p`, it is replaced by
///    `parent2[p]`, repeating until the job is outside the segment.
///    Child 2 mirrors this with the parents swapped.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty, or if the
/// mapping walk fails to resolve, which only happens when the parents are
/// not permutations of the same jobs.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(n, rng);
    (
        pmx_child(parent1, parent2, start, end),
        pmx_child(parent2, parent1, start, end),
    )
}

/// Build one PMX child: segment from `template`, the rest mapped from `donor`.
fn pmx_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let segment = start..=end;

    let mut position = vec![0usize; n];
    for (i, &job) in template.iter().enumerate() {
        position[job] = i;
    }

    let mut child = template.to_vec();
    for i in (0..n).filter(|i| !segment.contains(i)) {
        let mut job = donor[i];
        let mut hops = 0;
        while segment.contains(&position[job]) {
            job = donor[position[job]];
            hops += 1;
            assert!(
                hops <= end - start + 1,
                "PMX mapping found no unused job: parents are not permutations of the same jobs"
            );
        }
        child[i] = job;
    }

    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(schedule: &mut [usize], rng: &mut R) {
    swap_two(schedule, rng);
}
