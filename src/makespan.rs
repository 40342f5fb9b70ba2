//! Makespan evaluation for permutation flow shops.
//!
//! # Recurrence
//!
//! With `C[0][*] = C[*][0] = 0`, for the `i`-th scheduled job and machine `k`:
//!
//! ```text
//! C[i][k] = p[schedule[i-1]][k-1] + max(C[i-1][k], C[i][k-1])
//! ```
//!
//! A job cannot start on machine `k` before it leaves machine `k-1`, and a
//! machine cannot start job `i` before it finishes job `i-1`. The makespan is
//! `C[n][m]`.
//!
//! # Reference
//!
//! Johnson (1954), "Optimal two- and three-stage production schedules with
//! setup times included"

use crate::instance::Instance;

/// Computes the makespan of `schedule` on `instance`.
///
/// Keeps only the current row of the completion-time matrix.
///
/// # Complexity
/// O(n·m) time, O(m) space
///
/// # Panics
/// Panics if `schedule` contains a job index `>= instance.jobs()`, or if a
/// completion time exceeds `u64::MAX`.
pub fn evaluate(schedule: &[usize], instance: &Instance) -> u64 {
    let mut row = vec![0u64; instance.machines()];

    for &job in schedule {
        let times = instance.job_times(job);
        // `left` is C[i][k-1]; row[k] still holds C[i-1][k] before the write.
        let mut left = 0u64;
        for (slot, &p) in row.iter_mut().zip(times) {
            left = add_time((*slot).max(left), p);
            *slot = left;
        }
    }

    row.last().copied().unwrap_or(0)
}

/// Builds the full `(n+1) x (m+1)` completion-time matrix.
///
/// Row 0 and column 0 are the zero boundaries; `matrix[i][k]` is the time
/// the `i`-th scheduled job leaves machine `k` (both 1-based).
///
/// # Panics
/// Same conditions as [`evaluate`].
pub fn completion_times(schedule: &[usize], instance: &Instance) -> Vec<Vec<u64>> {
    let m = instance.machines();
    let mut c = vec![vec![0u64; m + 1]; schedule.len() + 1];

    for (i, &job) in schedule.iter().enumerate() {
        let i = i + 1;
        for k in 1..=m {
            let start = c[i - 1][k].max(c[i][k - 1]);
            c[i][k] = add_time(start, instance.processing_time(job, k - 1));
        }
    }

    c
}

#[inline]
fn add_time(start: u64, p: u64) -> u64 {
    start
        .checked_add(p)
        .unwrap_or_else(|| panic!("completion time overflows u64 ({start} + {p})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_instance() -> Instance {
        Instance::new(vec![vec![2, 3], vec![4, 1], vec![3, 2]]).unwrap()
    }

    #[test]
    fn test_two_jobs_single_machine() {
        let inst = Instance::new(vec![vec![3], vec![5]]).unwrap();
        assert_eq!(evaluate(&[0, 1], &inst), 8);
        assert_eq!(evaluate(&[1, 0], &inst), 8);
    }

    #[test]
    fn test_single_machine_is_sum() {
        let inst = Instance::new(vec![vec![4], vec![0], vec![7], vec![1]]).unwrap();
        for schedule in [[0, 1, 2, 3], [3, 2, 1, 0], [2, 0, 3, 1]] {
            assert_eq!(evaluate(&schedule, &inst), 12);
        }
    }

    #[test]
    fn test_known_answer() {
        // C trace for [0, 1, 2]:
        //   job 0: 2, 5
        //   job 1: 6, max(5, 6) + 1 = 7
        //   job 2: 9, max(7, 9) + 2 = 11
        let inst = known_instance();
        assert_eq!(evaluate(&[0, 1, 2], &inst), 11);
        assert_eq!(evaluate(&[0, 2, 1], &inst), 10);
        assert_eq!(evaluate(&[2, 1, 0], &inst), 12);
    }

    #[test]
    fn test_matrix_matches_trace() {
        let inst = known_instance();
        let c = completion_times(&[0, 1, 2], &inst);
        assert_eq!(
            c,
            vec![
                vec![0, 0, 0],
                vec![0, 2, 5],
                vec![0, 6, 7],
                vec![0, 9, 11],
            ]
        );
    }

    #[test]
    fn test_matrix_corner_equals_evaluate() {
        let inst = Instance::new(vec![
            vec![5, 9, 8, 10],
            vec![9, 3, 10, 1],
            vec![9, 4, 5, 8],
            vec![4, 8, 8, 7],
            vec![3, 5, 6, 3],
        ])
        .unwrap();
        let schedule = [4, 0, 3, 2, 1];
        let c = completion_times(&schedule, &inst);
        assert_eq!(c[5][4], evaluate(&schedule, &inst));
    }

    #[test]
    fn test_all_zero_times() {
        let inst = Instance::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
        assert_eq!(evaluate(&[1, 0], &inst), 0);
    }

    #[test]
    #[should_panic(expected = "completion time overflows u64")]
    fn test_overflow_panics() {
        let inst = Instance::new(vec![vec![u64::MAX], vec![1]]).unwrap();
        evaluate(&[0, 1], &inst);
    }

    #[test]
    fn test_largest_representable_makespan() {
        let inst = Instance::new(vec![vec![u64::MAX - 1], vec![1]]).unwrap();
        assert_eq!(evaluate(&[0, 1], &inst), u64::MAX);
        assert_eq!(completion_times(&[1, 0], &inst)[2][1], u64::MAX);
    }
}
