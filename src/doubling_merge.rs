//! Bottom-up combination of adjacent sorted runs, doubling the run length
//! each pass until one run spans the whole slice.

use crate::merge_sort::merge_runs;

/// Merges contiguous sorted runs of length `run_len` (the last run may be
/// shorter) until `data` is fully sorted.
///
/// ceil(log2(runs)) passes, each O(len). A run whose partner would start past
/// the end of the slice stays in place and is paired on a later pass.
///
/// # Panics
///
/// Panics if `run_len` is zero.
pub fn merge_adjacent_runs(data: &mut [i32], run_len: usize, scratch: &mut [i32]) {
    assert!(run_len > 0, "run length must be at least 1");
    debug_assert!(scratch.len() >= data.len());
    let len = data.len();
    let mut size = run_len;
    while size < len {
        let mut left = 0;
        while left + size < len {
            let right_end = usize::min(left + 2 * size, len);
            let dst = &mut scratch[..right_end - left];
            let (l, r) = data[left..right_end].split_at(size);
            merge_runs(l, r, dst);
            data[left..right_end].copy_from_slice(dst);
            left += 2 * size;
        }
        size *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(mut data: Vec<i32>, run_len: usize) -> Vec<i32> {
        let mut scratch = vec![0; data.len()];
        merge_adjacent_runs(&mut data, run_len, &mut scratch);
        data
    }

    #[test]
    fn reference_scenario() {
        // Five sorted runs of two: [3,5] [1,8] [2,9] [4,7] [0,6].
        // Pass 1 pairs them into [1,3,5,8] [2,4,7,9] with [0,6] unpaired,
        // pass 2 yields [1,2,3,4,5,7,8,9] with [0,6] still unpaired,
        // pass 3 folds in the tail.
        let data = vec![3, 5, 1, 8, 2, 9, 4, 7, 0, 6];
        assert_eq!(merged(data, 2), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn single_run_is_unchanged() {
        let data = vec![1, 2, 3, 4];
        assert_eq!(merged(data.clone(), 4), data);
        assert_eq!(merged(data.clone(), 100), data);
    }

    #[test]
    fn short_final_run() {
        // Runs of 4, 4 and 2.
        let data = vec![1, 3, 5, 7, 0, 2, 4, 6, -1, 8];
        assert_eq!(merged(data, 4), vec![-1, 0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_slice() {
        assert_eq!(merged(vec![], 4), vec![]);
    }

    #[test]
    fn run_count_not_a_power_of_two() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut data: Vec<i32> = (0..9_001).map(|_| rng.i32(..)).collect();
        let run_len = 1_000;
        let mut scratch = vec![0; data.len()];
        for run in data.chunks_mut(run_len) {
            run.sort_unstable();
        }
        let mut expected = data.clone();
        expected.sort_unstable();
        merge_adjacent_runs(&mut data, run_len, &mut scratch);
        assert_eq!(data, expected);
    }

    #[test]
    #[should_panic(expected = "run length")]
    fn zero_run_length_panics() {
        merge_adjacent_runs(&mut [1, 2], 0, &mut [0, 0]);
    }
}
