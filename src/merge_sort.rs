//! Recursive merge sort over a mutable slice.
//!
//! The caller supplies the scratch buffer, so one allocation can be reused
//! across many sorts. `merge_runs` is the shared primitive: the bottom-up
//! chunk merger in `doubling_merge` drives the same routine over ever larger
//! runs.

/// Merges two sorted runs into `dst`. Ties take from `left`, which keeps the
/// merge stable when the runs are adjacent halves of one slice.
pub fn merge_runs(left: &[i32], right: &[i32], dst: &mut [i32]) {
    debug_assert_eq!(left.len() + right.len(), dst.len());
    let mut i = 0;
    let mut j = 0;
    for slot in dst.iter_mut() {
        if j == right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Sorts `data` ascending in place.
///
/// `scratch` must be at least as long as `data`; its contents are transient.
/// Recursion depth is log2(len), around 21 levels for the 2.6M reference
/// workload.
pub fn merge_sort(data: &mut [i32], scratch: &mut [i32]) {
    debug_assert!(scratch.len() >= data.len());
    if data.len() <= 1 {
        return;
    }
    let mid = data.len() / 2;
    merge_sort(&mut data[..mid], scratch);
    merge_sort(&mut data[mid..], scratch);
    let merged = &mut scratch[..data.len()];
    let (left, right) = data.split_at(mid);
    merge_runs(left, right, merged);
    data.copy_from_slice(merged);
}
