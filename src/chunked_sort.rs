//! Two-phase chunked sorting: sort fixed-length chunks independently, then
//! combine them with one of the two merge strategies.

use rayon::prelude::*;

use crate::doubling_merge::merge_adjacent_runs;
use crate::kway_merge::k_way_merge;
use crate::merge_sort::merge_sort;

/// Phase 1: merge-sorts each `chunk_len` sub-slice of `data` independently.
///
/// The chunks tile the slice exactly; the last one is shorter when the length
/// is not a multiple of `chunk_len`. With `threads > 1` the chunks are sorted
/// on rayon workers, each with its own scratch buffer; the serial path reuses
/// a single scratch buffer across chunks.
///
/// # Panics
///
/// Panics if `chunk_len` is zero.
pub fn sort_chunks(data: &mut [i32], chunk_len: usize, threads: usize) {
    assert!(chunk_len > 0, "chunk length must be at least 1");
    if threads > 1 {
        data.par_chunks_mut(chunk_len).for_each(|chunk| {
            let mut scratch = vec![0; chunk.len()];
            merge_sort(chunk, &mut scratch);
        });
    } else {
        let mut scratch = vec![0; chunk_len.min(data.len())];
        for chunk in data.chunks_mut(chunk_len) {
            merge_sort(chunk, &mut scratch[..chunk.len()]);
        }
    }
}

/// Sorts `data` in place: phase 1, then doubling merge passes over the sorted
/// chunks.
pub fn doubling_sort(data: &mut [i32], chunk_len: usize, threads: usize) {
    sort_chunks(data, chunk_len, threads);
    let mut scratch = vec![0; data.len()];
    merge_adjacent_runs(data, chunk_len, &mut scratch);
}

/// Sorts via phase 1 plus a single k-way pass, returning the sorted output as
/// a new buffer. `data` is left as its sorted chunks. Interchangeable with
/// [`doubling_sort`] for callers: same length, same ordering.
pub fn kway_sort(data: &mut [i32], chunk_len: usize, threads: usize) -> Vec<i32> {
    sort_chunks(data, chunk_len, threads);
    let chunks: Vec<&[i32]> = data.chunks(chunk_len).collect();
    let mut out = vec![0; data.len()];
    k_way_merge(&chunks, &mut out);
    out
}
