//! K-way merge of sorted chunks into a separate output buffer.
//!
//! One read cursor per chunk; each output element is the minimum over all
//! non-exhausted heads, found by a plain linear scan. That is O(chunks) per
//! element, which is fine for a handful of chunks; at larger chunk counts the
//! scan is the bottleneck and a loser-tree or heap keyed on the heads would
//! bring it down to O(log chunks).

/// Fills `out` with the sorted union of `chunks`. Every chunk must already be
/// sorted ascending and `out` must have exactly their combined length. Ties
/// go to the earliest chunk, so the result is deterministic.
pub fn k_way_merge(chunks: &[&[i32]], out: &mut [i32]) {
    debug_assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), out.len());
    // usize::MAX marks "no candidate yet"; a cursor equal to the chunk length
    // marks that chunk as exhausted.
    let mut cursors = vec![0usize; chunks.len()];
    for slot in out.iter_mut() {
        let mut min_chunk = usize::MAX;
        let mut min_value = 0;
        for (k, chunk) in chunks.iter().enumerate() {
            if cursors[k] == chunk.len() {
                continue;
            }
            let head = chunk[cursors[k]];
            if min_chunk == usize::MAX || head < min_value {
                min_chunk = k;
                min_value = head;
            }
        }
        debug_assert_ne!(min_chunk, usize::MAX);
        *slot = min_value;
        cursors[min_chunk] += 1;
    }
}
