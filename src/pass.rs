//! Single digit-pass orchestration: partition, histogram, prefix sum, scatter.
//!
//! Ties together [`crate::histogram`], [`crate::prefix`] and [`crate::scatter`]
//! around one [`WorkerPool`], mirroring the per-digit loop body of the
//! original thread-context pass (`from_digit..to_digit`, ping-ponging between
//! the caller's array and a scratch buffer each digit).

use crate::alloc::{BUCKETS, HistogramRow};
use crate::histogram::histogram;
use crate::key::RadixDigit;
use crate::pool::WorkerPool;
use crate::prefix::prefix_sum;
use crate::scatter::{WriteBuffer, scatter};
use crate::sendptr::SyncMutPtr;

/// Splits `[0, len)` into `n` contiguous, deterministic ranges: each range
/// gets `len / n` elements, and the first `len % n` ranges get one extra, so
/// the same `(len, n)` always yields the same partition regardless of which
/// worker happens to claim which slot.
pub(crate) fn partition_ranges(len: usize, n: usize) -> Vec<(usize, usize)> {
    let n = n.max(1);
    let base = len / n;
    let rem = len % n;
    let mut ranges = Vec::with_capacity(n);
    let mut start = 0usize;
    for t in 0..n {
        let extra = if t < rem { 1 } else { 0 };
        let end = start + base + extra;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Runs one complete digit pass over digit `d`: every worker histograms its
/// range of `src`, a single-threaded prefix sum turns the per-worker
/// histograms into destination offsets, then every worker scatters its range
/// of `src` into `dst` at those offsets.
///
/// `src` and `dst` must have equal length and must not overlap — the pass
/// always reads one ping-pong buffer and writes the other. `rows`, `offsets`,
/// and `buffers` are scratch state owned by the caller and reused across
/// every digit pass of a sort call: one entry per worker, cleared here rather
/// than reallocated.
pub(crate) fn run_pass<K: RadixDigit>(
    src: &[K],
    dst: &mut [K],
    d: usize,
    pool: &WorkerPool,
    rows: &mut [HistogramRow],
    offsets: &mut [[u64; BUCKETS]],
    buffers: &mut [WriteBuffer<K>],
) {
    debug_assert_eq!(src.len(), dst.len());
    let len = src.len();
    let n = pool.num_threads();
    debug_assert_eq!(rows.len(), n);
    debug_assert_eq!(offsets.len(), n);
    debug_assert_eq!(buffers.len(), n);
    let ranges = partition_ranges(len, n);

    {
        let rows_ptr = SyncMutPtr(rows.as_mut_ptr());
        pool.dispatch(|t| {
            let (lo, hi) = ranges[t];
            // SAFETY: worker `t` only ever dereferences `rows_ptr + t`; no
            // two workers share an index.
            let row = unsafe { &mut *rows_ptr.as_ptr().add(t) };
            row.clear();
            histogram(src, lo, hi, d, row);
        });
    }

    prefix_sum(rows, offsets);

    let dst_ptr = SyncMutPtr(dst.as_mut_ptr());
    {
        let offsets_ptr = SyncMutPtr(offsets.as_mut_ptr());
        let buffers_ptr = SyncMutPtr(buffers.as_mut_ptr());
        pool.dispatch(|t| {
            let (lo, hi) = ranges[t];
            // SAFETY: worker `t` only touches `offsets[t]` and `buffers[t]`;
            // the destination ranges each worker writes are disjoint by
            // construction of the prefix sum above.
            let worker_offsets = unsafe { &mut *offsets_ptr.as_ptr().add(t) };
            let worker_buffer = unsafe { &mut *buffers_ptr.as_ptr().add(t) };
            scatter(src, lo, hi, d, worker_offsets, dst_ptr, worker_buffer);
        });
    }
}
