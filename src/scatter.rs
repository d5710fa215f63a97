//! Buffered write-combining scatter ("WCR").
//!
//! Each worker routes the keys in its source slice into one of 256
//! destination buckets. Rather than writing each key straight to its
//! (scattered) destination index, writes accumulate in a small per-bucket
//! buffer and are flushed as a single contiguous block once the buffer
//! fills — turning 256 streams of one-key stores into sequential block
//! writes.

use crate::alloc::{BUCKETS, BucketCounters};
use crate::key::RadixDigit;
use crate::sendptr::SyncMutPtr;

/// Write-buffer block size: entries per bucket held before a flush.
///
/// Chosen so that the worst case (128-bit keys) keeps `256 * BUFFER_BLOCK *
/// 16` bytes within a typical L1 data cache: `256 * 8 * 16 = 32 KiB`. A
/// power of two in the 8..64 range recommended by the design; narrower keys
/// use proportionally less of the cache for the same block size.
pub(crate) const BUFFER_BLOCK: usize = 8;

/// Per-worker write buffer: `BUCKETS` rows of up to `BUFFER_BLOCK` pending
/// keys, plus a fill counter per bucket.
pub(crate) struct WriteBuffer<K> {
    slots: Box<[[K; BUFFER_BLOCK]; BUCKETS]>,
    counters: BucketCounters,
}

impl<K: RadixDigit> WriteBuffer<K> {
    pub(crate) fn new() -> Self {
        WriteBuffer {
            slots: Box::new([[K::default(); BUFFER_BLOCK]; BUCKETS]),
            counters: BucketCounters::zeroed(),
        }
    }
}

/// Moves every key in `src[lo..hi]` to `dst[offsets[digit(key)]++]`, using
/// `buffer` to coalesce writes into `BUFFER_BLOCK`-sized blocks.
///
/// `dst` must have at least `len` elements, and the ranges this call writes
/// (governed by `offsets`) must be disjoint from every other concurrent call
/// sharing the same `dst` — guaranteed by the cross-thread prefix sum.
pub(crate) fn scatter<K: RadixDigit>(
    src: &[K],
    lo: usize,
    hi: usize,
    d: usize,
    offsets: &mut [u64; BUCKETS],
    dst: SyncMutPtr<K>,
    buffer: &mut WriteBuffer<K>,
) {
    buffer.counters = BucketCounters::zeroed();

    for key in &src[lo..hi] {
        let b = key.digit(d) as usize;
        let c = buffer.counters.counts[b] as usize;
        buffer.slots[b][c] = *key;
        buffer.counters.counts[b] = (c + 1) as u8;

        if c + 1 == BUFFER_BLOCK {
            flush_block(dst, offsets, b, &buffer.slots[b]);
            buffer.counters.counts[b] = 0;
        }
    }

    // Flush partial tails.
    for b in 0..BUCKETS {
        let c = buffer.counters.counts[b] as usize;
        if c > 0 {
            flush_tail(dst, offsets, b, &buffer.slots[b][..c]);
        }
    }
}

#[inline]
fn flush_block<K: RadixDigit>(
    dst: SyncMutPtr<K>,
    offsets: &mut [u64; BUCKETS],
    bucket: usize,
    block: &[K; BUFFER_BLOCK],
) {
    let start = offsets[bucket] as usize;
    // SAFETY: the caller-provided offsets guarantee this worker owns
    // `dst[start..start + BUFFER_BLOCK]` exclusively for this bucket.
    unsafe {
        std::ptr::copy_nonoverlapping(block.as_ptr(), dst.as_ptr().add(start), BUFFER_BLOCK);
    }
    offsets[bucket] += BUFFER_BLOCK as u64;
}

#[inline]
fn flush_tail<K: RadixDigit>(dst: SyncMutPtr<K>, offsets: &mut [u64; BUCKETS], bucket: usize, tail: &[K]) {
    let start = offsets[bucket] as usize;
    // SAFETY: see `flush_block`.
    unsafe {
        std::ptr::copy_nonoverlapping(tail.as_ptr(), dst.as_ptr().add(start), tail.len());
    }
    offsets[bucket] += tail.len() as u64;
}
