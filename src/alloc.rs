//! Cache-aligned per-worker scratch rows.
//!
//! Each worker owns one [`HistogramRow`] and one [`BucketCounters`] row per
//! sort call, reused across passes after zeroing. Padding each row to a cache
//! line (via the same [`cuneiform`] attribute the original cache-prefix sort
//! in this workspace uses for its own 256-bucket counts struct) keeps one
//! worker's writes from false-sharing a cache line with its neighbor's row.

use cuneiform::cuneiform;

pub(crate) const BUCKETS: usize = 256;

/// One worker's 256-entry byte-value histogram for a single digit pass.
#[cuneiform]
pub(crate) struct HistogramRow {
    pub(crate) counts: [u64; BUCKETS],
}

impl HistogramRow {
    pub(crate) fn zeroed() -> Self {
        HistogramRow {
            counts: [0; BUCKETS],
        }
    }

    pub(crate) fn clear(&mut self) {
        self.counts = [0; BUCKETS];
    }
}

/// One worker's 256-entry write-buffer fill counters for the scatter stage.
#[cuneiform]
pub(crate) struct BucketCounters {
    pub(crate) counts: [u8; BUCKETS],
}

impl BucketCounters {
    pub(crate) fn zeroed() -> Self {
        BucketCounters {
            counts: [0; BUCKETS],
        }
    }
}

/// Allocates `n` cache-aligned, zeroed rows.
pub(crate) fn histogram_rows(n: usize) -> Vec<HistogramRow> {
    (0..n).map(|_| HistogramRow::zeroed()).collect()
}

/// Allocates `n` cache-aligned, zeroed per-(thread, bucket) offset rows.
pub(crate) fn offset_rows(n: usize) -> Vec<[u64; BUCKETS]> {
    vec![[0u64; BUCKETS]; n]
}
