//! Cross-thread prefix sum.
//!
//! Converts N per-worker histograms into an N×256 offset table: for each
//! bucket, offsets increase across workers in worker order, and buckets stay
//! contiguous across workers (worker N-1's last offset for bucket `b` plus
//! its count lands exactly at worker 0's offset for bucket `b+1`).
//!
//! Runs single-threaded between the histogram barrier and the scatter
//! barrier; it is O(256·N), negligible next to the O(len) scatter stage.

use crate::alloc::{BUCKETS, HistogramRow};

/// Computes `offsets[t][b]`, the destination index at which worker `t` must
/// begin writing keys whose current digit equals `b`.
pub(crate) fn prefix_sum(tables: &[HistogramRow], offsets: &mut [[u64; BUCKETS]]) {
    debug_assert_eq!(tables.len(), offsets.len());
    let n = tables.len();

    let mut global = 0u64;
    for b in 0..BUCKETS {
        let mut running = global;
        for t in 0..n {
            offsets[t][b] = running;
            running += tables[t].counts[b];
        }
        global = running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(counts: [u64; BUCKETS]) -> HistogramRow {
        HistogramRow { counts }
    }

    #[test]
    fn single_worker_is_a_plain_prefix_sum() {
        let mut counts = [0u64; BUCKETS];
        counts[0] = 3;
        counts[1] = 5;
        counts[255] = 2;
        let tables = vec![row(counts)];
        let mut offsets = vec![[0u64; BUCKETS]];
        prefix_sum(&tables, &mut offsets);

        assert_eq!(offsets[0][0], 0);
        assert_eq!(offsets[0][1], 3);
        assert_eq!(offsets[0][255], 8);
    }

    #[test]
    fn buckets_are_contiguous_across_workers() {
        let mut c0 = [0u64; BUCKETS];
        c0[0] = 4;
        c0[1] = 1;
        let mut c1 = [0u64; BUCKETS];
        c1[0] = 2;
        c1[1] = 3;

        let tables = vec![row(c0), row(c1)];
        let mut offsets = vec![[0u64; BUCKETS]; 2];
        prefix_sum(&tables, &mut offsets);

        // Within bucket 0: worker 0 starts at 0, worker 1 starts right after
        // worker 0's 4 entries.
        assert_eq!(offsets[0][0], 0);
        assert_eq!(offsets[1][0], 4);
        // Bucket 1 starts right after all of bucket 0's entries (4 + 2 = 6),
        // and worker 1's offset for bucket 1 follows worker 0's single entry.
        assert_eq!(offsets[0][1], 6);
        assert_eq!(offsets[1][1], 7);
    }

    #[test]
    fn total_covers_full_length() {
        let mut c0 = [0u64; BUCKETS];
        let mut c1 = [0u64; BUCKETS];
        let mut c2 = [0u64; BUCKETS];
        for b in 0..BUCKETS {
            c0[b] = (b % 3) as u64;
            c1[b] = (b % 5) as u64;
            c2[b] = (b % 7) as u64;
        }
        let total: u64 = c0.iter().chain(c1.iter()).chain(c2.iter()).sum();

        let tables = vec![row(c0), row(c1), row(c2)];
        let mut offsets = vec![[0u64; BUCKETS]; 3];
        prefix_sum(&tables, &mut offsets);

        // The last worker's offset for the last bucket plus its count must
        // equal the grand total.
        let last_bucket = BUCKETS - 1;
        let last_worker = tables.len() - 1;
        let end = offsets[last_worker][last_bucket] + tables[last_worker].counts[last_bucket];
        assert_eq!(end, total);
    }
}
