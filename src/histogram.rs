//! Per-thread byte histogram.

use crate::alloc::HistogramRow;
use crate::key::RadixDigit;

/// Counts occurrences of each byte value at digit `d` over `src[lo..hi]`
/// into `row`. `row` must already be zeroed; this function only adds to it.
///
/// Pure function of its inputs: reads only `src[lo..hi]`, writes only `row`.
pub(crate) fn histogram<K: RadixDigit>(src: &[K], lo: usize, hi: usize, d: usize, row: &mut HistogramRow) {
    for key in &src[lo..hi] {
        row.counts[key.digit(d) as usize] += 1;
    }
}
