//! Generic sort kernel, monomorphized once per key width.
//!
//! Where the original instantiated one sort body per width by textually
//! including the same source file under four different preprocessor macro
//! definitions, this kernel is generic over [`RadixDigit`] and the compiler
//! produces the four specialized bodies (`u16`, `u32`, `u64`, `u128`) itself.

use crate::alloc;
use crate::key::RadixDigit;
use crate::pass::run_pass;
use crate::pool::WorkerPool;
use crate::scatter::WriteBuffer;

/// Sorts `arr` by digits `[from, to)`, least significant first, using an
/// internally allocated scratch buffer of the same length as `arr`.
///
/// `from` and `to` must satisfy `from <= to <= K::WIDTH`. A `to - from` of
/// zero is a no-op. Passes ping-pong between `arr` and the scratch buffer;
/// if an odd number of digits are sorted the final permutation is copied
/// back into `arr`.
pub(crate) fn sort_partial_generic<K: RadixDigit>(arr: &mut [K], pool: &WorkerPool, from: usize, to: usize) {
    debug_assert!(from <= to && to <= K::WIDTH);
    if arr.len() <= 1 || from >= to {
        return;
    }

    let mut scratch: Vec<K> = vec![K::default(); arr.len()];
    let passes = to - from;

    log::debug!(
        "sort_partial: {} elements, {}-byte keys, digits [{from}, {to}), {} workers",
        arr.len(),
        K::WIDTH,
        pool.num_threads()
    );

    // Histogram rows, offset rows, and write buffers are allocated once per
    // sort call and reused across every digit pass, cleared in place rather
    // than reallocated each time.
    let n = pool.num_threads();
    let mut rows = alloc::histogram_rows(n);
    let mut offsets = alloc::offset_rows(n);
    let mut buffers: Vec<WriteBuffer<K>> = (0..n).map(|_| WriteBuffer::new()).collect();

    let mut scratch_is_dst = true;
    for pass in 0..passes {
        let d = from + pass;
        log::trace!("digit pass d={d}");
        if scratch_is_dst {
            run_pass(arr, &mut scratch, d, pool, &mut rows, &mut offsets, &mut buffers);
        } else {
            run_pass(&scratch, arr, d, pool, &mut rows, &mut offsets, &mut buffers);
        }
        scratch_is_dst = !scratch_is_dst;
    }

    // After an odd number of passes the result lives in `scratch`, since
    // each pass flips which buffer is the destination.
    if passes % 2 == 1 {
        arr.copy_from_slice(&scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_u32_keys_over_all_four_digits() {
        let pool = WorkerPool::new(3);
        let mut data: Vec<u32> = vec![
            0xDEADBEEF, 0x00000000, 0xFFFFFFFF, 0x12345678, 0x00000001, 0x80000000, 0x0000FFFF, 1, 2, 3,
        ];
        let mut expected = data.clone();
        expected.sort();
        sort_partial_generic(&mut data, &pool, 0, 4);
        assert_eq!(data, expected);
    }

    #[test]
    fn sorts_u16_keys_over_a_single_digit() {
        let pool = WorkerPool::new(2);
        let mut data: Vec<u16> = vec![0x0105, 0x0003, 0x02FF, 0x0001, 0x0304];
        sort_partial_generic(&mut data, &pool, 0, 1);
        for w in data.windows(2) {
            assert!((w[0] & 0xFF) <= (w[1] & 0xFF));
        }
        let mut expected = data.clone();
        let mut input: Vec<u16> = vec![0x0105, 0x0003, 0x02FF, 0x0001, 0x0304];
        input.sort();
        expected.sort();
        assert_eq!(expected, input);
    }

    #[test]
    fn empty_and_singleton_slices_are_no_ops() {
        let pool = WorkerPool::new(2);
        let mut empty: Vec<u64> = vec![];
        sort_partial_generic(&mut empty, &pool, 0, 8);
        assert!(empty.is_empty());

        let mut one: Vec<u64> = vec![42];
        sort_partial_generic(&mut one, &pool, 0, 8);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn sorts_u128_keys_full_width() {
        let pool = WorkerPool::new(4);
        let mut data: Vec<u128> = vec![
            u128::MAX,
            0,
            1,
            u128::MAX / 2,
            123456789012345678901234567890,
            u128::MAX - 1,
        ];
        let mut expected = data.clone();
        expected.sort();
        sort_partial_generic(&mut data, &pool, 0, 16);
        assert_eq!(data, expected);
    }
}
