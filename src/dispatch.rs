//! Public entry points: reinterpret the caller's raw byte buffer as a typed
//! key slice and forward to the generic kernel.
//!
//! Mirrors `psort_full` / `psort_half` / `psort_partial` from the original
//! C API, but takes `&mut [u8]` plus `element_size` instead of a `void *` and
//! a compile-time width, since Rust has no equivalent of re-including the
//! same translation unit once per width.

use crate::error::SortError;
use crate::kernel::sort_partial_generic;
use crate::pool::WorkerPool;

/// Sorts `array` in place, interpreting it as a contiguous run of unsigned
/// integers `element_size` bytes wide, over every byte of each key.
///
/// `element_size` must be 2, 4, 8, or 16; anything else returns
/// [`SortError::UnsupportedElementSize`] and leaves `array` unmodified.
/// Equivalent to `sort_partial(array, element_size, num_threads, 0, element_size)`.
pub fn sort_full(array: &mut [u8], element_size: usize, num_threads: usize) -> Result<(), SortError> {
    sort_partial(array, element_size, num_threads, 0, element_size)
}

/// Sorts `array` in place by only the lower half of each key's bytes (the
/// least significant `element_size / 2` bytes).
///
/// Equivalent to `sort_partial(array, element_size, num_threads, 0, element_size / 2)`.
/// `element_size` must be 2, 4, 8, or 16.
pub fn sort_half(array: &mut [u8], element_size: usize, num_threads: usize) -> Result<(), SortError> {
    sort_partial(array, element_size, num_threads, 0, element_size / 2)
}

/// Sorts `array` in place over byte range `[from, to)` of each key, least
/// significant digit first.
///
/// Stability holds only with respect to the compared byte range: two keys
/// that are equal over `[from, to)` but differ outside it may be reordered
/// relative to each other, since bytes outside the range are never examined.
/// Sorting the full key (`sort_full`, or `sort_partial` with `to == element_size`)
/// is stable in the ordinary sense because no two distinct keys can be equal
/// over the whole range without being identical.
///
/// `element_size` must be 2, 4, 8, or 16 and must evenly divide `array.len()`;
/// otherwise returns [`SortError::UnsupportedElementSize`] and leaves `array`
/// unmodified. `num_threads` of `0` is treated as `1`.
pub fn sort_partial(
    array: &mut [u8],
    element_size: usize,
    num_threads: usize,
    from: usize,
    to: usize,
) -> Result<(), SortError> {
    if !matches!(element_size, 2 | 4 | 8 | 16) {
        return Err(SortError::UnsupportedElementSize { size: element_size });
    }
    if array.len() % element_size != 0 {
        return Err(SortError::UnsupportedElementSize { size: element_size });
    }

    let pool = WorkerPool::new(num_threads);

    match element_size {
        2 => {
            let keys: &mut [u16] = bytemuck::try_cast_slice_mut(array)
                .map_err(|_| SortError::UnsupportedElementSize { size: element_size })?;
            sort_partial_generic(keys, &pool, from, to);
        }
        4 => {
            let keys: &mut [u32] = bytemuck::try_cast_slice_mut(array)
                .map_err(|_| SortError::UnsupportedElementSize { size: element_size })?;
            sort_partial_generic(keys, &pool, from, to);
        }
        8 => {
            let keys: &mut [u64] = bytemuck::try_cast_slice_mut(array)
                .map_err(|_| SortError::UnsupportedElementSize { size: element_size })?;
            sort_partial_generic(keys, &pool, from, to);
        }
        16 => {
            let keys: &mut [u128] = bytemuck::try_cast_slice_mut(array)
                .map_err(|_| SortError::UnsupportedElementSize { size: element_size })?;
            sort_partial_generic(keys, &pool, from, to);
        }
        _ => unreachable!("element_size already validated above"),
    }

    Ok(())
}
