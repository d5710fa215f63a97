//! Error types for the public dispatch surface.

use thiserror::Error;

/// Errors returned by [`crate::sort_full`], [`crate::sort_half`], and
/// [`crate::sort_partial`].
///
/// Caller contract violations (an out-of-range `from`/`to` pair, a key width
/// that isn't 2/4/8/16 bytes wide once `element_size` has already been
/// validated) are not represented here — those are asserted in debug builds
/// and trusted in release builds, per the library's error handling design.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// `element_size` was not one of the four supported widths (2, 4, 8, 16
    /// bytes), or `array.len()` was not a multiple of `element_size`.
    #[error("unsupported element size: {size} bytes (expected 2, 4, 8, or 16)")]
    UnsupportedElementSize {
        /// The rejected element size, in bytes.
        size: usize,
    },
}
