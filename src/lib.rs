//! # Parasort
//!
//! `parasort` is a parallel, in-place least-significant-digit (LSD) radix
//! sort for fixed-width unsigned integer keys (16, 32, 64, or 128 bits).
//!
//! ## Key Features
//!
//! - **Parallel by digit pass**: a fixed pool of worker threads is reused
//!   across every pass of a sort call; each pass splits the array
//!   into deterministic contiguous ranges, one per worker.
//! - **Write-combining scatter**: instead of scattering one key at a time to
//!   its destination bucket, each worker accumulates keys in small per-bucket
//!   buffers and flushes them as contiguous blocks, trading a 256-way
//!   scattered write pattern for sequential block writes.
//! - **Raw-buffer API**: operates on `&mut [u8]` plus an `element_size`, so
//!   callers holding untyped byte buffers (arrow-style columnar buffers,
//!   mmap'd files) don't need to round-trip through a typed `Vec`.
//!
//! ## Usage
//!
//! ```rust
//! use parasort::sort_full;
//!
//! let values: [u32; 5] = [50, 10, 40, 20, 30];
//! let mut buf: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
//!
//! sort_full(&mut buf, 4, 4).unwrap();
//!
//! let sorted: Vec<u32> = buf
//!     .chunks_exact(4)
//!     .map(|c| u32::from_ne_bytes(c.try_into().unwrap()))
//!     .collect();
//! assert_eq!(sorted, vec![10, 20, 30, 40, 50]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best case**: O(N/P) wall-clock time across P worker threads for a
//!   fixed key width, since every pass is a linear histogram/scatter.
//! - **Worst case**: O(N · W) total work for W-byte keys regardless of key
//!   distribution — radix sort has no pathological input.
//! - **Memory overhead**: one scratch array the size of the input, plus
//!   O(256 · P) bytes of per-worker histogram/counter state, independent of
//!   input length.

mod alloc;
mod dispatch;
mod error;
mod histogram;
mod kernel;
mod key;
mod pass;
mod pool;
mod prefix;
mod scatter;
mod sendptr;

pub use dispatch::{sort_full, sort_half, sort_partial};
pub use error::SortError;
pub use key::RadixDigit;

pub mod prelude {
    pub use crate::dispatch::{sort_full, sort_half, sort_partial};
    pub use crate::error::SortError;
}
