//! Row comparison kernels.
//!
//! The locator only ever asks two questions of pixel data: are these two rows
//! identical, and where is the next pixel-aligned occurrence of a row. Kernels
//! answer both; every implementation must agree exactly with [`ScalarRows`].

use crate::image::CHANNELS;

/// Exact row comparison and anchor search.
pub trait RowKernel {
    /// Returns `true` when `a` and `b` hold the same channel values.
    fn rows_equal(a: &[u8], b: &[u8]) -> bool;

    /// Finds the first offset `>= from` where `needle` occurs in `haystack`.
    ///
    /// Only offsets that are multiples of [`CHANNELS`] are considered, so a
    /// hit always starts on a pixel boundary. An unaligned `from` is rounded
    /// up to the next pixel.
    fn find_anchor(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }
        let last = haystack.len() - needle.len();
        let head = &needle[..needle.len().min(CHANNELS)];
        let mut pos = from.checked_next_multiple_of(CHANNELS)?;
        while pos <= last {
            if haystack[pos..pos + head.len()] == *head
                && Self::rows_equal(&haystack[pos..pos + needle.len()], needle)
            {
                return Some(pos);
            }
            pos += CHANNELS;
        }
        None
    }
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use scalar::ScalarRows;

#[cfg(feature = "simd")]
pub use simd::SimdRows;

/// Kernel used by the locator: SIMD when the feature is on, scalar otherwise.
#[cfg(not(feature = "simd"))]
pub(crate) type ActiveRows = ScalarRows;
#[cfg(feature = "simd")]
pub(crate) type ActiveRows = SimdRows;
