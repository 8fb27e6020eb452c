//! Row-by-row verification of anchor candidates.

use crate::image::{ImageRegion, CHANNELS};
use crate::kernel::{ActiveRows, RowKernel};

/// Counts how many leading target rows match the origin at `pixel_index`.
///
/// `pixel_index` is the origin pixel under the target's top-left corner.
/// Placements that would run past the right or bottom edge of the origin
/// match zero rows. A result equal to `target.height()` is a full match.
pub fn verify_rows(origin: ImageRegion<'_>, target: ImageRegion<'_>, pixel_index: usize) -> usize {
    verify_rows_with::<ActiveRows>(origin, target, pixel_index)
}

/// [`verify_rows`] with an explicit kernel.
pub fn verify_rows_with<K: RowKernel>(
    origin: ImageRegion<'_>,
    target: ImageRegion<'_>,
    pixel_index: usize,
) -> usize {
    if origin.width() == 0 || target.is_empty() {
        return 0;
    }
    let col = pixel_index % origin.width();
    let row = pixel_index / origin.width();
    let fits_x = col
        .checked_add(target.width())
        .is_some_and(|end| end <= origin.width());
    let fits_y = row
        .checked_add(target.height())
        .is_some_and(|end| end <= origin.height());
    if !fits_x || !fits_y {
        return 0;
    }

    let start = col * CHANNELS;
    let end = start + target.row_len();
    let mut matched = 0;
    for l in 0..target.height() {
        let (Some(origin_row), Some(target_row)) = (origin.row(row + l), target.row(l)) else {
            break;
        };
        if !K::rows_equal(&origin_row[start..end], target_row) {
            break;
        }
        matched += 1;
    }
    matched
}
