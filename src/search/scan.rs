//! Sequential anchor scan with backtracking.
//!
//! The target's first row is the anchor. Each anchor hit in the origin is a
//! candidate top-left corner; the remaining rows are verified beneath it and
//! a failed candidate moves the cursor forward instead of recursing, so
//! highly repetitive origins cost iterations, never stack depth.

use crate::image::{ImageRegion, CHANNELS};
use crate::kernel::{ActiveRows, RowKernel};
use crate::search::verify::verify_rows_with;
use crate::search::ResumePolicy;
use crate::trace::trace_event;

/// Returns the pixel-aligned offset of the next anchor hit at or after
/// `from_pixel`, expressed as a pixel index.
pub fn find_anchor(
    origin: ImageRegion<'_>,
    target: ImageRegion<'_>,
    from_pixel: usize,
) -> Option<usize> {
    let needle = target.row(0)?;
    let from = from_pixel.checked_mul(CHANNELS)?;
    <ActiveRows as RowKernel>::find_anchor(origin.as_slice(), needle, from)
        .map(|offset| offset / CHANNELS)
}

/// Scans for the first fully matching placement at or after `start_pixel`.
///
/// Callers have already rejected empty regions and targets larger than the
/// origin.
pub(crate) fn scan_sequential<K: RowKernel>(
    origin: ImageRegion<'_>,
    target: ImageRegion<'_>,
    start_pixel: usize,
    resume: ResumePolicy,
) -> Option<usize> {
    let needle = target.row(0)?;
    let haystack = origin.as_slice();
    let max_row = origin.height() - target.height();
    let mut cursor = start_pixel.checked_mul(CHANNELS)?;

    loop {
        let offset = K::find_anchor(haystack, needle, cursor)?;
        let pixel_index = offset / CHANNELS;
        if pixel_index / origin.width() > max_row {
            // Every later anchor sits at least as low; none can fit.
            return None;
        }

        let matched = verify_rows_with::<K>(origin, target, pixel_index);
        if matched == target.height() {
            return Some(pixel_index);
        }
        trace_event!(
            debug: "false_positive_anchor",
            pixel_index = pixel_index,
            rows_matched = matched
        );

        cursor = match resume {
            ResumePolicy::NextPixel => offset + CHANNELS,
            ResumePolicy::PastAnchor => offset + needle.len(),
        };
    }
}
