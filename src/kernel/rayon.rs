//! Rayon row-parallel scan (feature-gated).
//!
//! Candidate origin rows are searched in parallel and the lowest row with a
//! full match wins via `find_map_first`, so the result is the same placement
//! the sequential scan reports under `ResumePolicy::NextPixel`.

use crate::image::{ImageRegion, CHANNELS};
use crate::kernel::RowKernel;
use crate::search::verify::verify_rows_with;
use rayon::prelude::*;

/// Returns the pixel index of the first full match at or after `start_pixel`.
///
/// Empty regions and targets larger than the origin yield `None`.
pub fn scan_par<K: RowKernel>(
    origin: ImageRegion<'_>,
    target: ImageRegion<'_>,
    start_pixel: usize,
) -> Option<usize> {
    if origin.is_empty()
        || target.is_empty()
        || target.width() > origin.width()
        || target.height() > origin.height()
    {
        return None;
    }

    let img_width = origin.width();
    let tpl_width = target.width();
    let tpl_height = target.height();
    let max_x = img_width - tpl_width;
    let max_y = origin.height() - tpl_height;
    let start_row = start_pixel / img_width;
    if start_row > max_y {
        return None;
    }
    let anchor = target.row(0)?;

    (start_row..=max_y).into_par_iter().find_map_first(|y| {
        let origin_row = origin.row(y)?;
        (0..=max_x)
            .map(|x| (x, y * img_width + x))
            .filter(|&(_, idx)| idx >= start_pixel)
            .find(|&(x, idx)| {
                let start = x * CHANNELS;
                K::rows_equal(&origin_row[start..start + anchor.len()], anchor)
                    && verify_rows_with::<K>(origin, target, idx) == tpl_height
            })
            .map(|(_, idx)| idx)
    })
}
