//! Locating a target fragment inside an origin image.
//!
//! The search anchors on the target's first row, verifies the remaining rows
//! beneath each anchor hit, and resumes past false positives until a full
//! match is found or the origin is exhausted. Equality is exact per channel.

pub(crate) mod scan;
pub(crate) mod verify;

use crate::image::{ImageRegion, OwnedRegion};
use crate::kernel::ActiveRows;
use crate::trace::{trace_event, trace_span};

/// How a matched pixel index is turned into `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrder {
    /// `x = index / origin.width`, `y = index % origin.width`.
    ///
    /// `x` carries the row ordinal and `y` the column. Existing canvas
    /// consumers read coordinates this way.
    #[default]
    RowColumn,
    /// `x = index % origin.width`, `y = index / origin.width`.
    ColumnRow,
}

/// Where the scan resumes after an anchor fails verification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumePolicy {
    /// One pixel past the failed anchor; never skips an overlapping match.
    #[default]
    NextPixel,
    /// One full target row past the failed anchor.
    PastAnchor,
}

/// Configuration for [`Locator`].
#[derive(Clone, Copy, Debug)]
pub struct LocateConfig {
    /// Coordinate convention for reported matches.
    pub axis_order: AxisOrder,
    /// Resume strategy after a false-positive anchor.
    pub resume: ResumePolicy,
    /// First origin pixel index considered as a top-left corner.
    pub start_pixel: usize,
    /// Use the row-parallel scan when the `rayon` feature is enabled.
    ///
    /// Only honoured with [`ResumePolicy::NextPixel`]; other policies scan
    /// sequentially.
    pub parallel: bool,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            axis_order: AxisOrder::RowColumn,
            resume: ResumePolicy::NextPixel,
            start_pixel: 0,
            parallel: false,
        }
    }
}

/// Position of a located target inside the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// First coordinate, per [`AxisOrder`].
    pub x: usize,
    /// Second coordinate, per [`AxisOrder`].
    pub y: usize,
    /// Target width in pixels.
    pub width: usize,
    /// Target height in pixels.
    pub height: usize,
    /// Origin pixel index under the target's top-left corner.
    pub pixel_index: usize,
}

impl Match {
    fn from_index(
        pixel_index: usize,
        origin_width: usize,
        target: ImageRegion<'_>,
        order: AxisOrder,
    ) -> Self {
        let quotient = pixel_index / origin_width;
        let remainder = pixel_index % origin_width;
        let (x, y) = match order {
            AxisOrder::RowColumn => (quotient, remainder),
            AxisOrder::ColumnRow => (remainder, quotient),
        };
        Self {
            x,
            y,
            width: target.width(),
            height: target.height(),
            pixel_index,
        }
    }
}

/// Locates `target` in `origin` with the default configuration.
///
/// Returns `None` when there is no exact match, when either region is empty,
/// or when the target is larger than the origin.
pub fn locate(origin: ImageRegion<'_>, target: ImageRegion<'_>) -> Option<Match> {
    locate_with(origin, target, &LocateConfig::default())
}

/// Locates `target` in `origin` using `cfg`.
pub fn locate_with(
    origin: ImageRegion<'_>,
    target: ImageRegion<'_>,
    cfg: &LocateConfig,
) -> Option<Match> {
    let _span = trace_span!(
        "locate",
        origin_width = origin.width(),
        origin_height = origin.height(),
        target_width = target.width(),
        target_height = target.height()
    )
    .entered();

    if origin.is_empty() || target.is_empty() {
        trace_event!("empty_region");
        return None;
    }
    if target.width() > origin.width() || target.height() > origin.height() {
        trace_event!("target_larger_than_origin");
        return None;
    }

    let pixel_index = run_scan(origin, target, cfg)?;
    let found = Match::from_index(pixel_index, origin.width(), target, cfg.axis_order);
    trace_event!("match_found", pixel_index = pixel_index, x = found.x, y = found.y);
    Some(found)
}

#[cfg(feature = "rayon")]
fn run_scan(origin: ImageRegion<'_>, target: ImageRegion<'_>, cfg: &LocateConfig) -> Option<usize> {
    if cfg.parallel && cfg.resume == ResumePolicy::NextPixel {
        return crate::kernel::rayon::scan_par::<ActiveRows>(origin, target, cfg.start_pixel);
    }
    scan::scan_sequential::<ActiveRows>(origin, target, cfg.start_pixel, cfg.resume)
}

#[cfg(not(feature = "rayon"))]
fn run_scan(origin: ImageRegion<'_>, target: ImageRegion<'_>, cfg: &LocateConfig) -> Option<usize> {
    scan::scan_sequential::<ActiveRows>(origin, target, cfg.start_pixel, cfg.resume)
}

/// Reusable locator holding an owned target.
pub struct Locator {
    target: OwnedRegion,
    cfg: LocateConfig,
}

impl Locator {
    /// Creates a locator with the default configuration.
    pub fn new(target: OwnedRegion) -> Self {
        Self {
            target,
            cfg: LocateConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: LocateConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LocateConfig {
        &self.cfg
    }

    /// Returns the target being searched for.
    pub fn target(&self) -> ImageRegion<'_> {
        self.target.view()
    }

    /// Locates the target in `origin`.
    pub fn locate(&self, origin: ImageRegion<'_>) -> Option<Match> {
        locate_with(origin, self.target.view(), &self.cfg)
    }
}
