//! pixfind locates an exact RGBA fragment inside a larger RGBA image.
//!
//! Buffers are flat `width * height * 4` channel slices, the layout canvas
//! pixel reads produce. The locator anchors on the fragment's first row and
//! verifies the rest row by row, resuming past false positives. Optional
//! features add SIMD row compare (`simd`), a row-parallel scan (`rayon`),
//! image file loading (`image-io`) and `tracing` instrumentation.
//!
//! The crate also ships small numeric helpers: [`decimal_calc`],
//! [`standard_num`] and [`join_valid`].

pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{ImageRegion, OwnedRegion};
pub use search::{locate, locate_with, AxisOrder, LocateConfig, Locator, Match, ResumePolicy};
pub use util::{
    decimal_calc, join_valid, standard_num, CalcOp, PixFindError, PixFindResult, Truthy,
};
