//! Conversions from the `image` crate into RGBA regions.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{ImageRegion, OwnedRegion};
use crate::util::{PixFindError, PixFindResult};
use std::path::Path;

/// Creates a borrowed region from an RGBA image buffer.
pub fn region_from_rgba_image(img: &image::RgbaImage) -> PixFindResult<ImageRegion<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageRegion::new(img.as_raw(), width, height)
}

/// Converts any decoded image to an owned RGBA region.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> PixFindResult<OwnedRegion> {
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    OwnedRegion::new(rgba.into_raw(), width, height)
}

/// Loads an image from disk as an owned RGBA region.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> PixFindResult<OwnedRegion> {
    let img = image::open(path).map_err(|err| PixFindError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
