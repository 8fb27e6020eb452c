//! RGBA pixel regions.
//!
//! An `ImageRegion` is a borrowed, tightly packed RGBA buffer: four `u8`
//! channel values per pixel, rows laid out back to back with no padding, so
//! `data.len() == width * height * 4` always holds. This is the layout a
//! canvas `getImageData` call produces. Regions with a zero dimension are
//! valid and hold an empty buffer.

use crate::util::{PixFindError, PixFindResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Channel values per pixel.
pub const CHANNELS: usize = 4;

/// Borrowed RGBA region.
#[derive(Copy, Clone, Debug)]
pub struct ImageRegion<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> ImageRegion<'a> {
    /// Wraps `data` after checking it holds exactly `width * height` pixels.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> PixFindResult<Self> {
        let expected = required_len(width, height)?;
        if data.len() != expected {
            return Err(PixFindError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the region width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the region height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when the region holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Channel values per row.
    pub fn row_len(&self) -> usize {
        self.width * CHANNELS
    }

    /// Returns the flat channel buffer.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the channel values of row `y`.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.row_len();
        self.data.get(start..start + self.row_len())
    }

    /// Returns the RGBA value at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * CHANNELS;
        let px = self.data.get(start..start + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copies a sub-rectangle into a new owned region.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> PixFindResult<OwnedRegion> {
        let out_of_bounds = PixFindError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let mut data = Vec::with_capacity(required_len(width, height)?);
        for row_idx in y..end_y {
            let row = self.row(row_idx).ok_or_else(|| out_of_bounds.clone())?;
            data.extend_from_slice(&row[x * CHANNELS..end_x * CHANNELS]);
        }
        OwnedRegion::new(data, width, height)
    }

    /// Copies the region into an owned buffer.
    pub fn to_owned_region(&self) -> OwnedRegion {
        OwnedRegion {
            data: self.data.to_vec(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Owned RGBA region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedRegion {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedRegion {
    /// Takes ownership of `data` after validating its length.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> PixFindResult<Self> {
        ImageRegion::new(&data, width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a region with every pixel set to `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> PixFindResult<Self> {
        let len = required_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the region width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the region height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the flat channel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites the pixel at `(x, y)`; returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let start = (y * self.width + x) * CHANNELS;
        self.data[start..start + CHANNELS].copy_from_slice(&rgba);
        true
    }

    /// Copies `src` into this region with its top-left corner at `(x, y)`.
    pub fn paste(&mut self, src: ImageRegion<'_>, x: usize, y: usize) -> PixFindResult<()> {
        let out_of_bounds = PixFindError::RoiOutOfBounds {
            x,
            y,
            width: src.width(),
            height: src.height(),
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(src.width()).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(src.height()).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }
        let row_len = self.width * CHANNELS;
        for ty in 0..src.height() {
            let Some(src_row) = src.row(ty) else {
                continue;
            };
            let start = (y + ty) * row_len + x * CHANNELS;
            self.data[start..start + src_row.len()].copy_from_slice(src_row);
        }
        Ok(())
    }

    /// Returns a borrowed view of the region.
    pub fn view(&self) -> ImageRegion<'_> {
        ImageRegion {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Consumes the region and returns its buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

fn required_len(width: usize, height: usize) -> PixFindResult<usize> {
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(PixFindError::InvalidDimensions { width, height })
}
