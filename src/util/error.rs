//! Error types for pixfind.

use thiserror::Error;

/// Result alias for pixfind operations.
pub type PixFindResult<T> = std::result::Result<T, PixFindError>;

/// Errors raised while building regions or loading pixel data.
///
/// A target that cannot be found is never an error; the locator reports it
/// as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PixFindError {
    /// `width * height * 4` does not fit in `usize`.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The buffer length disagrees with the declared dimensions.
    #[error("buffer length mismatch: expected {expected} channel values, got {got}")]
    BufferLength { expected: usize, got: usize },
    /// A crop rectangle leaves the source region.
    #[error(
        "roi ({x}, {y}) {width}x{height} is outside of {img_width}x{img_height} region"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Decoding or reading an image file failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
