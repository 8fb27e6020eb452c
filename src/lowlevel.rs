//! Low-level building blocks for custom search loops.
//!
//! Most users should prefer [`locate`](crate::locate) or
//! [`Locator`](crate::Locator).

pub use crate::image::CHANNELS;
pub use crate::kernel::{RowKernel, ScalarRows};
pub use crate::search::scan::find_anchor;
pub use crate::search::verify::{verify_rows, verify_rows_with};

#[cfg(feature = "simd")]
pub use crate::kernel::SimdRows;

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_par;
