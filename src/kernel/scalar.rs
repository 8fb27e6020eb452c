//! Scalar reference kernel.

use crate::kernel::RowKernel;

/// Slice-equality kernel; the reference the other kernels are tested against.
pub struct ScalarRows;

impl RowKernel for ScalarRows {
    #[inline]
    fn rows_equal(a: &[u8], b: &[u8]) -> bool {
        a == b
    }
}
