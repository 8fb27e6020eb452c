//! SIMD row kernel using the `wide` crate.
//!
//! Rows are compared sixteen channel values (four pixels) at a time with
//! `u8x16`; the tail shorter than a full vector falls back to scalar compare.

use crate::kernel::RowKernel;
use wide::u8x16;

const LANES: usize = 16;

#[inline]
fn load_u8x16(slice: &[u8]) -> u8x16 {
    let mut lanes = [0u8; LANES];
    lanes.copy_from_slice(&slice[..LANES]);
    u8x16::from(lanes)
}

/// Vectorized equality kernel.
pub struct SimdRows;

impl RowKernel for SimdRows {
    fn rows_equal(a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let simd_end = a.len() / LANES * LANES;
        let mut idx = 0;
        while idx < simd_end {
            let diff = load_u8x16(&a[idx..]) ^ load_u8x16(&b[idx..]);
            if diff.to_array() != [0u8; LANES] {
                return false;
            }
            idx += LANES;
        }
        a[simd_end..] == b[simd_end..]
    }
}
