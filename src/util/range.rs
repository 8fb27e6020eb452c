//! Range clamping with optional bounds.

/// Clamps `value` into `[min, max]`, treating a missing bound as infinite.
///
/// The upper bound is checked first, so inverted bounds resolve to `max` for
/// values above it. `NaN` passes through unchanged.
pub fn standard_num(value: f64, max: Option<f64>, min: Option<f64>) -> f64 {
    let max = max.unwrap_or(f64::INFINITY);
    let min = min.unwrap_or(f64::NEG_INFINITY);
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}
