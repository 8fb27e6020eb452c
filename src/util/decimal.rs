//! Decimal-safe addition and subtraction for `f64` operands.
//!
//! Operands are scaled by `10^d`, where `d` is the largest number of
//! fractional digits among them, folded in the scaled domain and scaled back.
//! This keeps sums such as `0.1 + 0.2` from drifting to `0.30000000000000004`.

/// Fold direction for [`decimal_calc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalcOp {
    /// Sum all operands.
    #[default]
    Add,
    /// Subtract every following operand from the first.
    Sub,
}

impl CalcOp {
    fn sign(self) -> f64 {
        match self {
            CalcOp::Add => 1.0,
            CalcOp::Sub => -1.0,
        }
    }
}

/// Adds or subtracts `numbers` without binary rounding noise.
///
/// With `keep_decimals` the result is rounded to the largest fractional
/// precision seen among the operands; otherwise it is rounded to the nearest
/// integer, halves going toward positive infinity. An empty slice yields `0`.
pub fn decimal_calc(numbers: &[f64], op: CalcOp, keep_decimals: bool) -> f64 {
    let digits = numbers
        .iter()
        .map(|&value| fraction_digits(value))
        .max()
        .unwrap_or(0);
    let power = 10f64.powi(digits.min(i32::MAX as usize) as i32);
    let sign = op.sign();

    let scaled = fold(numbers, power, sign);
    let result = if power.is_finite() && scaled.is_finite() {
        scaled / power
    } else {
        // Scaling overflowed; the unscaled fold is the best finite answer.
        fold(numbers, 1.0, sign)
    };

    if keep_decimals {
        round_to_digits(result, digits)
    } else {
        round_half_up(result)
    }
}

fn fold(numbers: &[f64], power: f64, sign: f64) -> f64 {
    let mut iter = numbers.iter();
    let mut acc = match iter.next() {
        Some(&first) => first * power,
        None => 0.0,
    };
    for &value in iter {
        acc += value * power * sign;
    }
    acc
}

/// Magnitudes below this are written in exponent form by shortest-decimal
/// formatters and carry no positional fraction.
const EXPONENT_THRESHOLD: f64 = 1e-6;

/// Counts fractional digits in the shortest round-trip rendering of `value`.
///
/// Integers, non-finite values and magnitudes below `1e-6` count as zero.
pub(crate) fn fraction_digits(value: f64) -> usize {
    if !value.is_finite() || value.abs() < EXPONENT_THRESHOLD {
        return 0;
    }
    value
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

fn round_to_digits(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.digits$}").parse().unwrap_or(value)
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::{decimal_calc, fraction_digits, round_half_up, CalcOp};

    #[test]
    fn fraction_digits_ignores_integers() {
        assert_eq!(fraction_digits(3.0), 0);
        assert_eq!(fraction_digits(-12.0), 0);
        assert_eq!(fraction_digits(0.25), 2);
        assert_eq!(fraction_digits(f64::NAN), 0);
        assert_eq!(fraction_digits(f64::INFINITY), 0);
        assert_eq!(fraction_digits(1e-7), 0);
        assert_eq!(fraction_digits(-1e-320), 0);
        assert_eq!(fraction_digits(0.000001), 6);
    }

    #[test]
    fn overflowing_scale_falls_back_to_plain_fold() {
        // 1e-6 has six digits, so 1e306 * 1e6 overflows when scaled.
        let result = decimal_calc(&[1e306, 0.000001], CalcOp::Add, false);
        assert!(result.is_finite());
        assert_eq!(result, 1e306);
    }

    #[test]
    fn add_keeps_precision() {
        assert_eq!(decimal_calc(&[0.1, 0.2], CalcOp::Add, true), 0.3);
        assert_eq!(decimal_calc(&[0.1, 0.2], CalcOp::Add, false), 0.0);
    }

    #[test]
    fn sub_folds_from_first_operand() {
        assert_eq!(decimal_calc(&[1.5, 0.25, 0.05], CalcOp::Sub, true), 1.2);
        assert_eq!(decimal_calc(&[10.0, 3.0], CalcOp::Sub, false), 7.0);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(decimal_calc(&[], CalcOp::Add, false), 0.0);
        assert_eq!(decimal_calc(&[], CalcOp::Sub, true), 0.0);
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }
}
