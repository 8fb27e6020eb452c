//! Joining of "truthy" values into a single string.

use std::fmt::Display;

/// Values that can be judged present or absent before joining.
///
/// Zero, `NaN`, `false`, empty strings and `None` are absent.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

macro_rules! impl_truthy_int {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

/// Drops absent values and joins the rest with `separator`.
///
/// A missing or empty separator falls back to a single space. Sequences of
/// `Option`s can be passed through `.flatten()` first; the `None`s are absent
/// anyway.
pub fn join_valid<I>(values: I, separator: Option<&str>) -> String
where
    I: IntoIterator,
    I::Item: Truthy + Display,
{
    let separator = match separator {
        Some(sep) if !sep.is_empty() => sep,
        _ => " ",
    };
    values
        .into_iter()
        .filter(Truthy::is_truthy)
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
