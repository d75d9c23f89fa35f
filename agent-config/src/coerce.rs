//! Coercion of raw string values into typed configuration values.
//!
//! Both helpers are total: malformed input never produces an error, it
//! degrades to the supplied default (numbers) or to `false` (booleans).

use std::num::IntErrorKind;

/// Tokens accepted as `true` by [`parse_boolean`], compared case-insensitively.
pub const TRUTHY_TOKENS: [&str; 4] = ["true", "1", "yes", "y"];

mod sealed {
    pub trait Sealed {}
}

/// Numeric types accepted by [`parse_number`].
///
/// Sealed: implemented for the primitive integer and float types only.
pub trait Number: sealed::Sealed + PartialOrd + Copy {
    /// Parses trimmed, non-empty text.
    ///
    /// Integer text outside the type's range saturates to `MIN`/`MAX`.
    /// Returns `None` for text that is not a number, including `NaN`.
    fn parse_text(text: &str) -> Option<Self>;
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

macro_rules! impl_number_for_ints {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                fn parse_text(text: &str) -> Option<Self> {
                    match text.parse::<$ty>() {
                        Ok(value) => Some(value),
                        Err(err) => match err.kind() {
                            IntErrorKind::PosOverflow => Some(<$ty>::MAX),
                            IntErrorKind::NegOverflow => Some(<$ty>::MIN),
                            // unsigned types reject any sign as an invalid digit
                            IntErrorKind::InvalidDigit if is_negative_integer(text) => {
                                Some(<$ty>::MIN)
                            }
                            _ => None,
                        },
                    }
                }
            }
        )*
    };
}

impl_number_for_ints!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_number_for_floats {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Number for $ty {
                fn parse_text(text: &str) -> Option<Self> {
                    text.parse::<$ty>().ok().filter(|value| !value.is_nan())
                }
            }
        )*
    };
}

impl_number_for_floats!(f32, f64);

/// Optional closed interval used to clamp parsed numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: Number> Bounds<T> {
    /// No clamping.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Clamps from below only.
    #[must_use]
    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Clamps from above only.
    #[must_use]
    pub const fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Clamps into `[min, max]`.
    #[must_use]
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns the lower bound, if any.
    #[must_use]
    pub const fn min(&self) -> Option<T> {
        self.min
    }

    /// Returns the upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<T> {
        self.max
    }

    /// Pulls `value` to the nearest bound when it falls outside the interval.
    ///
    /// The lower bound is applied first, so an inverted interval resolves to `max`.
    #[must_use]
    pub fn clamp(&self, mut value: T) -> T {
        if let Some(min) = self.min {
            if value < min {
                value = min;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                value = max;
            }
        }
        value
    }
}

impl<T: Number> Default for Bounds<T> {
    fn default() -> Self {
        Self::none()
    }
}

/// Parses `raw` as a number, falling back to `default` when it is absent or
/// not a number.
///
/// A successfully parsed value is clamped into `bounds`; the default never is.
/// Surrounding whitespace is ignored and a blank string counts as not a number.
/// Integer text beyond the target type's range saturates before clamping.
#[must_use]
pub fn parse_number<T: Number>(raw: Option<&str>, default: T, bounds: Bounds<T>) -> T {
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    T::parse_text(trimmed).map_or(default, |value| bounds.clamp(value))
}

/// Parses `raw` as a boolean flag.
///
/// `default` only applies when `raw` is absent. A present value is `true` iff
/// it matches one of [`TRUTHY_TOKENS`]; anything else is `false`.
#[must_use]
pub fn parse_boolean(raw: Option<&str>, default: bool) -> bool {
    match raw {
        None => default,
        Some(raw) => {
            let value = raw.trim();
            TRUTHY_TOKENS
                .iter()
                .any(|token| value.eq_ignore_ascii_case(token))
        }
    }
}
