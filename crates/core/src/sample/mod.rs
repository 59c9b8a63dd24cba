//! Numeric sample types accepted by the encoder.
//!
//! Sealed so that only `f32` and `f64` can be used.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Sub};

use serde::{de::DeserializeOwned, Serialize};

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point sample that can be summarised and encoded.
pub trait Sample:
    private::Sealed
    + Copy
    + Debug
    + Display
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Human readable type tag used in summary text.
    const TYPE_NAME: &'static str;

    /// Machine epsilon, the tolerance used by the out-of-range check.
    const EPSILON: Self;

    const ZERO: Self;

    const ONE: Self;

    fn abs(self) -> Self;

    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_finite(self) -> bool;

    /// Nonzero and smaller in magnitude than the smallest normal value.
    fn is_subnormal(self) -> bool;

    /// Widens to `f64`, used for bucket arithmetic and text formatting.
    fn to_f64(self) -> f64;
}

impl Sample for f32 {
    const TYPE_NAME: &'static str = "float";
    const EPSILON: Self = f32::EPSILON;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn is_subnormal(self) -> bool {
        f32::is_subnormal(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f64 {
    const TYPE_NAME: &'static str = "double";
    const EPSILON: Self = f64::EPSILON;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn is_subnormal(self) -> bool {
        f64::is_subnormal(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Smallest non-NaN value, first occurrence winning ties.
///
/// NaN never wins a comparison, so it is only skipped. Returns `None` when
/// the input holds no non-NaN value.
pub fn min_value<S: Sample>(samples: impl IntoIterator<Item = S>) -> Option<S> {
    samples
        .into_iter()
        .filter(|sample| !sample.is_nan())
        .fold(None, |best, sample| match best {
            Some(current) if sample >= current => Some(current),
            _ => Some(sample),
        })
}

/// Largest non-NaN value, first occurrence winning ties. See [`min_value`].
pub fn max_value<S: Sample>(samples: impl IntoIterator<Item = S>) -> Option<S> {
    samples
        .into_iter()
        .filter(|sample| !sample.is_nan())
        .fold(None, |best, sample| match best {
            Some(current) if sample <= current => Some(current),
            _ => Some(sample),
        })
}
