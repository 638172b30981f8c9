// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The numeric contract for array elements.

use fixed_point::{Fixed, FixedPointError};
use std::convert::Infallible;
use std::fmt;

/// Operations an element type must provide for [`crate::Array`] to
/// construct, bulk-assign, and combine it.
///
/// Fallible operations carry the element type's own error, which the
/// array layer wraps together with the offending index. For types
/// whose arithmetic cannot fail (IEEE floats), `Error` is
/// [`Infallible`].
pub trait Element: Clone + Default + fmt::Debug + fmt::Display {
    /// The element-level failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Converts a floating-point value into the element type, applying
    /// the type's own rounding and range rules.
    fn from_f64(value: f64) -> Result<Self, Self::Error>;

    /// Converts back to floating point (approximate; for inspection
    /// and tolerance-based tests, never used internally).
    fn to_f64(&self) -> f64;

    /// `self + rhs`.
    fn try_add(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// `self - rhs`.
    fn try_sub(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// `self * rhs`.
    fn try_mul(&self, rhs: &Self) -> Result<Self, Self::Error>;

    /// `self / rhs`.
    fn try_div(&self, rhs: &Self) -> Result<Self, Self::Error>;
}

impl<const FRAC: u32> Element for Fixed<FRAC> {
    type Error = FixedPointError;

    fn from_f64(value: f64) -> Result<Self, Self::Error> {
        Fixed::<FRAC>::from_f64(value)
    }

    fn to_f64(&self) -> f64 {
        (*self).to_f64()
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.checked_add(*rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.checked_sub(*rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.checked_mul(*rhs)
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, Self::Error> {
        self.checked_div(*rhs)
    }
}

// IEEE floats keep their native semantics: out-of-range conversions
// become infinities and x/0 follows IEEE-754, so no operation fails.
macro_rules! impl_element_for_float {
    ($t:ty) => {
        impl Element for $t {
            type Error = Infallible;

            fn from_f64(value: f64) -> Result<Self, Self::Error> {
                Ok(value as $t)
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn try_add(&self, rhs: &Self) -> Result<Self, Self::Error> {
                Ok(self + rhs)
            }

            fn try_sub(&self, rhs: &Self) -> Result<Self, Self::Error> {
                Ok(self - rhs)
            }

            fn try_mul(&self, rhs: &Self) -> Result<Self, Self::Error> {
                Ok(self * rhs)
            }

            fn try_div(&self, rhs: &Self) -> Result<Self, Self::Error> {
                Ok(self / rhs)
            }
        }
    };
}

impl_element_for_float!(f32);
impl_element_for_float!(f64);
