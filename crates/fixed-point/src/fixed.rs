// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The fixed-point scalar type.

use crate::FixedPointError;
use std::fmt;

/// Maximum number of fractional bits.
///
/// Bounded so that the `i128` intermediates used by multiply and divide
/// can never overflow before rescaling.
pub const MAX_FRAC: u32 = 32;

/// The common 16-fractional-bit instantiation (resolution `1/65536`).
pub type Q16 = Fixed<16>;

/// A signed fixed-point number with `FRAC` fractional bits.
///
/// The represented value is `raw / 2^FRAC`. The scale is part of the
/// type, so mixing two different scales in one expression is a compile
/// error rather than a runtime check.
///
/// # Overflow Policy
/// Every operation that can leave the `i64` range fails with
/// [`FixedPointError::Overflow`]. There is no saturating variant: a
/// silently bent value would defeat the determinism this type exists
/// to provide.
///
/// # Rounding
/// Conversions and the rescaling step of multiply/divide round to
/// nearest, ties away from zero.
///
/// # Examples
/// ```
/// use fixed_point::Q16;
/// let x = Q16::from_f64(0.5).unwrap();
/// assert_eq!(x.raw(), 1 << 15);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Fixed<const FRAC: u32> {
    raw: i64,
}

impl<const FRAC: u32> Fixed<FRAC> {
    /// `2^FRAC`, the implicit denominator.
    ///
    /// Evaluating this constant enforces `FRAC <= MAX_FRAC` at compile
    /// time for every instantiation of the type.
    pub const SCALE: i64 = {
        assert!(FRAC <= MAX_FRAC, "Fixed<FRAC>: FRAC must be at most 32");
        1i64 << FRAC
    };

    /// The smallest representable positive increment, `1 / 2^FRAC`.
    pub const RESOLUTION: f64 = 1.0 / Self::SCALE as f64;

    /// Creates a value directly from its raw scaled representation.
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// The additive identity.
    pub const fn zero() -> Self {
        Self { raw: 0 }
    }

    /// The multiplicative identity (`1.0`, i.e. raw `2^FRAC`).
    pub const fn one() -> Self {
        Self { raw: Self::SCALE }
    }

    /// Converts a floating-point value by rounding `value * 2^FRAC` to
    /// the nearest integer, ties away from zero.
    ///
    /// # Errors
    /// Returns [`FixedPointError::Overflow`] if `value` is non-finite
    /// or the scaled magnitude leaves the `i64` range.
    pub fn from_f64(value: f64) -> Result<Self, FixedPointError> {
        if !value.is_finite() {
            return Err(FixedPointError::Overflow { value });
        }
        let scaled = (value * Self::SCALE as f64).round();
        if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(FixedPointError::Overflow { value });
        }
        Ok(Self { raw: scaled as i64 })
    }

    /// Returns the raw scaled integer.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Converts back to floating point: `raw / 2^FRAC`.
    ///
    /// A convenience for the API boundary; arithmetic never goes
    /// through floats internally.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / Self::SCALE as f64
    }

    /// Adds two values. Scales match by construction, so this is a
    /// plain checked integer add on the raw representation.
    ///
    /// # Errors
    /// Returns [`FixedPointError::Overflow`] if the sum leaves the
    /// `i64` range.
    pub fn checked_add(self, rhs: Self) -> Result<Self, FixedPointError> {
        self.raw
            .checked_add(rhs.raw)
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow {
                value: self.to_f64() + rhs.to_f64(),
            })
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// # Errors
    /// Returns [`FixedPointError::Overflow`] if the difference leaves
    /// the `i64` range.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, FixedPointError> {
        self.raw
            .checked_sub(rhs.raw)
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow {
                value: self.to_f64() - rhs.to_f64(),
            })
    }

    /// Multiplies two values: `(a.raw * b.raw) >> FRAC` with an `i128`
    /// intermediate, rounding to nearest, ties away from zero.
    ///
    /// # Errors
    /// Returns [`FixedPointError::Overflow`] if the rescaled product
    /// does not fit in `i64`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, FixedPointError> {
        let wide = (self.raw as i128) * (rhs.raw as i128);
        let rescaled = round_shift(wide, FRAC);
        Self::narrow(rescaled)
    }

    /// Divides `self` by `rhs`: `(a.raw << FRAC) / b.raw` with an
    /// `i128` intermediate, rounding to nearest, ties away from zero.
    ///
    /// # Errors
    /// Returns [`FixedPointError::DivisionByZero`] if `rhs` is zero,
    /// or [`FixedPointError::Overflow`] if the quotient does not fit
    /// in `i64`.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FixedPointError> {
        if rhs.raw == 0 {
            return Err(FixedPointError::DivisionByZero);
        }
        let num = (self.raw as i128) << FRAC;
        let den = rhs.raw as i128;
        Self::narrow(round_div(num, den))
    }

    /// Negates the value.
    ///
    /// # Errors
    /// Returns [`FixedPointError::Overflow`] for the single raw value
    /// (`i64::MIN`) whose negation is unrepresentable.
    pub fn checked_neg(self) -> Result<Self, FixedPointError> {
        self.raw
            .checked_neg()
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow {
                value: -self.to_f64(),
            })
    }

    /// Returns the absolute value.
    ///
    /// # Errors
    /// Returns [`FixedPointError::Overflow`] when `raw == i64::MIN`.
    pub fn checked_abs(self) -> Result<Self, FixedPointError> {
        self.raw
            .checked_abs()
            .map(Self::from_raw)
            .ok_or(FixedPointError::Overflow {
                value: self.to_f64().abs(),
            })
    }

    /// Narrows an `i128` rescale result back to `i64`.
    fn narrow(value: i128) -> Result<Self, FixedPointError> {
        i64::try_from(value)
            .map(Self::from_raw)
            .map_err(|_| FixedPointError::Overflow {
                value: value as f64 / Self::SCALE as f64,
            })
    }
}

/// Arithmetic shift right by `frac` bits, rounding to nearest with
/// ties away from zero.
fn round_shift(value: i128, frac: u32) -> i128 {
    if frac == 0 {
        return value;
    }
    let half = 1i128 << (frac - 1);
    if value >= 0 {
        (value + half) >> frac
    } else {
        -((-value + half) >> frac)
    }
}

/// Integer division rounding to nearest, ties away from zero.
///
/// `den` must be non-zero; operands are bounded well inside `i128`
/// (`num` is at most 96 bits wide), so no intermediate can overflow.
fn round_div(num: i128, den: i128) -> i128 {
    let q = num / den;
    let r = num % den;
    if r == 0 {
        return q;
    }
    if r.unsigned_abs() * 2 >= den.unsigned_abs() {
        if (num < 0) == (den < 0) {
            q + 1
        } else {
            q - 1
        }
    } else {
        q
    }
}

impl<const FRAC: u32> Default for Fixed<FRAC> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}
