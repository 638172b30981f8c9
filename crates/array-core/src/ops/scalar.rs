// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Scalar broadcast operations.
//!
//! A bare floating-point operand is converted once via
//! [`Element::from_f64`] and then applied against every element, so the
//! conversion's range check runs exactly as it would for an explicit
//! element value. No shape check is needed — a scalar is compatible
//! with every shape.

use crate::{Array, ArrayError, Element};

/// Computes `lhs + scalar` for every element.
///
/// # Errors
/// Returns [`ArrayError::Scalar`] if the scalar cannot be converted to
/// the element type, or [`ArrayError::Element`] with the flat index of
/// the first element whose combination fails.
pub fn add_scalar<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    scalar: f64,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    broadcast("add_scalar", lhs, scalar, T::try_add)
}

/// Computes `lhs - scalar` for every element.
///
/// # Errors
/// Same contract as [`add_scalar`].
pub fn sub_scalar<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    scalar: f64,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    broadcast("sub_scalar", lhs, scalar, T::try_sub)
}

/// Computes `lhs * scalar` for every element.
///
/// # Errors
/// Same contract as [`add_scalar`].
pub fn mul_scalar<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    scalar: f64,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    broadcast("mul_scalar", lhs, scalar, T::try_mul)
}

/// Computes `lhs / scalar` for every element.
///
/// # Errors
/// Same contract as [`add_scalar`]; a zero scalar surfaces as the
/// element type's division error on index 0 (every element fails the
/// same way, the first aborts the operation).
pub fn div_scalar<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    scalar: f64,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    broadcast("div_scalar", lhs, scalar, T::try_div)
}

/// The shared engine: convert the scalar once, then map it over the
/// flat buffer into a local result.
fn broadcast<T: Element, const N: usize>(
    op: &'static str,
    lhs: &Array<T, N>,
    scalar: f64,
    f: impl Fn(&T, &T) -> Result<T, T::Error>,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    let rhs = T::from_f64(scalar).map_err(|source| ArrayError::Scalar { source })?;

    tracing::trace!(op, scalar, len = lhs.len(), "broadcast operation");

    let mut data = Vec::with_capacity(lhs.len());
    for (index, a) in lhs.as_slice().iter().enumerate() {
        let element = f(a, &rhs).map_err(|source| ArrayError::Element { index, source })?;
        data.push(element);
    }
    Ok(Array::from_parts(*lhs.dims(), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixed_point::{FixedPointError, Q16};

    #[test]
    fn test_add_scalar_broadcast() {
        let a: Array<Q16, 2> =
            Array::from_values([2, 2], &[0.5, 0.3, 0.8, 0.2]).unwrap();
        let b = add_scalar(&a, 0.05).unwrap();
        let expected = [0.55, 0.35, 0.85, 0.25];
        for (x, want) in b.as_slice().iter().zip(expected) {
            assert!((x.to_f64() - want).abs() < 1e-4, "got {x}, want {want}");
        }
        assert_eq!(b.dims(), a.dims());
    }

    #[test]
    fn test_scalar_conversion_failure() {
        let a: Array<Q16, 1> = Array::zeros([4]).unwrap();
        match add_scalar(&a, (1u64 << 60) as f64) {
            Err(ArrayError::Scalar { source }) => {
                assert!(matches!(source, FixedPointError::Overflow { .. }));
            }
            other => panic!("expected scalar conversion failure, got {other:?}"),
        }
    }

    #[test]
    fn test_div_scalar_by_zero() {
        let a: Array<Q16, 1> = Array::from_values([2], &[1.0, 2.0]).unwrap();
        match div_scalar(&a, 0.0) {
            Err(ArrayError::Element { index: 0, source }) => {
                assert!(matches!(source, FixedPointError::DivisionByZero));
            }
            other => panic!("expected division by zero, got {other:?}"),
        }
    }

    #[test]
    fn test_mul_scalar_overflow_fails_atomically() {
        let a: Array<Q16, 1> =
            Array::from_values([2], &[(1u64 << 40) as f64, 1.0]).unwrap();
        let err = mul_scalar(&a, (1u64 << 40) as f64).unwrap_err();
        assert!(matches!(err, ArrayError::Element { index: 0, .. }));
    }

    #[test]
    fn test_sub_and_mul_scalar() {
        let a: Array<f64, 1> = Array::from_values([3], &[1.0, 2.0, 3.0]).unwrap();
        let s = sub_scalar(&a, 0.5).unwrap();
        assert_eq!(s.as_slice(), &[0.5, 1.5, 2.5]);
        let m = mul_scalar(&a, 2.0).unwrap();
        assert_eq!(m.as_slice(), &[2.0, 4.0, 6.0]);
        let d = div_scalar(&a, 2.0).unwrap();
        assert_eq!(d.as_slice(), &[0.5, 1.0, 1.5]);
    }
}
