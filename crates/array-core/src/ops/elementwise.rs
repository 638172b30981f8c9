// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Binary operations between two same-shaped arrays.

use crate::{Array, ArrayError, Element};

/// Computes `lhs + rhs` elementwise.
///
/// # Errors
/// Returns [`ArrayError::ShapeMismatch`] if the dimensions differ, or
/// [`ArrayError::Element`] with the flat index of the first pair whose
/// addition fails.
pub fn add<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    rhs: &Array<T, N>,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    zip_map("add", lhs, rhs, T::try_add)
}

/// Computes `lhs - rhs` elementwise.
///
/// # Errors
/// Same contract as [`add`].
pub fn sub<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    rhs: &Array<T, N>,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    zip_map("sub", lhs, rhs, T::try_sub)
}

/// Computes `lhs * rhs` elementwise (Hadamard product).
///
/// # Errors
/// Same contract as [`add`].
pub fn mul<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    rhs: &Array<T, N>,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    zip_map("mul", lhs, rhs, T::try_mul)
}

/// Computes `lhs / rhs` elementwise.
///
/// # Errors
/// Same contract as [`add`]; a zero divisor surfaces as the element
/// type's division error wrapped in [`ArrayError::Element`].
pub fn div<T: Element, const N: usize>(
    lhs: &Array<T, N>,
    rhs: &Array<T, N>,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    zip_map("div", lhs, rhs, T::try_div)
}

/// The shared engine: validate shapes, then combine pairwise into a
/// local buffer that becomes the result only once fully computed.
fn zip_map<T: Element, const N: usize>(
    op: &'static str,
    lhs: &Array<T, N>,
    rhs: &Array<T, N>,
    f: impl Fn(&T, &T) -> Result<T, T::Error>,
) -> Result<Array<T, N>, ArrayError<T::Error>> {
    if lhs.dims() != rhs.dims() {
        return Err(ArrayError::ShapeMismatch {
            op,
            lhs: lhs.dims().to_vec(),
            rhs: rhs.dims().to_vec(),
        });
    }

    tracing::trace!(op, len = lhs.len(), "elementwise operation");

    let mut data = Vec::with_capacity(lhs.len());
    for (index, (a, b)) in lhs.as_slice().iter().zip(rhs.as_slice()).enumerate() {
        let element = f(a, b).map_err(|source| ArrayError::Element { index, source })?;
        data.push(element);
    }
    Ok(Array::from_parts(*lhs.dims(), data))
}
