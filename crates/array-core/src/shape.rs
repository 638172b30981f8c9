// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shape and stride utilities for row-major layouts.
//!
//! Rank is a const generic parameter of [`crate::Array`], so a shape is
//! just a `[usize; N]` and these helpers are free functions over it.

/// Returns the total number of elements for the given dimensions.
///
/// For rank 0 (an empty dimension list) this is 1, matching the
/// convention that a scalar container holds exactly one element.
pub fn num_elements(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Returns `true` if every dimension is non-zero.
pub fn dims_valid(dims: &[usize]) -> bool {
    dims.iter().all(|&d| d > 0)
}

/// Computes row-major (C-order) strides.
///
/// The stride for dimension `i` is the number of elements to skip in
/// the flat buffer to advance one step along that dimension; the last
/// dimension always has stride 1.
///
/// # Examples
/// ```
/// use array_core::shape::row_major_strides;
/// assert_eq!(row_major_strides(&[2, 3, 4]), [12, 4, 1]);
/// ```
pub fn row_major_strides<const N: usize>(dims: &[usize; N]) -> [usize; N] {
    let mut strides = [1usize; N];
    if N == 0 {
        return strides;
    }
    for i in (0..N - 1).rev() {
        strides[i] = strides[i + 1] * dims[i + 1];
    }
    strides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_elements() {
        assert_eq!(num_elements(&[2, 3, 4]), 24);
        assert_eq!(num_elements(&[5]), 5);
        assert_eq!(num_elements(&[]), 1);
        assert_eq!(num_elements(&[4, 0]), 0);
    }

    #[test]
    fn test_dims_valid() {
        assert!(dims_valid(&[1, 2, 3]));
        assert!(dims_valid(&[]));
        assert!(!dims_valid(&[4, 0, 2]));
    }

    #[test]
    fn test_strides() {
        assert_eq!(row_major_strides(&[2, 3, 4]), [12, 4, 1]);
        assert_eq!(row_major_strides(&[4, 4]), [4, 1]);
        assert_eq!(row_major_strides(&[7]), [1]);
        assert_eq!(row_major_strides::<0>(&[]), [0usize; 0]);
    }
}
