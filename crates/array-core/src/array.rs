// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The owned N-dimensional array type.

use crate::{shape, ArrayError, Element};

/// An owned, dense, row-major rectangular container.
///
/// `Array` holds `dims.iter().product()` elements of `T` in one
/// contiguous buffer; that invariant is established at construction
/// and never broken, since the dimensions are immutable afterwards.
/// Rank is the const parameter `N`, so a 2-D array and a 3-D array
/// are different types.
///
/// # Memory Layout
/// Row-major (C order): the last dimension varies fastest in the flat
/// buffer. Bulk assignment consumes its input in the same order.
///
/// # Examples
/// ```
/// use array_core::Array;
/// let mut a: Array<f64, 2> = Array::zeros([2, 3]).unwrap();
/// a.assign(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(a.get(&[1, 0]), Some(&4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T, const N: usize> {
    dims: [usize; N],
    data: Vec<T>,
}

impl<T: Element, const N: usize> Array<T, N> {
    /// Creates an array of default-initialised (zero-valued) elements.
    ///
    /// # Errors
    /// Returns [`ArrayError::InvalidShape`] if any dimension is zero.
    pub fn zeros(dims: [usize; N]) -> Result<Self, ArrayError<T::Error>> {
        if !shape::dims_valid(&dims) {
            return Err(ArrayError::InvalidShape {
                dims: dims.to_vec(),
            });
        }
        let len = shape::num_elements(&dims);
        Ok(Self {
            dims,
            data: vec![T::default(); len],
        })
    }

    /// Creates an array and bulk-assigns it in one step.
    ///
    /// # Errors
    /// Propagates the errors of [`Array::zeros`] and [`Array::assign`].
    pub fn from_values(dims: [usize; N], values: &[f64]) -> Result<Self, ArrayError<T::Error>> {
        let mut array = Self::zeros(dims)?;
        array.assign(values)?;
        Ok(array)
    }

    /// Assembles an array from parts whose invariant the caller has
    /// already established. Internal constructor for the op engine.
    pub(crate) fn from_parts(dims: [usize; N], data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), shape::num_elements(&dims));
        Self { dims, data }
    }

    /// Replaces the contents with `values`, consumed in row-major
    /// order and converted via [`Element::from_f64`].
    ///
    /// The length check is eager and exact — no truncation, no
    /// padding — and conversion failures leave the array untouched.
    ///
    /// # Errors
    /// Returns [`ArrayError::LengthMismatch`] if `values.len()` is not
    /// exactly the element count, or [`ArrayError::Element`] carrying
    /// the flat index of the first value that fails conversion.
    pub fn assign(&mut self, values: &[f64]) -> Result<(), ArrayError<T::Error>> {
        if values.len() != self.data.len() {
            return Err(ArrayError::LengthMismatch {
                expected: self.data.len(),
                got: values.len(),
            });
        }
        let mut converted = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let element = T::from_f64(value)
                .map_err(|source| ArrayError::Element { index, source })?;
            converted.push(element);
        }
        self.data = converted;
        tracing::trace!(len = self.data.len(), "bulk assignment complete");
        Ok(())
    }

    /// Returns the dimension sizes.
    pub fn dims(&self) -> &[usize; N] {
        &self.dims
    }

    /// Returns the rank (number of dimensions).
    pub const fn rank(&self) -> usize {
        N
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    ///
    /// With every dimension required to be non-zero this is only the
    /// case for pathological rank-0 use, but the accessor keeps the
    /// container surface conventional.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns row-major strides for this array's dimensions.
    pub fn strides(&self) -> [usize; N] {
        shape::row_major_strides(&self.dims)
    }

    /// Returns the element at the given multi-dimensional index, or
    /// `None` if any coordinate is out of bounds.
    pub fn get(&self, index: &[usize; N]) -> Option<&T> {
        self.offset_of(index).map(|off| &self.data[off])
    }

    /// Mutable variant of [`Array::get`].
    pub fn get_mut(&mut self, index: &[usize; N]) -> Option<&mut T> {
        self.offset_of(index).map(move |off| &mut self.data[off])
    }

    /// Returns the flat row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the flat row-major buffer mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Maps a multi-dimensional index to a flat buffer offset.
    fn offset_of(&self, index: &[usize; N]) -> Option<usize> {
        let strides = self.strides();
        let mut offset = 0;
        for i in 0..N {
            if index[i] >= self.dims[i] {
                return None;
            }
            offset += index[i] * strides[i];
        }
        Some(offset)
    }
}
