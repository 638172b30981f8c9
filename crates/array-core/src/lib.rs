// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # array-core
//!
//! Dense, owned, row-major N-dimensional arrays with elementwise and
//! scalar-broadcast arithmetic.
//!
//! This crate provides:
//! - [`Array`] — an owned rectangular container, generic over the
//!   element type and (via const generics) the rank.
//! - [`Element`] — the numeric contract an element type must satisfy,
//!   implemented for [`fixed_point::Fixed`] as well as `f32`/`f64`.
//! - Elementwise operations: [`add`], [`sub`], [`mul`], [`div`] between
//!   same-shaped arrays, and [`add_scalar`] and friends broadcasting a
//!   bare floating-point literal over every element.
//! - [`ArrayError`] — typed failures via `thiserror`, chaining the
//!   element type's own error as a source.
//!
//! # Design Goals
//! - Eager validation: shape and length disagreements are rejected at
//!   the operation boundary, never silently truncated or padded.
//! - Atomic failure: an elementwise operation either returns a complete
//!   freshly allocated result or an error — no partial result is ever
//!   observable.
//! - Row-major everywhere: bulk assignment consumes a flat sequence
//!   with the last dimension varying fastest.
//!
//! # Example
//! ```
//! use array_core::{add_scalar, Array};
//! use fixed_point::Q16;
//!
//! let mut a: Array<Q16, 2> = Array::zeros([2, 2])?;
//! a.assign(&[0.5, 0.3, 0.8, 0.2])?;
//! let b = add_scalar(&a, 0.05)?;
//! assert!((b.get(&[0, 0]).unwrap().to_f64() - 0.55).abs() < 1e-4);
//! # Ok::<(), array_core::ArrayError<fixed_point::FixedPointError>>(())
//! ```

mod array;
mod element;
mod error;
mod format;
pub mod ops;
pub mod shape;

pub use array::Array;
pub use element::Element;
pub use error::ArrayError;
pub use ops::{add, add_scalar, div, div_scalar, mul, mul_scalar, sub, sub_scalar};
