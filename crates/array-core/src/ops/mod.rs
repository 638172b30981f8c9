// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise array arithmetic.
//!
//! Every operation validates eagerly, allocates a fresh result array,
//! and fails atomically: the first element-level error aborts the whole
//! operation, and the partially built buffer never escapes.

mod elementwise;
mod scalar;

pub use elementwise::{add, div, mul, sub};
pub use scalar::{add_scalar, div_scalar, mul_scalar, sub_scalar};
