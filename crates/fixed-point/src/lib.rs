// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fixed-point
//!
//! A deterministic fixed-point scalar type for numeric workloads that
//! cannot tolerate platform-dependent floating-point rounding.
//!
//! This crate provides:
//! - [`Fixed`] — a signed fixed-point number backed by `i64`, with the
//!   fractional bit count carried as a const generic parameter.
//! - [`Q16`] — the common 16-fractional-bit instantiation.
//! - [`FixedPointError`] — typed arithmetic failures via `thiserror`.
//!
//! # Design Goals
//! - Scale compatibility enforced at compile time: two values can only
//!   meet in an arithmetic operation when they share the same number of
//!   fractional bits, so no runtime scale check exists.
//! - Fail fast: every operation that can leave the representable range
//!   returns a typed error. There is no saturating mode and no silent
//!   wraparound, in any build profile.
//! - All arithmetic is pure integer arithmetic; floats appear only at
//!   the conversion boundary.
//!
//! # Example
//! ```
//! use fixed_point::Q16;
//!
//! let a = Q16::from_f64(1.5)?;
//! let b = Q16::from_f64(0.25)?;
//! let sum = a.checked_add(b)?;
//! assert!((sum.to_f64() - 1.75).abs() < 1.0 / 65536.0);
//! # Ok::<(), fixed_point::FixedPointError>(())
//! ```

mod error;
mod fixed;

pub use error::FixedPointError;
pub use fixed::{Fixed, Q16, MAX_FRAC};
