// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for fixed-point arithmetic.

/// Errors that can occur during fixed-point construction or arithmetic.
#[derive(Debug, thiserror::Error)]
pub enum FixedPointError {
    /// The result (or the value being converted) does not fit in the
    /// backing integer at the current scale.
    #[error("overflow: value {value} exceeds the representable fixed-point range")]
    Overflow { value: f64 },

    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}
