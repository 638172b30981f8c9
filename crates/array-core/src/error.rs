// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for array operations.

/// Errors that can occur during array construction or arithmetic.
///
/// The enum is generic over the element type's own error (`E`), so an
/// element-level failure — say a fixed-point overflow — surfaces with
/// the offending flat index and the underlying cause as a `#[source]`.
#[derive(Debug, thiserror::Error)]
pub enum ArrayError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// A dimension of zero was supplied at construction.
    #[error("invalid shape {dims:?}: every dimension must be non-zero")]
    InvalidShape { dims: Vec<usize> },

    /// Bulk assignment received the wrong number of values.
    #[error("bulk assignment expects {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Two arrays have incompatible shapes for the requested operation.
    #[error("incompatible shapes for {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// The broadcast scalar could not be converted to the element type.
    #[error("scalar operand conversion failed: {source}")]
    Scalar {
        #[source]
        source: E,
    },

    /// An element-level operation failed at the given flat index.
    #[error("element operation failed at index {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: E,
    },
}
