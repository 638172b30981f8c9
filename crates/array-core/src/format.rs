// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Textual rendering of arrays.
//!
//! The layout is nested brackets: the innermost dimension prints as one
//! flat comma-separated row, and each outer dimension adds a bracket
//! level with one row per line, indented to align under the opening
//! bracket. The output is a pure function of the array contents, so
//! rendering the same array twice yields identical text.

use crate::{Array, Element};
use std::fmt;

impl<T: Element, const N: usize> fmt::Display for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, self.as_slice(), self.dims(), 1)
    }
}

/// Recursively writes one bracket level.
///
/// `data` always holds exactly the elements of the current sub-block;
/// `indent` is the column of the current bracket level, used to align
/// continuation lines.
fn write_nested<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    dims: &[usize],
    indent: usize,
) -> fmt::Result {
    match dims.split_first() {
        // Rank 0: a single element, no brackets.
        None => write!(f, "{}", data[0]),
        // Innermost dimension: a flat row.
        Some((_, rest)) if rest.is_empty() => {
            write!(f, "[")?;
            for (i, x) in data.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{x}")?;
            }
            write!(f, "]")
        }
        // Outer dimension: one sub-block per line.
        Some((&d, rest)) => {
            let chunk = data.len() / d;
            write!(f, "[")?;
            for i in 0..d {
                if i > 0 {
                    write!(f, ",")?;
                    writeln!(f)?;
                    write!(f, "{:indent$}", "")?;
                }
                write_nested(f, &data[i * chunk..(i + 1) * chunk], rest, indent + 1)?;
            }
            write!(f, "]")
        }
    }
}
