// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: broadcast a scalar over a 4×4 fixed-point array.
//!
//! Builds a 4×4 array of `Q16` fixed-point values, adds the literal
//! `0.05` to every element, and prints the result.
//!
//! ```bash
//! cargo run -p array-core --example fixed_broadcast
//! ```

use array_core::{add_scalar, Array};
use fixed_point::Q16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let mut a: Array<Q16, 2> = Array::zeros([4, 4])?;
    a.assign(&[
        0.5, 0.3, 0.8, 0.2, //
        0.1, 0.3, 0.2, 0.9, //
        0.0, 1.0, 0.7, 0.4, //
        0.2, 0.3, 0.8, 0.4,
    ])?;

    let b = add_scalar(&a, 0.05)?;

    println!("B = {b}");

    Ok(())
}
