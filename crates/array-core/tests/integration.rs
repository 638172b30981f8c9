// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: the full construct → assign → arithmetic →
//! render flow across both crates, including the 4×4 fixed-point
//! broadcast scenario the library was built around.

use array_core::{add, add_scalar, Array, ArrayError};
use fixed_point::{FixedPointError, Q16};

/// The 4×4 row-major fixture used throughout.
const VALUES: [f64; 16] = [
    0.5, 0.3, 0.8, 0.2, //
    0.1, 0.3, 0.2, 0.9, //
    0.0, 1.0, 0.7, 0.4, //
    0.2, 0.3, 0.8, 0.4,
];

const TOL: f64 = 1.0 / 65536.0;

#[test]
fn fixed_point_broadcast_end_to_end() {
    let mut a: Array<Q16, 2> = Array::zeros([4, 4]).expect("valid shape");
    a.assign(&VALUES).expect("16 values for a 4x4 array");

    let b = add_scalar(&a, 0.05).expect("broadcast add");

    assert_eq!(b.dims(), &[4, 4]);
    for (i, &v) in VALUES.iter().enumerate() {
        let got = b.as_slice()[i].to_f64();
        // Each element carries at most one rounding step from each of
        // the two conversions, so 2*TOL bounds the error.
        assert!(
            (got - (v + 0.05)).abs() < 2.0 * TOL,
            "element {i}: got {got}, want {}",
            v + 0.05
        );
    }

    // Spot checks from the reference layout.
    assert!((b.get(&[0, 0]).unwrap().to_f64() - 0.55).abs() < 2.0 * TOL);
    assert!((b.get(&[2, 1]).unwrap().to_f64() - 1.05).abs() < 2.0 * TOL);
}

#[test]
fn broadcast_result_renders_deterministically() {
    let a: Array<Q16, 2> = Array::from_values([4, 4], &VALUES).unwrap();
    let b = add_scalar(&a, 0.05).unwrap();

    let first = format!("B = {b}");
    let second = format!("B = {b}");
    assert_eq!(first, second);
    // 4 rows, so 4 lines with aligned continuation.
    assert_eq!(first.lines().count(), 4);
}

#[test]
fn mismatched_shapes_produce_no_partial_result() {
    let a: Array<Q16, 2> = Array::from_values([4, 4], &VALUES).unwrap();
    let b: Array<Q16, 2> = Array::zeros([3, 3]).unwrap();

    // The only observable outcome is the typed error; both inputs are
    // borrowed immutably, so no partial result can exist anywhere.
    match add(&a, &b) {
        Err(ArrayError::ShapeMismatch { op: "add", lhs, rhs }) => {
            assert_eq!(lhs, vec![4, 4]);
            assert_eq!(rhs, vec![3, 3]);
        }
        other => panic!("expected shape mismatch, got {other:?}"),
    }
}

#[test]
fn overflow_policy_is_fail_fast() {
    // At scale 16 the representable magnitude tops out near 2^47; an
    // element pushed past that must fail with a typed overflow, never
    // saturate.
    let a: Array<Q16, 1> = Array::from_values([2], &[(1u64 << 46) as f64, 1.0]).unwrap();
    let doubled = array_core::mul_scalar(&a, 4.0);
    match doubled {
        Err(ArrayError::Element { index: 0, source }) => {
            assert!(matches!(source, FixedPointError::Overflow { .. }));
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[test]
fn float_elements_use_the_same_surface() {
    let mut a: Array<f32, 2> = Array::zeros([2, 2]).unwrap();
    a.assign(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = add_scalar(&a, 0.5).unwrap();
    assert_eq!(b.as_slice(), &[1.5f32, 2.5, 3.5, 4.5]);
}
