// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for elementwise array operations.

use array_core::{add, add_scalar, mul, Array};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_point::Q16;

fn q16_operand(n: usize) -> Array<Q16, 2> {
    let values: Vec<f64> = (0..n * n).map(|i| (i % 97) as f64 * 0.01).collect();
    Array::from_values([n, n], &values).unwrap()
}

fn f32_operand(n: usize) -> Array<f32, 2> {
    let values: Vec<f64> = (0..n * n).map(|i| (i % 97) as f64 * 0.01).collect();
    Array::from_values([n, n], &values).unwrap()
}

fn bench_elementwise_add(c: &mut Criterion) {
    let a = q16_operand(128);
    let b = q16_operand(128);
    c.bench_function("add_q16_128x128", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)).unwrap())
    });

    let x = f32_operand(128);
    let y = f32_operand(128);
    c.bench_function("add_f32_128x128", |bench| {
        bench.iter(|| add(black_box(&x), black_box(&y)).unwrap())
    });
}

fn bench_scalar_broadcast(c: &mut Criterion) {
    let a = q16_operand(128);
    c.bench_function("add_scalar_q16_128x128", |bench| {
        bench.iter(|| add_scalar(black_box(&a), black_box(0.05)).unwrap())
    });
}

fn bench_elementwise_mul(c: &mut Criterion) {
    let a = q16_operand(64);
    let b = q16_operand(64);
    c.bench_function("mul_q16_64x64", |bench| {
        bench.iter(|| mul(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_elementwise_add,
    bench_scalar_broadcast,
    bench_elementwise_mul
);
criterion_main!(benches);
