//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use std::hint::unreachable_unchecked;

use alternate::{Alternative, Variant};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};

#[derive(Alternative, Clone, Copy)]
pub struct Params {
    value: u32,
    repeats: u8,
}

pub enum StdOp {
    Add(Params),
    Sub(Params),
    Mul(Params),
}

pub type AltOp = Variant<(Params, Params, Params)>;

const N: usize = 100000;
fn bench_dispatch(c: &mut Criterion) {
    let rng = rand::rngs::StdRng::seed_from_u64(0);
    let ops = (0..N)
        .map({
            let mut rng = rng.clone();
            move |_| {
                (
                    rng.gen_range(0..=2u8),
                    Params {
                        repeats: rng.gen_range(1..=5u8),
                        value: rng.gen_range(0..=100u32),
                    },
                )
            }
        })
        .collect::<Vec<_>>();
    let mut std_ops = Vec::with_capacity(ops.len());
    let mut alt_ops = Vec::with_capacity(ops.len());
    c.bench_function("std_new", |b| {
        b.iter(|| {
            std_ops.clear();
            for &(op, params) in &ops {
                std_ops.push(match op {
                    0 => StdOp::Add(params),
                    1 => StdOp::Sub(params),
                    2 => StdOp::Mul(params),
                    _ => unsafe { unreachable_unchecked() },
                });
            }
        });
    });
    c.bench_function("alternate_new", |b| {
        b.iter(|| {
            alt_ops.clear();
            for &(op, params) in &ops {
                alt_ops.push(match op {
                    0 => AltOp::in_place::<0>(params),
                    1 => AltOp::in_place::<1>(params),
                    2 => AltOp::in_place::<2>(params),
                    _ => unsafe { unreachable_unchecked() },
                });
            }
        });
    });

    fn repeat(mut result: u32, params: &Params, f: impl Fn(u32, u32) -> u32) -> u32 {
        for _ in 0..params.repeats {
            result = f(result, params.value)
        }
        result
    }
    c.bench_function("std_run", |b| {
        b.iter(|| {
            let mut result = 0u32;
            for op in &std_ops {
                result = match op {
                    StdOp::Add(p) => repeat(result, p, u32::wrapping_add),
                    StdOp::Sub(p) => repeat(result, p, u32::wrapping_sub),
                    StdOp::Mul(p) => repeat(result, p, u32::wrapping_mul),
                }
            }
            black_box(result)
        });
    });
    c.bench_function("alternate_run", |b| {
        b.iter(|| {
            let mut result = 0u32;
            for op in &alt_ops {
                result = op.match_ref(
                    |p| repeat(result, p, u32::wrapping_add),
                    |p| repeat(result, p, u32::wrapping_sub),
                    |p| repeat(result, p, u32::wrapping_mul),
                )
            }
            black_box(result)
        });
    });
    c.bench_function("alternate_visit", |b| {
        b.iter(|| {
            let mut result = 0u32;
            for op in &alt_ops {
                result = op.visit(|p: &Params| repeat(result, p, u32::wrapping_add))
            }
            black_box(result)
        });
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
