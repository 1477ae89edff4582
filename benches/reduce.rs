//! Horizontal Reduction Benchmarks
//!
//! Compares a scalar iterator fold against the vector reduction tree for sums
//! and maxima over `f32` slices. The vector path accumulates lane-wise across
//! the slice and reduces once at the end, at the native 8-lane width and at the
//! composed 16-lane width.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanewise::simd::reduce::{horizontal_max, horizontal_sum};
use lanewise::simd::width::{Float32x16, Float32x8};
use lanewise::simd::SimdVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Slice lengths from L1-resident up to L2-sized (f32 = 4 bytes).
const VECTOR_SIZES: &[usize] = &[
    1_024,   // 4 KiB
    16_384,  // 64 KiB
    262_144, // 1 MiB
];

fn generate_data(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect()
}

fn scalar_sum(data: &[f32]) -> f32 {
    data.iter().sum()
}

fn scalar_max(data: &[f32]) -> f32 {
    data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
}

fn vector_sum<V: SimdVector<Lane = f32>>(data: &[f32]) -> f32 {
    let mut chunks = data.chunks_exact(V::LANES);
    let mut acc = V::zero();

    for chunk in &mut chunks {
        acc = acc + V::from_slice(chunk);
    }

    horizontal_sum(acc) + chunks.remainder().iter().sum::<f32>()
}

fn vector_max<V: SimdVector<Lane = f32>>(data: &[f32]) -> f32 {
    let mut chunks = data.chunks_exact(V::LANES);
    let mut acc = V::splat(f32::NEG_INFINITY);

    for chunk in &mut chunks {
        acc = acc.max(V::from_slice(chunk));
    }

    chunks
        .remainder()
        .iter()
        .copied()
        .fold(horizontal_max(acc), f32::max)
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_sum");

    for &size in VECTOR_SIZES {
        let data = generate_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(scalar_sum(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("x8", size), &data, |b, data| {
            b.iter(|| black_box(vector_sum::<Float32x8>(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("x16", size), &data, |b, data| {
            b.iter(|| black_box(vector_sum::<Float32x16>(black_box(data))))
        });
    }

    group.finish();
}

fn bench_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_max");

    for &size in VECTOR_SIZES {
        let data = generate_data(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(scalar_max(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("x8", size), &data, |b, data| {
            b.iter(|| black_box(vector_max::<Float32x8>(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("x16", size), &data, |b, data| {
            b.iter(|| black_box(vector_max::<Float32x16>(black_box(data))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sum, bench_max);
criterion_main!(benches);
