//! Benchmarks for gmath operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use gmath_math::{invert, Mat2, Mat3, Mat4};
use gmath_noise::{GradientGrid, PerlinNoise, Shape};

/// Benchmark Gauss-Jordan inversion per matrix size.
fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    let m2 = Mat2::<f32>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let m3 = Mat3::<f32>::from_rows([[0.0, 1.0, 2.0], [0.0, 0.0, 3.0], [4.0, 5.0, 6.0]]);
    let m4 = Mat4::<f32>::from_rows([
        [4.0, 7.0, 2.0, 3.0],
        [0.0, 5.0, 0.0, 1.0],
        [2.0, 0.0, 3.0, 0.0],
        [1.0, 1.0, 0.0, 2.0],
    ]);

    group.bench_function("mat2", |b| b.iter(|| black_box(m2).inverse()));
    group.bench_function("mat3", |b| b.iter(|| black_box(m3).inverse()));
    group.bench_function("mat4", |b| b.iter(|| black_box(m4).inverse()));

    let flat = m4.as_slice().to_vec();
    group.bench_function("flat4", |b| b.iter(|| invert(black_box(&flat), 4)));

    group.finish();
}

/// Benchmark gradient grid construction.
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for size in [16usize, 64, 256].iter() {
        group.throughput(Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(BenchmarkId::new("build", size), size, |b, &s| {
            b.iter(|| GradientGrid::<f32>::new(Shape::new(s, s), black_box(42)))
        });
    }

    group.finish();
}

/// Benchmark fractal sampling and map rendering.
fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");

    for octaves in [1u32, 4, 8].iter() {
        let Ok(noise) = PerlinNoise::<f32>::new(42, Shape::new(16, 16), *octaves, 0.5) else {
            continue;
        };
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("sample", octaves), &noise, |b, n| {
            b.iter(|| n.sample(black_box(3.7), black_box(11.2)))
        });
        group.throughput(Throughput::Elements(256 * 256));
        group.bench_with_input(BenchmarkId::new("render_256", octaves), &noise, |b, n| {
            b.iter(|| n.render(256, 256, black_box(0.0625)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_invert, bench_grid, bench_noise);
criterion_main!(benches);
