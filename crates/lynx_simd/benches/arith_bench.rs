use criterion::{criterion_group, criterion_main, Criterion, black_box};

use lynx_simd::*;

fn dot_bench(c: &mut Criterion) {
    let a = f32x4::new(1.0, 2.0, 3.0, 4.0);
    let b = f32x4::new(4.0, 3.0, 2.0, 1.0);

    c.bench_function(&format!("f32x4::dot ({})", Scalar::TYPE), |bench| bench.iter(|| {
        black_box(a).simd_dot::<Scalar>(black_box(b))
    }));

    #[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
    c.bench_function(&format!("f32x4::dot ({})", Sse::TYPE), |bench| bench.iter(|| {
        black_box(a).simd_dot::<Sse>(black_box(b))
    }));
}

fn transpose_bench(c: &mut Criterion) {
    let rows = [
        f32x4::new( 0.0,  1.0,  2.0,  3.0),
        f32x4::new( 4.0,  5.0,  6.0,  7.0),
        f32x4::new( 8.0,  9.0, 10.0, 11.0),
        f32x4::new(12.0, 13.0, 14.0, 15.0),
    ];

    c.bench_function(&format!("f32x4::transpose ({})", Scalar::TYPE), |bench| bench.iter(|| {
        f32x4::simd_transpose::<Scalar>(black_box(rows))
    }));

    #[cfg(all(target_arch = "x86_64", target_feature = "sse"))]
    c.bench_function(&format!("f32x4::transpose ({})", Sse::TYPE), |bench| bench.iter(|| {
        f32x4::simd_transpose::<Sse>(black_box(rows))
    }));
}

criterion_group!(benches, dot_bench, transpose_bench);
criterion_main!(benches);
