use bezier_curve_editor::{hit_test, sample_curve, CurveModel, HIT_TOLERANCE};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_zigzag_curve(anchor_count: usize) -> CurveModel {
    let mut model = CurveModel::new();

    for index in 0..anchor_count {
        let x = index as f32 * 40.0;
        let y = if index % 2 == 0 { 100.0 } else { 400.0 };
        model.append_anchor(Vec2::new(x, y));
    }

    model
}

fn bench_sample_segment(c: &mut Criterion) {
    let p0 = Vec2::new(0.0, 0.0);
    let p1 = Vec2::new(300.0, 0.0);
    let g0 = Vec2::new(100.0, 150.0);
    let g1 = Vec2::new(200.0, -150.0);

    let mut group = c.benchmark_group("sample_segment");
    for steps in [10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                sample_curve(black_box(p0), black_box(p1), black_box(g0), black_box(g1), steps)
                    .fold(Vec2::ZERO, |acc, p| acc + p)
            })
        });
    }
    group.finish();
}

fn bench_sample_full_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_full_curve");
    for anchor_count in [10usize, 100, 1_000] {
        let model = build_zigzag_curve(anchor_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(anchor_count),
            &model,
            |b, model| {
                b.iter(|| {
                    model
                        .segments()
                        .map(|seg| seg.sample(100).count())
                        .sum::<usize>()
                })
            },
        );
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    for anchor_count in [10usize, 100, 1_000] {
        let model = build_zigzag_curve(anchor_count);
        // Kein Treffer: ungünstigster Fall, alle drei Listen werden durchsucht
        let miss = Vec2::new(-500.0, -500.0);
        group.bench_with_input(
            BenchmarkId::from_parameter(anchor_count),
            &model,
            |b, model| b.iter(|| hit_test(black_box(miss), model, HIT_TOLERANCE)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sample_segment,
    bench_sample_full_curve,
    bench_hit_test
);
criterion_main!(benches);
