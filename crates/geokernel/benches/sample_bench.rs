//! Criterion microbenches for the sampler family.
//!
//! - Per-draw cost of every shape (seeded, offset applied).
//! - Batch draws through `points(n)` and through a boxed `SamplerSpec` build.
//!
//! Results live under `target/criterion`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geokernel::api::*;

fn boxed<S>(name: &'static str, s: S) -> (&'static str, Box<dyn RandomPoint>)
where
    S: RandomPoint + 'static,
{
    (name, Box::new(s))
}

fn shapes(seed: u64) -> Vec<(&'static str, Box<dyn RandomPoint>)> {
    vec![
        boxed("box", RandomBox::with_seed(seed)),
        boxed("rectangle", RandomRectangle::with_seed(seed)),
        boxed("circle", RandomCircle::with_seed(seed)),
        boxed("disk", RandomDisk::with_seed(seed)),
        boxed(
            "line",
            RandomLine::with_seed(&Coord::zero(), &Coord::new(1.0, 2.0, 3.0), seed),
        ),
        boxed("cylinder_volume", RandomInCylinder::with_seed(seed)),
        boxed("cylinder_mantle", RandomOnCylinder::with_seed(seed)),
        boxed("sphere_volume", RandomInSphere::with_seed(seed)),
        boxed("sphere_surface", RandomOnSphere::with_seed(seed)),
    ]
}

fn bench_next_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_point");
    for (name, mut s) in shapes(42) {
        s.set_offset_xyz(1.0, 2.0, 3.0);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(s.next_point()))
        });
    }
    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    for n in [1_000usize, 10_000] {
        let mut s = RandomOnSphere::with_seed(7);
        group.bench_with_input(BenchmarkId::new("sphere_surface_points", n), &n, |b, &n| {
            b.iter(|| black_box(s.points(n)))
        });
        let spec = SamplerSpec {
            shape: SamplerShape::CylinderVolume {
                radius: 2.0,
                height: 1.0,
            },
            seed: Some(7),
            offset: [0.0; 3],
        };
        group.bench_with_input(BenchmarkId::new("spec_build_and_draw", n), &n, |b, &n| {
            b.iter(|| {
                let mut s = spec.build().unwrap();
                black_box(s.points(n))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_point, bench_batches);
criterion_main!(benches);
