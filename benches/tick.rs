//! Benchmarks for the per-tick cost of the field.
//!
//! The connection pass is O(n²) by design; these benchmarks show where
//! that stops being free. Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plexus::{FieldConfig, NullSurface, ParticleField, Raster};

fn bench_simulation_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_null_surface");

    for count in [40usize, 80, 160] {
        let config = FieldConfig::new().with_particle_count(count).with_seed(42);
        let mut field = ParticleField::new(1280.0, 720.0, config);
        let mut surface = NullSurface;
        field.start();

        group.bench_function(format!("{count}_particles"), |b| {
            b.iter(|| field.frame(black_box(&mut surface)))
        });
    }

    group.finish();
}

fn bench_with_rasterization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_raster");

    for count in [40usize, 80] {
        let config = FieldConfig::new().with_particle_count(count).with_seed(42);
        let mut field = ParticleField::new(1280.0, 720.0, config);
        let mut raster = Raster::new(1280, 720);
        field.start();

        group.bench_function(format!("{count}_particles_1280x720"), |b| {
            b.iter(|| field.frame(black_box(&mut raster)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulation_only, bench_with_rasterization);
criterion_main!(benches);
