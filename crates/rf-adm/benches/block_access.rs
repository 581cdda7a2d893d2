//! Block parameter access benchmarks

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rf_adm::{AudioBlockFormatObjects, Cartesian, CartesianPosition, Gain, SphericalPosition, Width};

fn bench_get_set(c: &mut Criterion) {
    let mut block = AudioBlockFormatObjects::new(SphericalPosition::default());

    c.bench_function("block_set_get_gain", |b| {
        b.iter(|| {
            block.set(black_box(Gain::new(0.5)));
            black_box(block.get::<Gain>().ok());
            black_box(block.is_default::<Width>());
        })
    });
}

fn bench_coordinate_switch(c: &mut Criterion) {
    let mut block = AudioBlockFormatObjects::new(SphericalPosition::default());
    let cartesian = CartesianPosition::default();

    c.bench_function("block_coordinate_switch", |b| {
        b.iter(|| {
            block.set(black_box(cartesian));
            block.set(black_box(Cartesian::new(false)));
            block.set(black_box(SphericalPosition::default()));
        })
    });
}

criterion_group!(benches, bench_get_set, bench_coordinate_switch);
criterion_main!(benches);
