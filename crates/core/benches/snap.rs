use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexsnap::{Orientation, SnapConfig, Snapper, WorldPosition};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");

    for orientation in &[Orientation::PointTop, Orientation::FlatTop] {
        let snapper = Snapper::new(SnapConfig {
            orientation: *orientation,
            vertical_snap_enabled: true,
            ..Default::default()
        })
        .unwrap();
        let position = WorldPosition::new(13.7, 2.4, -8.1);
        group.bench_function(orientation.to_string(), |b| {
            b.iter(|| snapper.snap(black_box(position), black_box(1.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
