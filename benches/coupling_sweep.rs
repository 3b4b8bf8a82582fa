use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use quasi_optics::prelude::*;

fn build_telescope(points: usize) -> (Horn, Vec<Element>) {
    let sweep = FrequencySweep::centered(250.0, 100.0, points, "GHz").unwrap();
    let horn = Horn::new(sweep, 22.64, 3.6, DEFAULT_HORN_FACTOR, &ElementOptions::new()).unwrap();
    let mm = ElementOptions::new();
    let air = Element::free_space(160.0, &mm).unwrap();
    let mirror = Element::mirror(160.0, &mm).unwrap();
    let elements = vec![air.clone(), mirror.clone(), air.clone(), air.clone(), mirror, air];
    (horn, elements)
}

fn bench_coupling_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("coupling_sweep");
    for points in [101, 10_001] {
        group.bench_function(BenchmarkId::new("telescope", points), |b| {
            b.iter_batched(
                || build_telescope(points),
                |(horn, elements)| {
                    let _ = System::new(horn, elements, None, &SystemOptions::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_coupling_sweep);
criterion_main!(benches);
