//! Strategy comparison benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listree::{list, ConvertConfig, Converter, Strategy};

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for len in [1_000i32, 100_000] {
        let head = list::from_values(0..len);
        for strategy in [Strategy::Flatten, Strategy::Streaming, Strategy::TwoPointer] {
            let converter = Converter::new(ConvertConfig::new().with_strategy(strategy));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), len),
                &head,
                |b, head| {
                    b.iter(|| black_box(converter.run(head.as_deref())));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
