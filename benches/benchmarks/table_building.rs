use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use nary_huffman::generate_coding_table;

use crate::benchmarks::{get_message, RADIX};

fn table_building_benchmark(c: &mut Criterion) {
    let message = get_message();

    let mut group = c.benchmark_group("table building");
    group.sample_size(10);
    group.throughput(criterion::Throughput::Elements(message.len() as u64));
    group.bench_function("generate_coding_table", |b| {
        b.iter(|| generate_coding_table(RADIX, black_box(&message)).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = table_building_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = table_building_benchmark
}
