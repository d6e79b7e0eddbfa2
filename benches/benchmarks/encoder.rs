use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use nary_huffman::{encode, generate_coding_table};

use crate::benchmarks::{get_message, RADIX};

fn encoding_benchmark(c: &mut Criterion) {
    let message = get_message();
    let table = generate_coding_table(RADIX, &message).unwrap();

    let mut group = c.benchmark_group("encoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(criterion::Throughput::Elements(message.len() as u64));
    group.sample_size(10);
    group.bench_function("encoding", |b| {
        b.iter(|| encode(&table, black_box(&message)).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = encoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = encoding_benchmark
}
