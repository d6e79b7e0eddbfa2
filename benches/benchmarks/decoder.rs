use criterion::{black_box, criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};

use nary_huffman::PrefixCodec;

use crate::benchmarks::{get_message, RADIX};

fn decode_benchmark(c: &mut Criterion) {
    let message = get_message();
    let codec = PrefixCodec::from_message(RADIX, &message).unwrap();
    let encoded = codec.encode(&message).unwrap();

    let mut group = c.benchmark_group("decoder benchmark");
    group.measurement_time(std::time::Duration::from_secs(10));
    group.throughput(criterion::Throughput::Elements(message.len() as u64));
    group.sample_size(10);
    group.bench_function("decoding", |b| {
        b.iter(|| codec.decoder().decode(black_box(&encoded)).unwrap())
    });
    group.finish();
}

criterion_group! {
    name = decoder_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = decode_benchmark
}
