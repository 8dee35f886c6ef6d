use criterion::{
    BenchmarkGroup, Criterion, Throughput, criterion_group, criterion_main, measurement::WallTime,
};
use rand::{Rng, distributions::Alphanumeric, thread_rng};
use stardust_sharder::{Checksum, PartitionStrategy, Reduction, SeriesHasher, partition};

fn get_random_string(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn sharder_benchmarks(c: &mut Criterion) {
    for (name, checksum) in [
        ("adler32", Checksum::Adler32),
        ("crc32", Checksum::Crc32),
        ("siphash13", Checksum::SipHash13),
        ("md5", Checksum::Md5),
    ] {
        benchmark_impl(
            c,
            &format!("{name}_modulo"),
            PartitionStrategy::Hash(SeriesHasher::new(checksum, Reduction::Modulo)),
        );
        benchmark_impl(
            c,
            &format!("{name}_jumphash"),
            PartitionStrategy::Hash(SeriesHasher::new(checksum, Reduction::JumpHash)),
        );
    }

    benchmark_impl(c, "row_modulo", PartitionStrategy::RowModulo { row_index: 42 });
}

fn benchmark_impl(c: &mut Criterion, name: &str, strategy: PartitionStrategy) {
    let mut group = c.benchmark_group(name);

    // fixed series key with varying number of shards
    for shards in [4, 64, 1_000, 100_000] {
        benchmark_scenario(
            &mut group,
            &format!("basic {shards} shards"),
            ["router-a", "xe-0/0/0"],
            shards,
            &strategy,
        );
    }

    // random device and interface names of varying length
    for length in [16, 32, 64] {
        benchmark_scenario(
            &mut group,
            &format!("random with key-length {length}"),
            [get_random_string(length), get_random_string(length)],
            64,
            &strategy,
        );
    }

    group.finish();
}

fn benchmark_scenario<S>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    bench_name: &str,
    series_key: [S; 2],
    shards: usize,
    strategy: &PartitionStrategy,
) where
    S: AsRef<str>,
{
    group.throughput(Throughput::Elements(1));
    group.bench_function(bench_name, |b| {
        b.iter(|| partition(&series_key, shards, strategy).unwrap());
    });
}

criterion_group!(benches, sharder_benchmarks);
criterion_main!(benches);
