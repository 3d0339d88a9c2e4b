use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use ipagg_core::{IpCidr, Order, aggregate_mixed};

// End-to-end cost of what the driver does with a list file: parse every line,
// then aggregate. The lists are generated so that most blocks merge.

fn v4_list(count: u32) -> String {
    (0..count)
        .map(|i| format!("10.{}.{}.0/24\n", i / 256, i % 256))
        .collect()
}

fn v6_list(count: u32) -> String {
    (0..count)
        .map(|i| format!("fc00:{:x}::/32\n", i))
        .collect()
}

fn parse_lines(text: &str) -> Vec<IpCidr> {
    text.lines().map(|line| line.parse().unwrap()).collect()
}

fn list_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for (name, text) in [("v4_4096", v4_list(4096)), ("v6_4096", v6_list(4096))] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let addresses = parse_lines(black_box(&text));
                aggregate_mixed(&addresses, Order::Unsorted).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, list_benchmark);
criterion_main!(benches);
