//! Benchmarks for CIDR parsing and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ipagg_core::{Ipv4Cidr, Ipv6Cidr, Presentation};

/// Prefix-length form
const V4_PREFIX: &str = "192.168.0.0/28";

/// Dotted mask form
const V4_MASK: &str = "192.168.0.0/255.255.255.240";

/// Compressed IPv6
const V6_COMPRESSED: &str = "2001:470:1f09:553::1/64";

/// Fully padded IPv6
const V6_FULL: &str = "2001:0470:1f09:0553:0000:0000:0000:0001/64";

/// IPv4-mapped IPv6 with dotted-quad tail
const V6_MAPPED: &str = "::ffff:192.168.0.1/120";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("CIDR Parsing");

    group.bench_function("v4_prefix", |b| {
        b.iter(|| {
            let ip: Ipv4Cidr = black_box(V4_PREFIX).parse().unwrap();
            black_box(ip)
        })
    });

    group.bench_function("v4_mask", |b| {
        b.iter(|| {
            let ip: Ipv4Cidr = black_box(V4_MASK).parse().unwrap();
            black_box(ip)
        })
    });

    for (name, text) in [
        ("compressed", V6_COMPRESSED),
        ("full", V6_FULL),
        ("mapped", V6_MAPPED),
    ] {
        group.bench_with_input(BenchmarkId::new("v6", name), text, |b, s| {
            b.iter(|| {
                let ip: Ipv6Cidr = black_box(s).parse().unwrap();
                black_box(ip)
            })
        });
    }

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("CIDR Rendering");

    let v4: Ipv4Cidr = V4_PREFIX.parse().unwrap();
    let v6: Ipv6Cidr = V6_COMPRESSED.parse().unwrap();
    let mapped: Ipv6Cidr = V6_MAPPED.parse().unwrap();

    group.bench_function("v4_display", |b| {
        b.iter(|| black_box(&v4).to_string())
    });

    group.bench_function("v6_display", |b| {
        b.iter(|| black_box(&v6).to_string())
    });

    group.bench_function("v6_mapped_display", |b| {
        b.iter(|| black_box(&mapped).to_string())
    });

    group.bench_function("v6_full", |b| {
        b.iter(|| black_box(&v6).address(Presentation::Full).unwrap())
    });

    group.finish();
}

criterion_group!(benches, benchmark_parsing, benchmark_rendering);
criterion_main!(benches);
