// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use packed_abi::{
    AbiType, Address, PackedCodec, TupleElem, Value, decode_packed, encode_packed, encoded_len,
};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench packed_abi
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

const SIZES: [usize; 4] = [16, 256, 4096, 65536];

// === Fixtures ===

fn transfer_type() -> AbiType {
    AbiType::tuple([
        TupleElem::new("to", AbiType::address()),
        TupleElem::new("amount", AbiType::uint(256).expect("failed to build uint256")),
        TupleElem::new("nonce", AbiType::uint(64).expect("failed to build uint64")),
        TupleElem::new("ok", AbiType::bool()),
    ])
}

fn transfer(i: usize) -> Value {
    Value::Array(vec![
        Value::Address(Address::new([i as u8; 20])),
        Value::U128(i as u128 * 1_000_000_007),
        Value::U64(i as u64),
        Value::Bool(i % 2 == 0),
    ])
}

fn transfers(n: usize) -> Value {
    Value::Array((0..n).map(transfer).collect())
}

// === ENCODE ===

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_abi_encode");
    configure_group(&mut group);

    let ty = AbiType::slice(transfer_type());

    for n in SIZES {
        let value = transfers(n);
        let total_bytes = encoded_len(&value, &ty).expect("failed to compute encoded length");

        group.throughput(Throughput::Bytes(total_bytes as u64));
        group.bench_with_input(BenchmarkId::new("transfers", n), &value, |b, v| {
            b.iter(|| black_box(encode_packed(v, &ty).expect("failed to encode transfers")));
        });
    }

    group.finish();
}

fn bench_encoded_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_abi_encoded_len");
    configure_group(&mut group);

    let ty = AbiType::slice(transfer_type());

    for n in SIZES {
        let value = transfers(n);

        group.bench_with_input(BenchmarkId::new("transfers", n), &value, |b, v| {
            b.iter(|| black_box(encoded_len(v, &ty).expect("failed to compute encoded length")));
        });
    }

    group.finish();
}

// === DECODE ===

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_abi_decode");
    configure_group(&mut group);

    let ty = AbiType::slice(transfer_type());

    for n in SIZES {
        let encoded = encode_packed(&transfers(n), &ty).expect("failed to encode transfers");

        // Verify decode works correctly before benchmarking
        {
            let (decoded, rest) = decode_packed(&ty, &encoded).expect("failed to decode");
            assert!(rest.is_empty(), "decode left trailing bytes");
            assert_eq!(decoded.container_len(), Some(n), "element count mismatch");
        }

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("transfers", n), &encoded, |b, enc| {
            b.iter(|| black_box(decode_packed(&ty, enc).expect("failed to decode transfers")));
        });
    }

    group.finish();
}

fn bench_decode_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_abi_decode_bytes");
    configure_group(&mut group);

    let codec = PackedCodec::default();
    let ty = AbiType::bytes();

    for n in SIZES {
        let payload = vec![0xa5; n];

        group.throughput(Throughput::Bytes(n as u64));
        group.bench_with_input(BenchmarkId::new("bytes", n), &payload, |b, p| {
            b.iter(|| black_box(codec.decode_exact(&ty, p).expect("failed to decode bytes")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_encoded_len,
    bench_decode,
    bench_decode_bytes
);
criterion_main!(benches);
