// This file is part of codepoint_set. For terms of use, please see the file
// called LICENSE at the top level of the codepoint_set source tree.

use codepoint_set::codepointset::CodepointSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn cpset_bench(c: &mut Criterion) {
    let best_sample = CodepointSet::try_from_intervals(&[0x41, 0x46]).unwrap();
    // Every other code point in the BMP, so no two intervals merge
    let worst_ex: Vec<u32> = (0x0..0x10000u32).step_by(2).flat_map(|cp| [cp, cp]).collect();
    let worst_sample = CodepointSet::try_from_intervals(&worst_ex).unwrap();

    c.bench_function("cpset/overview", |b| {
        #[allow(clippy::suspicious_map)]
        b.iter(|| {
            best_sample
                .iter_chars()
                .map(|ch| best_sample.contains(ch))
                .count();
            worst_sample
                .iter_chars()
                .take(100)
                .map(|ch| worst_sample.contains(ch))
                .count();
            worst_sample.inverse().size();
        })
    });

    {
        let mut group = c.benchmark_group("cpset/contains");
        group.bench_with_input("best", &best_sample, |b, sample| {
            b.iter(|| sample.iter_chars().filter(|&ch| sample.contains(ch)).count())
        });
        group.bench_with_input("worst", &worst_sample, |b, sample| {
            b.iter(|| (0..0x10000u32).filter(|&cp| sample.contains32(cp)).count())
        });
        group.finish();

        let mut group = c.benchmark_group("cpset/build");
        group.bench_function("intervals", |b| {
            b.iter(|| CodepointSet::try_from_intervals(black_box(&worst_ex)))
        });
        group.bench_function("pattern", |b| {
            b.iter(|| CodepointSet::from_pattern(black_box("^0-9A-Za-z_\\-\\\\")))
        });
        group.finish();

        let mut group = c.benchmark_group("cpset/algebra");
        let letters = CodepointSet::ascii_alphanumeric();
        group.bench_function("union", |b| {
            b.iter(|| CodepointSet::union_all(&[worst_sample.clone(), letters.clone()]))
        });
        group.bench_function("intersection", |b| {
            b.iter(|| worst_sample.intersection(&letters))
        });
        group.finish();

        let mut group = c.benchmark_group("cpset/codec");
        let bytes = worst_sample.encode();
        group.bench_function("encode", |b| b.iter(|| worst_sample.encode()));
        group.bench_function("decode", |b| {
            b.iter(|| CodepointSet::decode(black_box(&bytes)))
        });
        group.finish();
    }
}

criterion_group!(benches, cpset_bench);
criterion_main!(benches);
