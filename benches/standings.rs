//! Benchmarks for standings construction
//!
//! Measures the synchronous core over a realistic field size: validation,
//! stable sorting, fastest-split aggregation, and live search filtering.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use finishline::wire::{RawResult, RawSplit};
use finishline::{FastestSplits, search, sort, validate};

const FIELD_SIZE: usize = 2_000;

/// Build a synthetic feed with deterministic but varied times.
fn synthetic_feed() -> Vec<RawResult> {
    (0..FIELD_SIZE)
        .map(|index| {
            let hours = 8 + (index % 9) as u32;
            let minutes = (index * 7 % 60) as u32;
            let seconds = (index * 13 % 60) as u32;
            RawResult {
                first_name: format!("First{index}"),
                last_name: format!("Last{index}"),
                gender: if index % 2 == 0 { "M".into() } else { "F".into() },
                division: "AG".into(),
                nationality: "AUS".into(),
                total_time: format!("{hours:02}:{minutes:02}:{seconds:02}"),
                splits: vec![
                    RawSplit {
                        name: "swim_time".into(),
                        time: format!("00:{:02}:{seconds:02}", 20 + (index % 30)),
                    },
                    RawSplit {
                        name: "bike_time".into(),
                        time: format!("0{}:{minutes:02}:00", 4 + (index % 3)),
                    },
                    RawSplit { name: "run_time".into(), time: "00:00:00".into() },
                ],
            }
        })
        .collect()
}

fn bench_validate_sort_aggregate(c: &mut Criterion) {
    let feed = synthetic_feed();

    let mut group = c.benchmark_group("standings");
    group.throughput(Throughput::Elements(FIELD_SIZE as u64));

    group.bench_function("validate_sort_aggregate", |b| {
        b.iter(|| {
            let mut results: Vec<_> =
                feed.iter().cloned().filter_map(validate::admit).collect();
            sort::by_total_time(&mut results);
            black_box(FastestSplits::aggregate(&results))
        })
    });

    group.finish();
}

fn bench_search_filter(c: &mut Criterion) {
    let mut results: Vec<_> = synthetic_feed().into_iter().filter_map(validate::admit).collect();
    sort::by_total_time(&mut results);

    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(FIELD_SIZE as u64));

    group.bench_function("substring_filter", |b| {
        b.iter(|| black_box(search::filter(&results, "last1")))
    });

    group.bench_function("empty_term_fast_path", |b| {
        b.iter(|| black_box(search::filter(&results, "")))
    });

    group.finish();
}

criterion_group!(benches, bench_validate_sort_aggregate, bench_search_filter);
criterion_main!(benches);
