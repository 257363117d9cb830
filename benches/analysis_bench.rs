//! Performance benchmarks for the analysis functions.
//!
//! Run with: cargo bench
//!
//! These benchmarks establish baseline performance metrics for:
//! - Theme detection on texts of various lengths
//! - Weekly and monthly reflections over journals of various sizes

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reverie::analysis::{detect_themes, generate_prompts, summarize_period, AnalysisOptions};
use reverie::journal_core::{JournalEntry, Period};

const SAMPLE: &str = "Long day at the office with a tight project deadline. \
    Went to the gym afterwards and called my mom. Feeling tired but grateful, \
    and a little anxious about the budget for our holiday trip. ";

/// A synthetic journal with one entry every six hours, newest last.
fn journal(size: usize) -> Vec<JournalEntry> {
    let end = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
    (0..size)
        .map(|i| {
            let at = end - Duration::hours(6 * (size - i) as i64);
            JournalEntry::new(at.timestamp_millis()).with_content(SAMPLE)
        })
        .collect()
}

/// Benchmark theme detection with various text lengths.
fn bench_detect_themes(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_themes");

    for repeats in [1, 10, 100] {
        let text = SAMPLE.repeat(repeats);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| black_box(detect_themes(black_box(text))));
        });
    }

    group.finish();
}

/// Benchmark reflections at various journal sizes.
fn bench_summarize_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_period");
    let now = Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap();
    let options = AnalysisOptions::default();

    for size in [10, 100, 1000] {
        let entries = journal(size);

        group.throughput(Throughput::Elements(size as u64));
        for period in [Period::Week, Period::Month] {
            group.bench_with_input(
                BenchmarkId::new(period.as_str(), size),
                &entries,
                |b, entries| {
                    b.iter(|| black_box(summarize_period(entries, period, now, &options)));
                },
            );
        }
    }

    group.finish();
}

fn bench_generate_prompts(c: &mut Criterion) {
    let entries = journal(1000);
    c.bench_function("generate_prompts", |b| {
        b.iter(|| black_box(generate_prompts(black_box(&entries))));
    });
}

criterion_group!(
    benches,
    bench_detect_themes,
    bench_summarize_period,
    bench_generate_prompts
);
criterion_main!(benches);
