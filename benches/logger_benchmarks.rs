//! Criterion benchmarks for membuf_logger

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use membuf_logger::core::{LogArg, LogLevel, Logger, LoggerContext};
use std::sync::Arc;

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_context", |b| {
        b.iter(|| {
            let ctx = LoggerContext::new();
            black_box(ctx)
        });
    });

    group.bench_function("new_facade", |b| {
        let ctx = Arc::new(LoggerContext::new());
        b.iter(|| {
            let logger = Logger::new(black_box("bench"), Arc::clone(&ctx));
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn fresh_logger() -> Logger {
    Logger::new("bench", Arc::new(LoggerContext::new()))
}

/// Batched so the buffer is dropped between runs instead of growing without
/// bound for the whole benchmark.
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(100));

    group.bench_function("plain", |b| {
        b.iter_batched(
            fresh_logger,
            |logger| {
                for _ in 0..100 {
                    logger.info(black_box("Benchmark message"));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("formatted", |b| {
        b.iter_batched(
            fresh_logger,
            |logger| {
                for i in 0..100u32 {
                    logger.log_formatted(
                        LogLevel::Info,
                        black_box("iteration {} of {}"),
                        &[LogArg::value(&i), LogArg::value(&100u32)],
                    );
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("filtered_out", |b| {
        let logger = fresh_logger();
        logger.set_level(LogLevel::Error);
        b.iter(|| {
            for _ in 0..100 {
                logger.trace(black_box("Suppressed message"));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Read Surface Benchmarks
// ============================================================================

fn bench_contents_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("contents");

    let logger = fresh_logger();
    for i in 0..1000 {
        logger.info(format!("Message {}", i));
    }

    group.bench_function("snapshot_1000_lines", |b| {
        b.iter(|| black_box(logger.contents()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_append,
    bench_contents_snapshot
);
criterion_main!(benches);
