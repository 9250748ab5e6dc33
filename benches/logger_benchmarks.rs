//! Criterion benchmarks for chunked_logger

use chunked_logger::core::chunk::split_chunks;
use chunked_logger::core::render::render_message;
use chunked_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io;
use std::sync::Arc;

fn sink_logger(level: LogLevel, max_chunk_length: i64) -> Logger {
    Logger::builder()
        .min_level(level)
        .max_chunk_length(max_chunk_length)
        .output(SharedWriter::from_writer("sink", io::sink()))
        .env_lookup(|_| None)
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = Logger::builder()
                .module_name("bench")
                .env_lookup(|_| None)
                .build();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Debug, 3000);
    let ctx = RequestContext::new().with_trace_id("bench-trace");

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(&[Arg::from(black_box("Info message"))]);
        });
    });

    group.bench_function("info_many_args", |b| {
        b.iter(|| {
            logger.info(&[
                Arg::from("user"),
                Arg::from(black_box(42)),
                Arg::from("logged in from"),
                Arg::from(black_box("10.0.0.1")),
            ]);
        });
    });

    group.bench_function("info_ctx", |b| {
        b.iter(|| {
            logger.info_ctx(Some(&ctx), &[Arg::from(black_box("Info message"))]);
        });
    });

    group.finish();
}

// ============================================================================
// Chunking Benchmarks
// ============================================================================

fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunking");

    for size in [100usize, 3_000, 30_000] {
        let message = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("split", size), &message, |b, message| {
            b.iter(|| split_chunks(black_box(message), 3000).count());
        });

        let logger = sink_logger(LogLevel::Info, 3000);
        group.bench_with_input(BenchmarkId::new("emit", size), &message, |b, message| {
            b.iter(|| logger.info(&[Arg::from(black_box(message.as_str()))]));
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let payload = vec![1u32, 2, 3, 4, 5];

    group.bench_function("text_args", |b| {
        b.iter(|| {
            render_message(black_box(&[Arg::from("a"), Arg::from("b"), Arg::from("c")]))
        });
    });

    group.bench_function("debug_arg", |b| {
        b.iter(|| render_message(black_box(&[Arg::from("payload"), Arg::debug(&payload)])));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for num_threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements(num_threads as u64 * 100));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_threads),
            &num_threads,
            |b, &num_threads| {
                let logger = Arc::new(sink_logger(LogLevel::Info, 3000));
                b.iter(|| {
                    let handles: Vec<_> = (0..num_threads)
                        .map(|_| {
                            let logger = Arc::clone(&logger);
                            std::thread::spawn(move || {
                                for i in 0..100 {
                                    logger.info(&[Arg::from("message"), Arg::from(i)]);
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        let _ = handle.join();
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Warn, 3000);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(&[Arg::from(black_box("This should be filtered"))]);
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(&[Arg::from(black_box("This should be logged"))]);
        });
    });

    group.bench_function("debug_timing_disabled", |b| {
        b.iter(|| {
            let start = logger.now();
            black_box(logger.elapsed_since(start))
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_sync_logging,
    bench_chunking,
    bench_rendering,
    bench_concurrent_logging,
    bench_level_filtering
);

criterion_main!(benches);
