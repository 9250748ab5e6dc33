//! Stress tests for concurrent callers
//!
//! These tests verify:
//! - A single logger can be shared across threads without locking by callers
//! - Chunk lines from concurrent callers never interleave within a line
//! - Metrics stay consistent under concurrent load

use chunked_logger::{Arg, FixedCaller, LogLevel, Logger, MemoryWriter, RequestContext};
use std::sync::Arc;

const THREADS: usize = 8;
const MESSAGES_PER_THREAD: usize = 200;

fn shared_logger(level: LogLevel, max_chunk_length: i64) -> (Arc<Logger>, MemoryWriter) {
    let memory = MemoryWriter::new();
    let logger = Logger::builder()
        .min_level(level)
        .max_chunk_length(max_chunk_length)
        .output(memory.shared())
        .env_lookup(|_| None)
        .caller_locator(FixedCaller::new("stress.rs", 1))
        .build();
    (Arc::new(logger), memory)
}

#[test]
fn test_concurrent_logging_all_lines_written() {
    let (logger, memory) = shared_logger(LogLevel::Info, 3000);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    logger.info(&[Arg::from("thread"), Arg::from(thread_id), Arg::from(i)]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), THREADS * MESSAGES_PER_THREAD);
    assert_eq!(
        logger.metrics().messages_emitted(),
        (THREADS * MESSAGES_PER_THREAD) as u64
    );
}

#[test]
fn test_concurrent_chunks_never_interleave_within_a_line() {
    let (logger, memory) = shared_logger(LogLevel::Debug, 16);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                let ctx = RequestContext::new().with_trace_id(format!("t{}", thread_id));
                // 64 bytes of one letter per thread -> 4 chunks per message
                let payload = char::from(b'a' + thread_id as u8).to_string().repeat(64);
                for _ in 0..50 {
                    logger.debug_ctx(Some(&ctx), &[Arg::from(payload.as_str())]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), THREADS * 50 * 4);

    for line in &lines {
        let trace_start = line.find("[tracerId: t").expect("trace id present") + "[tracerId: t".len();
        let rest = &line[trace_start..];
        let thread_id: usize = rest[..rest.find(']').unwrap()]
            .parse()
            .expect("numeric thread id");
        let expected = char::from(b'a' + thread_id as u8).to_string().repeat(16);
        assert!(
            line.ends_with(&format!("[stress.rs:1] {}", expected)),
            "interleaved line: {}",
            line
        );
    }
}

#[test]
fn test_concurrent_gating_metrics() {
    let (logger, memory) = shared_logger(LogLevel::Warn, 3000);

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    match (thread_id + i) % 4 {
                        0 => logger.debug(&[Arg::from(i)]),
                        1 => logger.info(&[Arg::from(i)]),
                        2 => logger.warn(&[Arg::from(i)]),
                        _ => logger.error(&[Arg::from(i)]),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let total = (THREADS * MESSAGES_PER_THREAD) as u64;
    let metrics = logger.metrics();
    assert_eq!(metrics.messages_emitted() + metrics.messages_suppressed(), total);
    assert_eq!(metrics.messages_suppressed(), total / 2);
    assert_eq!(memory.lines().len() as u64, total / 2);
}
