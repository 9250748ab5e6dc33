//! Emission engine
//!
//! Takes a message that already passed the severity gate, splits it into
//! chunks and writes one templated line per chunk.

use super::{
    caller::{CallerLocator, TrackedCaller},
    chunk::split_chunks,
    line_format::{LineFields, LineFormatter, THREAD_ID_PLACEHOLDER},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    request_context::{resolve_trace_id, RequestContext},
    timestamp::line_timestamp_now,
};
use crate::output::SharedWriter;
use std::panic::Location;
use std::sync::Arc;

/// Everything needed to write one rendered message.
#[derive(Debug, Clone, Copy)]
pub struct Emission<'a> {
    pub module: &'a str,
    pub level: LogLevel,
    pub message: &'a str,
    pub max_chunk_length: usize,
    pub context: Option<&'a RequestContext>,
    pub environment: &'a str,
    pub caller: &'static Location<'static>,
}

pub struct Emitter {
    locator: Arc<dyn CallerLocator>,
    metrics: Arc<LoggerMetrics>,
}

impl Emitter {
    pub fn new(locator: Arc<dyn CallerLocator>, metrics: Arc<LoggerMetrics>) -> Self {
        Self { locator, metrics }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Write every chunk of `emission.message` to `out`.
    ///
    /// Returns the number of lines written. An empty message writes nothing.
    /// Write failures are reported on stderr and counted, never returned.
    ///
    /// # Panics
    ///
    /// Panics if the line formatter cannot be built for `emission.module`.
    /// A logger that cannot format lines would otherwise drop every message
    /// without anyone noticing.
    pub fn emit(&self, out: &SharedWriter, emission: &Emission<'_>) -> usize {
        let formatter = match LineFormatter::new(emission.module, out) {
            Ok(formatter) => formatter,
            Err(e) => panic!("[LOGGER CRITICAL] {}", e),
        };

        let chunks = split_chunks(emission.message, emission.max_chunk_length);
        if chunks.len() == 0 {
            return 0;
        }

        let fields = LineFields {
            timestamp: line_timestamp_now(),
            level: emission.level,
            environment: emission.environment,
            pid: std::process::id(),
            tid: THREAD_ID_PLACEHOLDER,
            trace_id: resolve_trace_id(emission.context),
            call_site: self.locator.locate(emission.caller),
        };

        let mut written = 0;
        for chunk in chunks {
            match formatter.write(&fields, &chunk) {
                Ok(()) => written += 1,
                Err(e) => {
                    eprintln!(
                        "[LOGGER ERROR] Chunk {}/{} failed: {}",
                        chunk.index, chunk.count, e
                    );
                    self.metrics.record_write_failure();
                }
            }
        }

        self.metrics.record_emitted();
        self.metrics.record_lines(written as u64);
        written
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Arc::new(TrackedCaller), Arc::new(LoggerMetrics::new()))
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::caller::FixedCaller;
    use crate::output::MemoryWriter;

    fn emitter() -> Emitter {
        Emitter::new(
            Arc::new(FixedCaller::new("svc.rs", 9)),
            Arc::new(LoggerMetrics::new()),
        )
    }

    fn emission<'a>(message: &'a str, context: Option<&'a RequestContext>) -> Emission<'a> {
        Emission {
            module: "svc",
            level: LogLevel::Warn,
            message,
            max_chunk_length: 5,
            context,
            environment: "staging",
            caller: Location::caller(),
        }
    }

    /// Drop the leading `[timestamp]` field.
    fn strip_timestamp(line: &str) -> &str {
        &line[line.find("][").map_or(0, |i| i + 1)..]
    }

    #[test]
    fn test_emits_one_line_per_chunk() {
        let memory = MemoryWriter::new();
        let emitter = emitter();
        let written = emitter.emit(&memory.shared(), &emission("hello world", None));

        assert_eq!(written, 3);
        let lines = memory.lines();
        let pid = std::process::id();
        assert_eq!(
            strip_timestamp(&lines[0]),
            format!(
                "[svc:WARN][env:staging][pid:{} tid:0][tracerId: ][entries: 1/3][svc.rs:9] hello",
                pid
            )
        );
        assert!(lines[1].ends_with("[entries: 2/3][svc.rs:9]  worl"));
        assert!(lines[2].ends_with("[entries: 3/3][svc.rs:9] d"));
        assert_eq!(emitter.metrics().lines_written(), 3);
        assert_eq!(emitter.metrics().messages_emitted(), 1);
    }

    #[test]
    fn test_empty_message_writes_nothing() {
        let memory = MemoryWriter::new();
        let emitter = emitter();
        assert_eq!(emitter.emit(&memory.shared(), &emission("", None)), 0);
        assert!(memory.is_empty());
        assert_eq!(emitter.metrics().messages_emitted(), 0);
    }

    #[test]
    fn test_trace_id_from_context() {
        let memory = MemoryWriter::new();
        let ctx = RequestContext::new().with_trace_id("abc-123");
        emitter().emit(&memory.shared(), &emission("hi", Some(&ctx)));
        assert!(memory.contents().contains("[tracerId: abc-123]"));
    }

    #[test]
    fn test_tracked_caller_by_default() {
        let memory = MemoryWriter::new();
        Emitter::default().emit(&memory.shared(), &emission("hi", None));
        assert!(memory.contents().contains("[emitter.rs:"));
    }

    #[test]
    #[should_panic(expected = "Failed to initialize line formatter")]
    fn test_bad_module_is_fatal() {
        let memory = MemoryWriter::new();
        let mut bad = emission("hi", None);
        bad.module = "bad]module";
        emitter().emit(&memory.shared(), &bad);
    }
}
