//! Logger metrics for observability
//!
//! Counters for messages that passed or failed the severity gate, the lines
//! they were split into, and writes that the output rejected.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use chunked_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_lines(3);
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.messages_emitted(), 1);
/// assert_eq!(metrics.lines_written(), 3);
/// assert_eq!(metrics.suppression_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages that passed the severity gate and had something to write
    messages_emitted: AtomicU64,

    /// Messages rejected by the severity gate
    messages_suppressed: AtomicU64,

    /// Lines (chunks) handed to the output
    lines_written: AtomicU64,

    /// Lines the output failed to accept
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            messages_emitted: AtomicU64::new(0),
            messages_suppressed: AtomicU64::new(0),
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn messages_emitted(&self) -> u64 {
        self.messages_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn messages_suppressed(&self) -> u64 {
        self.messages_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a message that reached the output. Returns the previous count.
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.messages_emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a message rejected by the severity gate. Returns the previous count.
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.messages_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_lines(&self, lines: u64) -> u64 {
        self.lines_written.fetch_add(lines, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of gated messages that were suppressed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged yet.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.messages_suppressed() as f64;
        let total = self.messages_emitted() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.messages_emitted.store(0, Ordering::Relaxed);
        self.messages_suppressed.store(0, Ordering::Relaxed);
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            messages_emitted: AtomicU64::new(self.messages_emitted()),
            messages_suppressed: AtomicU64::new(self.messages_suppressed()),
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
