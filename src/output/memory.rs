//! In-memory output, for capturing log lines

use super::SharedWriter;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A cloneable byte buffer that collects everything written to it.
///
/// # Example
///
/// ```
/// use chunked_logger::{info, Logger, MemoryWriter};
///
/// let memory = MemoryWriter::new();
/// let logger = Logger::builder()
///     .output(memory.shared())
///     .env_lookup(|_| None)
///     .build();
///
/// info!(logger, "ready");
/// assert!(memory.contents().ends_with("] ready\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`SharedWriter`] that appends to this buffer.
    pub fn shared(&self) -> SharedWriter {
        SharedWriter::from_writer("memory", self.clone())
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Buffer contents as text (lossy for invalid UTF-8).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Buffer contents split into lines, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
