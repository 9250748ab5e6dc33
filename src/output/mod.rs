//! Output writers
//!
//! A [`SharedWriter`] is the destination the logger writes finished lines to.
//! It is cheap to clone; all clones write to the same underlying sink, one
//! whole line at a time.

pub mod console;
pub mod file;
pub mod memory;

pub use memory::MemoryWriter;

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedWriter {
    name: Arc<str>,
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    /// Wrap any writer. `name` identifies the output in diagnostics.
    pub fn from_writer<W>(name: impl Into<Arc<str>>, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            name: name.into(),
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write one complete line and flush it.
    ///
    /// The lock is held for the whole line, so lines from concurrent callers
    /// never interleave.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(line)?;
        writer.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
