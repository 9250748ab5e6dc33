//! Fixed line template
//!
//! Every chunk is written as one line:
//!
//! ```text
//! [<timestamp>][<module>:<LEVEL>][env:<env>][pid:<pid> tid:<tid>][tracerId: <id>][entries: <i>/<n>][<file>:<line>] <chunk>
//! ```

use super::{
    caller::CallSite,
    chunk::RenderedChunk,
    error::{LoggerError, Result},
    log_level::LogLevel,
};
use crate::output::SharedWriter;

/// Thread id stamped on every line. Lines do not carry an OS thread id.
pub const THREAD_ID_PLACEHOLDER: u32 = 0;

/// Fields shared by every chunk of one message.
#[derive(Debug, Clone)]
pub struct LineFields<'a> {
    pub timestamp: String,
    pub level: LogLevel,
    pub environment: &'a str,
    pub pid: u32,
    pub tid: u32,
    pub trace_id: &'a str,
    pub call_site: CallSite,
}

/// Check that a module name fits inside the bracketed template.
pub fn validate_module_name(module: &str) -> Result<()> {
    if module.is_empty() {
        return Err(LoggerError::formatter_init(module, "module name is empty"));
    }
    if module.contains(']') {
        return Err(LoggerError::formatter_init(
            module,
            "module name must not contain ']'",
        ));
    }
    if module.chars().any(char::is_control) {
        return Err(LoggerError::formatter_init(
            module,
            "module name must not contain control characters",
        ));
    }
    Ok(())
}

/// Writes formatted lines for one module to one output.
#[derive(Debug)]
pub struct LineFormatter<'a> {
    module: &'a str,
    out: &'a SharedWriter,
}

impl<'a> LineFormatter<'a> {
    pub fn new(module: &'a str, out: &'a SharedWriter) -> Result<Self> {
        validate_module_name(module)?;
        Ok(Self { module, out })
    }

    /// Build the complete line for `chunk`, including the trailing newline.
    pub fn format(&self, fields: &LineFields<'_>, chunk: &RenderedChunk<'_>) -> Vec<u8> {
        let header = format!(
            "[{}][{}:{}][env:{}][pid:{} tid:{}][tracerId: {}][entries: {}/{}][{}] ",
            fields.timestamp,
            self.module,
            fields.level,
            fields.environment,
            fields.pid,
            fields.tid,
            fields.trace_id,
            chunk.index,
            chunk.count,
            fields.call_site,
        );

        let mut line = Vec::with_capacity(header.len() + chunk.bytes.len() + 1);
        line.extend_from_slice(header.as_bytes());
        line.extend_from_slice(chunk.bytes);
        line.push(b'\n');
        line
    }

    pub fn write(&self, fields: &LineFields<'_>, chunk: &RenderedChunk<'_>) -> Result<()> {
        let line = self.format(fields, chunk);
        self.out.write_line(&line).map_err(|e| {
            LoggerError::io_operation(
                "writing log line",
                format!("output '{}' rejected the line", self.out.name()),
                e,
            )
        })
    }
}
