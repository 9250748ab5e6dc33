//! File output

use super::SharedWriter;
use crate::core::{LoggerError, Result};
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::Path;

/// Open `path` for appending and wrap it as a [`SharedWriter`].
///
/// Lines are buffered per write and flushed before the log call returns.
///
/// # Examples
///
/// ```no_run
/// use chunked_logger::{output, Logger};
///
/// let logger = Logger::builder()
///     .output(output::file::open("/var/log/app.log").unwrap())
///     .build();
/// ```
pub fn open(path: impl AsRef<Path>) -> Result<SharedWriter> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}'", path.display()),
                e,
            )
        })?;

    Ok(SharedWriter::from_writer(
        path.display().to_string(),
        BufWriter::new(file),
    ))
}
