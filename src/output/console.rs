//! Standard output and standard error

use super::SharedWriter;
use std::io;

/// Lines go to the process's standard output.
pub fn stdout() -> SharedWriter {
    SharedWriter::from_writer("stdout", io::stdout())
}

/// Lines go to the process's standard error.
pub fn stderr() -> SharedWriter {
    SharedWriter::from_writer("stderr", io::stderr())
}
