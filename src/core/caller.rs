//! Call-site location for log lines
//!
//! Every facade entry point is `#[track_caller]`, so the location reaching
//! the emitter is the line that called the logger, not a line inside it.

use std::fmt;
use std::panic::Location;

/// File basename and line of a logging call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Build a call site from a caller location, keeping only the file name.
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(basename(location.file()), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Strip directories from a source path (both `/` and `\` separators).
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Decides which call site is stamped on a log line.
pub trait CallerLocator: Send + Sync {
    fn locate(&self, caller: &'static Location<'static>) -> CallSite;
}

/// Production locator: uses the tracked caller location as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackedCaller;

impl CallerLocator for TrackedCaller {
    fn locate(&self, caller: &'static Location<'static>) -> CallSite {
        CallSite::from_location(caller)
    }
}

/// Locator that always reports the same call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCaller(pub CallSite);

impl FixedCaller {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self(CallSite::new(file, line))
    }
}

impl CallerLocator for FixedCaller {
    fn locate(&self, _caller: &'static Location<'static>) -> CallSite {
        self.0.clone()
    }
}
