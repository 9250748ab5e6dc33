//! # Chunked Logger
//!
//! A leveled, context-aware logging facade that writes every message as one
//! or more fixed-layout lines:
//!
//! ```text
//! [2025-08-01 10:30:45.123][checkout:INFO][env:prod][pid:4242 tid:0][tracerId: abc-123][entries: 1/2][handler.rs:57] first 3000 bytes...
//! ```
//!
//! ## Features
//!
//! - **Severity gating**: Debug < Info < Warn < Error; errors are never suppressed
//! - **Chunking**: long messages are split into bounded pieces tagged `index/count`
//! - **Trace ids**: read from a [`RequestContext`] passed alongside the message
//! - **Call sites**: file and line of the logging call, via `#[track_caller]`
//! - **Synchronous**: every line is written and flushed before the call returns

pub mod core;
pub mod macros;
pub mod output;

pub mod prelude {
    pub use crate::core::{
        Arg, CallSite, CallerLocator, FieldValue, FixedCaller, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings, RequestContext, Result,
        TrackedCaller,
    };
    pub use crate::output::{MemoryWriter, SharedWriter};
}

pub use crate::core::{
    Arg, CallSite, CallerLocator, FieldValue, FixedCaller, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings, RequestContext, Result,
    TrackedCaller, DEFAULT_MAX_CHUNK_LENGTH, LOG_LEVEL_ENV, TRACE_ID_KEY,
};
pub use output::{MemoryWriter, SharedWriter};
