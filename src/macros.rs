//! Logging macros for ergonomic argument lists.
//!
//! Each macro accepts any number of arguments convertible into [`Arg`]
//! (strings, numbers, `bool`, `char`, `Option`, or an explicit
//! [`Arg::debug`] / [`Arg::display`]) and joins them with spaces. A leading
//! `ctx = <expr>;` attaches a [`RequestContext`] reference.
//!
//! # Examples
//!
//! ```
//! use chunked_logger::prelude::*;
//! use chunked_logger::{info, warn};
//!
//! let memory = MemoryWriter::new();
//! let logger = Logger::builder().output(memory.shared()).env_lookup(|_| None).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // Several arguments
//! let port = 8080;
//! info!(logger, "Server listening on port", port);
//!
//! // With a request context
//! let ctx = RequestContext::new().with_trace_id("req-42");
//! warn!(logger, ctx = &ctx; "Slow upstream", Arg::debug(&[120, 340]));
//!
//! assert_eq!(memory.lines().len(), 3);
//! ```
//!
//! [`Arg`]: crate::Arg
//! [`Arg::debug`]: crate::Arg::debug
//! [`Arg::display`]: crate::Arg::display
//! [`RequestContext`]: crate::RequestContext

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use chunked_logger::prelude::*;
/// # let logger = Logger::builder().output(MemoryWriter::new().shared()).build();
/// use chunked_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, ctx = $ctx:expr; $($arg:expr),* $(,)?) => {
        $logger.log_ctx(
            $level,
            ::core::option::Option::Some($ctx),
            &[$($crate::Arg::from($arg)),*],
        )
    };
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, ctx = $ctx:expr; $($arg:expr),* $(,)?) => {
        $logger.debug_ctx(::core::option::Option::Some($ctx), &[$($crate::Arg::from($arg)),*])
    };
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, ctx = $ctx:expr; $($arg:expr),* $(,)?) => {
        $logger.info_ctx(::core::option::Option::Some($ctx), &[$($crate::Arg::from($arg)),*])
    };
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, ctx = $ctx:expr; $($arg:expr),* $(,)?) => {
        $logger.warn_ctx(::core::option::Option::Some($ctx), &[$($crate::Arg::from($arg)),*])
    };
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&[$($crate::Arg::from($arg)),*])
    };
}

/// Log an error-level message. Never suppressed by the minimum level.
///
/// # Examples
///
/// ```
/// # use chunked_logger::prelude::*;
/// # let memory = MemoryWriter::new();
/// # let logger = Logger::builder().output(memory.shared()).min_level(LogLevel::Error).build();
/// use chunked_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code:", 500, "message:", "Internal error");
/// # assert_eq!(memory.lines().len(), 2);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, ctx = $ctx:expr; $($arg:expr),* $(,)?) => {
        $logger.error_ctx(::core::option::Option::Some($ctx), &[$($crate::Arg::from($arg)),*])
    };
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::Arg::from($arg)),*])
    };
}
