//! Main logger implementation

use super::{
    caller::{CallerLocator, TrackedCaller},
    config::{
        normalize_max_chunk_length, normalize_module_name, resolve_min_level, LoggerConfig,
        LoggerSettings, DEFAULT_MODULE_NAME,
    },
    chunk::DEFAULT_MAX_CHUNK_LENGTH,
    emitter::{Emission, Emitter},
    error::Result,
    line_format::validate_module_name,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    render::{render_message, Arg},
    request_context::RequestContext,
    timestamp::{debug_elapsed, debug_now},
};
use crate::output::{console, SharedWriter};
use chrono::{DateTime, Utc};
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

type EnvLookup = Box<dyn FnOnce(&str) -> Option<String>>;

/// Leveled logger writing chunked, templated lines
///
/// Configuration is fixed at construction, so a `Logger` can be shared
/// between threads without locking; only the output itself is synchronized.
///
/// Every entry point is `#[track_caller]`: the file and line stamped on each
/// line are those of the code that called the logger.
///
/// # Example
///
/// ```
/// use chunked_logger::{Arg, Logger, MemoryWriter, RequestContext};
///
/// let memory = MemoryWriter::new();
/// let logger = Logger::builder()
///     .module_name("checkout")
///     .max_chunk_length(5)
///     .output(memory.shared())
///     .env_lookup(|_| None)
///     .build();
///
/// let ctx = RequestContext::new().with_trace_id("abc-123");
/// logger.info_ctx(Some(&ctx), &[Arg::from("hello world")]);
///
/// let lines = memory.lines();
/// assert_eq!(lines.len(), 3);
/// assert!(lines[0].contains("[tracerId: abc-123][entries: 1/3]"));
/// ```
pub struct Logger {
    config: LoggerConfig,
    emitter: Emitter,
}

impl Logger {
    /// Logger with default settings, honoring `LOG_LEVEL`.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        self.emitter.metrics()
    }

    /// Whether a message at `level` would be written.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        LogLevel::allows(self.config.min_level, level)
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, args: &[Arg<'_>]) {
        self.gate_and_emit(level, None, args, Location::caller());
    }

    #[track_caller]
    pub fn log_ctx(&self, level: LogLevel, ctx: Option<&RequestContext>, args: &[Arg<'_>]) {
        self.gate_and_emit(level, ctx, args, Location::caller());
    }

    fn gate_and_emit(
        &self,
        level: LogLevel,
        ctx: Option<&RequestContext>,
        args: &[Arg<'_>],
        caller: &'static Location<'static>,
    ) {
        if !self.is_enabled(level) {
            self.emitter.metrics().record_suppressed();
            return;
        }
        self.emit(level, ctx, args, caller);
    }

    fn emit(
        &self,
        level: LogLevel,
        ctx: Option<&RequestContext>,
        args: &[Arg<'_>],
        caller: &'static Location<'static>,
    ) {
        // Nothing to log still goes through the emitter so a broken
        // formatter surfaces on the first passing call.
        let message = render_message(args).unwrap_or_default();

        self.emitter.emit(
            &self.config.out,
            &Emission {
                module: &self.config.module_name,
                level,
                message: &message,
                max_chunk_length: self.config.max_chunk_length,
                context: ctx,
                environment: &self.config.environment,
                caller,
            },
        );
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: &[Arg<'_>]) {
        self.gate_and_emit(LogLevel::Debug, None, args, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: &[Arg<'_>]) {
        self.gate_and_emit(LogLevel::Info, None, args, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, args: &[Arg<'_>]) {
        self.gate_and_emit(LogLevel::Warn, None, args, Location::caller());
    }

    /// Error messages are written whatever the minimum level.
    #[inline]
    #[track_caller]
    pub fn error(&self, args: &[Arg<'_>]) {
        self.emit(LogLevel::Error, None, args, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn debug_ctx(&self, ctx: Option<&RequestContext>, args: &[Arg<'_>]) {
        self.gate_and_emit(LogLevel::Debug, ctx, args, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn info_ctx(&self, ctx: Option<&RequestContext>, args: &[Arg<'_>]) {
        self.gate_and_emit(LogLevel::Info, ctx, args, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn warn_ctx(&self, ctx: Option<&RequestContext>, args: &[Arg<'_>]) {
        self.gate_and_emit(LogLevel::Warn, ctx, args, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn error_ctx(&self, ctx: Option<&RequestContext>, args: &[Arg<'_>]) {
        self.emit(LogLevel::Error, ctx, args, Location::caller());
    }

    /// Log at Debug and hand `ctx` back, for inline chaining.
    #[inline]
    #[track_caller]
    pub fn debug_return_ctx<'c>(
        &self,
        ctx: Option<&'c RequestContext>,
        args: &[Arg<'_>],
    ) -> Option<&'c RequestContext> {
        self.gate_and_emit(LogLevel::Debug, ctx, args, Location::caller());
        ctx
    }

    /// Log at Info and hand `ctx` back, for inline chaining.
    ///
    /// ```
    /// # use chunked_logger::{Arg, Logger, MemoryWriter, RequestContext};
    /// # let logger = Logger::builder().output(MemoryWriter::new().shared()).build();
    /// let ctx = RequestContext::new().with_trace_id("req-7");
    /// let same = logger.info_return_ctx(Some(&ctx), &[Arg::from("accepted")]);
    /// assert!(std::ptr::eq(same.unwrap(), &ctx));
    /// ```
    #[inline]
    #[track_caller]
    pub fn info_return_ctx<'c>(
        &self,
        ctx: Option<&'c RequestContext>,
        args: &[Arg<'_>],
    ) -> Option<&'c RequestContext> {
        self.gate_and_emit(LogLevel::Info, ctx, args, Location::caller());
        ctx
    }

    /// Log at Warn and hand `ctx` back, for inline chaining.
    #[inline]
    #[track_caller]
    pub fn warn_return_ctx<'c>(
        &self,
        ctx: Option<&'c RequestContext>,
        args: &[Arg<'_>],
    ) -> Option<&'c RequestContext> {
        self.gate_and_emit(LogLevel::Warn, ctx, args, Location::caller());
        ctx
    }

    /// Current time when Debug is enabled, the Unix epoch otherwise.
    ///
    /// Pairs with [`Logger::elapsed_since`] for latency measurements that
    /// cost nothing when debug logging is off.
    pub fn now(&self) -> DateTime<Utc> {
        debug_now(self.config.min_level)
    }

    /// Time since `start` when Debug is enabled, zero otherwise.
    pub fn elapsed_since(&self, start: DateTime<Utc>) -> Duration {
        debug_elapsed(self.config.min_level, start)
    }

    pub fn flush(&self) -> Result<()> {
        self.config.out.flush()?;
        self.config.err.flush()?;
        Ok(())
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("emitter", &self.emitter)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Options apply in call order; a later call overrides an earlier one. The
/// `LOG_LEVEL` environment variable is consulted once, in
/// [`LoggerBuilder::build`], and wins over any configured level.
///
/// # Example
/// ```
/// use chunked_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .module_name("payments")
///     .min_level(LogLevel::Debug)
///     .max_chunk_length(1024)
///     .environment("prod")
///     .env_lookup(|_| None)
///     .build();
///
/// assert_eq!(logger.config().max_chunk_length(), 1024);
/// ```
pub struct LoggerBuilder {
    module_name: String,
    min_level: LogLevel,
    max_chunk_length: usize,
    out: Option<SharedWriter>,
    err: Option<SharedWriter>,
    environment: String,
    env_lookup: EnvLookup,
    locator: Arc<dyn CallerLocator>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            min_level: LogLevel::Info,
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
            out: None,
            err: None,
            environment: String::new(),
            env_lookup: Box::new(|key: &str| std::env::var(key).ok()),
            locator: Arc::new(TrackedCaller),
        }
    }

    /// Set the module name; an empty name selects the default.
    #[must_use = "builder methods return a new value"]
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = normalize_module_name(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the minimum level by name; unrecognized names select Info.
    #[must_use = "builder methods return a new value"]
    pub fn min_level_str(mut self, level: &str) -> Self {
        self.min_level = LogLevel::parse_or_default(level);
        self
    }

    /// Set the maximum chunk length in bytes; zero or negative selects 3000.
    #[must_use = "builder methods return a new value"]
    pub fn max_chunk_length(mut self, length: i64) -> Self {
        self.max_chunk_length = normalize_max_chunk_length(length);
        self
    }

    /// Label appended to every line as `[env:<label>]`.
    #[must_use = "builder methods return a new value"]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Output for emitted lines (default: stdout).
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, out: SharedWriter) -> Self {
        self.out = Some(out);
        self
    }

    /// Output reserved for error-equivalent severities (default: stderr).
    #[must_use = "builder methods return a new value"]
    pub fn error_output(mut self, err: SharedWriter) -> Self {
        self.err = Some(err);
        self
    }

    /// Replace the environment lookup used for the `LOG_LEVEL` override.
    ///
    /// The default reads the process environment.
    #[must_use = "builder methods return a new value"]
    pub fn env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String> + 'static,
    {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Replace how call sites are attributed on each line.
    #[must_use = "builder methods return a new value"]
    pub fn caller_locator<L: CallerLocator + 'static>(mut self, locator: L) -> Self {
        self.locator = Arc::new(locator);
        self
    }

    /// Apply file-loaded settings; absent fields are left as they are.
    #[must_use = "builder methods return a new value"]
    pub fn settings(mut self, settings: LoggerSettings) -> Self {
        if let Some(name) = settings.module_name {
            self = self.module_name(name);
        }
        if let Some(level) = settings.min_level {
            self = self.min_level_str(&level);
        }
        if let Some(length) = settings.max_chunk_length {
            self = self.max_chunk_length(length);
        }
        if let Some(environment) = settings.environment {
            self = self.environment(environment);
        }
        self
    }

    /// Build the Logger
    ///
    /// A module name the line formatter rejects is not reported here; the
    /// first emitted line panics instead. Use [`LoggerBuilder::try_build`] to
    /// catch it up front.
    pub fn build(self) -> Logger {
        let min_level = resolve_min_level(self.min_level, self.env_lookup);

        Logger {
            config: LoggerConfig {
                module_name: self.module_name,
                min_level,
                max_chunk_length: self.max_chunk_length,
                out: self.out.unwrap_or_else(console::stdout),
                err: self.err.unwrap_or_else(console::stderr),
                environment: self.environment,
            },
            emitter: Emitter::new(self.locator, Arc::new(LoggerMetrics::new())),
        }
    }

    /// Build the Logger, validating the module name first
    pub fn try_build(self) -> Result<Logger> {
        validate_module_name(&self.module_name)?;
        Ok(self.build())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
