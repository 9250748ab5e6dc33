//! Logger configuration
//!
//! [`LoggerConfig`] is the resolved, immutable configuration a [`Logger`]
//! runs with. [`LoggerSettings`] is the serializable subset that can be
//! loaded from a configuration file and applied to a builder.
//!
//! [`Logger`]: crate::Logger

use super::chunk::DEFAULT_MAX_CHUNK_LENGTH;
use super::log_level::LogLevel;
use crate::output::SharedWriter;
use serde::{Deserialize, Serialize};

/// Module name used when none (or an empty one) is configured.
pub const DEFAULT_MODULE_NAME: &str = "Logger";

/// Environment variable that overrides the configured minimum level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Map a configured chunk length to an effective one; non-positive means default.
pub fn normalize_max_chunk_length(length: i64) -> usize {
    if length <= 0 {
        DEFAULT_MAX_CHUNK_LENGTH
    } else {
        usize::try_from(length).unwrap_or(DEFAULT_MAX_CHUNK_LENGTH)
    }
}

/// Map a configured module name to an effective one; empty means default.
pub fn normalize_module_name(name: String) -> String {
    if name.is_empty() {
        DEFAULT_MODULE_NAME.to_string()
    } else {
        name
    }
}

/// Apply the `LOG_LEVEL` override, if the lookup yields a non-empty value.
///
/// Unrecognized values select [`LogLevel::Info`].
pub fn resolve_min_level<F>(configured: LogLevel, lookup: F) -> LogLevel
where
    F: FnOnce(&str) -> Option<String>,
{
    match lookup(LOG_LEVEL_ENV) {
        Some(value) if !value.is_empty() => LogLevel::parse_or_default(&value),
        _ => configured,
    }
}

/// Resolved configuration of one logger
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub(crate) module_name: String,
    pub(crate) min_level: LogLevel,
    pub(crate) max_chunk_length: usize,
    pub(crate) out: SharedWriter,
    pub(crate) err: SharedWriter,
    pub(crate) environment: String,
}

impl LoggerConfig {
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn max_chunk_length(&self) -> usize {
        self.max_chunk_length
    }

    /// Output for all emitted lines
    pub fn output(&self) -> &SharedWriter {
        &self.out
    }

    /// Output reserved for error-equivalent severities
    ///
    /// Configurable for callers that route their own error reporting through
    /// the logger's outputs; emitted lines always go to [`LoggerConfig::output`].
    pub fn error_output(&self) -> &SharedWriter {
        &self.err
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

/// File-loadable logger settings
///
/// Every field is optional; absent fields leave the builder untouched.
///
/// # Example
///
/// ```
/// use chunked_logger::{LogLevel, Logger, LoggerSettings};
///
/// let settings = LoggerSettings {
///     module_name: Some("billing".to_string()),
///     min_level: Some("warn".to_string()),
///     ..LoggerSettings::default()
/// };
///
/// let logger = Logger::builder()
///     .env_lookup(|_| None)
///     .settings(settings)
///     .build();
/// assert_eq!(logger.config().min_level(), LogLevel::Warn);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    pub module_name: Option<String>,
    /// Level name, parsed leniently (unrecognized names mean Info)
    pub min_level: Option<String>,
    pub max_chunk_length: Option<i64>,
    pub environment: Option<String>,
}
