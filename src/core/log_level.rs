//! Log level definitions and severity gating

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Whether a message at `requested` passes a logger configured at `configured`.
    ///
    /// Error is never suppressed, whatever the threshold.
    #[inline]
    pub fn allows(configured: LogLevel, requested: LogLevel) -> bool {
        requested == LogLevel::Error || requested >= configured
    }

    /// Parse a level name, falling back to [`LogLevel::Info`] for anything unrecognized.
    ///
    /// ```
    /// use chunked_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse_or_default("warn"), LogLevel::Warn);
    /// assert_eq!(LogLevel::parse_or_default("bogus"), LogLevel::Info);
    /// ```
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
