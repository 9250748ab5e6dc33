//! Core logger types and the emission pipeline

pub mod caller;
pub mod chunk;
pub mod config;
pub mod emitter;
pub mod error;
pub mod line_format;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod render;
pub mod request_context;
pub mod timestamp;

pub use caller::{CallSite, CallerLocator, FixedCaller, TrackedCaller};
pub use chunk::{split_chunks, RenderedChunk, DEFAULT_MAX_CHUNK_LENGTH};
pub use config::{LoggerConfig, LoggerSettings, DEFAULT_MODULE_NAME, LOG_LEVEL_ENV};
pub use emitter::{Emission, Emitter};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use render::{render_message, Arg};
pub use request_context::{resolve_trace_id, FieldValue, RequestContext, TRACE_ID_KEY};
