//! Request-scoped context and trace-id resolution
//!
//! This module provides:
//! - `FieldValue`: Value stored under a context key
//! - `RequestContext`: Immutable, cheaply cloned key-value carrier for a request
//! - `resolve_trace_id`: Reads the correlation id the logger stamps on each line

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Well-known key under which the trace id is stored.
pub const TRACE_ID_KEY: &str = "tracerId";

/// Value type for context fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// The value as text, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Context carried alongside a request
///
/// Values are never mutated in place: [`RequestContext::with_value`] returns a
/// new context and leaves the original untouched, so a context can be shared
/// freely between threads and handed to the logger by reference.
///
/// # Example
///
/// ```
/// use chunked_logger::core::request_context::{resolve_trace_id, RequestContext};
///
/// let ctx = RequestContext::new().with_trace_id("abc-123");
/// assert_eq!(resolve_trace_id(Some(&ctx)), "abc-123");
/// assert_eq!(resolve_trace_id(None), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    fields: Arc<HashMap<String, FieldValue>>,
}

impl RequestContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context that additionally holds `key = value`
    #[must_use]
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut fields = (*self.fields).clone();
        fields.insert(key.into(), value.into());
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Derive a context carrying `trace_id` under [`TRACE_ID_KEY`]
    #[must_use]
    pub fn with_trace_id(&self, trace_id: impl Into<String>) -> Self {
        self.with_value(TRACE_ID_KEY, FieldValue::String(trace_id.into()))
    }

    /// Look up a single value
    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Resolve the trace id for a log line.
///
/// Absent context, absent key, or a non-string value all resolve to `""`.
pub fn resolve_trace_id(ctx: Option<&RequestContext>) -> &str {
    ctx.and_then(|ctx| ctx.value(TRACE_ID_KEY))
        .and_then(FieldValue::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = RequestContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.len(), 0);
    }

    #[test]
    fn test_with_value_leaves_parent_untouched() {
        let parent = RequestContext::new().with_value("user_id", 123);
        let child = parent.with_value("region", "eu-west-1");

        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.value("user_id"), Some(&FieldValue::Int(123)));
    }

    #[test]
    fn test_resolve_trace_id_present() {
        let ctx = RequestContext::new().with_trace_id("abc-123");
        assert_eq!(resolve_trace_id(Some(&ctx)), "abc-123");
    }

    #[test]
    fn test_resolve_trace_id_absent() {
        assert_eq!(resolve_trace_id(None), "");
        let ctx = RequestContext::new().with_value("other", "value");
        assert_eq!(resolve_trace_id(Some(&ctx)), "");
    }

    #[test]
    fn test_resolve_trace_id_wrong_type() {
        let ctx = RequestContext::new().with_value(TRACE_ID_KEY, 42);
        assert_eq!(resolve_trace_id(Some(&ctx)), "");

        let ctx = RequestContext::new().with_value(TRACE_ID_KEY, FieldValue::Null);
        assert_eq!(resolve_trace_id(Some(&ctx)), "");
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("x").to_string(), "x");
        assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }
}
