//! Field value types and the JSON value encoder extension point

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A polymorphic field value read off an entity during projection
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Bytes(Vec<u8>),
    Null,
}

impl FieldValue {
    /// Get the kind discriminant for this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::DateTime(_) => FieldKind::DateTime,
            FieldValue::Bytes(_) => FieldKind::Bytes,
            FieldValue::Null => FieldKind::Null,
        }
    }

    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FieldValue::DateTime(dt)
    }
}

/// Kind discriminant of [`FieldValue`], used as the encoder table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    Bytes,
    Null,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "datetime",
            FieldKind::Bytes => "bytes",
            FieldKind::Null => "null",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised when a field value cannot be converted to JSON
///
/// An encoding failure means a field of an unhandled kind was listed
/// in the resource's serialized fields. It is a configuration defect,
/// not a per-request recoverable condition.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// No handler is registered for this value kind
    Unsupported { kind: FieldKind },

    /// A registered handler rejected the value
    HandlerFailed { kind: FieldKind, message: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Unsupported { kind } => {
                write!(f, "no JSON encoding registered for {} values", kind)
            }
            EncodeError::HandlerFailed { kind, message } => {
                write!(f, "failed to encode {} value: {}", kind, message)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Extension point mapping field values to JSON-safe representations
pub trait ValueEncoder: Send + Sync {
    fn encode(&self, value: &FieldValue) -> Result<Value, EncodeError>;
}

/// Handler function registered for one value kind
pub type EncodeFn = Arc<dyn Fn(&FieldValue) -> Result<Value, EncodeError> + Send + Sync>;

/// Table-based encoder keyed by [`FieldKind`]
///
/// JSON-native kinds (string, integer, float, boolean, null) encode
/// directly. Non-native kinds go through the handler table; the
/// default table maps `DateTime` to an ISO 8601 string and leaves
/// `Bytes` unregistered, so projecting a bytes field fails loudly
/// unless a handler is registered for it.
pub struct JsonValueEncoder {
    handlers: HashMap<FieldKind, EncodeFn>,
}

impl JsonValueEncoder {
    pub fn new() -> Self {
        let mut encoder = Self {
            handlers: HashMap::new(),
        };
        encoder.register(FieldKind::DateTime, |value| match value {
            FieldValue::DateTime(dt) => {
                Ok(Value::String(dt.to_rfc3339_opts(SecondsFormat::Secs, true)))
            }
            other => Err(EncodeError::HandlerFailed {
                kind: other.kind(),
                message: "datetime handler received a non-datetime value".to_string(),
            }),
        });
        encoder
    }

    /// Register (or replace) the handler for a value kind
    pub fn register<F>(&mut self, kind: FieldKind, handler: F)
    where
        F: Fn(&FieldValue) -> Result<Value, EncodeError> + Send + Sync + 'static,
    {
        self.handlers.insert(kind, Arc::new(handler));
    }
}

impl Default for JsonValueEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueEncoder for JsonValueEncoder {
    fn encode(&self, value: &FieldValue) -> Result<Value, EncodeError> {
        match value {
            FieldValue::String(s) => Ok(Value::String(s.clone())),
            FieldValue::Integer(i) => Ok(Value::from(*i)),
            FieldValue::Float(f) => Ok(Value::from(*f)),
            FieldValue::Boolean(b) => Ok(Value::Bool(*b)),
            FieldValue::Null => Ok(Value::Null),
            other => match self.handlers.get(&other.kind()) {
                Some(handler) => handler(other),
                None => Err(EncodeError::Unsupported { kind: other.kind() }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_field_value_kinds() {
        assert_eq!(FieldValue::String("a".to_string()).kind(), FieldKind::String);
        assert_eq!(FieldValue::Integer(1).kind(), FieldKind::Integer);
        assert_eq!(FieldValue::Bytes(vec![0]).kind(), FieldKind::Bytes);
        assert_eq!(FieldValue::Null.kind(), FieldKind::Null);
    }

    #[test]
    fn test_field_value_accessors() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());

        assert_eq!(FieldValue::Integer(42).as_integer(), Some(42));
        assert!(FieldValue::Null.is_null());
    }

    #[test]
    fn test_native_kinds_encode_directly() {
        let encoder = JsonValueEncoder::new();

        assert_eq!(
            encoder.encode(&FieldValue::String("x".to_string())).unwrap(),
            Value::String("x".to_string())
        );
        assert_eq!(encoder.encode(&FieldValue::Integer(7)).unwrap(), Value::from(7));
        assert_eq!(
            encoder.encode(&FieldValue::Boolean(true)).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(encoder.encode(&FieldValue::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_datetime_encodes_as_iso8601() {
        let encoder = JsonValueEncoder::new();
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        let encoded = encoder.encode(&FieldValue::DateTime(dt)).unwrap();
        assert_eq!(encoded, Value::String("2024-03-01T12:30:00Z".to_string()));
    }

    #[test]
    fn test_unregistered_kind_fails() {
        let encoder = JsonValueEncoder::new();

        let err = encoder.encode(&FieldValue::Bytes(vec![1, 2, 3])).unwrap_err();
        assert_eq!(err, EncodeError::Unsupported { kind: FieldKind::Bytes });
    }

    #[test]
    fn test_registered_handler_takes_over() {
        let mut encoder = JsonValueEncoder::new();
        encoder.register(FieldKind::Bytes, |value| match value {
            FieldValue::Bytes(bytes) => Ok(Value::from(bytes.len())),
            other => Err(EncodeError::Unsupported { kind: other.kind() }),
        });

        let encoded = encoder.encode(&FieldValue::Bytes(vec![1, 2, 3])).unwrap();
        assert_eq!(encoded, Value::from(3usize));
    }
}
