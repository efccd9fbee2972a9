//! Tool-use event model.
//!
//! The hosting framework hands us a schema-less JSON object on stdin. This
//! module projects it into a typed [`LogRecord`]; it is the one place where
//! untyped external data enters the pipeline.

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::HookError;

/// One tool-use notification as received from the framework.
///
/// Kept as a raw key-value mapping so that absent keys can be distinguished
/// from keys that are present with a `null` value.
#[derive(Debug, Clone)]
pub struct ToolUseEvent {
    fields: Map<String, Value>,
}

impl ToolUseEvent {
    /// Parse a raw JSON payload. Anything other than a JSON object is
    /// rejected.
    pub fn from_json(raw: &str) -> Result<Self, HookError> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(HookError::InvalidEvent(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Field value, or `default` when the key is absent. A key present with
    /// `null` is returned verbatim, not defaulted.
    fn field_or(&self, key: &str, default: Value) -> Value {
        self.fields.get(key).cloned().unwrap_or(default)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One timestamped log line.
///
/// Constructed once, serialized once, appended once. Serializes to exactly
/// four fields in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// Capture time, local clock. Never taken from the event.
    pub timestamp: DateTime<Local>,

    /// Name of the invoked tool; `"unknown"` when the event omits it.
    pub tool_name: Value,

    /// Invocation parameters of the tool; `{}` when the event omits them.
    pub tool_input: Value,

    /// Identifier of the invoking session; `""` when the event omits it.
    pub session_id: Value,
}

impl LogRecord {
    /// Project an event into a record, substituting defaults for absent keys.
    pub fn from_event(event: &ToolUseEvent) -> Self {
        Self {
            timestamp: Local::now(),
            tool_name: event.field_or("tool_name", Value::String("unknown".to_string())),
            tool_input: event.field_or("tool_input", Value::Object(Map::new())),
            session_id: event.field_or("session_id", Value::String(String::new())),
        }
    }

    /// Serialize to the single-line form written to the log file. The
    /// trailing newline is added by the storage backend.
    pub fn to_json_line(&self) -> Result<String, HookError> {
        Ok(serde_json::to_string(self)?)
    }
}
