//! Untrusted error payloads handed to the dialog by its callers.
//!
//! An [`ErrorInput`] is a loose key/value record. Callers may supply any
//! subset of the well-known fields (or none at all), and values are not
//! guaranteed to have the expected JSON type. Accessors therefore coerce
//! rather than fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_STACK: &str = "stack";
pub const FIELD_NAME: &str = "name";
pub const FIELD_FILE_NAME: &str = "fileName";
pub const FIELD_LINE_NUMBER: &str = "lineNumber";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_EXT_MESSAGE: &str = "extMessage";

// ---------------------------------------------------------------------------
// ErrorInput
// ---------------------------------------------------------------------------

/// A heterogeneous error record (structured exception or plain object).
///
/// Deserializes from any JSON value: objects keep their fields, `null`
/// becomes an empty record, and any other scalar is kept as the `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct ErrorInput(Map<String, Value>);

impl ErrorInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a Rust error and its `source()` chain.
    ///
    /// `name` labels the error kind (Rust errors carry no runtime type
    /// name). Each source in the chain becomes a `Caused by:` line in
    /// `extMessage`.
    pub fn from_error(name: &str, err: &(dyn std::error::Error + 'static)) -> Self {
        let mut input = Self::new()
            .with_name(name)
            .with_message(err.to_string());

        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("Caused by: {cause}"));
            source = cause.source();
        }
        if !causes.is_empty() {
            input = input.with_ext_message(causes.join("\n"));
        }
        input
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn with_stack(self, stack: impl Into<String>) -> Self {
        self.with_field(FIELD_STACK, stack.into())
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_field(FIELD_NAME, name.into())
    }

    pub fn with_file_name(self, file_name: impl Into<String>) -> Self {
        self.with_field(FIELD_FILE_NAME, file_name.into())
    }

    pub fn with_line_number(self, line: u64) -> Self {
        self.with_field(FIELD_LINE_NUMBER, line)
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_field(FIELD_MESSAGE, message.into())
    }

    pub fn with_ext_message(self, ext_message: impl Into<String>) -> Self {
        self.with_field(FIELD_EXT_MESSAGE, ext_message.into())
    }

    /// `true` when the record carries no own fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Raw value of `key`, if the caller supplied one.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Display text of `key`, or `None` when the field is absent.
    pub fn text(&self, key: &str) -> Option<String> {
        self.field(key).map(display_text)
    }

    /// Display text of `key` only when the value is truthy (present,
    /// non-null, non-empty, non-zero, non-false).
    pub fn truthy_text(&self, key: &str) -> Option<String> {
        self.field(key).filter(|v| is_truthy(v)).map(display_text)
    }

    /// The native stack trace, when one was supplied and is non-empty.
    pub fn stack(&self) -> Option<String> {
        self.truthy_text(FIELD_STACK)
    }
}

impl From<Map<String, Value>> for ErrorInput {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for ErrorInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            Value::Null => Self::default(),
            other => Self::default().with_field(FIELD_MESSAGE, other),
        }
    }
}

impl From<ErrorInput> for Value {
    fn from(input: ErrorInput) -> Self {
        Value::Object(input.0)
    }
}

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

/// Render a JSON value the way it reads in a text field.
///
/// Strings are used as-is; everything else uses its JSON form.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
