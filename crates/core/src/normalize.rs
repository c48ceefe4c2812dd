//! Error normalization: heterogeneous error records to display text.
//!
//! A native stack trace always wins. Without one, a trace is rebuilt from
//! whatever diagnostic fields the record carries. An absent or empty record
//! yields an empty trace, which is the signal hosts use to hide trace UI.

use serde::Serialize;

use crate::args::DialogArgs;
use crate::exception::{
    ErrorInput, FIELD_EXT_MESSAGE, FIELD_FILE_NAME, FIELD_LINE_NUMBER, FIELD_MESSAGE, FIELD_NAME,
};

/// Placeholder for a missing source file name.
pub const UNKNOWN_FILE_NAME: &str = "<unknown>";

/// Rendered in place of a missing line number or message.
pub const UNDEFINED_TEXT: &str = "undefined";

/// Display-ready form of an error, computed once per dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedError {
    /// Caller-provided summary, independent of the exception record.
    pub summary: String,
    /// Detailed trace; empty when no structured detail exists.
    pub trace: String,
}

impl NormalizedError {
    pub fn has_trace(&self) -> bool {
        !self.trace.is_empty()
    }
}

/// Normalize dialog arguments into a summary and a trace.
pub fn normalize(args: &DialogArgs) -> NormalizedError {
    let trace = trace_text(args.exception.as_ref());

    tracing::debug!(
        has_exception = args.exception.is_some(),
        trace_len = trace.len(),
        "Normalized dialog error",
    );

    NormalizedError {
        summary: args.error().to_string(),
        trace,
    }
}

/// Build the trace text for an optional error record.
pub fn trace_text(exception: Option<&ErrorInput>) -> String {
    let Some(exception) = exception else {
        return String::new();
    };

    if let Some(stack) = exception.stack() {
        return stack;
    }

    if exception.is_empty() {
        return String::new();
    }

    rebuild_trace(exception)
}

/// Reconstruct a multi-line trace from individual diagnostic fields.
///
/// `Line:` and `Message:` render `undefined` when the field is absent.
fn rebuild_trace(exception: &ErrorInput) -> String {
    let name = exception
        .field(FIELD_NAME)
        .filter(|v| !v.is_null())
        .map(crate::exception::display_text)
        .unwrap_or_default();
    let file_name = exception
        .truthy_text(FIELD_FILE_NAME)
        .unwrap_or_else(|| UNKNOWN_FILE_NAME.to_string());
    let line = exception
        .text(FIELD_LINE_NUMBER)
        .unwrap_or_else(|| UNDEFINED_TEXT.to_string());
    let message = exception
        .text(FIELD_MESSAGE)
        .unwrap_or_else(|| UNDEFINED_TEXT.to_string());

    let mut lines = vec![
        name,
        format!("Filename: {file_name}"),
        format!("Line: {line}"),
        format!("Message: {message}"),
    ];

    if let Some(ext) = exception.truthy_text(FIELD_EXT_MESSAGE) {
        lines.push(ext);
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
