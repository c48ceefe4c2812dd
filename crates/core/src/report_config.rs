//! Bug-reporting configuration read from the host settings store.
//!
//! The host keeps settings as a nested JSON tree; the keys consumed here are
//! dotted paths into that tree (`BugReporting.options.title` and friends).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Configuration keys
// ---------------------------------------------------------------------------

pub const KEY_ISSUE_ENABLED: &str = "BugReporting.options.issue";
pub const KEY_TITLE: &str = "BugReporting.options.title";
pub const KEY_MESSAGE: &str = "BugReporting.options.message";
pub const KEY_VERSION: &str = "Version";
pub const KEY_URL: &str = "BugReporting.url";

/// Placeholder in the message template replaced by the application version.
pub const VERSION_PLACEHOLDER: &str = "%VERSION%";
/// Placeholder in the submit URL replaced by the encoded title.
pub const TITLE_PLACEHOLDER: &str = "%TITLE%";
/// Placeholder in the submit URL replaced by the encoded body.
pub const BODY_PLACEHOLDER: &str = "%BODY%";

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

/// Read-only bug-reporting settings injected into the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Host policy gate: when `false` no report action is offered.
    pub issue_enabled: bool,
    /// Title of the pre-filled issue.
    pub title: String,
    /// Header line of the report body; contains `%VERSION%`.
    pub message_template: String,
    /// Application version substituted into `message_template`.
    pub version: String,
    /// Submission URL; contains `%TITLE%` and `%BODY%`.
    pub submit_url_template: String,
}

impl ReportConfig {
    /// Load the bug-reporting keys from a nested settings tree.
    ///
    /// A missing `BugReporting.options.issue` reads as disabled. Every other
    /// key is required once the section is present.
    pub fn from_settings(settings: &Value) -> Result<Self, CoreError> {
        let issue_enabled = match lookup(settings, KEY_ISSUE_ENABLED) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                return Err(CoreError::InvalidKey {
                    key: KEY_ISSUE_ENABLED,
                    expected: "boolean",
                })
            }
        };

        Ok(Self {
            issue_enabled,
            title: required_string(settings, KEY_TITLE)?,
            message_template: required_string(settings, KEY_MESSAGE)?,
            version: required_string(settings, KEY_VERSION)?,
            submit_url_template: required_string(settings, KEY_URL)?,
        })
    }

    /// Parse a settings document and load the bug-reporting keys from it.
    pub fn from_settings_str(document: &str) -> Result<Self, CoreError> {
        let settings: Value = serde_json::from_str(document)?;
        Self::from_settings(&settings)
    }
}

/// Resolve a dotted key path in a nested settings tree.
pub fn lookup<'a>(settings: &'a Value, dotted_key: &str) -> Option<&'a Value> {
    dotted_key
        .split('.')
        .try_fold(settings, |node, segment| node.as_object()?.get(segment))
}

fn required_string(settings: &Value, key: &'static str) -> Result<String, CoreError> {
    match lookup(settings, key) {
        None | Some(Value::Null) => Err(CoreError::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CoreError::InvalidKey {
            key,
            expected: "string",
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
