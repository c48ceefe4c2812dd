//! Construction arguments for the error dialog.

use serde::{Deserialize, Serialize};

use crate::exception::ErrorInput;

/// Arguments a host passes when opening an error dialog.
///
/// Every field is optional. The record is owned by a single dialog
/// instance and never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogArgs {
    /// Window title; the host falls back to a localized default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// User-facing description of what went wrong.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Short human summary of the error, shown verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw error record used to build the detailed trace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<ErrorInput>,
    /// Whether the caller wants a "report bug" action offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugreport: Option<bool>,
}

impl DialogArgs {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    pub fn wants_bug_report(&self) -> bool {
        self.bugreport.unwrap_or(false)
    }
}
