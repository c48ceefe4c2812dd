//! Capabilities the hosting shell provides to the dialog.
//!
//! The dialog never talks to a UI toolkit directly. It addresses named
//! widgets through [`WidgetHost`], opens URLs through [`UrlOpener`] and
//! resolves localized strings through [`Translator`].

use std::collections::HashMap;
use std::fmt;

use crate::error::DialogError;

// ---------------------------------------------------------------------------
// Widget roles
// ---------------------------------------------------------------------------

/// Named widgets in the error dialog layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    Message,
    Summary,
    Trace,
    TraceLabel,
    ButtonBugReport,
}

impl WidgetRole {
    pub const ALL: [WidgetRole; 5] = [
        WidgetRole::Message,
        WidgetRole::Summary,
        WidgetRole::Trace,
        WidgetRole::TraceLabel,
        WidgetRole::ButtonBugReport,
    ];

    /// Widget name as it appears in the host's layout scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetRole::Message => "Message",
            WidgetRole::Summary => "Summary",
            WidgetRole::Trace => "Trace",
            WidgetRole::TraceLabel => "TraceLabel",
            WidgetRole::ButtonBugReport => "ButtonBugReport",
        }
    }
}

impl fmt::Display for WidgetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Generic widget binding: set a widget's value or hide it.
pub trait WidgetHost {
    fn set_value(&mut self, role: WidgetRole, value: &str);
    fn hide(&mut self, role: WidgetRole);
}

/// Opens a URL in a new browsing context. Fire-and-forget.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> Result<(), DialogError>;
}

/// Localization lookup.
pub trait Translator {
    /// Resolve `key`, returning the key itself when no translation exists.
    fn translate(&self, key: &str) -> String;
}

/// Translator that returns every key untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl Translator for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}
