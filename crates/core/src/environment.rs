//! Live execution-environment descriptors attached to bug reports.

use serde::{Deserialize, Serialize};

/// Language reported when neither an override nor a locale variable is set.
pub const DEFAULT_LANGUAGE: &str = "en_EN";

/// Environment descriptors, serialized into the report body as compact JSON.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    pub user_agent: String,
    pub platform: String,
    pub language: String,
    pub app_version: String,
}

/// Source of environment snapshots, read on every report action.
pub trait EnvironmentProbe {
    fn snapshot(&self) -> EnvironmentSnapshot;
}

/// A fixed snapshot acts as its own probe.
impl EnvironmentProbe for EnvironmentSnapshot {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.clone()
    }
}

/// Probe reading descriptors from the running process.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    app_name: String,
    app_version: String,
    language: Option<String>,
}

impl SystemEnvironment {
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            language: None,
        }
    }

    /// Report `language` instead of reading locale variables.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn current_language(&self) -> String {
        if let Some(language) = &self.language {
            return language.clone();
        }
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|value| strip_encoding(&value).to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }
}

impl EnvironmentProbe for SystemEnvironment {
    fn snapshot(&self) -> EnvironmentSnapshot {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;
        EnvironmentSnapshot {
            user_agent: format!("{}/{} ({os}; {arch})", self.app_name, self.app_version),
            platform: format!("{os}-{arch}"),
            language: self.current_language(),
            app_version: self.app_version.clone(),
        }
    }
}

/// `en_US.UTF-8` -> `en_US`.
fn strip_encoding(locale: &str) -> &str {
    locale.split('.').next().unwrap_or(locale)
}
