use std::path::PathBuf;

use bugdialog_core::ReportConfig;

/// Errors raised while reading CLI configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a boolean (got '{value}')")]
    InvalidBool { var: &'static str, value: String },
}

/// CLI configuration loaded from environment variables.
///
/// Everything is optional. Without a settings file no bug report is
/// offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON settings document holding the `BugReporting` section.
    pub settings_path: Option<PathBuf>,
    /// Overrides `BugReporting.options.issue` from the settings file.
    pub issue_enabled: Option<bool>,
    /// Program used to open report URLs; the URL is printed when unset.
    pub open_command: Option<String>,
    /// Language reported in the environment snapshot.
    pub language: Option<String>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default                          |
    /// |---------------------------|----------------------------------|
    /// | `BUGDIALOG_SETTINGS`      | unset (no report offered)        |
    /// | `BUGDIALOG_ISSUE_ENABLED` | value from the settings file     |
    /// | `BUGDIALOG_OPEN_COMMAND`  | unset (print the URL)            |
    /// | `BUGDIALOG_LANGUAGE`      | `LC_ALL` / `LANG`, else `en_EN`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let issue_enabled = match non_empty("BUGDIALOG_ISSUE_ENABLED") {
            Some(value) => Some(parse_bool("BUGDIALOG_ISSUE_ENABLED", &value)?),
            None => None,
        };

        Ok(Self {
            settings_path: non_empty("BUGDIALOG_SETTINGS").map(PathBuf::from),
            issue_enabled,
            open_command: non_empty("BUGDIALOG_OPEN_COMMAND"),
            language: non_empty("BUGDIALOG_LANGUAGE"),
        })
    }

    /// Read the reporting settings, if any.
    ///
    /// Unreadable or malformed settings are logged and treated as absent so
    /// the dialog still opens, just without a report action.
    pub fn load_report_config(&self) -> Option<ReportConfig> {
        let path = self.settings_path.as_ref()?;

        let document = match std::fs::read_to_string(path) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read settings file");
                return None;
            }
        };

        let mut config = match ReportConfig::from_settings_str(&document) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid bug reporting settings");
                return None;
            }
        };

        if let Some(enabled) = self.issue_enabled {
            config.issue_enabled = enabled;
        }

        tracing::info!(
            path = %path.display(),
            issue_enabled = config.issue_enabled,
            "Loaded bug reporting settings",
        );
        Some(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.load_report_config(), None);
    }

    #[test]
    fn reads_all_variables() {
        let config = CliConfig::from_lookup(lookup(&[
            ("BUGDIALOG_SETTINGS", "/etc/shell/settings.json"),
            ("BUGDIALOG_ISSUE_ENABLED", "yes"),
            ("BUGDIALOG_OPEN_COMMAND", "xdg-open"),
            ("BUGDIALOG_LANGUAGE", "nb_NO"),
        ]))
        .unwrap();

        assert_eq!(
            config.settings_path,
            Some(PathBuf::from("/etc/shell/settings.json"))
        );
        assert_eq!(config.issue_enabled, Some(true));
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.language.as_deref(), Some("nb_NO"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = CliConfig::from_lookup(lookup(&[("BUGDIALOG_OPEN_COMMAND", "  ")])).unwrap();
        assert_eq!(config.open_command, None);
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let result = CliConfig::from_lookup(lookup(&[("BUGDIALOG_ISSUE_ENABLED", "maybe")]));
        assert_matches!(
            result,
            Err(ConfigError::InvalidBool {
                var: "BUGDIALOG_ISSUE_ENABLED",
                ..
            })
        );
    }

    #[test]
    fn missing_settings_file_offers_no_report() {
        let config = CliConfig {
            settings_path: Some(PathBuf::from("/nonexistent/bugdialog/settings.json")),
            ..Default::default()
        };
        assert_eq!(config.load_report_config(), None);
    }
}
