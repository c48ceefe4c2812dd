use std::collections::{HashMap, HashSet};

use bugdialog_core::{EnvironmentSnapshot, ReportConfig};
use bugdialog_dialog::{DialogError, UrlOpener, WidgetHost, WidgetRole};

/// Widget host that records every binding for later assertions.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub values: HashMap<WidgetRole, String>,
    pub hidden: HashSet<WidgetRole>,
}

impl RecordingHost {
    pub fn value(&self, role: WidgetRole) -> Option<&str> {
        self.values.get(&role).map(String::as_str)
    }

    pub fn is_hidden(&self, role: WidgetRole) -> bool {
        self.hidden.contains(&role)
    }
}

impl WidgetHost for RecordingHost {
    fn set_value(&mut self, role: WidgetRole, value: &str) {
        self.values.insert(role, value.to_string());
    }

    fn hide(&mut self, role: WidgetRole) {
        self.hidden.insert(role);
    }
}

/// URL opener that keeps every URL it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), DialogError> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// URL opener that always fails.
#[derive(Debug, Default)]
pub struct FailingOpener;

impl UrlOpener for FailingOpener {
    fn open(&mut self, _url: &str) -> Result<(), DialogError> {
        Err(DialogError::Rejected("no browser".to_string()))
    }
}

/// Reporting configuration with reporting switched on.
pub fn enabled_config() -> ReportConfig {
    ReportConfig {
        issue_enabled: true,
        title: "Bug".to_string(),
        message_template: "An error occurred in %VERSION%".to_string(),
        version: "2.0".to_string(),
        submit_url_template: "https://x/new?title=%TITLE%&body=%BODY%".to_string(),
    }
}

pub fn disabled_config() -> ReportConfig {
    ReportConfig {
        issue_enabled: false,
        ..enabled_config()
    }
}

pub fn test_env() -> EnvironmentSnapshot {
    EnvironmentSnapshot {
        user_agent: "test-agent/1.0".to_string(),
        platform: "linux-x86_64".to_string(),
        language: "en_US".to_string(),
        app_version: "2.0".to_string(),
    }
}

/// Percent-decode the `body` query component of a composed URL.
pub fn decoded_body(url: &str) -> String {
    let encoded = url.split("&body=").nth(1).unwrap_or_default();
    percent_encoding::percent_decode_str(encoded)
        .decode_utf8()
        .expect("body should be valid UTF-8")
        .into_owned()
}
