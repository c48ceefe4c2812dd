//! The error dialog and its contract with the hosting shell.
//!
//! Construction normalizes the error once. Rendering binds the cached text
//! into host widgets. The report action composes a fresh report on every
//! click and asks the host to open it.

use std::fmt;

use bugdialog_core::report::{compose, report_offered, BugReport, ReportRequest};
use bugdialog_core::{normalize, DialogArgs, EnvironmentProbe, NormalizedError, ReportConfig};
use serde::Serialize;

use crate::host::{Translator, UrlOpener, WidgetHost, WidgetRole};
use crate::window::{WindowOptions, DEFAULT_TITLE_KEY};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Button that dismissed the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Ok,
    Close,
}

impl DialogButton {
    pub fn as_str(self) -> &'static str {
        match self {
            DialogButton::Ok => "ok",
            DialogButton::Close => "close",
        }
    }
}

/// Completion callback, invoked once when the dialog is dismissed.
pub type CloseCallback = Box<dyn FnOnce(DialogButton)>;

/// Everything a host needs to populate the dialog widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub message: Vec<String>,
    pub summary: String,
    pub trace: String,
    pub has_trace: bool,
    pub has_report: bool,
}

// ---------------------------------------------------------------------------
// ErrorDialog
// ---------------------------------------------------------------------------

pub struct ErrorDialog {
    args: DialogArgs,
    normalized: NormalizedError,
    report_config: Option<ReportConfig>,
    window: WindowOptions,
    on_close: Option<CloseCallback>,
}

impl fmt::Debug for ErrorDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorDialog")
            .field("args", &self.args)
            .field("normalized", &self.normalized)
            .field("report_config", &self.report_config)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl ErrorDialog {
    /// Build a dialog for `args`.
    ///
    /// `report_config` is `None` when the host has no bug-reporting settings;
    /// the report action is then never offered.
    pub fn new(
        args: DialogArgs,
        report_config: Option<ReportConfig>,
        translator: &dyn Translator,
    ) -> Self {
        tracing::error!(
            title = ?args.title,
            message = ?args.message,
            error = ?args.error,
            "Error dialog opened",
        );

        let normalized = normalize(&args);
        let title = args
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| translator.translate(DEFAULT_TITLE_KEY));
        let window = WindowOptions::for_error(title, normalized.has_trace());

        Self {
            args,
            normalized,
            report_config,
            window,
            on_close: None,
        }
    }

    /// Register the completion callback.
    pub fn on_close(mut self, callback: impl FnOnce(DialogButton) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn args(&self) -> &DialogArgs {
        &self.args
    }

    pub fn normalized(&self) -> &NormalizedError {
        &self.normalized
    }

    pub fn window(&self) -> &WindowOptions {
        &self.window
    }

    pub fn has_trace(&self) -> bool {
        self.normalized.has_trace()
    }

    pub fn has_report(&self) -> bool {
        report_offered(self.args.wants_bug_report(), self.report_config.as_ref())
    }

    /// Widget values and visibility flags for the host.
    pub fn view(&self) -> RenderState {
        RenderState {
            message: message_paragraphs(self.args.message()),
            summary: self.normalized.summary.clone(),
            trace: self.normalized.trace.clone(),
            has_trace: self.has_trace(),
            has_report: self.has_report(),
        }
    }

    /// Bind the dialog state into the host's named widgets.
    pub fn render(&self, host: &mut dyn WidgetHost) {
        let view = self.view();

        host.set_value(WidgetRole::Message, &view.message.join("\n"));
        host.set_value(WidgetRole::Summary, &view.summary);
        host.set_value(WidgetRole::Trace, &view.trace);

        if !view.has_trace {
            host.hide(WidgetRole::Trace);
            host.hide(WidgetRole::TraceLabel);
        }
        if !view.has_report {
            host.hide(WidgetRole::ButtonBugReport);
        }
    }

    /// Handle a click on the report button.
    ///
    /// Reads a fresh environment snapshot, composes the report and asks the
    /// host to open it. Returns `None` when no report is offered. A failure to
    /// open the URL is logged; the composed report is still returned.
    pub fn report(
        &self,
        probe: &dyn EnvironmentProbe,
        opener: &mut dyn UrlOpener,
    ) -> Option<BugReport> {
        let config = match self.report_config.as_ref() {
            Some(config) if self.has_report() => config,
            _ => {
                tracing::debug!("Bug report requested but not offered");
                return None;
            }
        };

        let request = ReportRequest::new(&self.args, &self.normalized);
        let report = compose(&request, &probe.snapshot(), config);

        if let Err(e) = opener.open(&report.url) {
            tracing::warn!(error = %e, "Failed to open bug report URL");
        }

        Some(report)
    }

    /// Dismiss the dialog, invoking the completion callback.
    pub fn close(mut self, button: DialogButton) {
        tracing::debug!(button = button.as_str(), "Error dialog closed");
        if let Some(callback) = self.on_close.take() {
            callback(button);
        }
    }
}

/// Split a message into display lines, dropping blank ones.
pub fn message_paragraphs(message: &str) -> Vec<String> {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
