//! Bug report composition.
//!
//! Turns a normalized error, a live environment snapshot and the reporting
//! configuration into a pre-filled issue URL. Composition is pure: it reads
//! its inputs and returns data, and opening the URL is left to the caller.

use serde::Serialize;

use crate::args::DialogArgs;
use crate::encoding::{encode_component, substitute_first};
use crate::environment::EnvironmentSnapshot;
use crate::normalize::NormalizedError;
use crate::report_config::{ReportConfig, BODY_PLACEHOLDER, TITLE_PLACEHOLDER, VERSION_PLACEHOLDER};

// ---------------------------------------------------------------------------
// Body sections
// ---------------------------------------------------------------------------

/// Quoted error line used when the caller gave no summary.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Empty block left for the reporter to fill in.
const BLANK_BLOCK: &str = "\n";

const SECTION_EXPECTED: &str = "## Expected behaviour";
const SECTION_ACTUAL: &str = "## Actual behaviour";
const SECTION_STEPS: &str = "## Steps to reproduce the error";
const SECTION_ENVIRONMENT: &str = "## (Optional) Browser and OS information";
const SECTION_STACK_TRACE: &str = "## Stack Trace ";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The error text a report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest<'a> {
    /// User-facing message shown in the dialog.
    pub message: &'a str,
    /// Human summary of the error; may be empty.
    pub error: &'a str,
    /// Normalized trace; may be empty.
    pub trace: &'a str,
}

impl<'a> ReportRequest<'a> {
    pub fn new(args: &'a DialogArgs, normalized: &'a NormalizedError) -> Self {
        Self {
            message: args.message(),
            error: args.error(),
            trace: &normalized.trace,
        }
    }
}

/// A composed, ready-to-open bug report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugReport {
    pub title: String,
    pub body: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Whether a report action should be offered at all.
///
/// Both the caller (`bugreport`) and the host policy (`issue_enabled`) must
/// opt in. A missing configuration never offers a report.
pub fn report_offered(bugreport: bool, config: Option<&ReportConfig>) -> bool {
    bugreport && config.is_some_and(|c| c.issue_enabled)
}

/// Compose a bug report and its submission URL.
pub fn compose(
    request: &ReportRequest<'_>,
    env: &EnvironmentSnapshot,
    config: &ReportConfig,
) -> BugReport {
    let title = config.title.clone();
    let body = report_body(request, env, config);

    let url = substitute_first(
        &config.submit_url_template,
        TITLE_PLACEHOLDER,
        &encode_component(&title),
    );
    let url = substitute_first(&url, BODY_PLACEHOLDER, &encode_component(&body));

    tracing::info!(
        title = %title,
        body_len = body.len(),
        has_trace = !request.trace.is_empty(),
        "Composed bug report",
    );

    BugReport { title, body, url }
}

/// Build the markdown body of a report.
pub fn report_body(
    request: &ReportRequest<'_>,
    env: &EnvironmentSnapshot,
    config: &ReportConfig,
) -> String {
    let header = substitute_first(&config.message_template, VERSION_PLACEHOLDER, &config.version);
    let error = if request.error.is_empty() {
        UNKNOWN_ERROR
    } else {
        request.error
    };

    let mut blocks = vec![
        format!("**{header}:**"),
        BLANK_BLOCK.to_string(),
        format!("> {}", request.message),
        BLANK_BLOCK.to_string(),
        format!("> {error}"),
        BLANK_BLOCK.to_string(),
        SECTION_EXPECTED.to_string(),
        BLANK_BLOCK.to_string(),
        SECTION_ACTUAL.to_string(),
        BLANK_BLOCK.to_string(),
        SECTION_STEPS.to_string(),
        BLANK_BLOCK.to_string(),
        SECTION_ENVIRONMENT.to_string(),
        BLANK_BLOCK.to_string(),
        format!("```\n{}\n```", environment_json(env)),
    ];

    if !request.trace.is_empty() {
        blocks.push(format!(
            "\n{SECTION_STACK_TRACE}\n```\n{}\n```\n",
            request.trace
        ));
    }

    blocks.join("\n")
}

fn environment_json(env: &EnvironmentSnapshot) -> String {
    serde_json::to_string(env).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to serialize environment snapshot");
        "{}".to_string()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
