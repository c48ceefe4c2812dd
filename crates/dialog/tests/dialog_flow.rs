//! Integration tests for the error dialog: construction, rendering and the
//! bug-report action.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use bugdialog_core::{DialogArgs, ErrorInput};
use bugdialog_dialog::{DialogButton, ErrorDialog, IdentityTranslator, WidgetRole};
use serde_json::json;

use common::{
    decoded_body, disabled_config, enabled_config, test_env, FailingOpener, RecordingHost,
    RecordingOpener,
};

fn args(value: serde_json::Value) -> DialogArgs {
    serde_json::from_value(value).expect("valid dialog args")
}

// ---------------------------------------------------------------------------
// Test: end-to-end save failure
// ---------------------------------------------------------------------------

#[test]
fn save_failure_end_to_end() {
    let dialog = ErrorDialog::new(
        args(json!({
            "message": "Save failed",
            "error": "IOException",
            "exception": { "stack": "at save()\nat main()" },
            "bugreport": true
        })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let view = dialog.view();
    assert_eq!(view.trace, "at save()\nat main()");
    assert!(view.has_trace);
    assert!(view.has_report);

    let mut opener = RecordingOpener::default();
    let report = dialog
        .report(&test_env(), &mut opener)
        .expect("report should be offered");

    assert_eq!(opener.opened, vec![report.url.clone()]);

    let body = decoded_body(&report.url);
    assert!(body.contains("> Save failed"));
    assert!(body.contains("```\nat save()\nat main()\n```"));
}

// ---------------------------------------------------------------------------
// Test: rendering binds and hides widgets
// ---------------------------------------------------------------------------

#[test]
fn render_binds_summary_and_trace() {
    let dialog = ErrorDialog::new(
        args(json!({
            "message": "Could not load\n\nTry again later",
            "error": "TypeError",
            "exception": {
                "name": "TypeError",
                "fileName": "a.js",
                "lineNumber": 12,
                "message": "x is undefined"
            },
            "bugreport": true
        })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let mut host = RecordingHost::default();
    dialog.render(&mut host);

    assert_eq!(
        host.value(WidgetRole::Message),
        Some("Could not load\nTry again later")
    );
    assert_eq!(host.value(WidgetRole::Summary), Some("TypeError"));
    assert_eq!(
        host.value(WidgetRole::Trace),
        Some("TypeError\nFilename: a.js\nLine: 12\nMessage: x is undefined")
    );
    assert!(host.hidden.is_empty());
}

#[test]
fn render_hides_trace_widgets_without_trace() {
    let dialog = ErrorDialog::new(
        args(json!({ "message": "m", "error": "e", "exception": {} })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let mut host = RecordingHost::default();
    dialog.render(&mut host);

    assert!(host.is_hidden(WidgetRole::Trace));
    assert!(host.is_hidden(WidgetRole::TraceLabel));
    assert!(!host.is_hidden(WidgetRole::Summary));
}

#[test]
fn render_hides_report_button_without_bugreport() {
    let dialog = ErrorDialog::new(
        args(json!({ "error": "e" })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let mut host = RecordingHost::default();
    dialog.render(&mut host);

    assert!(host.is_hidden(WidgetRole::ButtonBugReport));
}

#[test]
fn trace_visibility_matches_trace_text() {
    let cases = [
        json!({ "exception": { "stack": "at x()" } }),
        json!({ "exception": { "name": "E", "lineNumber": 1 } }),
        json!({ "exception": {} }),
        json!({}),
    ];

    for case in cases {
        let dialog = ErrorDialog::new(args(case), None, &IdentityTranslator);
        let view = dialog.view();
        assert_eq!(view.has_trace, !view.trace.is_empty());

        let mut host = RecordingHost::default();
        dialog.render(&mut host);
        assert_eq!(host.is_hidden(WidgetRole::Trace), !view.has_trace);
        assert_eq!(host.is_hidden(WidgetRole::TraceLabel), !view.has_trace);
    }
}

// ---------------------------------------------------------------------------
// Test: report gating
// ---------------------------------------------------------------------------

#[test]
fn report_requires_bugreport_and_issue_enabled() {
    let cases = [
        (Some(true), Some(enabled_config()), true),
        (Some(false), Some(enabled_config()), false),
        (None, Some(enabled_config()), false),
        (Some(true), Some(disabled_config()), false),
        (Some(true), None, false),
    ];

    for (bugreport, config, expected) in cases {
        let dialog_args = DialogArgs {
            bugreport,
            ..Default::default()
        };
        let dialog = ErrorDialog::new(dialog_args, config, &IdentityTranslator);
        assert_eq!(dialog.has_report(), expected);

        let mut opener = RecordingOpener::default();
        let report = dialog.report(&test_env(), &mut opener);
        assert_eq!(report.is_some(), expected);
        assert_eq!(opener.opened.len(), usize::from(expected));
    }
}

#[test]
fn repeated_clicks_compose_identical_reports() {
    let dialog = ErrorDialog::new(
        args(json!({ "message": "m", "error": "e", "bugreport": true })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let mut opener = RecordingOpener::default();
    let first = dialog.report(&test_env(), &mut opener);
    let second = dialog.report(&test_env(), &mut opener);

    assert_eq!(first, second);
    assert_eq!(opener.opened.len(), 2);
    assert_eq!(opener.opened[0], opener.opened[1]);
}

#[test]
fn missing_summary_reports_unknown_error() {
    let dialog = ErrorDialog::new(
        args(json!({ "message": "m", "bugreport": true })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let report = dialog
        .report(&test_env(), &mut RecordingOpener::default())
        .expect("report should be offered");
    assert!(report.body.lines().any(|line| line == "> Unknown error"));
}

#[test]
fn opener_failure_still_returns_report() {
    let dialog = ErrorDialog::new(
        args(json!({ "message": "m", "bugreport": true })),
        Some(enabled_config()),
        &IdentityTranslator,
    );

    let report = dialog.report(&test_env(), &mut FailingOpener);
    assert!(report.is_some());
}

#[test]
fn report_reads_environment_on_each_click() {
    let dialog = ErrorDialog::new(
        args(json!({ "message": "m", "bugreport": true })),
        Some(enabled_config()),
        &IdentityTranslator,
    );
    let mut opener = RecordingOpener::default();

    let mut env = test_env();
    let first = dialog.report(&env, &mut opener).expect("offered");
    env.language = "de_DE".to_string();
    let second = dialog.report(&env, &mut opener).expect("offered");

    assert!(first.body.contains("\"language\":\"en_US\""));
    assert!(second.body.contains("\"language\":\"de_DE\""));
}

// ---------------------------------------------------------------------------
// Test: Rust errors and dismissal
// ---------------------------------------------------------------------------

#[test]
fn rust_error_becomes_field_trace() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
    let dialog_args = DialogArgs {
        error: Some("Could not save document".to_string()),
        exception: Some(ErrorInput::from_error("IoError", &io)),
        ..Default::default()
    };
    let dialog = ErrorDialog::new(dialog_args, None, &IdentityTranslator);

    assert_eq!(
        dialog.normalized().trace,
        "IoError\nFilename: <unknown>\nLine: undefined\nMessage: read-only volume"
    );
}

#[test]
fn close_invokes_callback_once_with_button() {
    let pressed: Rc<RefCell<Vec<DialogButton>>> = Rc::default();
    let sink = Rc::clone(&pressed);

    let dialog = ErrorDialog::new(DialogArgs::default(), None, &IdentityTranslator)
        .on_close(move |button| sink.borrow_mut().push(button));
    dialog.close(DialogButton::Ok);

    assert_eq!(*pressed.borrow(), vec![DialogButton::Ok]);
}
