//! `bugdialog` library crate.
//!
//! A terminal host for the error dialog: reads dialog arguments as JSON,
//! renders the dialog as text and optionally fires the report action.
//! The binary entrypoint lives in `main.rs`.

pub mod config;
pub mod terminal;

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bugdialog_core::{BugReport, DialogArgs, SystemEnvironment};
use bugdialog_dialog::window::DEFAULT_TITLE_KEY;
use bugdialog_dialog::{DialogButton, ErrorDialog, UrlOpener};

use config::CliConfig;
use terminal::{CommandOpener, PrintOpener, TerminalHost};

pub const APP_NAME: &str = "bugdialog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command line: `bugdialog [--report] [ARGS_FILE]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Fire the report action after rendering.
    pub report: bool,
    /// JSON file with dialog arguments; stdin when `None` or `-`.
    pub args_path: Option<PathBuf>,
}

impl Invocation {
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut invocation = Self::default();
        for arg in args {
            match arg.as_str() {
                "--report" => invocation.report = true,
                "-" => invocation.args_path = None,
                flag if flag.starts_with("--") => anyhow::bail!("Unknown option: {flag}"),
                path => {
                    if invocation.args_path.is_some() {
                        anyhow::bail!("Only one arguments file may be given");
                    }
                    invocation.args_path = Some(PathBuf::from(path));
                }
            }
        }
        Ok(invocation)
    }
}

/// Read dialog arguments from `path`, or from stdin when `None`.
pub fn read_dialog_args(path: Option<&Path>) -> anyhow::Result<DialogArgs> {
    let document = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read dialog arguments from stdin")?;
            buf
        }
    };
    serde_json::from_str(&document).context("Dialog arguments must be a JSON object")
}

/// Built-in English strings for the terminal host.
pub fn translations() -> HashMap<String, String> {
    HashMap::from([(DEFAULT_TITLE_KEY.to_string(), "Error".to_string())])
}

/// Render the dialog for `args` to `out`, then fire the report action when
/// `report` is set and a report is offered.
pub fn run(
    args: DialogArgs,
    config: &CliConfig,
    report: bool,
    out: &mut dyn Write,
) -> anyhow::Result<Option<BugReport>> {
    let dialog = ErrorDialog::new(args, config.load_report_config(), &translations())
        .on_close(|button| tracing::debug!(button = button.as_str(), "Dialog dismissed"));

    let mut host = TerminalHost::new();
    dialog.render(&mut host);
    writeln!(out, "{}", host.render_text(dialog.window()))?;

    let mut composed = None;
    if report {
        if dialog.has_report() {
            let mut probe = SystemEnvironment::new(APP_NAME, APP_VERSION);
            if let Some(language) = &config.language {
                probe = probe.with_language(language.clone());
            }
            let mut opener: Box<dyn UrlOpener + '_> = match &config.open_command {
                Some(program) => Box::new(CommandOpener::new(program.clone())),
                None => Box::new(PrintOpener::new(&mut *out)),
            };
            composed = dialog.report(&probe, opener.as_mut());
        } else {
            writeln!(out, "Bug reporting is not available for this error.")?;
        }
    }

    dialog.close(DialogButton::Ok);
    Ok(composed)
}
