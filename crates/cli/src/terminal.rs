//! Terminal host: renders the dialog widgets as plain text and opens
//! report URLs either by printing them or by handing them to a program.

use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::process::{Command, Stdio};

use bugdialog_dialog::{DialogError, UrlOpener, WidgetHost, WidgetRole, WindowOptions};

/// Top-to-bottom widget order of the text layout.
const LAYOUT: [WidgetRole; 5] = [
    WidgetRole::Message,
    WidgetRole::Summary,
    WidgetRole::TraceLabel,
    WidgetRole::Trace,
    WidgetRole::ButtonBugReport,
];

// ---------------------------------------------------------------------------
// TerminalHost
// ---------------------------------------------------------------------------

/// Widget host that lays the dialog out as text.
#[derive(Debug, Default)]
pub struct TerminalHost {
    values: HashMap<WidgetRole, String>,
    hidden: HashSet<WidgetRole>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text rendition of the bound widgets under a title bar.
    pub fn render_text(&self, window: &WindowOptions) -> String {
        let mut out = vec![format!("== {} ==", window.title)];

        for role in LAYOUT {
            if self.hidden.contains(&role) {
                continue;
            }
            let value = self.values.get(&role).map(String::as_str).unwrap_or("");
            match role {
                WidgetRole::Message | WidgetRole::Trace => {
                    if !value.is_empty() {
                        out.push(value.to_string());
                    }
                }
                WidgetRole::Summary => out.push(format!("Summary: {value}")),
                WidgetRole::TraceLabel => out.push("Trace:".to_string()),
                WidgetRole::ButtonBugReport => {
                    out.push("[Report bug: run again with --report]".to_string())
                }
            }
        }

        out.join("\n")
    }
}

impl WidgetHost for TerminalHost {
    fn set_value(&mut self, role: WidgetRole, value: &str) {
        self.values.insert(role, value.to_string());
    }

    fn hide(&mut self, role: WidgetRole) {
        self.hidden.insert(role);
    }
}

// ---------------------------------------------------------------------------
// URL openers
// ---------------------------------------------------------------------------

/// Writes the URL to a stream for the user to open.
#[derive(Debug)]
pub struct PrintOpener<W> {
    out: W,
}

impl<W: Write> PrintOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UrlOpener for PrintOpener<W> {
    fn open(&mut self, url: &str) -> Result<(), DialogError> {
        writeln!(self.out, "Open this URL to file the report:\n{url}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Hands the URL to an external program (`xdg-open`, `open`, a browser).
///
/// The child is spawned detached; its exit status is not awaited.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
}

impl CommandOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl UrlOpener for CommandOpener {
    fn open(&mut self, url: &str) -> Result<(), DialogError> {
        let child = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::info!(program = %self.program, pid = child.id(), "Opened bug report URL");
        Ok(())
    }
}
