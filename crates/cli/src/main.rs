//! `bugdialog` -- show an error dialog in the terminal and, on request,
//! compose a pre-filled bug report.
//!
//! Usage: `bugdialog [--report] [ARGS_FILE]`, where `ARGS_FILE` (or stdin)
//! holds the dialog arguments as JSON:
//!
//! ```json
//! { "message": "Save failed", "error": "IOException",
//!   "exception": { "stack": "at save()" }, "bugreport": true }
//! ```
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default | Description                              |
//! |---------------------------|----------|---------|------------------------------------------|
//! | `BUGDIALOG_SETTINGS`      | no       | --      | JSON settings with a `BugReporting` section |
//! | `BUGDIALOG_ISSUE_ENABLED` | no       | --      | Override `BugReporting.options.issue`    |
//! | `BUGDIALOG_OPEN_COMMAND`  | no       | --      | Program that opens report URLs           |
//! | `BUGDIALOG_LANGUAGE`      | no       | locale  | Language reported in bug reports         |

use bugdialog_cli::config::CliConfig;
use bugdialog_cli::Invocation;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bugdialog_cli=info,bugdialog_core=info,bugdialog_dialog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let invocation = Invocation::parse(std::env::args().skip(1))?;
    let config = CliConfig::from_env()?;

    tracing::info!(
        settings = ?config.settings_path,
        report = invocation.report,
        "Starting bugdialog",
    );

    let args = bugdialog_cli::read_dialog_args(invocation.args_path.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    bugdialog_cli::run(args, &config, invocation.report, &mut out)?;

    Ok(())
}
