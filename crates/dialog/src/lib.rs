//! Error dialog host binding.
//!
//! [`ErrorDialog`] owns one set of [`DialogArgs`](bugdialog_core::DialogArgs)
//! and talks to its host only through the capabilities in [`host`].

pub mod dialog;
pub mod error;
pub mod host;
pub mod window;

pub use dialog::{message_paragraphs, CloseCallback, DialogButton, ErrorDialog, RenderState};
pub use error::DialogError;
pub use host::{IdentityTranslator, Translator, UrlOpener, WidgetHost, WidgetRole};
pub use window::WindowOptions;
