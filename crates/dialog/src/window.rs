//! Window chrome requested from the host when the dialog opens.

use serde::Serialize;

/// Localization key for the fallback dialog title.
pub const DEFAULT_TITLE_KEY: &str = "DIALOG_CONFIRM_TITLE";
pub const ICON: &str = "status/dialog-error.png";
/// Accessibility role of the dialog root.
pub const ROLE: &str = "alertdialog";
pub const SOUND: &str = "ERROR";
pub const SOUND_VOLUME: f32 = 1.0;

pub const WIDTH: u32 = 400;
/// Height when a trace is shown.
pub const HEIGHT_WITH_TRACE: u32 = 400;
/// Height when there is nothing but the summary to show.
pub const HEIGHT_COMPACT: u32 = 200;

/// Chrome the host should give the dialog window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowOptions {
    pub title: String,
    pub icon: &'static str,
    pub role: &'static str,
    pub width: u32,
    pub height: u32,
    pub sound: &'static str,
    pub sound_volume: f32,
}

impl WindowOptions {
    /// Options for a dialog titled `title`; taller when a trace is present.
    pub fn for_error(title: String, has_trace: bool) -> Self {
        Self {
            title,
            icon: ICON,
            role: ROLE,
            width: WIDTH,
            height: if has_trace {
                HEIGHT_WITH_TRACE
            } else {
                HEIGHT_COMPACT
            },
            sound: SOUND,
            sound_volume: SOUND_VOLUME,
        }
    }
}
