// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::CatalogEntry;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user picked an entry in the image list.
    SelectionChanged(CatalogEntry),
    /// A download started for fetch `generation` finished.
    ImageFetched {
        generation: u64,
        result: Result<ImageData, Error>,
    },
    /// The Save button was pressed.
    SaveRequested,
    /// The save dialog closed; `None` when the user cancelled.
    SaveDialogResult(Option<PathBuf>),
    /// Encoding and writing finished.
    ImageSaved(Result<PathBuf, Error>),
    /// The "View file?" prompt was answered.
    ViewPromptAnswered { path: PathBuf, open: bool },
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (state file, images).
    /// Takes precedence over `CLICK_TO_SAVE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CLICK_TO_SAVE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
