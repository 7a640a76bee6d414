// SPDX-License-Identifier: MPL-2.0
//! OS shell integration: the post-save prompt and opening files with the
//! default handler.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::path::Path;

/// Asks a yes/no question in a native message box. Returns `true` on "Yes".
pub async fn confirm_view_file(title: String, prompt: String) -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(prompt)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    is_yes(&answer)
}

fn is_yes(answer: &MessageDialogResult) -> bool {
    matches!(answer, MessageDialogResult::Yes)
}

/// Opens `path` with the system's default application.
///
/// Best effort: a failure to launch is logged and otherwise ignored.
pub fn open_saved_file(path: &Path) {
    match open::that_detached(path) {
        Ok(()) => tracing::info!(path = %path.display(), "opened saved file"),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "couldn't start default viewer");
        }
    }
}
