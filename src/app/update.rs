// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler mutates the state borrowed through [`UpdateContext`] and
//! returns the side effect (download, dialog, encode) as a [`Task`].

use super::persisted_state::AppState;
use super::{LoadState, Message};
use crate::catalog::{self, CatalogEntry};
use crate::config::Config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::save_dialog::SaveDialog;
use crate::shell;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub persisted: &'a mut AppState,
    /// Directory the state file is written to; `None` uses the default.
    pub state_dir: &'a Option<PathBuf>,
    /// Default save directory; `None` when no data directory is available.
    pub images_dir: &'a Option<PathBuf>,
    pub selected_index: &'a mut usize,
    pub current_url: &'a mut String,
    pub current_image: &'a mut Option<ImageData>,
    pub load_state: &'a mut LoadState,
    pub fetch_generation: &'a mut u64,
    pub save_dialog: &'a mut Option<SaveDialog>,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles a pick-list selection. Entries that are not part of the catalog
/// are rejected and leave the state untouched.
pub fn handle_selection_changed(
    ctx: &mut UpdateContext<'_>,
    entry: CatalogEntry,
) -> Task<Message> {
    let Some(index) = catalog::position_of(entry.name) else {
        tracing::warn!(name = entry.name, "ignoring selection outside the image list");
        return Task::none();
    };
    select_index(ctx, index)
}

/// Selects the catalog entry at `index` and starts downloading it.
pub fn select_index(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some(entry) = catalog::entry(index) else {
        tracing::warn!(index, "ignoring out-of-range selection");
        return Task::none();
    };

    *ctx.selected_index = index;
    *ctx.current_url = entry.url.to_string();
    start_fetch(ctx)
}

/// Discards the displayed image and downloads the current URL.
///
/// Every call bumps the fetch generation so results of earlier downloads
/// are ignored when they arrive late.
pub fn start_fetch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.fetch_generation = ctx.fetch_generation.wrapping_add(1);
    let generation = *ctx.fetch_generation;

    *ctx.current_image = None;
    *ctx.load_state = LoadState::Loading;

    let url = ctx.current_url.clone();
    tracing::info!(%url, generation, "fetching image");

    Task::perform(
        async move { media::fetch_image(&url).await },
        move |result| Message::ImageFetched { generation, result },
    )
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if generation != *ctx.fetch_generation {
        tracing::debug!(generation, current = *ctx.fetch_generation, "dropping stale fetch");
        return Task::none();
    }

    match result {
        Ok(image) => {
            tracing::info!(width = image.width, height = image.height, "image loaded");
            *ctx.current_image = Some(image);
            *ctx.load_state = LoadState::Ready;
            ctx.notifications.clear_load_errors();
        }
        Err(err) => {
            tracing::warn!(url = %ctx.current_url, %err, "image load failed");
            *ctx.current_image = None;
            *ctx.load_state = LoadState::Failed;
            ctx.notifications.push(Notification::from_error(&err));
        }
    }
    Task::none()
}

/// Opens the save dialog, building and caching its configuration on first use.
pub fn handle_save_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.current_image.is_none() {
        ctx.notifications.push(Notification::from_error(&Error::NoImage));
        return Task::none();
    }

    if ctx.save_dialog.is_none() {
        *ctx.save_dialog = Some(build_save_dialog(
            ctx.i18n,
            ctx.images_dir.clone(),
            ctx.persisted,
        ));
    }

    match ctx.save_dialog.as_ref() {
        Some(dialog) => Task::perform(dialog.clone().show(), Message::SaveDialogResult),
        None => Task::none(),
    }
}

fn build_save_dialog(
    i18n: &I18n,
    images_dir: Option<PathBuf>,
    persisted: &AppState,
) -> SaveDialog {
    let mut dialog = SaveDialog::new(i18n.tr("save-dialog-title"), images_dir);
    if let Some(dir) = persisted.last_save_directory.as_deref() {
        dialog.restore_directory(dir);
    }
    dialog
}

/// Encodes the displayed image to the chosen path on a blocking thread.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        tracing::debug!("save cancelled");
        return Task::none();
    };

    let Some(image) = ctx.current_image.clone() else {
        ctx.notifications.push(Notification::from_error(&Error::NoImage));
        return Task::none();
    };

    Task::perform(write_image(image, path), Message::ImageSaved)
}

/// Adds the default extension when missing and encodes `image` to the
/// resulting path. Returns the path actually written.
pub async fn write_image(image: ImageData, path: PathBuf) -> Result<PathBuf, Error> {
    let path = SaveDialog::normalize(path);
    tracing::info!(path = %path.display(), "saving image");
    tokio::task::spawn_blocking(move || media::save_image(&image, &path).map(|_| path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

pub fn handle_image_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    let path = match result {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(%err, "save failed");
            ctx.notifications.push(Notification::from_error(&err));
            return Task::none();
        }
    };

    if let Some(dialog) = ctx.save_dialog.as_mut() {
        dialog.remember_directory(&path);
    }
    ctx.persisted.set_last_save_directory_from_file(&path);
    persist_state(ctx);

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    ctx.notifications
        .push(Notification::success("notification-save-success").with_arg("filename", filename));

    if !ctx.config.save.ask_to_view {
        return Task::none();
    }

    let title = ctx.i18n.tr("view-file-title");
    let prompt = ctx.i18n.tr("view-file-prompt");
    Task::perform(shell::confirm_view_file(title, prompt), move |open| {
        Message::ViewPromptAnswered { path, open }
    })
}

pub fn handle_view_prompt_answered(path: &std::path::Path, open: bool) -> Task<Message> {
    if open {
        shell::open_saved_file(path);
    }
    Task::none()
}

fn persist_state(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = ctx.persisted.save_to(ctx.state_dir.clone()) {
        ctx.notifications.push(Notification::warning(key));
    }
}
