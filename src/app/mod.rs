// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the downloaded image, the
//! save dialog and the notification toasts, and translates messages into
//! side effects like downloads, file dialogs or state persistence.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::save_dialog::SaveDialog;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Progress of the download for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    app_state: persisted_state::AppState,
    /// Where the state file goes; `None` resolves the platform data directory.
    state_dir: Option<PathBuf>,
    /// Initial directory of the save dialog when nothing was saved yet.
    images_dir: Option<PathBuf>,
    selected_index: usize,
    current_url: String,
    current_image: Option<ImageData>,
    load_state: LoadState,
    fetch_generation: u64,
    /// Built on the first save and reused afterwards.
    save_dialog: Option<SaveDialog>,
    /// Resolved once at startup.
    theme: Theme,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected_index", &self.selected_index)
            .field("load_state", &self.load_state)
            .field("has_image", &self.current_image.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let selected_index = catalog::DEFAULT_INDEX;
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            app_state: persisted_state::AppState::default(),
            state_dir: None,
            images_dir: None,
            selected_index,
            current_url: catalog::url_for(selected_index)
                .unwrap_or_default()
                .to_string(),
            current_image: None,
            load_state: LoadState::Loading,
            fetch_generation: 0,
            save_dialog: None,
            theme: Theme::Dark,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Loads configuration, translations and persisted state, then starts
    /// downloading the default image.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::boot(flags, config, config_warning, None, paths::get_images_dir())
    }

    fn boot(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        state_dir: Option<PathBuf>,
        images_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load_from(state_dir.clone());

        let mut app = App {
            i18n,
            theme: config.general.theme_mode.theme(),
            config,
            app_state,
            state_dir,
            images_dir,
            ..Self::default()
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = %app.theme,
            "application started"
        );

        let task = update::start_fetch(&mut app.update_context());
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match catalog::entry(self.selected_index) {
            Some(entry) if self.current_image.is_some() => format!("{} - {app_name}", entry.name),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            persisted: &mut self.app_state,
            state_dir: &self.state_dir,
            images_dir: &self.images_dir,
            selected_index: &mut self.selected_index,
            current_url: &mut self.current_url,
            current_image: &mut self.current_image,
            load_state: &mut self.load_state,
            fetch_generation: &mut self.fetch_generation,
            save_dialog: &mut self.save_dialog,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectionChanged(entry) => {
                update::handle_selection_changed(&mut self.update_context(), entry)
            }
            Message::ImageFetched { generation, result } => {
                update::handle_image_fetched(&mut self.update_context(), generation, result)
            }
            Message::SaveRequested => update::handle_save_requested(&mut self.update_context()),
            Message::SaveDialogResult(path) => {
                update::handle_save_dialog_result(&mut self.update_context(), path)
            }
            Message::ImageSaved(result) => {
                update::handle_image_saved(&mut self.update_context(), result)
            }
            Message::ViewPromptAnswered { path, open } => {
                update::handle_view_prompt_answered(&path, open)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selected: catalog::entry(self.selected_index),
            current_url: &self.current_url,
            current_image: self.current_image.as_ref(),
            load_state: self.load_state,
            notifications: &self.notifications,
        })
    }
}
