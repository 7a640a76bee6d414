// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CLICK_TO_SAVE_DATA_DIR`, `CLICK_TO_SAVE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! Saved images default to an `Images` folder under the per-user local
//! application data directory, or under the data directory when one is
//! overridden.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "ClickToSave";

/// Folder (inside the data directory) that the save dialog opens in by default.
pub const IMAGES_DIR_NAME: &str = "Images";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "CLICK_TO_SAVE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CLICK_TO_SAVE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` CLI values.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides already initialized; ignoring");
    }
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the explicitly configured data directory (CLI, then env var), if any.
fn data_dir_override() -> Option<PathBuf> {
    get_cli_data_dir().or_else(|| non_empty_env(ENV_DATA_DIR))
}

/// Returns the application data directory path (state file lives here).
///
/// - Linux: `~/.local/share/ClickToSave/`
/// - macOS: `~/Library/Application Support/ClickToSave/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ClickToSave\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = data_dir_override() {
        return Some(path);
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the application config directory path (`settings.toml` lives here).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the default directory for saved images.
///
/// - Linux: `~/.local/share/ClickToSave/Images`
/// - Windows: `C:\Users\<User>\AppData\Local\ClickToSave\Images`
pub fn get_images_dir() -> Option<PathBuf> {
    get_images_dir_with_override(None)
}

/// Returns the default directory for saved images, rooted at `override_path`
/// when given.
pub fn get_images_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let base = match override_path.or_else(data_dir_override) {
        Some(path) => path,
        None => {
            let mut path = dirs::data_local_dir()?;
            path.push(APP_NAME);
            path
        }
    };
    Some(base.join(IMAGES_DIR_NAME))
}
