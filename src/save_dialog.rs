// SPDX-License-Identifier: MPL-2.0
//! The save-file dialog configuration.
//!
//! The application builds one [`SaveDialog`] on first use and reuses it for
//! every save, so the dialog reopens where the previous save went. Building
//! it creates the default images directory.

use crate::media::export::{self, ExportFormat};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to chosen paths that have none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Name pre-filled in the dialog's file name field.
const DEFAULT_FILE_STEM: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDialog {
    title: String,
    initial_directory: Option<PathBuf>,
}

impl SaveDialog {
    /// Builds the dialog configuration, creating `images_dir` if needed.
    ///
    /// When the directory cannot be created the dialog opens in the
    /// platform's default location instead.
    pub fn new(title: impl Into<String>, images_dir: Option<PathBuf>) -> Self {
        let initial_directory = images_dir.filter(|dir| match fs::create_dir_all(dir) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "cannot create images directory");
                false
            }
        });

        Self {
            title: title.into(),
            initial_directory,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn initial_directory(&self) -> Option<&Path> {
        self.initial_directory.as_deref()
    }

    /// Makes the next dialog open in the directory containing `saved_file`.
    pub fn remember_directory(&mut self, saved_file: &Path) {
        if let Some(parent) = saved_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.initial_directory = Some(parent.to_path_buf());
        }
    }

    /// Starts the dialog in `dir` (a directory remembered from an earlier
    /// session). Ignored when the directory no longer exists.
    pub fn restore_directory(&mut self, dir: &Path) {
        if dir.is_dir() {
            self.initial_directory = Some(dir.to_path_buf());
        }
    }

    /// Appends the default extension to a chosen path that has none.
    ///
    /// A trailing dot counts as no extension (`cat.` becomes `cat.png`), and a
    /// name that is only a supported extension (`.jpg`) gets the default stem.
    /// Other extensions are returned unchanged, even unsupported ones, so the
    /// export step can reject them.
    #[must_use]
    pub fn normalize(path: PathBuf) -> PathBuf {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some(ext) = name
            .strip_prefix('.')
            .filter(|ext| ExportFormat::from_extension(ext).is_some())
        {
            return path.with_file_name(format!("{DEFAULT_FILE_STEM}.{ext}"));
        }

        match path.extension() {
            Some(ext) if !ext.is_empty() => path,
            _ => path.with_extension(DEFAULT_EXTENSION),
        }
    }

    /// Shows the native save dialog; `None` when the user cancels.
    pub async fn show(self) -> Option<PathBuf> {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title(&self.title)
            .set_file_name(format!(
                "{DEFAULT_FILE_STEM}.{}",
                ExportFormat::default().extension()
            ));

        for filter in export::filters() {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }

        if let Some(dir) = self.initial_directory.filter(|dir| dir.exists()) {
            dialog = dialog.set_directory(&dir);
        }

        dialog
            .save_file()
            .await
            .map(|handle| Self::normalize(handle.path().to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_creates_images_directory() {
        let temp_dir = tempdir().expect("temp dir");
        let images = temp_dir.path().join("ClickToSave").join("Images");

        let dialog = SaveDialog::new("Save an Image File", Some(images.clone()));

        assert!(images.is_dir());
        assert_eq!(dialog.initial_directory(), Some(images.as_path()));
        assert_eq!(dialog.title(), "Save an Image File");
    }

    #[test]
    fn new_without_directory_has_no_initial_directory() {
        let dialog = SaveDialog::new("t", None);
        assert!(dialog.initial_directory().is_none());
    }

    #[test]
    fn uncreatable_directory_is_dropped() {
        let temp_dir = tempdir().expect("temp dir");
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, b"x").expect("write blocker");

        let dialog = SaveDialog::new("t", Some(blocker.join("Images")));
        assert!(dialog.initial_directory().is_none());
    }

    #[test]
    fn remember_directory_uses_parent_of_saved_file() {
        let mut dialog = SaveDialog::new("t", None);
        dialog.remember_directory(Path::new("/home/user/pictures/cat.jpg"));
        assert_eq!(
            dialog.initial_directory(),
            Some(Path::new("/home/user/pictures"))
        );

        // A bare file name has no useful parent
        dialog.remember_directory(Path::new("cat.jpg"));
        assert_eq!(
            dialog.initial_directory(),
            Some(Path::new("/home/user/pictures"))
        );
    }

    #[test]
    fn normalize_adds_png_only_when_extension_missing() {
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/cat")),
            PathBuf::from("/tmp/cat.png")
        );
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/cat.jpeg")),
            PathBuf::from("/tmp/cat.jpeg")
        );
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/cat.bmp")),
            PathBuf::from("/tmp/cat.bmp")
        );
    }

    #[test]
    fn normalize_treats_trailing_dot_as_missing_extension() {
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/cat.")),
            PathBuf::from("/tmp/cat.png")
        );
    }

    #[test]
    fn normalize_gives_bare_extension_names_the_default_stem() {
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/.png")),
            PathBuf::from("/tmp/image.png")
        );
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/.JPEG")),
            PathBuf::from("/tmp/image.JPEG")
        );
        // Hidden names that are not image extensions keep their name
        assert_eq!(
            SaveDialog::normalize(PathBuf::from("/tmp/.cat")),
            PathBuf::from("/tmp/.cat.png")
        );
    }

    #[test]
    fn restore_directory_ignores_missing_directories() {
        let temp_dir = tempdir().expect("temp dir");
        let mut dialog = SaveDialog::new("t", None);

        dialog.restore_directory(&temp_dir.path().join("gone"));
        assert!(dialog.initial_directory().is_none());

        dialog.restore_directory(temp_dir.path());
        assert_eq!(dialog.initial_directory(), Some(temp_dir.path()));
    }
}
