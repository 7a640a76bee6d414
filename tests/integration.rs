// SPDX-License-Identifier: MPL-2.0
use click_to_save::catalog;
use click_to_save::config::{self, Config};
use click_to_save::error::Error;
use click_to_save::i18n::fluent::I18n;
use click_to_save::media::{self, ExportFormat, ImageData};
use click_to_save::save_dialog::SaveDialog;
use tempfile::tempdir;

/// Every message key the window, dialogs and toasts look up.
const UI_KEYS: &[&str] = &[
    "window-title",
    "picker-label",
    "picker-placeholder",
    "source-url-label",
    "save-button",
    "loading-image",
    "image-load-failed",
    "save-dialog-title",
    "view-file-title",
    "view-file-prompt",
    "notification-save-success",
    "notification-save-no-image",
    "notification-save-error-format",
    "notification-save-error-encode",
    "notification-save-error-io",
    "notification-load-error-network",
    "notification-load-error-decode",
    "notification-config-load-error",
    "notification-state-parse-error",
    "notification-state-read-error",
    "notification-state-path-error",
    "notification-state-write-error",
];

fn gradient(width: u32, height: u32) -> ImageData {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 16) as u8, (y * 16) as u8, 128, 255]);
        }
    }
    ImageData::from_rgba(width, height, pixels)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    std::fs::write(&temp_config_file_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("load en-US config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    std::fs::write(&temp_config_file_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path).expect("load fr config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // The command line wins over the config file
    let i18n_cli = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn every_ui_key_is_translated_in_every_locale() {
    let locales = I18n::default().available_locales;
    assert!(locales.len() >= 2, "expected en-US and fr bundles");

    for locale in locales {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        assert_eq!(i18n.current_locale(), &locale);
        for key in UI_KEYS {
            assert!(i18n.has_message(key), "{locale} is missing {key}");
        }
    }
}

#[test]
fn catalog_lists_two_https_images() {
    let names: Vec<&str> = catalog::entries().iter().map(|e| e.name).collect();
    assert_eq!(names, ["Cat JPEG", "Rocks PNG"]);
    assert!(catalog::entries().iter().all(|e| e.url.starts_with("https://")));
    assert!(catalog::entry(catalog::entries().len()).is_none());
}

#[test]
fn dialog_choice_without_extension_saves_png() {
    let dir = tempdir().expect("temp dir");
    let dialog = SaveDialog::new("Save an Image File", Some(dir.path().join("Images")));
    let images_dir = dialog.initial_directory().expect("images dir").to_path_buf();

    let chosen = SaveDialog::normalize(images_dir.join("rocks"));
    let format = media::save_image(&gradient(8, 6), &chosen).expect("save png");

    assert_eq!(format, ExportFormat::Png);
    assert_eq!(chosen.extension().and_then(|e| e.to_str()), Some("png"));
    let reloaded = image_rs::open(&chosen).expect("reopen png");
    assert_eq!((reloaded.width(), reloaded.height()), (8, 6));
}

#[test]
fn jpeg_save_drops_alpha_and_keeps_dimensions() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("cat.jpg");

    let format = media::save_image(&gradient(10, 4), &path).expect("save jpeg");

    assert_eq!(format, ExportFormat::Jpeg);
    let reloaded = image_rs::open(&path).expect("reopen jpeg");
    assert_eq!((reloaded.width(), reloaded.height()), (10, 4));
    assert!(!reloaded.color().has_alpha());
}

#[test]
fn unsupported_extension_writes_nothing() {
    let dir = tempdir().expect("temp dir");
    let path = SaveDialog::normalize(dir.path().join("cat.gif"));

    let err = media::save_image(&gradient(2, 2), &path).expect_err("gif is not supported");

    assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "gif"));
    assert!(!path.exists());
}

#[test]
fn downloaded_bytes_decode_into_saveable_image() {
    let dir = tempdir().expect("temp dir");
    let source = dir.path().join("source.png");
    image_rs::RgbaImage::from_pixel(3, 5, image_rs::Rgba([10, 20, 30, 255]))
        .save(&source)
        .expect("write source png");
    let bytes = std::fs::read(&source).expect("read source");

    let decoded = media::decode(&bytes).expect("decode png");
    assert_eq!((decoded.width, decoded.height), (3, 5));

    let target = dir.path().join("copy.JPEG");
    assert_eq!(
        media::save_image(&decoded, &target).expect("save jpeg"),
        ExportFormat::Jpeg
    );
}
