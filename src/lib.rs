// SPDX-License-Identifier: MPL-2.0
//! `click_to_save` is a small image saver built with the Iced GUI framework.
//!
//! Pick an image from a fixed list of remote URLs, preview it, and save the
//! displayed bitmap as PNG or JPEG through the native save dialog, optionally
//! opening the saved file afterward.

#![doc(html_root_url = "https://docs.rs/click_to_save/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod save_dialog;
pub mod shell;
pub mod ui;
