// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::preview::SampleImage;
use crate::ui::controls;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. Control panel messages are
/// forwarded as-is; the rest drive the toolbar and background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// Move the focal slider by a number of steps (keyboard arrows).
    NudgeSlider(i32),
    /// Show the "Open image" dialog.
    OpenImage,
    /// Result from the open file dialog.
    OpenImageDialogResult(Option<PathBuf>),
    /// A sample image finished decoding.
    ImageLoaded(ImageRequest, Result<SampleImage, Error>),
    /// Drop the loaded image and go back to the generated landscape.
    UseGeneratedImage,
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
}

/// Where an image load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRequest {
    /// The image named on the command line or in the config at launch.
    Startup,
    /// An image picked in the open dialog.
    Picked,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional sensor id from the catalog (e.g. `aps-c-canon`).
    pub sensor: Option<String>,
    /// Optional physical focal length in millimeters.
    pub focal: Option<f64>,
    /// Optional image shown in the preview instead of the configured one.
    pub image_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOCAL_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
