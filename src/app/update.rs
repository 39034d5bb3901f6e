// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::message::ImageRequest;
use super::persistence::{self, Preference, Preferences};
use super::status::StatusLine;
use super::Message;
use crate::config::{Config, PREVIEW_ASPECT_RATIO, SLIDER_STEP};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::optics::{preview_crop, OpticsModel};
use crate::preview::{self, PreviewCache, SampleImage};
use crate::ui::controls;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{Task, Theme};
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub model: &'a mut OpticsModel,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub theme: &'a mut Theme,
    pub sample: &'a mut SampleImage,
    pub preview_cache: &'a mut PreviewCache,
    pub preview_handle: &'a mut Handle,
    pub loading_image: &'a mut bool,
    pub status: &'a mut Option<StatusLine>,
}

impl UpdateContext<'_> {
    fn persist(&mut self, changed: Preference) {
        let warning = persistence::persist_preference(
            self.config,
            &Preferences {
                model: self.model,
                theme_mode: *self.theme_mode,
                i18n: self.i18n,
                sample: self.sample,
            },
            changed,
        );
        if let Some(key) = warning {
            *self.status = Some(StatusLine::error(key));
        }
    }
}

/// Renders the crop for the current zoom, reusing cached crops.
pub fn refresh_preview(
    model: &OpticsModel,
    sample: &SampleImage,
    cache: &mut PreviewCache,
) -> Handle {
    let (width, height) = sample.dimensions();
    let region = preview_crop(width, height, PREVIEW_ASPECT_RATIO, model.zoom_scale());
    cache.get_or_render(sample, region)
}

fn refresh(ctx: &mut UpdateContext<'_>) {
    *ctx.preview_handle = refresh_preview(ctx.model, ctx.sample, ctx.preview_cache);
}

pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::SensorSelected(id) => {
            ctx.model.set_sensor(id.sensor());
            refresh(ctx);
            ctx.persist(Preference::Optics);
        }
        controls::Message::SliderMoved(position) => {
            ctx.model.set_slider_position(position);
            refresh(ctx);
        }
        controls::Message::SliderReleased => ctx.persist(Preference::Optics),
        controls::Message::QuickFocalPressed(focal_mm) => {
            ctx.model.apply_quick_focal(focal_mm);
            refresh(ctx);
            ctx.persist(Preference::Optics);
        }
    }
    Task::none()
}

/// Moves the slider by `steps` increments from the current focal length.
///
/// Steps are applied until the rounded focal length actually changes, so a
/// single key press never gets lost in the rounding of long focals.
pub fn handle_nudge(ctx: &mut UpdateContext<'_>, steps: i32) -> Task<Message> {
    if steps == 0 {
        return Task::none();
    }

    let start_focal = ctx.model.focal_length();
    let mut position = ctx.model.slider_position().value();
    let step = SLIDER_STEP * f64::from(steps);

    loop {
        position += step;
        ctx.model.set_slider_position(position);
        let at_bound = !(crate::config::MIN_SLIDER_POSITION..=crate::config::MAX_SLIDER_POSITION)
            .contains(&position);
        if ctx.model.focal_length() != start_focal || at_bound {
            break;
        }
    }

    refresh(ctx);
    ctx.persist(Preference::Optics);
    Task::none()
}

/// Opens the image picker dialog.
pub fn handle_open_image() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", preview::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenImageDialogResult,
    )
}

/// Decodes `path` on a blocking thread.
pub fn load_image_task(path: PathBuf, request: ImageRequest) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || preview::load_sample(&path))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        move |result| Message::ImageLoaded(request, result),
    )
}

pub fn handle_dialog_result(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => {
            *ctx.loading_image = true;
            load_image_task(path, ImageRequest::Picked)
        }
        None => Task::none(),
    }
}

/// Shows a decoded image. Only images the user picked are remembered; the
/// startup image already comes from the config or the command line.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    request: ImageRequest,
    result: Result<SampleImage, Error>,
) -> Task<Message> {
    *ctx.loading_image = false;
    match result {
        Ok(sample) => {
            log::info!("Loaded preview image {:?}", sample.origin());
            *ctx.status = sample
                .file_name()
                .map(|name| StatusLine::info_with_arg("status-image-loaded", "name", name));
            set_sample(ctx, sample);
            if request == ImageRequest::Picked {
                ctx.persist(Preference::Image);
            }
        }
        Err(error) => {
            log::warn!("Failed to load preview image: {error}");
            *ctx.status = Some(StatusLine::from_error(&error));
        }
    }
    Task::none()
}

pub fn handle_use_generated(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    set_sample(ctx, SampleImage::generated());
    *ctx.status = Some(StatusLine::info("status-generated-image"));
    ctx.persist(Preference::Image);
    Task::none()
}

fn set_sample(ctx: &mut UpdateContext<'_>, sample: SampleImage) {
    *ctx.sample = sample;
    ctx.preview_cache.clear();
    refresh(ctx);
}

pub fn handle_theme_selected(ctx: &mut UpdateContext<'_>, mode: ThemeMode) -> Task<Message> {
    *ctx.theme_mode = mode;
    *ctx.theme = mode.theme();
    ctx.persist(Preference::ThemeMode);
    Task::none()
}

pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: unic_langid::LanguageIdentifier,
) -> Task<Message> {
    ctx.i18n.set_locale(locale);
    ctx.persist(Preference::Language);
    Task::none()
}
