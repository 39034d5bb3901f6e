// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the optics model, localization, the
//! preview image and persisted preferences, and translates messages into
//! model calls and side effects like config persistence or image loading.

mod message;
pub mod paths;
mod persistence;
mod status;
mod subscription;
mod update;
mod view;

pub use message::{Flags, ImageRequest, Message};
pub use status::{StatusKind, StatusLine};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::optics::{OpticsModel, SensorId};
use crate::preview::{PreviewCache, SampleImage};
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    model: OpticsModel,
    config: Config,
    theme_mode: ThemeMode,
    /// Theme resolved from `theme_mode` when it was last selected.
    theme: Theme,
    sample: SampleImage,
    preview_cache: PreviewCache,
    preview_handle: Handle,
    /// Whether an image is being decoded in the background.
    loading_image: bool,
    status: Option<StatusLine>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("model", &self.model)
            .field("theme_mode", &self.theme_mode)
            .field("image", self.sample.origin())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 900;

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

    // iced 0.14 requires an Fn boot closure; the flags are only consumed once.
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
        let model = OpticsModel::default();
        let sample = SampleImage::generated();
        let mut preview_cache = PreviewCache::default();
        let preview_handle = update::refresh_preview(&model, &sample, &mut preview_cache);
        let theme_mode = ThemeMode::default();

        Self {
            i18n: I18n::default(),
            model,
            config: Config::default(),
            theme_mode,
            theme: theme_mode.theme(),
            sample,
            preview_cache,
            preview_handle,
            loading_image: false,
            status: None,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags, and
    /// starts loading the preview image if one is set.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut model = config.optics_model();
        if let Some(raw) = flags.sensor.as_deref() {
            match SensorId::parse(raw) {
                Some(id) => model.set_sensor(id.sensor()),
                None => log::warn!("Unknown sensor id {raw:?}, keeping {}", model.sensor().id),
            }
        }
        if let Some(focal) = flags.focal {
            model.set_focal_length(focal);
        }

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.theme(),
            ..Self::default()
        };
        app.model = model;
        app.preview_handle =
            update::refresh_preview(&app.model, &app.sample, &mut app.preview_cache);

        if let Some(key) = config_warning {
            app.status = Some(StatusLine::error(&key));
        }

        let image_path = flags.image_path.or_else(|| config.preview.image.clone());
        app.config = config;

        let task = match image_path {
            Some(path) => {
                app.loading_image = true;
                update::load_image_task(path, ImageRequest::Startup)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.sample.file_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_keyboard_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            model: &mut self.model,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            theme: &mut self.theme,
            sample: &mut self.sample,
            preview_cache: &mut self.preview_cache,
            preview_handle: &mut self.preview_handle,
            loading_image: &mut self.loading_image,
            status: &mut self.status,
        };

        match message {
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::NudgeSlider(steps) => update::handle_nudge(&mut ctx, steps),
            Message::OpenImage => update::handle_open_image(),
            Message::OpenImageDialogResult(path) => update::handle_dialog_result(&mut ctx, path),
            Message::ImageLoaded(request, result) => {
                update::handle_image_loaded(&mut ctx, request, result)
            }
            Message::UseGeneratedImage => update::handle_use_generated(&mut ctx),
            Message::ThemeSelected(mode) => update::handle_theme_selected(&mut ctx, mode),
            Message::LanguageSelected(locale) => {
                update::handle_language_selected(&mut ctx, locale)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            model: &self.model,
            theme_mode: self.theme_mode,
            sample: &self.sample,
            preview_handle: &self.preview_handle,
            loading_image: self.loading_image,
            status: self.status.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::preview::{load_sample, ImageOrigin};
    use crate::test_utils::env_lock;
    use crate::ui::controls;
    use std::path::Path;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        std::env::remove_var(paths::ENV_CONFIG_DIR);
    }

    fn english_flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    #[test]
    fn new_starts_on_full_frame_with_generated_image() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(english_flags());
            assert_eq!(app.model.sensor().id, SensorId::FullFrame);
            assert_eq!(app.model.focal_length(), 18);
            assert_eq!(app.sample.origin(), &ImageOrigin::Generated);
            assert!(!app.loading_image);
            assert!(app.status.is_none());
        });
    }

    #[test]
    fn cli_flags_override_config() {
        with_temp_config_dir(|dir| {
            let mut cfg = Config::default();
            cfg.optics.sensor = Some(SensorId::MicroFourThirds);
            config::save_to_path(&cfg, &dir.join("settings.toml")).expect("save");

            let (app, _task) = App::new(Flags {
                sensor: Some("aps-c-canon".to_string()),
                focal: Some(50.0),
                ..english_flags()
            });
            assert_eq!(app.model.sensor().id, SensorId::ApsCCanon);
            assert_eq!(app.model.equivalent_focal_length(), 80);
        });
    }

    #[test]
    fn cli_flags_are_not_written_back_to_config() {
        with_temp_config_dir(|dir| {
            let settings = dir.join("settings.toml");
            let mut cfg = Config::default();
            cfg.optics.sensor = Some(SensorId::MicroFourThirds);
            cfg.optics.equivalent_focal_mm = Some(50.0);
            config::save_to_path(&cfg, &settings).expect("save");

            let image = dir.join("cli.png");
            crate::preview::generate_landscape(60, 40)
                .save(&image)
                .expect("write png");

            let (mut app, _task) = App::new(Flags {
                sensor: Some("one-inch".to_string()),
                focal: Some(100.0),
                image_path: Some(image.clone()),
                ..english_flags()
            });
            let sample = load_sample(&image).expect("load");
            let _ = app.update(Message::ImageLoaded(ImageRequest::Startup, Ok(sample)));
            let _ = app.update(Message::ThemeSelected(ThemeMode::Dark));

            assert_eq!(app.model.sensor().id, SensorId::OneInch);
            assert_eq!(app.sample.origin(), &ImageOrigin::File(image));

            let on_disk = config::load_from_path(&settings).expect("reload");
            assert_eq!(app.config.optics, on_disk.optics);
            assert_eq!(app.config.preview, on_disk.preview);
            assert_eq!(app.config.optics.sensor, Some(SensorId::MicroFourThirds));
            assert_eq!(app.config.optics.equivalent_focal_mm, Some(50.0));
            assert!(app.config.preview.image.is_none());
            assert_eq!(app.config.general.theme_mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn unknown_cli_sensor_keeps_configured_one() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                sensor: Some("medium-format".to_string()),
                ..english_flags()
            });
            assert_eq!(app.model.sensor().id, SensorId::FullFrame);
        });
    }

    #[test]
    fn malformed_config_shows_warning() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "[optics\nsensor = ").expect("write");
            let (app, _task) = App::new(english_flags());
            let status = app.status.as_ref().expect("status");
            assert_eq!(status.kind(), StatusKind::Error);
            assert_eq!(
                status.text(&app.i18n),
                "The settings file could not be read. Defaults are in use."
            );
        });
    }

    #[test]
    fn configured_image_starts_loading() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                image_path: Some("/photos/alps.jpg".into()),
                ..english_flags()
            });
            assert!(app.loading_image);
        });
    }

    #[test]
    fn sensor_change_keeps_equivalent() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::QuickFocalPressed(50)));
        assert_eq!(app.model.equivalent_focal_length(), 50);

        let _ = app.update(Message::Controls(controls::Message::SensorSelected(
            SensorId::MicroFourThirds,
        )));
        assert_eq!(app.model.focal_length(), 25);
        assert_eq!(app.model.equivalent_focal_length(), 50);
        assert_eq!(app.config.optics.sensor, Some(SensorId::MicroFourThirds));
    }

    #[test]
    fn slider_move_updates_model_and_release_persists() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::SliderMoved(50.0)));
        assert!(app.model.focal_length() > 18);
        assert!(app.config.optics.equivalent_focal_mm != Some(app.model.equivalent_mm()));

        let _ = app.update(Message::Controls(controls::Message::SliderReleased));
        assert_eq!(
            app.config.optics.equivalent_focal_mm,
            Some(app.model.equivalent_mm())
        );
    }

    #[test]
    fn nudge_always_changes_focal_until_bounds() {
        let mut app = App::default();
        let _ = app.update(Message::NudgeSlider(1));
        assert_eq!(app.model.focal_length(), 19);

        let _ = app.update(Message::NudgeSlider(-1));
        assert_eq!(app.model.focal_length(), 18);

        // Already at the sensor minimum.
        let _ = app.update(Message::NudgeSlider(-1));
        assert_eq!(app.model.focal_length(), 18);
    }

    #[test]
    fn image_load_error_sets_status_and_keeps_image() {
        let mut app = App::default();
        app.loading_image = true;
        let _ = app.update(Message::ImageLoaded(
            ImageRequest::Picked,
            Err(Error::Image("bad".into())),
        ));

        assert!(!app.loading_image);
        assert_eq!(app.sample.origin(), &ImageOrigin::Generated);
        let status = app.status.as_ref().expect("status");
        assert_eq!(status.kind(), StatusKind::Error);
    }

    #[test]
    fn image_load_success_switches_sample_and_title() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("field.png");
        crate::preview::generate_landscape(60, 40)
            .save(&path)
            .expect("write png");
        let sample = load_sample(&path).expect("load");

        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(ImageRequest::Picked, Ok(sample)));

        assert_eq!(app.sample.origin(), &ImageOrigin::File(path.clone()));
        assert_eq!(app.config.preview.image.as_deref(), Some(path.as_path()));
        assert!(app.title().starts_with("field.png - "));

        let _ = app.update(Message::UseGeneratedImage);
        assert_eq!(app.sample.origin(), &ImageOrigin::Generated);
        assert!(app.config.preview.image.is_none());
    }

    #[test]
    fn cancelled_dialog_does_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::OpenImageDialogResult(None));
        assert!(!app.loading_image);
    }

    #[test]
    fn theme_and_language_are_remembered() {
        let mut app = App::default();
        let _ = app.update(Message::ThemeSelected(ThemeMode::Dark));
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Dark);

        let _ = app.update(Message::ThemeSelected(ThemeMode::Light));
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::LanguageSelected("fr".parse().unwrap()));
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
        assert_eq!(app.config.general.language.as_deref(), Some("fr"));
    }
}
