// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Preferences (sensor, focal length, theme, language, preview image) are
//! written back to `settings.toml` whenever the user changes them. Only the
//! changed preference is copied into the config, so session-only values from
//! the command line never reach the file.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::optics::OpticsModel;
use crate::preview::{ImageOrigin, SampleImage};
use crate::ui::theming::ThemeMode;

/// i18n key shown when preferences cannot be written.
pub const CONFIG_SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Snapshot of everything the user can change from the UI.
pub struct Preferences<'a> {
    pub model: &'a OpticsModel,
    pub theme_mode: ThemeMode,
    pub i18n: &'a I18n,
    pub sample: &'a SampleImage,
}

/// The preference a user action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// Sensor and equivalent focal length.
    Optics,
    ThemeMode,
    Language,
    Image,
}

/// Copies the `changed` preference into `cfg`, leaving the others as loaded.
pub fn apply_preference(cfg: &mut Config, prefs: &Preferences<'_>, changed: Preference) {
    match changed {
        Preference::Optics => cfg.remember_optics(prefs.model),
        Preference::ThemeMode => cfg.general.theme_mode = prefs.theme_mode,
        Preference::Language => {
            cfg.general.language = Some(prefs.i18n.current_locale().to_string());
        }
        Preference::Image => {
            cfg.preview.image = match prefs.sample.origin() {
                ImageOrigin::File(path) => Some(path.clone()),
                ImageOrigin::Generated => None,
            };
        }
    }
}

/// Stores the `changed` preference in `cfg` and writes it to disk.
///
/// Returns the i18n key of a warning when saving fails. Guarded during tests
/// to keep isolation: unit tests exercise [`apply_preference`] directly.
pub fn persist_preference(
    cfg: &mut Config,
    prefs: &Preferences<'_>,
    changed: Preference,
) -> Option<&'static str> {
    apply_preference(cfg, prefs, changed);

    if cfg!(test) {
        return None;
    }

    match config::save(cfg) {
        Ok(()) => None,
        Err(error) => {
            log::warn!("Failed to save config: {error}");
            Some(CONFIG_SAVE_ERROR_KEY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::SensorId;
    use crate::test_utils::model_at;
    use std::path::PathBuf;

    fn fixture() -> (OpticsModel, I18n, SampleImage) {
        (
            model_at(SensorId::MicroFourThirds, 25.0),
            I18n::new(Some("fr".to_string()), &Config::default()),
            SampleImage::generated(),
        )
    }

    #[test]
    fn each_preference_is_copied_into_config() {
        let (model, i18n, sample) = fixture();
        let prefs = Preferences {
            model: &model,
            theme_mode: ThemeMode::Dark,
            i18n: &i18n,
            sample: &sample,
        };
        let mut cfg = Config::default();
        cfg.preview.image = Some(PathBuf::from("/old.png"));

        for changed in [
            Preference::Optics,
            Preference::ThemeMode,
            Preference::Language,
            Preference::Image,
        ] {
            assert!(persist_preference(&mut cfg, &prefs, changed).is_none());
        }

        assert_eq!(cfg.optics.sensor, Some(SensorId::MicroFourThirds));
        assert_eq!(cfg.optics.equivalent_focal_mm, Some(50.0));
        assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);
        assert_eq!(cfg.general.language.as_deref(), Some("fr"));
        assert!(cfg.preview.image.is_none());
    }

    #[test]
    fn only_the_changed_preference_is_copied() {
        let (model, i18n, sample) = fixture();
        let prefs = Preferences {
            model: &model,
            theme_mode: ThemeMode::Dark,
            i18n: &i18n,
            sample: &sample,
        };
        let mut cfg = Config::default();
        cfg.preview.image = Some(PathBuf::from("/old.png"));
        let before = cfg.clone();

        apply_preference(&mut cfg, &prefs, Preference::ThemeMode);

        assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);
        assert_eq!(cfg.optics, before.optics);
        assert_eq!(cfg.general.language, before.general.language);
        assert_eq!(cfg.preview, before.preview);
    }
}
