// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[optics]` - Last selected sensor and focal length, reference focal, zoom cap
//! - `[preview]` - Image shown in the field-of-view preview
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set the `FOCAL_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use focal_lens::config::{self, Config};
//! use focal_lens::optics::SensorId;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.optics.sensor = Some(SensorId::MicroFourThirds);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::optics::{ModelParams, OpticsModel, SensorId};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Optics model settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpticsConfig {
    /// Last selected sensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<SensorId>,

    /// Last full-frame equivalent focal length (mm).
    #[serde(
        default = "default_equivalent_focal_mm",
        skip_serializing_if = "Option::is_none"
    )]
    pub equivalent_focal_mm: Option<f64>,

    /// Full-frame focal length the preview image represents (zoom ×1).
    #[serde(
        default = "default_reference_focal_mm",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_focal_mm: Option<f64>,

    /// Whether the preview zoom is capped.
    #[serde(default = "default_cap_zoom", skip_serializing_if = "Option::is_none")]
    pub cap_zoom: Option<bool>,

    /// Upper bound for the preview zoom when capped.
    #[serde(
        default = "default_max_zoom_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_zoom_scale: Option<f64>,
}

impl Default for OpticsConfig {
    fn default() -> Self {
        Self {
            sensor: Some(SensorId::default()),
            equivalent_focal_mm: default_equivalent_focal_mm(),
            reference_focal_mm: default_reference_focal_mm(),
            cap_zoom: default_cap_zoom(),
            max_zoom_scale: default_max_zoom_scale(),
        }
    }
}

/// Preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PreviewConfig {
    /// Image shown in the preview; a generated landscape is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Optics model settings.
    #[serde(default)]
    pub optics: OpticsConfig,

    /// Preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Model parameters described by the `[optics]` section.
    ///
    /// Values are sanitized by the model, so a hand-edited file cannot put it
    /// into an invalid state.
    #[must_use]
    pub fn model_params(&self) -> ModelParams {
        let defaults = ModelParams::default();
        let cap = if self.optics.cap_zoom.unwrap_or(true) {
            Some(
                self.optics
                    .max_zoom_scale
                    .unwrap_or(DEFAULT_MAX_ZOOM_SCALE),
            )
        } else {
            None
        };
        ModelParams {
            reference_focal_mm: self
                .optics
                .reference_focal_mm
                .unwrap_or(defaults.reference_focal_mm),
            max_zoom_scale: cap,
            ..defaults
        }
        .sanitized()
    }

    /// Builds the optics model restored from this configuration.
    #[must_use]
    pub fn optics_model(&self) -> OpticsModel {
        let params = self.model_params();
        OpticsModel::with_state(
            params,
            self.optics.sensor.unwrap_or_default(),
            self.optics
                .equivalent_focal_mm
                .unwrap_or(params.reference_focal_mm),
        )
    }

    /// Stores the model's sensor and focal length.
    pub fn remember_optics(&mut self, model: &OpticsModel) {
        self.optics.sensor = Some(model.sensor().id);
        self.optics.equivalent_focal_mm = Some(model.equivalent_mm());
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_equivalent_focal_mm() -> Option<f64> {
    Some(REFERENCE_FOCAL_FF_MM)
}

fn default_reference_focal_mm() -> Option<f64> {
    Some(REFERENCE_FOCAL_FF_MM)
}

fn default_cap_zoom() -> Option<bool> {
    Some(true)
}

fn default_max_zoom_scale() -> Option<f64> {
    Some(DEFAULT_MAX_ZOOM_SCALE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            optics: OpticsConfig {
                sensor: Some(SensorId::MicroFourThirds),
                equivalent_focal_mm: Some(50.0),
                reference_focal_mm: Some(24.0),
                cap_zoom: Some(false),
                max_zoom_scale: Some(6.0),
            },
            preview: PreviewConfig {
                image: Some(PathBuf::from("/photos/landscape.jpg")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[optics\nsensor =")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[optics]\nsensor = \"one-inch\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.optics.sensor, Some(SensorId::OneInch));
        assert_eq!(loaded.optics.reference_focal_mm, Some(REFERENCE_FOCAL_FF_MM));
        assert_eq!(loaded.general, GeneralConfig::default());
        assert!(loaded.preview.image.is_none());
    }

    #[test]
    fn unknown_sensor_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[optics]\nsensor = \"medium-format\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn optics_model_restores_state_and_clamps() {
        let mut config = Config::default();
        config.optics.sensor = Some(SensorId::ApsCCanon);
        config.optics.equivalent_focal_mm = Some(4.0);
        config.optics.reference_focal_mm = Some(500.0);

        let model = config.optics_model();
        assert_eq!(model.sensor().id, SensorId::ApsCCanon);
        assert_abs_diff_eq!(model.params().reference_focal_mm, MAX_REFERENCE_FOCAL_MM);
        assert!(f64::from(model.equivalent_focal_length()) >= MAX_REFERENCE_FOCAL_MM);
    }

    #[test]
    fn disabling_zoom_cap_removes_bound() {
        let mut config = Config::default();
        config.optics.cap_zoom = Some(false);
        assert_eq!(config.model_params().max_zoom_scale, None);

        config.optics.cap_zoom = Some(true);
        config.optics.max_zoom_scale = Some(4.0);
        assert_eq!(config.model_params().max_zoom_scale, Some(4.0));
    }

    #[test]
    fn remember_optics_stores_source_of_truth() {
        let mut model = OpticsModel::default();
        model.set_sensor(SensorId::OneInch.sensor());
        model.set_focal_length(10.0);

        let mut config = Config::default();
        config.remember_optics(&model);
        assert_eq!(config.optics.sensor, Some(SensorId::OneInch));
        assert_abs_diff_eq!(config.optics.equivalent_focal_mm.unwrap_or_default(), 27.0, epsilon = 1e-9);
    }
}
