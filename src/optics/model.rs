// SPDX-License-Identifier: MPL-2.0
//! Optics state holder.
//!
//! [`OpticsModel`] stores only the selected sensor and the full-frame
//! equivalent focal length. Everything else (physical focal length, angle of
//! view, zoom, lens category, slider position) is derived on demand, so there
//! is no cached value that could go stale after an input changes.
//!
//! The equivalent focal length is the source of truth: switching sensors keeps
//! the framing and recomputes the physical focal length, instead of
//! accumulating rounding errors by converting back and forth.

use super::formulas::{
    angle_of_view, equivalent_focal_length, horizontal_angle_of_view, min_focal_for_sensor,
    zoom_scale,
};
use super::lens_category::LensCategory;
use super::sensor::{Sensor, SensorId};
use super::slider::{focal_to_slider_position, slider_position_to_focal, SliderPosition};
use crate::config::{
    DEFAULT_MAX_ZOOM_SCALE, MAX_REFERENCE_FOCAL_MM, MAX_SLIDER_FOCAL_MM, MIN_MAX_ZOOM_SCALE,
    MIN_REFERENCE_FOCAL_MM, MIN_SLIDER_FOCAL_MM, QUICK_FOCALS_MM, REFERENCE_FOCAL_FF_MM,
    SLIDER_MARKS_MM,
};

/// Tunables shared by every sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Full-frame focal length shown at zoom ×1; also the lowest reachable
    /// equivalent focal length.
    pub reference_focal_mm: f64,
    /// Physical focal length at slider position 0.
    pub min_slider_focal_mm: f64,
    /// Physical focal length at slider position 100.
    pub max_slider_focal_mm: f64,
    /// Upper bound for [`OpticsModel::zoom_scale`], if any.
    pub max_zoom_scale: Option<f64>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            reference_focal_mm: REFERENCE_FOCAL_FF_MM,
            min_slider_focal_mm: MIN_SLIDER_FOCAL_MM,
            max_slider_focal_mm: MAX_SLIDER_FOCAL_MM,
            max_zoom_scale: Some(DEFAULT_MAX_ZOOM_SCALE),
        }
    }
}

impl ModelParams {
    /// Returns a copy with every field forced into its supported range.
    ///
    /// Non-finite values fall back to the defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };

        let reference_focal_mm = finite_or(self.reference_focal_mm, defaults.reference_focal_mm)
            .clamp(MIN_REFERENCE_FOCAL_MM, MAX_REFERENCE_FOCAL_MM);
        let min_slider_focal_mm =
            finite_or(self.min_slider_focal_mm, defaults.min_slider_focal_mm).max(1.0);
        let mut max_slider_focal_mm =
            finite_or(self.max_slider_focal_mm, defaults.max_slider_focal_mm);
        if max_slider_focal_mm <= min_slider_focal_mm {
            max_slider_focal_mm = min_slider_focal_mm * 2.0;
        }
        // The full-frame minimum focal is round(reference); the track must reach it.
        max_slider_focal_mm = max_slider_focal_mm.max(reference_focal_mm.ceil() + 1.0);
        let max_zoom_scale = self
            .max_zoom_scale
            .map(|cap| finite_or(cap, DEFAULT_MAX_ZOOM_SCALE).max(MIN_MAX_ZOOM_SCALE));

        Self {
            reference_focal_mm,
            min_slider_focal_mm,
            max_slider_focal_mm,
            max_zoom_scale,
        }
    }
}

/// A labelled focal length under the slider track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderMark {
    pub focal_mm: u32,
    pub position: f64,
    /// False when the focal is below the current sensor's minimum.
    pub reachable: bool,
}

/// An entry of the quick reference grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickFocal {
    pub focal_mm: u32,
    pub equivalent_mm: u32,
    /// True when this is the current physical focal length.
    pub active: bool,
}

/// Every derived quantity at one point in time, for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub sensor: Sensor,
    pub focal_length_mm: u32,
    pub min_focal_mm: u32,
    pub equivalent_focal_mm: u32,
    pub angle_of_view_deg: f64,
    pub horizontal_angle_deg: f64,
    pub zoom_scale: f64,
    pub lens_category: LensCategory,
    pub slider_position: SliderPosition,
    pub blocked_slider_position: SliderPosition,
}

/// Selected sensor plus full-frame equivalent focal length.
#[derive(Debug, Clone, PartialEq)]
pub struct OpticsModel {
    sensor: Sensor,
    equivalent_mm: f64,
    params: ModelParams,
}

impl Default for OpticsModel {
    fn default() -> Self {
        Self::new(ModelParams::default())
    }
}

impl OpticsModel {
    /// Full-frame sensor at the reference focal length.
    #[must_use]
    pub fn new(params: ModelParams) -> Self {
        let params = params.sanitized();
        Self {
            sensor: Sensor::default(),
            equivalent_mm: params.reference_focal_mm,
            params,
        }
    }

    /// Restores a model from persisted values, clamping them as needed.
    #[must_use]
    pub fn with_state(params: ModelParams, sensor: SensorId, equivalent_mm: f64) -> Self {
        let mut model = Self::new(params);
        model.set_sensor(sensor.sensor());
        model.set_equivalent_focal_length(equivalent_mm);
        model
    }

    #[must_use]
    pub fn params(&self) -> ModelParams {
        self.params
    }

    #[must_use]
    pub fn sensor(&self) -> Sensor {
        self.sensor
    }

    /// The stored (unrounded) equivalent focal length.
    #[must_use]
    pub fn equivalent_mm(&self) -> f64 {
        self.equivalent_mm
    }

    // ---------------------------------------------------------------------
    // Inputs
    // ---------------------------------------------------------------------

    /// Selects another sensor, keeping the equivalent focal length.
    pub fn set_sensor(&mut self, sensor: Sensor) {
        self.sensor = sensor;
        self.equivalent_mm = self.clamp_equivalent(self.equivalent_mm);
    }

    /// Sets the physical focal length, clamped to what the sensor can reach.
    pub fn set_focal_length(&mut self, focal_mm: f64) {
        let lower = f64::from(self.min_focal_for_sensor());
        let focal = if focal_mm.is_nan() {
            lower
        } else {
            focal_mm.clamp(lower, self.params.max_slider_focal_mm.max(lower))
        };
        self.store_focal(focal);
    }

    /// Sets the full-frame equivalent focal length directly.
    pub fn set_equivalent_focal_length(&mut self, equivalent_mm: f64) {
        self.equivalent_mm = self.clamp_equivalent(equivalent_mm);
    }

    /// Moves the focal slider to `position`.
    pub fn set_slider_position(&mut self, position: f64) {
        let position = SliderPosition::new(position);
        let focal = slider_position_to_focal(
            position.value(),
            self.params.min_slider_focal_mm,
            self.params.max_slider_focal_mm,
        )
        .max(self.min_focal_for_sensor());
        self.store_focal(f64::from(focal));
    }

    /// Applies one of the quick reference focals (physical mm).
    pub fn apply_quick_focal(&mut self, focal_mm: u32) {
        self.set_equivalent_focal_length(f64::from(focal_mm) * self.sensor.crop_factor);
    }

    fn store_focal(&mut self, focal_mm: f64) {
        self.equivalent_mm = (focal_mm * self.sensor.crop_factor).max(self.params.reference_focal_mm);
    }

    fn clamp_equivalent(&self, equivalent_mm: f64) -> f64 {
        let lower = self.params.reference_focal_mm;
        let upper = (self.params.max_slider_focal_mm * self.sensor.crop_factor).max(lower);
        if equivalent_mm.is_nan() {
            return lower;
        }
        equivalent_mm.clamp(lower, upper)
    }

    // ---------------------------------------------------------------------
    // Derived values
    // ---------------------------------------------------------------------

    /// Smallest physical focal length reaching the reference equivalent.
    #[must_use]
    pub fn min_focal_for_sensor(&self) -> u32 {
        min_focal_for_sensor(self.params.reference_focal_mm, self.sensor.crop_factor)
    }

    /// Physical focal length (mm) for the current sensor.
    #[must_use]
    pub fn focal_length(&self) -> u32 {
        super::formulas::round_mm(self.equivalent_mm / self.sensor.crop_factor)
            .max(self.min_focal_for_sensor())
    }

    /// Full-frame equivalent recomputed from the rounded physical focal.
    #[must_use]
    pub fn equivalent_focal_length(&self) -> u32 {
        equivalent_focal_length(f64::from(self.focal_length()), self.sensor.crop_factor)
    }

    /// Diagonal angle of view in degrees.
    #[must_use]
    pub fn angle_of_view(&self) -> f64 {
        angle_of_view(
            f64::from(self.focal_length()),
            self.sensor.width_mm,
            self.sensor.height_mm,
        )
    }

    /// Horizontal angle of view in degrees.
    #[must_use]
    pub fn horizontal_angle_of_view(&self) -> f64 {
        horizontal_angle_of_view(f64::from(self.focal_length()), self.sensor.width_mm)
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        zoom_scale(
            f64::from(self.equivalent_focal_length()),
            self.params.reference_focal_mm,
            self.params.max_zoom_scale,
        )
    }

    #[must_use]
    pub fn lens_category(&self) -> LensCategory {
        LensCategory::from_equivalent(self.equivalent_focal_length())
    }

    /// Slider position of the current physical focal length.
    #[must_use]
    pub fn slider_position(&self) -> SliderPosition {
        self.position_of(self.focal_length())
    }

    /// Slider position below which focals are out of reach for the sensor.
    #[must_use]
    pub fn blocked_slider_position(&self) -> SliderPosition {
        self.position_of(self.min_focal_for_sensor())
    }

    fn position_of(&self, focal_mm: u32) -> SliderPosition {
        let focal = focal_mm.max(self.min_focal_for_sensor());
        SliderPosition::new(focal_to_slider_position(
            f64::from(focal),
            self.params.min_slider_focal_mm,
            self.params.max_slider_focal_mm,
        ))
    }

    /// Labelled marks under the slider track.
    #[must_use]
    pub fn slider_marks(&self) -> Vec<SliderMark> {
        let min_focal = self.min_focal_for_sensor();
        SLIDER_MARKS_MM
            .iter()
            .copied()
            .filter(|&focal| {
                let focal = f64::from(focal);
                focal >= self.params.min_slider_focal_mm && focal <= self.params.max_slider_focal_mm
            })
            .map(|focal_mm| SliderMark {
                focal_mm,
                position: focal_to_slider_position(
                    f64::from(focal_mm),
                    self.params.min_slider_focal_mm,
                    self.params.max_slider_focal_mm,
                ),
                reachable: focal_mm >= min_focal,
            })
            .collect()
    }

    /// Quick reference focals reachable on the current sensor.
    #[must_use]
    pub fn quick_focals(&self) -> Vec<QuickFocal> {
        let min_focal = self.min_focal_for_sensor();
        let current = self.focal_length();
        QUICK_FOCALS_MM
            .iter()
            .copied()
            .filter(|&focal| focal >= min_focal)
            .map(|focal_mm| QuickFocal {
                focal_mm,
                equivalent_mm: equivalent_focal_length(f64::from(focal_mm), self.sensor.crop_factor),
                active: focal_mm == current,
            })
            .collect()
    }

    /// Snapshot of every derived value.
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            sensor: self.sensor,
            focal_length_mm: self.focal_length(),
            min_focal_mm: self.min_focal_for_sensor(),
            equivalent_focal_mm: self.equivalent_focal_length(),
            angle_of_view_deg: self.angle_of_view(),
            horizontal_angle_deg: self.horizontal_angle_of_view(),
            zoom_scale: self.zoom_scale(),
            lens_category: self.lens_category(),
            slider_position: self.slider_position(),
            blocked_slider_position: self.blocked_slider_position(),
        }
    }
}
