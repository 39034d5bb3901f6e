// SPDX-License-Identifier: MPL-2.0
//! Optics model: sensor catalog, focal length formulas and derived view state.
//!
//! This module has no dependency on the GUI toolkit. The application layer
//! feeds user input into an [`OpticsModel`] and reads a [`Readout`] back to
//! paint the preview, the badges and the angle diagram.
//!
//! # Examples
//!
//! ```
//! use focal_lens::optics::{LensCategory, OpticsModel, SensorId};
//!
//! let mut model = OpticsModel::default();
//! model.set_sensor(SensorId::ApsCCanon.sensor());
//! model.set_focal_length(18.0);
//!
//! assert_eq!(model.equivalent_focal_length(), 29);
//! assert_eq!(model.lens_category(), LensCategory::Wide);
//! ```

pub mod formulas;
pub mod geometry;
mod lens_category;
mod model;
mod sensor;
mod slider;

pub use formulas::{
    angle_of_view, equivalent_focal_length, horizontal_angle_of_view, min_focal_for_sensor,
    zoom_scale,
};
pub use geometry::{preview_crop, AngleWedge, CropRegion};
pub use lens_category::LensCategory;
pub use model::{ModelParams, OpticsModel, QuickFocal, Readout, SliderMark};
pub use sensor::{Sensor, SensorId, SENSORS};
pub use slider::{focal_to_slider_position, slider_position_to_focal, SliderPosition};
