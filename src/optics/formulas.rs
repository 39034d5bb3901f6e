// SPDX-License-Identifier: MPL-2.0
//! Closed-form optical formulas.
//!
//! Every function here is pure and total over positive inputs. Callers are
//! expected to clamp their inputs; see [`crate::optics::OpticsModel`].

/// Full-frame equivalent of `focal_mm` on a sensor with `crop_factor`,
/// rounded to the nearest millimeter.
#[must_use]
pub fn equivalent_focal_length(focal_mm: f64, crop_factor: f64) -> u32 {
    round_mm(focal_mm * crop_factor)
}

/// Diagonal angle of view in degrees.
#[must_use]
pub fn angle_of_view(focal_mm: f64, sensor_width_mm: f64, sensor_height_mm: f64) -> f64 {
    let diagonal = sensor_width_mm.hypot(sensor_height_mm);
    (2.0 * (diagonal / (2.0 * focal_mm)).atan()).to_degrees()
}

/// Horizontal angle of view in degrees.
#[must_use]
pub fn horizontal_angle_of_view(focal_mm: f64, sensor_width_mm: f64) -> f64 {
    (2.0 * (sensor_width_mm / (2.0 * focal_mm)).atan()).to_degrees()
}

/// Preview magnification relative to the reference focal length.
///
/// With `max_scale` set, the result never exceeds it.
#[must_use]
pub fn zoom_scale(equivalent_mm: f64, reference_mm: f64, max_scale: Option<f64>) -> f64 {
    let scale = equivalent_mm / reference_mm;
    match max_scale {
        Some(cap) => scale.min(cap),
        None => scale,
    }
}

/// Smallest physical focal length that still reaches `reference_mm`
/// equivalent on a sensor with `crop_factor`.
///
/// This is `round(reference / crop)`, bumped by one millimeter when rounding
/// down would leave the equivalent under the reference.
#[must_use]
pub fn min_focal_for_sensor(reference_mm: f64, crop_factor: f64) -> u32 {
    let focal = round_mm(reference_mm / crop_factor);
    if equivalent_focal_length(f64::from(focal), crop_factor) < round_mm(reference_mm) {
        focal.saturating_add(1)
    } else {
        focal
    }
}

/// Rounds a millimeter value half away from zero, saturating at the `u32`
/// bounds.
#[must_use]
pub fn round_mm(mm: f64) -> u32 {
    // `as` saturates: negatives and NaN become 0, huge values become u32::MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = mm.round() as u32;
    rounded
}
