// SPDX-License-Identifier: MPL-2.0
//! Logarithmic mapping between focal lengths and slider positions.
//!
//! Focal lengths span almost two orders of magnitude (7mm to 600mm), so the
//! slider moves linearly in `ln(focal)`. Positions run from 0 to 100.

use super::formulas::round_mm;
use crate::config::{MAX_SLIDER_POSITION, MIN_SLIDER_POSITION};

/// Slider position, guaranteed to be within valid range (0–100).
///
/// # Example
///
/// ```
/// use focal_lens::optics::SliderPosition;
///
/// assert_eq!(SliderPosition::new(42.0).value(), 42.0);
/// assert_eq!(SliderPosition::new(120.0).value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderPosition(f64);

impl SliderPosition {
    /// Creates a new slider position, clamping to valid range.
    ///
    /// NaN maps to the lowest position.
    #[must_use]
    pub fn new(position: f64) -> Self {
        if position.is_nan() {
            return Self(MIN_SLIDER_POSITION);
        }
        Self(position.clamp(MIN_SLIDER_POSITION, MAX_SLIDER_POSITION))
    }

    /// Returns the position value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Slider position of `focal_mm` on a log scale spanning
/// `[min_focal_mm, max_focal_mm]`.
#[must_use]
pub fn focal_to_slider_position(focal_mm: f64, min_focal_mm: f64, max_focal_mm: f64) -> f64 {
    let min_log = min_focal_mm.ln();
    let max_log = max_focal_mm.ln();
    (focal_mm.ln() - min_log) / (max_log - min_log) * MAX_SLIDER_POSITION
}

/// Focal length at `position` on a log scale spanning
/// `[min_focal_mm, max_focal_mm]`, rounded to the nearest millimeter.
#[must_use]
pub fn slider_position_to_focal(position: f64, min_focal_mm: f64, max_focal_mm: f64) -> u32 {
    let min_log = min_focal_mm.ln();
    let max_log = max_focal_mm.ln();
    round_mm((min_log + position / MAX_SLIDER_POSITION * (max_log - min_log)).exp())
}
