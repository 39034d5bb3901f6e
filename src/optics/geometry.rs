// SPDX-License-Identifier: MPL-2.0
//! Geometry consumed by the renderer: the preview crop and the angle wedge.

/// Axis-aligned pixel rectangle inside a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// True if the region has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Centered crop showing an image through a frame of `aspect_ratio`
/// (width / height) magnified by `zoom`.
///
/// The frame first covers the largest centered area with the requested
/// aspect ratio, then shrinks by `zoom` around its center. Zoom values below
/// 1 (or NaN) are treated as 1. A non-empty image always yields at least a
/// 1×1 region inside its bounds.
#[must_use]
pub fn preview_crop(image_width: u32, image_height: u32, aspect_ratio: f64, zoom: f64) -> CropRegion {
    if image_width == 0 || image_height == 0 {
        return CropRegion {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
    }

    let width = f64::from(image_width);
    let height = f64::from(image_height);
    let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        width / height
    };

    let (frame_width, frame_height) = if width / height > aspect {
        (height * aspect, height)
    } else {
        (width, width / aspect)
    };

    let zoom = if zoom.is_nan() { 1.0 } else { zoom.max(1.0) };
    let crop_width = to_pixels(frame_width / zoom, image_width);
    let crop_height = to_pixels(frame_height / zoom, image_height);

    CropRegion {
        x: (image_width - crop_width) / 2,
        y: (image_height - crop_height) / 2,
        width: crop_width,
        height: crop_height,
    }
}

fn to_pixels(length: f64, limit: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pixels = length.round() as u32;
    pixels.clamp(1, limit)
}

/// Size of the angle diagram view box.
pub const WEDGE_VIEWBOX: (f32, f32) = (300.0, 120.0);

/// Camera position inside the view box.
pub const WEDGE_APEX: (f32, f32) = (20.0, 60.0);

/// Length of the wedge edges.
pub const WEDGE_RADIUS: f32 = 260.0;

/// Field-of-view wedge in view box coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleWedge {
    pub apex: (f32, f32),
    pub upper: (f32, f32),
    pub lower: (f32, f32),
}

impl AngleWedge {
    /// Builds the wedge for an angle of view in degrees.
    #[must_use]
    pub fn new(angle_deg: f64) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let half = (angle_deg.clamp(0.0, 180.0) / 2.0).to_radians() as f32;
        let (sin, cos) = half.sin_cos();
        let (apex_x, apex_y) = WEDGE_APEX;
        Self {
            apex: WEDGE_APEX,
            upper: (apex_x + WEDGE_RADIUS * cos, apex_y - WEDGE_RADIUS * sin),
            lower: (apex_x + WEDGE_RADIUS * cos, apex_y + WEDGE_RADIUS * sin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn assert_inside(region: CropRegion, width: u32, height: u32) {
        assert!(!region.is_empty());
        assert!(region.x + region.width <= width);
        assert!(region.y + region.height <= height);
    }

    #[test]
    fn zoom_one_covers_frame() {
        let region = preview_crop(1800, 1200, 1.5, 1.0);
        assert_eq!(
            region,
            CropRegion {
                x: 0,
                y: 0,
                width: 1800,
                height: 1200
            }
        );
    }

    #[test]
    fn wide_image_is_cropped_horizontally_first() {
        let region = preview_crop(2000, 1000, 1.5, 1.0);
        assert_eq!(region.width, 1500);
        assert_eq!(region.height, 1000);
        assert_eq!(region.x, 250);
        assert_eq!(region.y, 0);
    }

    #[test]
    fn tall_image_is_cropped_vertically_first() {
        let region = preview_crop(900, 1200, 1.5, 1.0);
        assert_eq!(region.width, 900);
        assert_eq!(region.height, 600);
        assert_eq!(region.y, 300);
    }

    #[test]
    fn zoom_shrinks_centered_region() {
        let region = preview_crop(1800, 1200, 1.5, 2.0);
        assert_eq!(region.width, 900);
        assert_eq!(region.height, 600);
        assert_eq!(region.x, 450);
        assert_eq!(region.y, 300);
        assert_inside(region, 1800, 1200);
    }

    #[test]
    fn zoom_below_one_is_ignored() {
        assert_eq!(preview_crop(300, 200, 1.5, 0.25), preview_crop(300, 200, 1.5, 1.0));
        assert_eq!(preview_crop(300, 200, 1.5, f64::NAN), preview_crop(300, 200, 1.5, 1.0));
    }

    #[test]
    fn extreme_zoom_keeps_one_pixel() {
        let region = preview_crop(30, 20, 1.5, 1.0e9);
        assert_eq!(region.width, 1);
        assert_eq!(region.height, 1);
        assert_inside(region, 30, 20);
    }

    #[test]
    fn region_shrinks_as_zoom_grows() {
        let mut previous = u32::MAX;
        for step in 0..40 {
            let zoom = 1.0 + f64::from(step) * 0.2;
            let region = preview_crop(1800, 1200, 1.5, zoom);
            assert_inside(region, 1800, 1200);
            assert!(region.width <= previous);
            previous = region.width;
        }
    }

    #[test]
    fn empty_image_gives_empty_region() {
        assert!(preview_crop(0, 100, 1.5, 2.0).is_empty());
    }

    #[test]
    fn wedge_is_symmetric_around_apex() {
        let wedge = AngleWedge::new(46.8);
        assert_abs_diff_eq!(wedge.upper.0, wedge.lower.0);
        assert_abs_diff_eq!(
            WEDGE_APEX.1 - wedge.upper.1,
            wedge.lower.1 - WEDGE_APEX.1,
            epsilon = 1e-4
        );
    }

    #[test]
    fn zero_angle_wedge_is_a_line() {
        let wedge = AngleWedge::new(0.0);
        assert_abs_diff_eq!(wedge.upper.0, WEDGE_APEX.0 + WEDGE_RADIUS);
        assert_abs_diff_eq!(wedge.upper.1, WEDGE_APEX.1);
    }

    #[test]
    fn wider_angle_opens_wedge() {
        let narrow = AngleWedge::new(10.0);
        let wide = AngleWedge::new(90.0);
        assert!(wide.lower.1 > narrow.lower.1);
        assert_abs_diff_eq!(wide.lower.1 - WEDGE_APEX.1, WEDGE_RADIUS * 0.5f32.sqrt(), epsilon = 1e-3);
    }
}
