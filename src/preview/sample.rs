// SPDX-License-Identifier: MPL-2.0
//! Decoded sample images and the procedural fallback landscape.

use crate::config::{GENERATED_PREVIEW_HEIGHT, GENERATED_PREVIEW_WIDTH, MAX_SAMPLE_EDGE_PX};
use crate::error::Result;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the current sample image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOrigin {
    File(PathBuf),
    Generated,
}

/// An image ready to be cropped by the preview.
#[derive(Debug, Clone)]
pub struct SampleImage {
    image: Arc<DynamicImage>,
    origin: ImageOrigin,
}

impl SampleImage {
    /// The procedural landscape at its default size.
    #[must_use]
    pub fn generated() -> Self {
        Self {
            image: Arc::new(DynamicImage::ImageRgba8(generate_landscape(
                GENERATED_PREVIEW_WIDTH,
                GENERATED_PREVIEW_HEIGHT,
            ))),
            origin: ImageOrigin::Generated,
        }
    }

    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    #[must_use]
    pub fn origin(&self) -> &ImageOrigin {
        &self.origin
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// File name for status messages, if the image came from disk.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        match &self.origin {
            ImageOrigin::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            ImageOrigin::Generated => None,
        }
    }
}

/// Decodes the image at `path`.
///
/// Large images are downscaled so their longest edge is at most
/// [`MAX_SAMPLE_EDGE_PX`]; crops are taken from the downscaled copy.
pub fn load_sample(path: &Path) -> Result<SampleImage> {
    let decoded = image_rs::open(path)?;
    let (width, height) = decoded.dimensions();

    let image = if width.max(height) > MAX_SAMPLE_EDGE_PX {
        log::debug!(
            "Downscaling {} from {width}x{height}",
            path.display()
        );
        decoded.resize(MAX_SAMPLE_EDGE_PX, MAX_SAMPLE_EDGE_PX, FilterType::Triangle)
    } else {
        decoded
    };

    Ok(SampleImage {
        image: Arc::new(image),
        origin: ImageOrigin::File(path.to_path_buf()),
    })
}

// Landscape palette (RGB).
const SKY_TOP: [u8; 3] = [64, 124, 196];
const SKY_HORIZON: [u8; 3] = [204, 226, 244];
const SUN: [u8; 3] = [255, 236, 178];
const MOUNTAIN_FAR: [u8; 3] = [120, 138, 168];
const MOUNTAIN_NEAR: [u8; 3] = [70, 86, 112];
const FIELD_NEAR: [u8; 3] = [58, 104, 48];
const FIELD_FAR: [u8; 3] = [118, 164, 84];
const CABIN: [u8; 3] = [251, 153, 54];
const ROOF: [u8; 3] = [33, 46, 64];
const POST: [u8; 3] = [52, 40, 32];

/// Renders a landscape: sky gradient with a sun, two mountain ridges, fields
/// with fence posts, and a small cabin at the exact center so the zoom is
/// easy to follow.
///
/// The output is deterministic for a given size.
#[must_use]
pub fn generate_landscape(width: u32, height: u32) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);
    let w = f64::from(width);
    let h = f64::from(height);
    let horizon = h * 0.5;

    RgbaImage::from_fn(width, height, |x, y| {
        let fx = f64::from(x);
        let fy = f64::from(y);
        let u = fx / w;

        if fy < horizon {
            let far_ridge = horizon - h * (0.12 + 0.05 * (u * 7.0).sin() + 0.03 * (u * 17.0).cos());
            let near_ridge = horizon - h * (0.05 + 0.03 * (u * 11.0 + 1.3).sin());

            if let Some(color) = cabin_pixel(fx - w / 2.0, fy - horizon, h) {
                return color;
            }
            if fy >= near_ridge {
                return rgba(MOUNTAIN_NEAR);
            }
            if fy >= far_ridge {
                return rgba(MOUNTAIN_FAR);
            }

            let sun_distance = (fx - w * 0.72).hypot(fy - h * 0.18) / h;
            if sun_distance < 0.05 {
                return rgba(SUN);
            }
            let sky = mix(SKY_TOP, SKY_HORIZON, fy / horizon);
            let glow = ((0.15 - sun_distance) / 0.15).clamp(0.0, 1.0) * 0.5;
            return rgba(mix(sky, SUN, glow));
        }

        let depth = (fy - horizon) / (h - horizon);
        let mut color = mix(FIELD_FAR, FIELD_NEAR, depth);

        // Alternating field bands, wider toward the viewer.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let band = (depth.sqrt() * 14.0) as u32;
        if band % 2 == 0 {
            color = mix(color, [0, 0, 0], 0.08);
        }

        // Fence posts along a line just below the horizon.
        let fence_y = horizon + h * 0.06;
        let post_spacing = w / 36.0;
        if fy > fence_y - h * 0.04 && fy < fence_y && fx % post_spacing < post_spacing * 0.12 {
            color = POST;
        }

        rgba(color)
    })
}

/// Cabin centered on the horizon; coordinates are relative to that point.
fn cabin_pixel(dx: f64, dy: f64, height: f64) -> Option<Rgba<u8>> {
    let half_width = height * 0.02;
    let wall_height = height * 0.025;
    let roof_height = height * 0.015;

    if dx.abs() <= half_width && dy > -wall_height {
        return Some(rgba(CABIN));
    }
    let roof_top = -wall_height - roof_height;
    if dy <= -wall_height && dy > roof_top {
        let roof_half = half_width * 1.2 * (dy - roof_top) / roof_height;
        if dx.abs() <= roof_half {
            return Some(rgba(ROOF));
        }
    }
    None
}

fn mix(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| {
        let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = value.round() as u8;
        value
    };
    [
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ]
}

fn rgba([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_sample_has_default_size() {
        let sample = SampleImage::generated();
        assert_eq!(
            sample.dimensions(),
            (GENERATED_PREVIEW_WIDTH, GENERATED_PREVIEW_HEIGHT)
        );
        assert_eq!(sample.origin(), &ImageOrigin::Generated);
        assert!(sample.file_name().is_none());
    }

    #[test]
    fn landscape_is_deterministic() {
        assert_eq!(generate_landscape(90, 60), generate_landscape(90, 60));
    }

    #[test]
    fn landscape_has_sky_on_top_and_cabin_at_center() {
        let image = generate_landscape(600, 400);
        let top = image.get_pixel(10, 0);
        assert!(top[2] > top[0], "sky should be blue: {top:?}");
        // Just above the horizon at the center sits the cabin.
        assert_eq!(*image.get_pixel(300, 198), rgba(CABIN));
    }

    #[test]
    fn zero_size_is_promoted_to_one_pixel() {
        let image = generate_landscape(0, 0);
        assert_eq!(image.dimensions(), (1, 1));
    }

    #[test]
    fn load_sample_reads_png() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tiny.png");
        generate_landscape(30, 20).save(&path).expect("write png");

        let sample = load_sample(&path).expect("load");
        assert_eq!(sample.dimensions(), (30, 20));
        assert_eq!(sample.file_name().as_deref(), Some("tiny.png"));
    }

    #[test]
    fn load_sample_downscales_large_images() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("wide.png");
        RgbaImage::new(MAX_SAMPLE_EDGE_PX * 2, 10)
            .save(&path)
            .expect("write png");

        let sample = load_sample(&path).expect("load");
        assert_eq!(sample.dimensions().0, MAX_SAMPLE_EDGE_PX);
    }

    #[test]
    fn load_sample_reports_missing_file() {
        let dir = tempdir().expect("tempdir");
        let err = load_sample(&dir.path().join("missing.png")).unwrap_err();
        assert_eq!(err.i18n_key(), "error-io");
    }

    #[test]
    fn load_sample_reports_undecodable_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").expect("write");
        let err = load_sample(&path).unwrap_err();
        assert_eq!(err.i18n_key(), "error-image");
    }
}
