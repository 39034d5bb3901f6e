// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reference focal**: Focal length the sample image represents (zoom ×1)
//! - **Slider**: Logarithmic focal slider bounds, step and marks
//! - **Zoom**: Preview zoom cap
//! - **Preview**: Frame aspect ratio and crop cache

// ==========================================================================
// Reference Focal Defaults
// ==========================================================================

/// Full-frame focal length the preview image is considered to be shot at.
///
/// The preview shows zoom ×1 at this equivalent focal length and no sensor
/// may go below it.
pub const REFERENCE_FOCAL_FF_MM: f64 = 18.0;

/// Smallest reference focal length accepted from the config file.
pub const MIN_REFERENCE_FOCAL_MM: f64 = 8.0;

/// Largest reference focal length accepted from the config file.
pub const MAX_REFERENCE_FOCAL_MM: f64 = 50.0;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Absolute minimum physical focal length on the slider (mm).
///
/// Low enough to reach ~18mm equivalent on a 1-inch sensor.
pub const MIN_SLIDER_FOCAL_MM: f64 = 7.0;

/// Absolute maximum physical focal length on the slider (mm).
pub const MAX_SLIDER_FOCAL_MM: f64 = 600.0;

/// Lowest slider position.
pub const MIN_SLIDER_POSITION: f64 = 0.0;

/// Highest slider position.
pub const MAX_SLIDER_POSITION: f64 = 100.0;

/// Slider step in position units.
pub const SLIDER_STEP: f64 = 0.5;

/// Physical focal lengths labelled under the slider track.
pub const SLIDER_MARKS_MM: [u32; 11] = [7, 9, 12, 18, 24, 35, 50, 85, 135, 200, 400];

/// Physical focal lengths offered in the quick reference grid.
pub const QUICK_FOCALS_MM: [u32; 8] = [9, 12, 18, 24, 35, 50, 85, 135];

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default upper bound for the preview zoom scale.
pub const DEFAULT_MAX_ZOOM_SCALE: f64 = 8.0;

/// A configured zoom cap may not go below ×1 (no zoom at the reference).
pub const MIN_MAX_ZOOM_SCALE: f64 = 1.0;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Preview frame aspect ratio (width / height), 3:2 like a 35mm frame.
pub const PREVIEW_ASPECT_RATIO: f64 = 3.0 / 2.0;

/// Size of the procedurally generated landscape used when no image is set.
pub const GENERATED_PREVIEW_WIDTH: u32 = 1800;

/// Height of the generated landscape.
pub const GENERATED_PREVIEW_HEIGHT: u32 = 1200;

/// Number of cropped preview images kept in memory.
pub const PREVIEW_CACHE_CAPACITY: usize = 32;

/// Loaded images are downscaled so their longest edge fits this size.
pub const MAX_SAMPLE_EDGE_PX: u32 = 2400;

/// Cropped previews wider than this are resized before upload.
pub const MAX_PREVIEW_RENDER_WIDTH_PX: u32 = 1200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Reference focal validation
    assert!(MIN_REFERENCE_FOCAL_MM > 0.0);
    assert!(REFERENCE_FOCAL_FF_MM >= MIN_REFERENCE_FOCAL_MM);
    assert!(REFERENCE_FOCAL_FF_MM <= MAX_REFERENCE_FOCAL_MM);

    // Slider validation
    assert!(MIN_SLIDER_FOCAL_MM > 0.0);
    assert!(MAX_SLIDER_FOCAL_MM > MIN_SLIDER_FOCAL_MM);
    assert!(MAX_SLIDER_POSITION > MIN_SLIDER_POSITION);
    assert!(SLIDER_STEP > 0.0);

    // Zoom validation
    assert!(DEFAULT_MAX_ZOOM_SCALE >= MIN_MAX_ZOOM_SCALE);

    // Preview validation
    assert!(PREVIEW_ASPECT_RATIO > 0.0);
    assert!(GENERATED_PREVIEW_WIDTH > 0);
    assert!(GENERATED_PREVIEW_HEIGHT > 0);
    assert!(PREVIEW_CACHE_CAPACITY > 0);
    assert!(MAX_SAMPLE_EDGE_PX >= GENERATED_PREVIEW_WIDTH);
    assert!(MAX_PREVIEW_RENDER_WIDTH_PX > 0);
};
