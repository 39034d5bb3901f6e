// SPDX-License-Identifier: MPL-2.0
//! Sample image shown through the field-of-view preview.
//!
//! The preview simulates a longer lens by cropping the center of a sample
//! image (see [`crate::optics::geometry::preview_crop`]). This module owns the
//! pixels: it decodes user images, generates a fallback landscape, and keeps
//! recently rendered crops in an LRU cache so dragging the slider back and
//! forth does not re-crop the same region.

mod cache;
mod sample;

pub use cache::PreviewCache;
pub use sample::{generate_landscape, load_sample, ImageOrigin, SampleImage};

/// Image file extensions offered by the "Open image" dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp"];
