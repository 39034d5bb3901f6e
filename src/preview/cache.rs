// SPDX-License-Identifier: MPL-2.0
//! LRU cache of rendered preview crops.

use super::SampleImage;
use crate::config::{MAX_PREVIEW_RENDER_WIDTH_PX, PREVIEW_CACHE_CAPACITY};
use crate::optics::CropRegion;
use iced::widget::image::Handle;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Crops of the current sample image, keyed by region.
///
/// The cache does not know which image a region belongs to: call
/// [`PreviewCache::clear`] whenever the sample image changes.
pub struct PreviewCache {
    cache: LruCache<CropRegion, Handle>,
    hits: u64,
    misses: u64,
}

impl std::fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewCache")
            .field("len", &self.cache.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(PREVIEW_CACHE_CAPACITY)
    }
}

impl PreviewCache {
    /// Creates a cache holding up to `capacity` crops (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the image handle for `region` of `sample`, rendering it on a
    /// miss.
    pub fn get_or_render(&mut self, sample: &SampleImage, region: CropRegion) -> Handle {
        if let Some(handle) = self.cache.get(&region) {
            self.hits += 1;
            return handle.clone();
        }

        self.misses += 1;
        let handle = crop_to_handle(sample.image(), region);
        self.cache.put(region, handle.clone());
        handle
    }

    /// Drops every cached crop.
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing {} preview crops ({:.0}% hit rate)",
            self.cache.len(),
            self.hit_rate()
        );
        self.cache.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Crops `region` out of `image` and uploads it as an RGBA handle.
///
/// Crops wider than [`MAX_PREVIEW_RENDER_WIDTH_PX`] are downscaled first; the
/// image widget scales the result to the frame anyway.
#[must_use]
pub fn crop_to_handle(image: &DynamicImage, region: CropRegion) -> Handle {
    let cropped = image.crop_imm(region.x, region.y, region.width.max(1), region.height.max(1));
    let cropped = if cropped.width() > MAX_PREVIEW_RENDER_WIDTH_PX {
        cropped.resize(MAX_PREVIEW_RENDER_WIDTH_PX, u32::MAX, FilterType::Triangle)
    } else {
        cropped
    };

    let (width, height) = cropped.dimensions();
    Handle::from_rgba(width, height, cropped.to_rgba8().into_vec())
}
