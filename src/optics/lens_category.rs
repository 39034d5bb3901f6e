// SPDX-License-Identifier: MPL-2.0
//! Lens category classification by full-frame equivalent focal length.

use std::fmt;

/// Lens family a full-frame equivalent focal length belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LensCategory {
    UltraWide,
    Wide,
    Standard,
    ShortTele,
    Tele,
    SuperTele,
}

impl LensCategory {
    /// Classifies an equivalent focal length (mm).
    ///
    /// Thresholds are exclusive upper bounds: 20, 35, 60, 90, 300.
    #[must_use]
    pub fn from_equivalent(equivalent_mm: u32) -> Self {
        match equivalent_mm {
            0..20 => LensCategory::UltraWide,
            20..35 => LensCategory::Wide,
            35..60 => LensCategory::Standard,
            60..90 => LensCategory::ShortTele,
            90..300 => LensCategory::Tele,
            _ => LensCategory::SuperTele,
        }
    }

    /// Returns the i18n message key for this category.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LensCategory::UltraWide => "lens-category-ultra-wide",
            LensCategory::Wide => "lens-category-wide",
            LensCategory::Standard => "lens-category-standard",
            LensCategory::ShortTele => "lens-category-short-tele",
            LensCategory::Tele => "lens-category-tele",
            LensCategory::SuperTele => "lens-category-super-tele",
        }
    }
}

impl fmt::Display for LensCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LensCategory::UltraWide => write!(f, "Ultra wide-angle"),
            LensCategory::Wide => write!(f, "Wide-angle"),
            LensCategory::Standard => write!(f, "Standard"),
            LensCategory::ShortTele => write!(f, "Short telephoto"),
            LensCategory::Tele => write!(f, "Telephoto"),
            LensCategory::SuperTele => write!(f, "Super telephoto"),
        }
    }
}
