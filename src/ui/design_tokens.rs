// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (navy and orange brand, neutral grays)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use focal_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent badge background
let badge_bg = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::NAVY_800
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_400: Color = Color::from_rgb(0.667, 0.667, 0.667);
    pub const GRAY_300: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_200: Color = Color::from_rgb(0.867, 0.867, 0.867);

    // Brand navy (#212E40)
    pub const NAVY_800: Color = Color::from_rgb(0.129, 0.180, 0.251);
    pub const NAVY_600: Color = Color::from_rgb(0.200, 0.275, 0.380);

    // Brand orange (#FB9936)
    pub const ORANGE_500: Color = Color::from_rgb(0.984, 0.600, 0.212);
    pub const ORANGE_600: Color = Color::from_rgb(0.910, 0.541, 0.180);
    pub const ORANGE_50: Color = Color::from_rgb(1.0, 0.961, 0.922);

    // Light blue track (#EFF7FB)
    pub const SKY_50: Color = Color::from_rgb(0.937, 0.969, 0.984);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the cropped preview frame.
    pub const PREVIEW_HEIGHT: f32 = 360.0;

    /// Height of the angle diagram canvas.
    pub const ANGLE_DIAGRAM_HEIGHT: f32 = 120.0;

    /// Height of the marks row under the focal slider.
    pub const SLIDER_MARKS_HEIGHT: f32 = 18.0;

    /// Height of the blocked-zone bar drawn behind the slider.
    pub const SLIDER_BLOCKED_HEIGHT: f32 = 8.0;

    /// Slider handle radius.
    pub const SLIDER_HANDLE_RADIUS: f32 = 9.0;

    /// Width of the controls column.
    pub const CONTROLS_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers, emphasized values
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Badges with values
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, slider marks, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Angle wedge strokes, emphasis borders
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::ORANGE_500.r >= 0.0 && palette::ORANGE_500.r <= 1.0);
};
