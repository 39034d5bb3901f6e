// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the preview column and the controls.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            color: palette.background.strong.color,
            width: 1.0,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Translucent navy badge drawn over the preview image.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::NAVY_800
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Orange accent badge used for the zoom factor.
pub fn badge_accent(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ORANGE_500)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hatched-looking strip covering the unreachable part of the slider.
pub fn blocked_zone(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Background of the angle diagram.
pub fn diagram(theme: &Theme) -> container::Style {
    let background = if theme.extended_palette().is_dark {
        palette::NAVY_800
    } else {
        palette::SKY_50
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status line shown under the toolbar when an image fails to load.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_is_translucent_navy() {
        let style = badge(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a < 1.0);
                assert_eq!(color.b, palette::NAVY_800.b);
            }
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn diagram_background_follows_theme() {
        assert_ne!(
            diagram(&Theme::Light).background,
            diagram(&Theme::Dark).background
        );
    }
}
