// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a quick focal entry.
///
/// The active entry is filled with the brand orange; the others show a thin
/// outline and pick up a light orange tint on hover.
pub fn quick_focal(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.extended_palette().background.base.text;

        if active {
            return button::Style {
                background: Some(Background::Color(palette::ORANGE_500)),
                text_color: WHITE,
                border: Border {
                    color: palette::ORANGE_600,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                shadow: shadow::MD,
                snap: true,
            };
        }

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: 0.35,
                ..palette::ORANGE_500
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: palette::GRAY_300,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: iced::Shadow::default(),
            snap: true,
        }
    }
}

/// Style for the "Open image" toolbar action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ORANGE_600,
        _ => palette::ORANGE_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::ORANGE_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_quick_focal_is_filled() {
        let style = quick_focal(true)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ORANGE_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn inactive_quick_focal_is_outlined() {
        let style = quick_focal(false)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.border.color, palette::GRAY_300);
    }

    #[test]
    fn inactive_quick_focal_tints_on_hover() {
        let style = quick_focal(false)(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
