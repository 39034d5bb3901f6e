// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Style of the focal length slider: orange progress over a light blue rail
/// and a white handle with an orange ring.
pub fn focal(theme: &Theme, status: slider::Status) -> slider::Style {
    let rail_rest = if theme.extended_palette().is_dark {
        palette::NAVY_600
    } else {
        palette::SKY_50
    };
    let handle_border = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::ORANGE_600,
        slider::Status::Active => palette::ORANGE_500,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::ORANGE_500),
                Background::Color(rail_rest),
            ),
            width: 6.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 3.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: sizing::SLIDER_HANDLE_RADIUS,
            },
            background: Background::Color(palette::WHITE),
            border_width: 3.0,
            border_color: handle_border,
        },
    }
}

/// Text style for slider marks the current sensor cannot reach.
#[must_use]
pub fn unreachable_mark(theme: &Theme) -> iced::widget::text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::GRAY_500
    } else {
        palette::GRAY_400
    };
    iced::widget::text::Style { color: Some(color) }
}
