// SPDX-License-Identifier: MPL-2.0
//! Left-hand column: the cropped preview with its badges and the angle of
//! view panel.

use crate::i18n::fluent::I18n;
use crate::optics::Readout;
use crate::ui::angle_diagram::AngleDiagram;
use crate::ui::controls::format_angle;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub readout: Readout,
    /// Crop of the sample image for the current zoom.
    pub handle: image::Handle,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(preview_frame(&ctx))
        .push(angle_panel(&ctx))
        .into()
}

fn preview_frame<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let picture = image(ctx.handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let sensor_badge = badge(ctx.i18n.tr(ctx.readout.sensor.id.i18n_key()), false);
    let equivalent_badge = badge(
        ctx.i18n.tr_with_args(
            "preview-equivalent-badge",
            &[("mm", &ctx.readout.equivalent_focal_mm.to_string())],
        ),
        false,
    );
    let zoom_badge = badge(
        ctx.i18n.tr_with_args(
            "preview-zoom-badge",
            &[("zoom", &format_zoom(ctx.readout.zoom_scale))],
        ),
        true,
    );

    let overlay = Column::new()
        .padding(spacing::SM)
        .push(
            Row::new()
                .push(sensor_badge)
                .push(Space::new().width(Length::Fill))
                .push(equivalent_badge),
        )
        .push(Space::new().height(Length::Fill))
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(zoom_badge),
        );

    Container::new(Stack::new().push(picture).push(overlay))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .clip(true)
        .style(styles::container::panel)
        .into()
}

fn badge<'a, Message: 'a>(label: String, accent: bool) -> Element<'a, Message> {
    let badge = container(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM]);
    if accent {
        badge.style(styles::container::badge_accent).into()
    } else {
        badge.style(styles::container::badge).into()
    }
}

fn angle_panel<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let readout = &ctx.readout;

    let title = Text::new(ctx.i18n.tr_with_args(
        "angle-title",
        &[("deg", &format_angle(readout.angle_of_view_deg))],
    ))
    .size(typography::TITLE_SM);

    let horizontal = Text::new(ctx.i18n.tr_with_args(
        "angle-horizontal",
        &[("deg", &format_angle(readout.horizontal_angle_deg))],
    ))
    .size(typography::CAPTION);

    let diagram = container(AngleDiagram::new(readout.angle_of_view_deg).into_element())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::diagram);

    container(
        Column::new()
            .spacing(spacing::XS)
            .push(title)
            .push(diagram)
            .push(horizontal),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

/// Zoom factor with one decimal, e.g. `2.8`.
#[must_use]
pub fn format_zoom(zoom: f64) -> String {
    format!("{zoom:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::OpticsModel;
    use crate::preview::{PreviewCache, SampleImage};
    use crate::optics::preview_crop;

    #[test]
    fn preview_view_renders() {
        let i18n = I18n::default();
        let model = OpticsModel::default();
        let readout = model.readout();
        let sample = SampleImage::generated();
        let (width, height) = sample.dimensions();
        let mut cache = PreviewCache::default();
        let handle = cache.get_or_render(
            &sample,
            preview_crop(width, height, 1.5, readout.zoom_scale),
        );

        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            readout,
            handle,
        });
    }

    #[test]
    fn zoom_is_formatted_with_one_decimal() {
        assert_eq!(format_zoom(1.0), "1.0");
        assert_eq!(format_zoom(2.777), "2.8");
    }
}
