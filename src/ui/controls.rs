// SPDX-License-Identifier: MPL-2.0
//! Right-hand control panel: sensor picker, focal slider, readout and the
//! quick reference grid.

use crate::config::{MAX_SLIDER_POSITION, MIN_SLIDER_POSITION, SLIDER_STEP};
use crate::i18n::fluent::I18n;
use crate::optics::{OpticsModel, QuickFocal, Readout, SensorId, SliderMark, SliderPosition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, container, pick_list, slider, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment::Vertical, Element, Length};

/// Quick reference buttons per row.
const QUICK_GRID_COLUMNS: usize = 4;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub model: &'a OpticsModel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SensorSelected(SensorId),
    SliderMoved(f64),
    /// The slider handle was let go; the final position is worth saving.
    SliderReleased,
    QuickFocalPressed(u32),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let readout = ctx.model.readout();

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .push(sensor_picker(&ctx, &readout))
        .push(focal_slider(&ctx, &readout))
        .push(info_panel(&ctx, &readout))
        .push(quick_grid(&ctx, &ctx.model.quick_focals()))
        .into()
}

// =============================================================================
// Sensor picker
// =============================================================================

/// Sensor option for the pick list.
#[derive(Debug, Clone, PartialEq)]
struct SensorOption {
    id: SensorId,
    label: String,
}

impl std::fmt::Display for SensorOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn sensor_options(i18n: &I18n) -> Vec<SensorOption> {
    SensorId::ALL
        .iter()
        .map(|&id| SensorOption {
            id,
            label: i18n.tr_with_args(
                "sensor-option",
                &[
                    ("name", &i18n.tr(id.i18n_key())),
                    ("crop", &format_crop(id.sensor().crop_factor)),
                ],
            ),
        })
        .collect()
}

fn sensor_picker<'a>(ctx: &ViewContext<'a>, readout: &Readout) -> Element<'a, Message> {
    let options = sensor_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|opt| opt.id == readout.sensor.id)
        .cloned();

    let picker = pick_list(options, selected, |opt| Message::SensorSelected(opt.id))
        .padding(spacing::XS)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("sensor-label")).size(typography::BODY))
        .push(picker)
        .into()
}

// =============================================================================
// Focal slider
// =============================================================================

fn focal_slider<'a>(ctx: &ViewContext<'a>, readout: &Readout) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("focal-label")).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            container(
                Text::new(ctx.i18n.tr_with_args(
                    "focal-badge",
                    &[("mm", &readout.focal_length_mm.to_string())],
                ))
                .size(typography::BODY_LG),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge_accent),
        );

    let track_height = sizing::SLIDER_HANDLE_RADIUS * 2.0;
    let focal_slider = slider(
        MIN_SLIDER_POSITION..=MAX_SLIDER_POSITION,
        readout.slider_position.value(),
        Message::SliderMoved,
    )
    .on_release(Message::SliderReleased)
    .step(SLIDER_STEP)
    .height(track_height)
    .style(styles::slider::focal);

    let mut track = Stack::new().width(Length::Fill).height(track_height);
    if let Some(blocked) = blocked_zone(readout.blocked_slider_position) {
        track = track.push(blocked);
    }
    track = track.push(focal_slider);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(track)
        .push(slider_marks(&ctx.model.slider_marks()));

    if readout.blocked_slider_position.value() > MIN_SLIDER_POSITION {
        column = column.push(
            Text::new(ctx.i18n.tr_with_args(
                "focal-blocked-hint",
                &[
                    ("mm", &readout.min_focal_mm.to_string()),
                    (
                        "reference",
                        &format!("{:.0}", ctx.model.params().reference_focal_mm),
                    ),
                ],
            ))
            .size(typography::CAPTION)
            .style(styles::slider::unreachable_mark),
        );
    }

    column.into()
}

/// Strip covering the slider positions the current sensor cannot reach.
fn blocked_zone<'a>(blocked: SliderPosition) -> Option<Element<'a, Message>> {
    let portion = position_portion(blocked.value());
    if portion == 0 {
        return None;
    }

    let strip = Container::new(Space::new().width(Length::Fill).height(sizing::SLIDER_BLOCKED_HEIGHT))
        .width(Length::FillPortion(portion))
        .style(styles::container::blocked_zone);

    let row = Row::new()
        .push(strip)
        .push(Space::new().width(Length::FillPortion(position_portion(MAX_SLIDER_POSITION) - portion)));

    Some(
        container(row)
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .into(),
    )
}

/// Focal labels positioned along the track.
///
/// Each label sits in its own layer, pushed right by a fill portion equal to
/// its slider position.
fn slider_marks<'a>(marks: &[SliderMark]) -> Element<'a, Message> {
    let layers = marks.iter().map(|mark| {
        let portion = position_portion(mark.position);
        let mut label = text(mark.focal_mm.to_string()).size(typography::CAPTION);
        if !mark.reachable {
            label = label.style(styles::slider::unreachable_mark);
        }

        Row::new()
            .push(Space::new().width(Length::FillPortion(portion)))
            .push(label)
            .push(Space::new().width(Length::FillPortion(
                position_portion(MAX_SLIDER_POSITION) - portion,
            )))
            .into()
    });

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(sizing::SLIDER_MARKS_HEIGHT)
        .into()
}

/// Slider position expressed in half-position layout units.
fn position_portion(position: f64) -> u16 {
    let clamped = position.clamp(MIN_SLIDER_POSITION, MAX_SLIDER_POSITION);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let portion = (clamped / SLIDER_STEP).round() as u16;
    portion
}

// =============================================================================
// Info panel
// =============================================================================

fn info_panel<'a>(ctx: &ViewContext<'a>, readout: &Readout) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let mm = |value: u32| i18n.tr_with_args("focal-badge", &[("mm", &value.to_string())]);

    let rows = [
        ("info-real-focal", mm(readout.focal_length_mm)),
        (
            "info-crop-factor",
            format!("×{}", format_crop(readout.sensor.crop_factor)),
        ),
        ("info-equivalent", mm(readout.equivalent_focal_mm)),
        (
            "info-angle",
            i18n.tr_with_args(
                "angle-caption",
                &[("deg", &format_angle(readout.angle_of_view_deg))],
            ),
        ),
        ("info-lens-type", i18n.tr(readout.lens_category.i18n_key())),
    ];

    let column = rows
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, (key, value)| {
            column.push(
                Row::new()
                    .push(Text::new(i18n.tr(key)).size(typography::BODY))
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(value).size(typography::BODY)),
            )
        });

    container(column)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

// =============================================================================
// Quick reference grid
// =============================================================================

fn quick_grid<'a>(ctx: &ViewContext<'a>, entries: &[QuickFocal]) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);

    for chunk in entries.chunks(QUICK_GRID_COLUMNS) {
        let row = chunk.iter().fold(Row::new().spacing(spacing::XS), |row, entry| {
            let label = ctx.i18n.tr_with_args(
                "quick-entry",
                &[
                    ("focal", &entry.focal_mm.to_string()),
                    ("equivalent", &entry.equivalent_mm.to_string()),
                ],
            );
            row.push(
                button(Text::new(label).size(typography::CAPTION).center())
                    .on_press(Message::QuickFocalPressed(entry.focal_mm))
                    .padding([spacing::XS, spacing::XXS])
                    .width(Length::FillPortion(1))
                    .style(styles::button::quick_focal(entry.active)),
            )
        });
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("quick-title")).size(typography::BODY))
        .push(grid)
        .into()
}

// =============================================================================
// Formatting
// =============================================================================

/// Crop factor with one decimal, e.g. `1.6`.
#[must_use]
pub fn format_crop(crop_factor: f64) -> String {
    format!("{crop_factor:.1}")
}

/// Angle with one decimal, e.g. `46.8`.
#[must_use]
pub fn format_angle(angle_deg: f64) -> String {
    format!("{angle_deg:.1}")
}
