// SPDX-License-Identifier: MPL-2.0
//! Angle-of-view wedge drawn on a canvas.
//!
//! The wedge geometry comes from [`AngleWedge`] in view box coordinates; the
//! program scales the view box uniformly to the canvas bounds and centers it.

use crate::optics::geometry::{WEDGE_APEX, WEDGE_VIEWBOX};
use crate::optics::AngleWedge;
use crate::ui::design_tokens::{border, palette, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Radius of the arc marking the angle, in view box units.
const ARC_RADIUS: f32 = 48.0;
const ARC_SEGMENTS: u16 = 24;
const APEX_RADIUS: f32 = 6.0;

/// Canvas program drawing the field-of-view wedge for one angle.
#[derive(Debug, Clone, Copy)]
pub struct AngleDiagram {
    angle_deg: f64,
}

impl AngleDiagram {
    #[must_use]
    pub fn new(angle_deg: f64) -> Self {
        Self { angle_deg }
    }

    /// Creates a full-width canvas for this diagram.
    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::ANGLE_DIAGRAM_HEIGHT))
            .into()
    }
}

/// Uniform scale and offset mapping the view box into `bounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ViewBoxTransform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl ViewBoxTransform {
    fn fit(width: f32, height: f32) -> Self {
        let (box_width, box_height) = WEDGE_VIEWBOX;
        let scale = (width / box_width).min(height / box_height).max(0.0);
        Self {
            scale,
            offset_x: (width - box_width * scale) / 2.0,
            offset_y: (height - box_height * scale) / 2.0,
        }
    }

    fn point(&self, (x, y): (f32, f32)) -> Point {
        Point::new(self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }
}

impl<Message> canvas::Program<Message> for AngleDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let transform = ViewBoxTransform::fit(bounds.width, bounds.height);
        let wedge = AngleWedge::new(self.angle_deg);
        let apex = transform.point(wedge.apex);

        // Frame rectangle of the view box, so the wedge visibly gets cut off
        // for wide angles.
        let (box_width, box_height) = WEDGE_VIEWBOX;
        frame.with_clip(
            Rectangle {
                x: transform.offset_x,
                y: transform.offset_y,
                width: box_width * transform.scale,
                height: box_height * transform.scale,
            },
            |clipped| {
                let clip_origin = transform.point((0.0, 0.0));
                let local = |p: Point| Point::new(p.x - clip_origin.x, p.y - clip_origin.y);
                let apex = local(apex);
                let upper = local(transform.point(wedge.upper));
                let lower = local(transform.point(wedge.lower));

                let area = Path::new(|builder| {
                    builder.move_to(apex);
                    builder.line_to(upper);
                    builder.line_to(lower);
                    builder.close();
                });
                clipped.fill(
                    &area,
                    Color {
                        a: 0.25,
                        ..palette::ORANGE_500
                    },
                );

                let edges = Path::new(|builder| {
                    builder.move_to(upper);
                    builder.line_to(apex);
                    builder.line_to(lower);
                });
                clipped.stroke(
                    &edges,
                    Stroke::default()
                        .with_width(border::WIDTH_MD)
                        .with_color(palette::ORANGE_500)
                        .with_line_join(canvas::LineJoin::Round),
                );
            },
        );

        let axis_color = Color {
            a: 0.5,
            ..theme.extended_palette().background.base.text
        };
        let axis_end = transform.point((box_width, WEDGE_APEX.1));
        frame.stroke(
            &Path::line(apex, axis_end),
            Stroke {
                line_dash: canvas::LineDash {
                    segments: &[4.0, 4.0],
                    offset: 0,
                },
                ..Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(axis_color)
            },
        );

        frame.stroke(
            &angle_arc(apex, ARC_RADIUS * transform.scale, self.angle_deg),
            Stroke::default()
                .with_width(border::WIDTH_SM)
                .with_color(palette::ORANGE_600),
        );

        frame.fill(
            &Path::circle(apex, APEX_RADIUS * transform.scale),
            palette::NAVY_800,
        );

        vec![frame.into_geometry()]
    }
}

/// Arc centered on the optical axis spanning `angle_deg`.
fn angle_arc(center: Point, radius: f32, angle_deg: f64) -> Path {
    #[allow(clippy::cast_possible_truncation)]
    let half = (angle_deg.clamp(0.0, 180.0) / 2.0).to_radians() as f32;

    let mut builder = canvas::path::Builder::new();
    for i in 0..=ARC_SEGMENTS {
        let t = f32::from(i) / f32::from(ARC_SEGMENTS);
        let angle = -half + 2.0 * half * t;
        let point = Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        if i == 0 {
            builder.move_to(point);
        } else {
            builder.line_to(point);
        }
    }
    builder.build()
}

const _: () = {
    assert!(ARC_RADIUS > 0.0);
    assert!(ARC_SEGMENTS > 0);
};
