// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown in the result row while a request is in flight.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn per this many milliseconds.
const REVOLUTION_MS: f32 = 1_000.0;

/// Rotation angle (radians) after `elapsed` time spinning.
#[must_use]
pub fn rotation_for(elapsed: Duration) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let millis = (elapsed.as_millis() % REVOLUTION_MS as u128) as f32;
    millis / REVOLUTION_MS * TAU
}

/// Spinner drawn as a faint ring with a half-circle arc on top.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl AnimatedSpinner {
    /// Creates a new spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 2.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(2.5).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Arc from rotation angle to rotation + 180°, starting at the top
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 24;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(2.5)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_at_zero() {
        assert_eq!(rotation_for(Duration::ZERO), 0.0);
    }

    #[test]
    fn rotation_wraps_every_revolution() {
        let quarter = rotation_for(Duration::from_millis(250));
        let wrapped = rotation_for(Duration::from_millis(1_250));
        assert!((quarter - TAU / 4.0).abs() < 1e-4);
        assert!((quarter - wrapped).abs() < 1e-4);
    }

    #[test]
    fn rotation_stays_below_full_turn() {
        assert!(rotation_for(Duration::from_millis(999)) < TAU);
    }
}
