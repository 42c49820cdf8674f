/// Technology ecosystem orbit (About page)
/// Two rings of technologies circling the profile name; hovering a
/// node highlights it.
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program, Stroke};
use iced::{Point, Rectangle, Renderer, Theme};

use super::paint;
use crate::color::chrome;
use crate::content::showcase::{Ecosystem, Satellite};
use crate::Message;

/// Node radius in logical pixels
const NODE_RADIUS: f32 = 24.0;

pub struct Orbit<'a> {
    pub ecosystem: &'a Ecosystem,
}

/// Position on a ring, `degrees` clockwise from the positive x axis
pub fn orbit_point(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(center.x + radius * radians.cos(), center.y + radius * radians.sin())
}

/// Ring radii for a canvas of the given bounds (inner, outer)
fn ring_radii(bounds: Rectangle) -> (f32, f32) {
    let reach = (bounds.height / 2.0 - NODE_RADIUS - 8.0).max(NODE_RADIUS);
    (reach * 0.55, reach)
}

impl<'a> Orbit<'a> {
    /// Every node with its on-canvas position
    fn nodes(&self, bounds: Rectangle) -> Vec<(&'a Satellite, Point)> {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let (inner, outer) = ring_radii(bounds);

        self.ecosystem
            .inner_orbit
            .iter()
            .map(|s| (s, orbit_point(center, inner, s.angle)))
            .chain(
                self.ecosystem
                    .outer_orbit
                    .iter()
                    .map(|s| (s, orbit_point(center, outer, s.angle))),
            )
            .collect()
    }

    /// Index of the node under `position`, if any
    fn hit(&self, bounds: Rectangle, position: Point) -> Option<usize> {
        self.nodes(bounds)
            .iter()
            .position(|(_, at)| at.distance(position) <= NODE_RADIUS)
    }
}

impl Program<Message> for Orbit<'_> {
    type State = HoverState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let (inner, outer) = ring_radii(bounds);

        // Rings
        for radius in [inner, outer] {
            frame.stroke(
                &Path::circle(center, radius),
                paint::dashed(chrome::SLATE_700.color(), 1.0),
            );
        }

        // Spokes to the inner ring
        for satellite in &self.ecosystem.inner_orbit {
            let end = orbit_point(center, inner, satellite.angle);
            frame.stroke(
                &Path::line(center, end),
                Stroke::default()
                    .with_color(satellite.color.alpha(0.25))
                    .with_width(1.0),
            );
        }

        // Center
        frame.fill(&Path::circle(center, 56.0), chrome::SLATE_900.color());
        frame.stroke(
            &Path::circle(center, 56.0),
            Stroke::default()
                .with_color(chrome::ACCENT_500.color())
                .with_width(2.0),
        );
        let name_at = Point::new(center.x, center.y - 8.0);
        paint::label(&mut frame, self.ecosystem.center.name.as_str(), name_at, 16.0, chrome::WHITE.color());
        let caption_at = Point::new(center.x, center.y + 12.0);
        paint::label(&mut frame, self.ecosystem.center.caption.as_str(), caption_at, 11.0, chrome::SLATE_400.color());

        // Nodes
        for (index, (satellite, at)) in self.nodes(bounds).into_iter().enumerate() {
            let highlighted = state.hovered == Some(index);
            let radius = if highlighted { NODE_RADIUS + 4.0 } else { NODE_RADIUS };

            frame.fill(&Path::circle(at, radius), chrome::SLATE_900.color());
            frame.fill(&Path::circle(at, radius), satellite.color.alpha(0.2));
            frame.stroke(
                &Path::circle(at, radius),
                Stroke::default()
                    .with_color(satellite.color.color())
                    .with_width(if highlighted { 3.0 } else { 2.0 }),
            );
            paint::label(&mut frame, satellite.name.as_str(), at, 11.0, chrome::WHITE.color());
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft) = event {
            state.hovered = cursor
                .position_in(bounds)
                .and_then(|position| self.hit(bounds, position));
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(&self, state: &Self::State, _bounds: Rectangle, _cursor: Cursor) -> mouse::Interaction {
        if state.hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// State for hover interactions
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    pub hovered: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn test_orbit_point() {
        let center = Point::new(100.0, 100.0);
        assert!(close(orbit_point(center, 50.0, 0.0), Point::new(150.0, 100.0)));
        assert!(close(orbit_point(center, 50.0, 90.0), Point::new(100.0, 150.0)));
        assert!(close(orbit_point(center, 50.0, 180.0), Point::new(50.0, 100.0)));
        assert!(close(orbit_point(center, 50.0, 360.0), orbit_point(center, 50.0, 0.0)));
    }

    #[test]
    fn test_hit_finds_node_under_cursor() {
        let content = crate::content::Content::load().unwrap();
        let orbit = Orbit { ecosystem: &content.about.ecosystem };
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(800.0, 420.0));

        let (first, at) = orbit.nodes(bounds)[0];
        assert_eq!(first.name, content.about.ecosystem.inner_orbit[0].name);
        assert_eq!(orbit.hit(bounds, at), Some(0));
        assert_eq!(orbit.hit(bounds, Point::new(400.0, 210.0)), None);
    }

    #[test]
    fn test_rings_fit_inside_bounds() {
        let bounds = Rectangle::new(Point::ORIGIN, iced::Size::new(800.0, 420.0));
        let (inner, outer) = ring_radii(bounds);
        assert!(inner < outer);
        assert!(outer + NODE_RADIUS <= bounds.height / 2.0);
    }
}
