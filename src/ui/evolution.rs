/// Skills Evolution timeline (Experience page)
/// One column per career period: skills picked up above a rising growth
/// curve, period dot and labels on the baseline.
use iced::widget::canvas::{self, gradient, path, Path, Stroke};
use iced::{Point, Rectangle, Renderer, Theme};

use super::paint;
use crate::color::chrome;
use crate::content::showcase::Period;
use crate::Message;

pub const HEIGHT: f32 = 340.0;
const MARGIN: f32 = 60.0;
const BASELINE: f32 = 270.0;

pub struct Timeline<'a> {
    pub periods: &'a [Period],
}

/// Horizontal center of period `index` out of `count` between `left` and `right`
pub fn period_x(index: usize, count: usize, left: f32, right: f32) -> f32 {
    if count == 0 {
        return (left + right) / 2.0;
    }
    left + (right - left) * (index as f32 + 0.5) / count as f32
}

/// Growth curve height above the baseline for period `index`
fn growth_y(index: usize, count: usize) -> f32 {
    let progress = (index as f32 + 1.0) / count.max(1) as f32;
    BASELINE - 30.0 - progress * 150.0
}

impl canvas::Program<Message> for Timeline<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let (left, right) = (MARGIN, (bounds.width - MARGIN).max(MARGIN));
        let count = self.periods.len();

        // Grid
        for row in 0..5 {
            let y = 60.0 + row as f32 * 50.0;
            frame.stroke(
                &Path::line(Point::new(left, y), Point::new(right, y)),
                Stroke::default().with_color(chrome::SLATE_800.color()).with_width(1.0),
            );
        }

        // Baseline
        frame.stroke(
            &Path::line(Point::new(left, BASELINE), Point::new(right, BASELINE)),
            Stroke::default().with_color(chrome::SLATE_700.color()).with_width(3.0),
        );

        if count == 0 {
            return vec![frame.into_geometry()];
        }

        // Growth curve through each period
        let mut builder = path::Builder::new();
        builder.move_to(Point::new(left, BASELINE - 20.0));
        for index in 0..count {
            builder.line_to(Point::new(period_x(index, count, left, right), growth_y(index, count)));
        }
        builder.line_to(Point::new(right, growth_y(count - 1, count) - 20.0));
        let curve = builder.build();

        let first = self.periods[0].dot_color;
        let last = self.periods[count - 1].dot_color;
        let colors = gradient::Linear::new(Point::new(left, 0.0), Point::new(right, 0.0))
            .add_stop(0.0, first.color())
            .add_stop(1.0, last.color());
        frame.stroke(
            &curve,
            Stroke {
                style: canvas::Style::Gradient(colors.into()),
                width: 4.0,
                line_cap: canvas::LineCap::Round,
                ..Stroke::default()
            },
        );

        for (index, period) in self.periods.iter().enumerate() {
            let x = period_x(index, count, left, right);

            // Skills stacked above the curve point
            let top = growth_y(index, count) - 16.0 - period.skills.len() as f32 * 16.0;
            for (line, skill) in period.skills.iter().enumerate() {
                let at = Point::new(x, top + line as f32 * 16.0);
                paint::label(&mut frame, skill.name.as_str(), at, 11.0, skill.color.color());
            }

            // Period dot
            let dot = Point::new(x, BASELINE);
            frame.fill(&Path::circle(dot, 10.0), chrome::SLATE_950.color());
            frame.stroke(
                &Path::circle(dot, 10.0),
                Stroke::default().with_color(period.dot_color.color()).with_width(3.0),
            );
            frame.fill(&Path::circle(dot, 4.0), period.dot_color.color());

            paint::label(&mut frame, period.years.as_str(), Point::new(x, BASELINE + 24.0), 13.0, chrome::WHITE.color());
            paint::label(&mut frame, period.company.as_str(), Point::new(x, BASELINE + 42.0), 12.0, chrome::SLATE_400.color());
            paint::label(
                &mut frame,
                format!("+{} skills", period.new_skills),
                Point::new(x, BASELINE + 58.0),
                11.0,
                period.dot_color.color(),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_x_spreads_evenly() {
        assert_eq!(period_x(0, 4, 0.0, 400.0), 50.0);
        assert_eq!(period_x(3, 4, 0.0, 400.0), 350.0);
        assert_eq!(period_x(0, 1, 100.0, 300.0), 200.0);
        assert_eq!(period_x(0, 0, 100.0, 300.0), 200.0);
    }

    #[test]
    fn test_growth_rises_over_time() {
        let heights: Vec<f32> = (0..4).map(|i| growth_y(i, 4)).collect();
        assert!(heights.windows(2).all(|pair| pair[1] < pair[0]));
        assert!(heights.iter().all(|&y| y > 0.0 && y < BASELINE));
    }
}
