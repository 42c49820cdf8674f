/// Canvas drawing helpers shared by the chart programs
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, LineDash, Path, Stroke};
use iced::{Color, Font, Pixels, Point, Size};

/// Draw text centered on `at`
pub fn label(frame: &mut Frame, content: impl Into<String>, at: Point, size: f32, color: Color) {
    aligned(frame, content, at, size, color, Horizontal::Center, Font::DEFAULT);
}

/// Draw text anchored at `at` with the given horizontal alignment
pub fn aligned(
    frame: &mut Frame,
    content: impl Into<String>,
    at: Point,
    size: f32,
    color: Color,
    horizontal: Horizontal,
    font: Font,
) {
    frame.fill_text(canvas::Text {
        content: content.into(),
        position: at,
        color,
        size: Pixels(size),
        font,
        horizontal_alignment: horizontal,
        vertical_alignment: Vertical::Center,
        ..canvas::Text::default()
    });
}

/// Rounded box with a fill and an outline
pub fn boxed(frame: &mut Frame, top_left: Point, size: Size, fill: Color, outline: Color, width: f32) {
    let shape = Path::rounded_rectangle(top_left, size, 6.0.into());
    frame.fill(&shape, fill);
    frame.stroke(&shape, Stroke::default().with_color(outline).with_width(width));
}

/// Dashed outline box without a fill
pub fn dashed_box(frame: &mut Frame, top_left: Point, size: Size, outline: Color) {
    let shape = Path::rounded_rectangle(top_left, size, 6.0.into());
    frame.stroke(&shape, dashed(outline, 1.0));
}

/// Dashed stroke
pub fn dashed(color: Color, width: f32) -> Stroke<'static> {
    Stroke {
        line_dash: LineDash {
            segments: &[5.0, 4.0],
            offset: 0,
        },
        ..Stroke::default().with_color(color).with_width(width)
    }
}

/// Straight connector with a small arrow head at `to`
pub fn arrow(frame: &mut Frame, from: Point, to: Point, color: Color) {
    let stroke = Stroke::default().with_color(color).with_width(2.0);
    frame.stroke(&Path::line(from, to), stroke.clone());

    let length = from.distance(to);
    if length < f32::EPSILON {
        return;
    }
    let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
    let head = 6.0;
    let left = Point::new(to.x - head * ux - head * 0.6 * uy, to.y - head * uy + head * 0.6 * ux);
    let right = Point::new(to.x - head * ux + head * 0.6 * uy, to.y - head * uy - head * 0.6 * ux);
    frame.stroke(&Path::line(left, to), stroke.clone());
    frame.stroke(&Path::line(right, to), stroke);
}
