/// Skills Overview bar chart
/// Horizontal proficiency bars on a 0-100 scale with quarter grid lines
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, gradient, Fill, Path, Stroke};
use iced::{Font, Point, Rectangle, Size};

use super::paint;
use crate::color::chrome;
use crate::content::showcase::OverviewBar;
use crate::Message;

const LABEL_WIDTH: f32 = 170.0;
const BAR_HEIGHT: f32 = 28.0;
const ROW_PITCH: f32 = 48.0;
const TOP: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct SkillBars<'a> {
    pub bars: &'a [OverviewBar],
}

impl SkillBars<'_> {
    /// Canvas height needed to show every bar
    pub fn height(&self) -> f32 {
        TOP * 2.0 + self.bars.len() as f32 * ROW_PITCH
    }
}

/// Filled length of a bar on a track of `track` pixels
///
/// Values are percentages; anything above 100 is clamped.
pub fn bar_extent(value: u8, track: f32) -> f32 {
    track * f32::from(value.min(100)) / 100.0
}

impl canvas::Program<Message> for SkillBars<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let track = (bounds.width - LABEL_WIDTH - 56.0).max(0.0);
        if track < 1.0 || self.bars.is_empty() {
            return vec![frame.into_geometry()];
        }

        let bottom = TOP + self.bars.len() as f32 * ROW_PITCH;

        // Quarter grid lines
        for quarter in 0..=4 {
            let x = LABEL_WIDTH + track * quarter as f32 / 4.0;
            frame.stroke(
                &Path::line(Point::new(x, TOP - 8.0), Point::new(x, bottom)),
                Stroke::default()
                    .with_color(chrome::SLATE_800.color())
                    .with_width(1.0),
            );
        }

        for (index, bar) in self.bars.iter().enumerate() {
            let y = TOP + index as f32 * ROW_PITCH;
            let middle = y + BAR_HEIGHT / 2.0;

            paint::aligned(
                &mut frame,
                bar.label.as_str(),
                Point::new(LABEL_WIDTH - 12.0, middle),
                13.0,
                chrome::SLATE_400.color(),
                Horizontal::Right,
                Font::DEFAULT,
            );

            // Track
            frame.fill(
                &Path::rounded_rectangle(Point::new(LABEL_WIDTH, y), Size::new(track, BAR_HEIGHT), 6.0.into()),
                chrome::SLATE_800.color(),
            );

            // Filled portion
            let extent = bar_extent(bar.value, track);
            let fill = gradient::Linear::new(Point::new(LABEL_WIDTH, y), Point::new(LABEL_WIDTH + extent, y))
                .add_stop(0.0, bar.gradient[0].color())
                .add_stop(1.0, bar.gradient[1].color());
            frame.fill(
                &Path::rounded_rectangle(Point::new(LABEL_WIDTH, y), Size::new(extent, BAR_HEIGHT), 6.0.into()),
                Fill::from(fill),
            );

            paint::aligned(
                &mut frame,
                format!("{}%", bar.value),
                Point::new(LABEL_WIDTH + extent + 8.0, middle),
                12.0,
                chrome::WHITE.color(),
                Horizontal::Left,
                Font::DEFAULT,
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_extent() {
        assert_eq!(bar_extent(0, 300.0), 0.0);
        assert_eq!(bar_extent(50, 300.0), 150.0);
        assert_eq!(bar_extent(100, 300.0), 300.0);
        assert_eq!(bar_extent(140, 300.0), 300.0);
    }

    #[test]
    fn test_height_grows_with_bars() {
        let content = crate::content::Content::load().unwrap();
        let chart = SkillBars { bars: &content.skills.overview };
        assert_eq!(content.skills.overview.len(), 6);
        assert_eq!(chart.height(), TOP * 2.0 + 6.0 * ROW_PITCH);
    }
}
