/// End-to-end data pipeline diagram (Architecture page)
/// Stage boxes joined by arrows, with the orchestration band above and
/// the governance band below.
use iced::widget::canvas;
use iced::{Point, Rectangle, Renderer, Size, Theme};

use super::paint;
use crate::color::chrome;
use crate::content::showcase::Pipeline;
use crate::Message;

pub const HEIGHT: f32 = 300.0;
const MARGIN: f32 = 24.0;
const GAP: f32 = 36.0;
const STAGE_TOP: f32 = 90.0;
const STAGE_HEIGHT: f32 = 110.0;

pub struct PipelineChart<'a> {
    pub pipeline: &'a Pipeline,
}

/// Left edge and width of each of `count` stage boxes across `width`
pub fn stage_slots(count: usize, width: f32) -> Vec<(f32, f32)> {
    if count == 0 {
        return Vec::new();
    }
    let usable = (width - 2.0 * MARGIN - GAP * (count as f32 - 1.0)).max(0.0);
    let slot = usable / count as f32;
    (0..count)
        .map(|index| (MARGIN + index as f32 * (slot + GAP), slot))
        .collect()
}

impl canvas::Program<Message> for PipelineChart<'_> {
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
        let band_width = (bounds.width - 2.0 * MARGIN).max(0.0);
        let middle = bounds.width / 2.0;

        // Orchestration band
        paint::dashed_box(
            &mut frame,
            Point::new(MARGIN, 20.0),
            Size::new(band_width, 40.0),
            chrome::GREEN_400.color(),
        );
        paint::label(
            &mut frame,
            self.pipeline.orchestration.as_str(),
            Point::new(middle, 40.0),
            12.0,
            chrome::GREEN_400.color(),
        );

        // Stages
        let slots = stage_slots(self.pipeline.stages.len(), bounds.width);
        for (index, (stage, &(x, width))) in self.pipeline.stages.iter().zip(&slots).enumerate() {
            paint::boxed(
                &mut frame,
                Point::new(x, STAGE_TOP),
                Size::new(width, STAGE_HEIGHT),
                stage.color.alpha(0.12),
                stage.color.color(),
                2.0,
            );

            let center = x + width / 2.0;
            paint::label(&mut frame, stage.name.as_str(), Point::new(center, STAGE_TOP + 28.0), 13.0, stage.color.color());
            for (line, text) in stage.lines.iter().enumerate() {
                let at = Point::new(center, STAGE_TOP + 58.0 + line as f32 * 18.0);
                paint::label(&mut frame, text.as_str(), at, 11.0, chrome::SLATE_300.color());
            }

            if index + 1 < slots.len() {
                let y = STAGE_TOP + STAGE_HEIGHT / 2.0;
                paint::arrow(
                    &mut frame,
                    Point::new(x + width + 4.0, y),
                    Point::new(x + width + GAP - 4.0, y),
                    chrome::SLATE_500.color(),
                );
            }
        }

        // Governance band
        let governance_top = STAGE_TOP + STAGE_HEIGHT + 30.0;
        paint::dashed_box(
            &mut frame,
            Point::new(MARGIN, governance_top),
            Size::new(band_width, 40.0),
            chrome::RED_400.color(),
        );
        paint::label(
            &mut frame,
            self.pipeline.governance.as_str(),
            Point::new(middle, governance_top + 20.0),
            12.0,
            chrome::RED_400.color(),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_slots_fill_width() {
        let slots = stage_slots(5, 1000.0);
        assert_eq!(slots.len(), 5);

        let (first_x, width) = slots[0];
        let (last_x, last_width) = slots[4];
        assert_eq!(first_x, MARGIN);
        assert!((last_x + last_width - (1000.0 - MARGIN)).abs() < 1e-3);
        assert!(slots.iter().all(|&(_, w)| (w - width).abs() < 1e-3));
    }

    #[test]
    fn test_stage_slots_degenerate() {
        assert!(stage_slots(0, 1000.0).is_empty());
        assert!(stage_slots(3, 10.0).iter().all(|&(_, w)| w == 0.0));
    }
}
