/// Illustrations for project screenshots and the cloud platform panel
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, gradient, path, Fill, Path, Stroke};
use iced::{Color, Font, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};

use super::paint;
use crate::color::{chrome, Shade};
use crate::content::project::ScreenshotKind;
use crate::Message;

/// Design size every illustration is laid out in, scaled to fit
const DESIGN: Size = Size::new(400.0, 200.0);

/// Dark navy used inside diagram boxes
const NODE_FILL: Shade = Shade::from_hex(0x1e3a5f);
const PURPLE: Shade = Shade::from_hex(0x8b5cf6);
const PURPLE_LIGHT: Shade = Shade::from_hex(0xa78bfa);
const CYAN: Shade = Shade::from_hex(0x22d3ee);
const AMBER: Shade = Shade::from_hex(0xf59e0b);
const YELLOW: Shade = Shade::from_hex(0xeab308);

/// Uniform scale and offset that fit `DESIGN` centered into `bounds`
pub fn fit(bounds: Size) -> (f32, Vector) {
    let scale = (bounds.width / DESIGN.width).min(bounds.height / DESIGN.height);
    let offset = Vector::new(
        (bounds.width - DESIGN.width * scale) / 2.0,
        (bounds.height - DESIGN.height * scale) / 2.0,
    );
    (scale, offset)
}

/// Screenshot slot illustration
pub struct ScreenshotVisual {
    pub kind: ScreenshotKind,
}

/// Cloud platform sketch on the Architecture page
pub struct CloudSketch<'a> {
    pub platform: &'a str,
}

impl canvas::Program<Message> for ScreenshotVisual {
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
        let (scale, offset) = fit(bounds.size());

        frame.with_save(|frame| {
            frame.translate(offset);
            frame.scale(scale);

            match self.kind {
                ScreenshotKind::Architecture => architecture(frame),
                ScreenshotKind::Dashboard => dashboard(frame),
                ScreenshotKind::Pipeline => pipeline(frame),
                ScreenshotKind::Code => code(frame),
            }
        });

        vec![frame.into_geometry()]
    }
}

impl canvas::Program<Message> for CloudSketch<'_> {
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
        let (scale, offset) = fit(bounds.size());

        frame.with_save(|frame| {
            frame.translate(offset);
            frame.scale(scale);

            let center = Point::new(200.0, 100.0);
            let cloud = Path::new(|b| {
                b.ellipse(path::arc::Elliptical {
                    center,
                    radii: Vector::new(100.0, 60.0),
                    rotation: Radians(0.0),
                    start_angle: Radians(0.0),
                    end_angle: Radians(std::f32::consts::TAU),
                });
            });
            frame.stroke(&cloud, paint::dashed(chrome::ACCENT_500.color(), 2.0));
            paint::label(frame, self.platform, center, 16.0, chrome::ACCENT_400.color());

            let corners = [
                ("Sources", Point::new(20.0, 20.0), chrome::ACCENT_500),
                ("Process", Point::new(310.0, 20.0), PURPLE),
                ("Storage", Point::new(20.0, 140.0), chrome::TEAL_500),
                ("Analytics", Point::new(310.0, 140.0), AMBER),
            ];
            for (name, at, tint) in corners {
                let size = Size::new(70.0, 40.0);
                paint::boxed(frame, at, size, NODE_FILL.color(), tint.color(), 1.5);
                let middle = Point::new(at.x + size.width / 2.0, at.y + size.height / 2.0);
                paint::label(frame, name, middle, 11.0, tint.color());

                // Dashed link toward the cloud
                let toward = Point::new(
                    middle.x + (center.x - middle.x) * 0.35,
                    middle.y + (center.y - middle.y) * 0.35,
                );
                let from = Point::new(
                    middle.x + (center.x - middle.x) * 0.22,
                    middle.y + (center.y - middle.y) * 0.22,
                );
                frame.stroke(&Path::line(from, toward), paint::dashed(chrome::SLATE_500.color(), 1.5));
            }
        });

        vec![frame.into_geometry()]
    }
}

fn architecture(frame: &mut canvas::Frame) {
    let stages = [
        ("Sources", chrome::ACCENT_500),
        ("Ingest", PURPLE),
        ("Process", chrome::TEAL_500),
        ("Storage", AMBER),
        ("Analytics", CYAN),
    ];

    for (index, (name, tint)) in stages.iter().enumerate() {
        let x = 10.0 + index as f32 * 80.0;
        paint::boxed(frame, Point::new(x, 70.0), Size::new(60.0, 60.0), NODE_FILL.color(), tint.color(), 2.0);
        paint::label(frame, *name, Point::new(x + 30.0, 100.0), 10.0, tint.color());

        if index + 1 < stages.len() {
            paint::arrow(frame, Point::new(x + 60.0, 100.0), Point::new(x + 80.0, 100.0), chrome::SLATE_500.color());
        }
    }

    paint::dashed_box(frame, Point::new(90.0, 15.0), Size::new(220.0, 35.0), chrome::GREEN_400.color());
    paint::label(frame, "Monitoring & Observability", Point::new(200.0, 32.0), 9.0, chrome::GREEN_400.color());

    paint::dashed_box(frame, Point::new(90.0, 150.0), Size::new(220.0, 35.0), chrome::RED_400.color());
    paint::label(frame, "Security & Governance Layer", Point::new(200.0, 167.0), 9.0, chrome::RED_400.color());
}

fn dashboard(frame: &mut canvas::Frame) {
    paint::boxed(
        frame,
        Point::new(4.0, 4.0),
        Size::new(392.0, 192.0),
        chrome::SLATE_900.alpha(0.5),
        chrome::SLATE_700.alpha(0.5),
        1.0,
    );
    window_dots(frame, Point::new(18.0, 18.0));
    paint::aligned(
        frame,
        "Analytics Dashboard",
        Point::new(384.0, 18.0),
        9.0,
        chrome::SLATE_500.color(),
        Horizontal::Right,
        Font::DEFAULT,
    );

    let tiles = [
        ("2.4M", "Records", chrome::ACCENT_400),
        ("99.9%", "Uptime", chrome::GREEN_400),
        ("45ms", "Latency", chrome::TEAL_400),
        ("12TB", "Processed", PURPLE_LIGHT),
    ];
    for (index, (value, label, tint)) in tiles.iter().enumerate() {
        let x = 14.0 + index as f32 * 94.0;
        paint::boxed(frame, Point::new(x, 32.0), Size::new(86.0, 44.0), chrome::SLATE_800.alpha(0.6), Color::TRANSPARENT, 0.0);
        paint::label(frame, *value, Point::new(x + 43.0, 48.0), 13.0, tint.color());
        paint::label(frame, *label, Point::new(x + 43.0, 66.0), 8.0, chrome::SLATE_500.color());
    }

    // Throughput bars
    paint::boxed(frame, Point::new(14.0, 86.0), Size::new(182.0, 100.0), chrome::SLATE_800.alpha(0.4), Color::TRANSPARENT, 0.0);
    paint::aligned(frame, "Throughput", Point::new(22.0, 98.0), 8.0, chrome::SLATE_400.color(), Horizontal::Left, Font::DEFAULT);
    let heights = [40.0, 65.0, 45.0, 80.0, 55.0, 90.0, 70.0, 85.0, 60.0, 75.0, 95.0, 80.0];
    for (index, percent) in heights.iter().enumerate() {
        let height = 70.0 * percent / 100.0;
        let x = 22.0 + index as f32 * 14.0;
        let top = Point::new(x, 180.0 - height);
        let fill = gradient::Linear::new(Point::new(x, 180.0), top)
            .add_stop(0.0, chrome::ACCENT_500.color())
            .add_stop(1.0, chrome::TEAL_500.color());
        frame.fill_rectangle(top, Size::new(10.0, height), Fill::from(fill));
    }

    // Data quality ring
    paint::boxed(frame, Point::new(204.0, 86.0), Size::new(182.0, 100.0), chrome::SLATE_800.alpha(0.4), Color::TRANSPARENT, 0.0);
    paint::aligned(frame, "Data Quality", Point::new(212.0, 98.0), 8.0, chrome::SLATE_400.color(), Horizontal::Left, Font::DEFAULT);
    let center = Point::new(295.0, 142.0);
    frame.stroke(
        &Path::circle(center, 26.0),
        Stroke::default().with_color(chrome::SLATE_700.color()).with_width(5.0),
    );
    let quality = Path::new(|b| {
        b.arc(path::Arc {
            center,
            radius: 26.0,
            start_angle: Radians(-std::f32::consts::FRAC_PI_2),
            end_angle: Radians(-std::f32::consts::FRAC_PI_2 + std::f32::consts::TAU * 0.9),
        });
    });
    frame.stroke(&quality, Stroke::default().with_color(chrome::TEAL_500.color()).with_width(5.0));
    paint::label(frame, "90%", center, 11.0, chrome::TEAL_400.color());
}

fn pipeline(frame: &mut canvas::Frame) {
    paint::label(frame, "Airflow / ADF Orchestration", Point::new(200.0, 22.0), 10.0, chrome::SLATE_400.color());

    let nodes = [
        ("Extract", "Sources", PURPLE),
        ("Transform", "Spark/dbt", chrome::TEAL_500),
        ("Load", "Delta Lake", AMBER),
        ("Serve", "BI/ML", chrome::ACCENT_500),
    ];
    for (index, (name, detail, tint)) in nodes.iter().enumerate() {
        let center = Point::new(50.0 + index as f32 * 100.0, 90.0);
        frame.fill(&Path::circle(center, 30.0), chrome::SLATE_800.color());
        frame.stroke(&Path::circle(center, 30.0), Stroke::default().with_color(tint.color()).with_width(2.0));
        paint::label(frame, *name, Point::new(center.x, 85.0), 10.0, tint.color());
        paint::label(frame, *detail, Point::new(center.x, 99.0), 8.0, chrome::SLATE_500.color());

        if index + 1 < nodes.len() {
            frame.stroke(
                &Path::line(Point::new(center.x + 30.0, 90.0), Point::new(center.x + 70.0, 90.0)),
                paint::dashed(chrome::SLATE_500.color(), 2.0),
            );
        }
    }

    for (x, name) in [(100.0, "Quality Gate"), (200.0, "Schema Check")] {
        paint::boxed(frame, Point::new(x, 140.0), Size::new(80.0, 25.0), chrome::SLATE_800.color(), chrome::GREEN_400.color(), 1.0);
        paint::label(frame, name, Point::new(x + 40.0, 152.5), 8.0, chrome::GREEN_400.color());
    }
}

fn code(frame: &mut canvas::Frame) {
    paint::boxed(
        frame,
        Point::new(4.0, 4.0),
        Size::new(392.0, 192.0),
        chrome::SLATE_900.alpha(0.8),
        chrome::SLATE_700.alpha(0.5),
        1.0,
    );
    window_dots(frame, Point::new(16.0, 18.0));
    paint::aligned(
        frame,
        "governance_config.py",
        Point::new(56.0, 18.0),
        9.0,
        chrome::SLATE_500.color(),
        Horizontal::Left,
        Font::MONOSPACE,
    );

    let keyword = PURPLE_LIGHT;
    let lines: [(&str, Shade, f32); 9] = [
        ("from unity_catalog import Catalog", keyword, 0.0),
        ("from purview import DataGovernance", keyword, 0.0),
        ("# Configure access controls", chrome::SLATE_500, 0.0),
        ("@secure_access(\"PHI\")", YELLOW, 0.0),
        ("def apply_masking(df):", chrome::ACCENT_400, 0.0),
        ("rules = {", chrome::SLATE_300, 1.0),
        ("\"ssn\": \"mask_all\",", chrome::GREEN_400, 2.0),
        ("\"dob\": \"hash_sha256\"", chrome::GREEN_400, 2.0),
        ("return mask(df, rules)", keyword, 1.0),
    ];
    for (row, (line, tint, indent)) in lines.iter().enumerate() {
        let at = Point::new(16.0 + indent * 16.0, 42.0 + row as f32 * 16.0);
        paint::aligned(frame, *line, at, 10.0, tint.color(), Horizontal::Left, Font::MONOSPACE);
    }
}

/// Traffic-light window controls
fn window_dots(frame: &mut canvas::Frame, at: Point) {
    for (index, tint) in [chrome::RED_400, YELLOW, chrome::GREEN_400].iter().enumerate() {
        let center = Point::new(at.x + index as f32 * 12.0, at.y);
        frame.fill(&Path::circle(center, 4.0), tint.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let (scale, offset) = fit(Size::new(800.0, 400.0));
        assert_eq!(scale, 2.0);
        assert_eq!(offset, Vector::new(0.0, 0.0));

        let (scale, offset) = fit(Size::new(800.0, 200.0));
        assert_eq!(scale, 1.0);
        assert_eq!(offset, Vector::new(200.0, 0.0));
    }
}
