/// Architecture & Tech Stack page
use iced::widget::{button, canvas, column, container, horizontal_space, progress_bar, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::Context;
use crate::color::chrome;
use crate::content::showcase::{CloudPlatform, Gradient, Pattern, Pipeline, StackCategory};
use crate::ui::diagram::CloudSketch;
use crate::ui::pipeline::{self, PipelineChart};
use crate::ui::{page_header, style, widgets};
use crate::Message;

pub const HEADING: &str = "Architecture & Tech Stack";

const SKETCH_HEIGHT: f32 = 200.0;

/// Which cloud platform's detail panel is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformSelector {
    selected: usize,
}

impl PlatformSelector {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select platform `index` out of `count`. Out-of-range indices leave
    /// the selection alone.
    pub fn select(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            tracing::debug!(index, count, "ignoring out-of-range platform");
            return false;
        }
        self.selected = index;
        true
    }

    pub fn platform<'a>(&self, platforms: &'a [CloudPlatform]) -> Option<&'a CloudPlatform> {
        platforms.get(self.selected)
    }
}

/// Bar colors by proficiency: 90 and up, 80 and up, everything else
pub fn tier(level: u8) -> Gradient {
    if level >= 90 {
        style::BRAND
    } else if level >= 80 {
        [chrome::TEAL_500, chrome::GREEN_500]
    } else {
        [chrome::SLATE_500, chrome::SLATE_400]
    }
}

pub fn view<'a>(selector: &PlatformSelector, ctx: &Context<'a>) -> Element<'a, Message> {
    let page = &ctx.content.architecture;

    let patterns = page
        .architecture_patterns
        .iter()
        .map(pattern)
        .collect();

    let stack = page
        .tech_stack_categories
        .iter()
        .map(stack_category)
        .collect();

    let principles = page
        .design_principles
        .iter()
        .map(|principle| {
            widgets::card(
                column![
                    widgets::icon_badge(principle.icon, style::BRAND, 52.0),
                    widgets::strong(&principle.title, 16),
                    text(&principle.description).size(14).color(chrome::SLATE_400.color()),
                ]
                .spacing(10)
                .align_x(Alignment::Center),
            )
            .into()
        })
        .collect();

    widgets::section(
        column![
            page_header(
                HEADING,
                Some("Enterprise-grade data architectures designed for scale, security, and performance"),
            ),
            cloud(selector, &page.cloud_platforms, ctx.wide),
            widgets::section_title("Architecture Patterns", None),
            widgets::columns(patterns, if ctx.wide { 3 } else { 1 }, 24),
            widgets::section_title("Technology Proficiency", None),
            widgets::columns(stack, if ctx.wide { 3 } else { 1 }, 24),
            widgets::section_title("Architecture Design Principles", None),
            widgets::columns(principles, if ctx.wide { 4 } else { 2 }, 16),
            pipeline_card(&page.pipeline),
        ]
        .spacing(40),
    )
}

fn cloud<'a>(selector: &PlatformSelector, platforms: &'a [CloudPlatform], wide: bool) -> Element<'a, Message> {
    let tabs = platforms
        .iter()
        .enumerate()
        .fold(Row::new().spacing(16), |tabs, (index, platform)| {
            let selected = index == selector.selected();
            let look = style::pill(selected);
            tabs.push(
                button(text(&platform.name).font(style::SEMIBOLD))
                    .padding([12, 24])
                    .style(move |theme, status| {
                        let mut look = look(theme, status);
                        if selected {
                            look.background = Some(style::gradient(platform.gradient, 1.0));
                        }
                        look
                    })
                    .on_press(Message::SelectPlatform(index)),
            )
        });

    let mut panel = column![
        widgets::section_title("Multi-Cloud Expertise", None),
        container(tabs).center_x(Length::Fill),
    ]
    .spacing(32);

    if let Some(platform) = selector.platform(platforms) {
        let meter = column![
            row![
                widgets::strong(format!("{} Expertise", platform.name), 20),
                horizontal_space(),
                text(format!("{}%", platform.expertise))
                    .size(24)
                    .font(style::BOLD)
                    .color(chrome::ACCENT_400.color()),
            ]
            .align_y(Alignment::Center),
            progress_bar(0.0..=100.0, f32::from(platform.expertise))
                .height(16)
                .style(style::gradient_meter(platform.gradient)),
            widgets::muted(&platform.projects),
            container(
                canvas(CloudSketch { platform: &platform.name })
                    .width(Length::Fill)
                    .height(SKETCH_HEIGHT),
            )
            .padding(16)
            .style(style::code),
        ]
        .spacing(16)
        .width(Length::Fill);

        let services = platform
            .services
            .iter()
            .map(|service| {
                container(
                    row![
                        text("✓").size(13).color(chrome::TEAL_400.color()),
                        text(service).size(14).color(chrome::SLATE_300.color()),
                    ]
                    .spacing(8),
                )
                .padding([12, 16])
                .width(Length::Fill)
                .style(style::chip)
                .into()
            })
            .collect();
        let services = column![widgets::strong("Core Services", 18), widgets::columns(services, 2, 12)]
            .spacing(16)
            .width(Length::Fill);

        let detail: Element<'a, Message> = if wide {
            row![meter, services].spacing(32).into()
        } else {
            column![meter, services].spacing(32).into()
        };
        panel = panel.push(widgets::card(detail).padding(32));
    }

    panel.into()
}

fn pattern(pattern: &Pattern) -> Element<'_, Message> {
    let mut layers = Column::new().spacing(12);
    for layer in &pattern.layers {
        let tools = layer
            .tools
            .iter()
            .take(2)
            .fold(Row::new().spacing(4), |tools, tool| tools.push(widgets::chip(tool)));

        layers = layers.push(
            container(
                row![
                    column![
                        text(&layer.name).size(14).font(style::SEMIBOLD).color(chrome::WHITE.color()),
                        text(&layer.description).size(12).color(chrome::SLATE_500.color()),
                    ]
                    .width(Length::Fill),
                    tools,
                ]
                .align_y(Alignment::Center),
            )
            .padding([8, 16])
            .width(Length::Fill)
            .style(style::band(layer.color)),
        );
    }

    widgets::card(
        column![
            row![
                widgets::icon_badge(pattern.icon, style::BRAND, 48.0),
                widgets::strong(&pattern.title, 18),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            text(&pattern.description).size(14).color(chrome::SLATE_400.color()),
            layers,
            text("USE CASES").size(11).color(chrome::SLATE_500.color()),
            widgets::chips(&pattern.use_cases),
        ]
        .spacing(16),
    )
    .into()
}

fn stack_category(category: &StackCategory) -> Element<'_, Message> {
    let technologies = category
        .technologies
        .iter()
        .fold(Column::new().spacing(14), |list, tech| {
            list.push(
                column![
                    row![
                        text(&tech.name).size(14).color(chrome::SLATE_300.color()),
                        horizontal_space(),
                        text(format!("{}%", tech.level)).size(13).color(chrome::SLATE_500.color()),
                    ],
                    progress_bar(0.0..=100.0, f32::from(tech.level))
                        .height(8)
                        .style(style::gradient_meter(tier(tech.level))),
                ]
                .spacing(6),
            )
        });

    widgets::card(
        column![
            row![
                container(text(category.icon.glyph()).size(20).color(category.tint.color()))
                    .padding(10)
                    .style(style::tinted(category.tint)),
                widgets::strong(&category.category, 17),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
            technologies,
        ]
        .spacing(20),
    )
    .into()
}

fn pipeline_card(pipeline: &Pipeline) -> Element<'_, Message> {
    let legend = pipeline.legend.iter().fold(Row::new().spacing(24), |legend, entry| {
        legend.push(
            row![
                text("●").size(12).color(entry.tint.color()),
                text(&entry.label).size(14).color(chrome::SLATE_400.color()),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
    });

    widgets::card(
        column![
            widgets::section_title("End-to-End Data Pipeline", None),
            canvas(PipelineChart { pipeline })
                .width(Length::Fill)
                .height(pipeline::HEIGHT),
            container(legend).center_x(Length::Fill),
        ]
        .spacing(24),
    )
    .padding(32)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn test_out_of_range_platform_is_ignored() {
        let content = Content::load().unwrap();
        let platforms = &content.architecture.cloud_platforms;
        let mut selector = PlatformSelector::default();
        assert_eq!(selector.platform(platforms).unwrap().name, "Azure");

        assert!(selector.select(2, platforms.len()));
        assert_eq!(selector.platform(platforms).unwrap().name, "GCP");

        assert!(!selector.select(3, platforms.len()));
        assert!(!selector.select(usize::MAX, platforms.len()));
        assert_eq!(selector.selected(), 2);
    }

    #[test]
    fn test_proficiency_tiers() {
        assert_eq!(tier(95), style::BRAND);
        assert_eq!(tier(90), style::BRAND);
        assert_eq!(tier(89), [chrome::TEAL_500, chrome::GREEN_500]);
        assert_eq!(tier(80), [chrome::TEAL_500, chrome::GREEN_500]);
        assert_eq!(tier(79), [chrome::SLATE_500, chrome::SLATE_400]);
        assert_eq!(tier(0), [chrome::SLATE_500, chrome::SLATE_400]);
    }
}
