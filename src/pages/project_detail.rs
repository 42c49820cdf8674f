/// Project case study at `/projects/:projectId`
///
/// The id comes straight from the route. An id with no case study renders
/// the not-found state instead of the page body; that is the only error
/// the pages ever show.
use iced::widget::{button, canvas, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::Context;
use crate::color::chrome;
use crate::content::project::{Architecture, ProcessStep, ProjectDetail};
use crate::router::Route;
use crate::ui::diagram::ScreenshotVisual;
use crate::ui::{style, widgets};
use crate::Message;

pub const NOT_FOUND: &str = "Project Not Found";

const VISUAL_HEIGHT: f32 = 220.0;

pub fn view<'a>(id: &str, ctx: &Context<'a>) -> Element<'a, Message> {
    match ctx.content.project(id) {
        Some(detail) => case_study(detail, ctx.wide),
        None => {
            tracing::debug!(id, "no case study for project id");
            not_found()
        }
    }
}

fn not_found<'a>() -> Element<'a, Message> {
    widgets::section(
        column![
            text(NOT_FOUND).size(40).font(style::BOLD).color(chrome::WHITE.color()),
            widgets::link("← Back to Projects", Route::Projects, style::primary),
        ]
        .spacing(24)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
}

fn case_study(detail: &ProjectDetail, wide: bool) -> Element<'_, Message> {
    let two = if wide { 2 } else { 1 };

    column![
        widgets::section(hero(detail, wide)),
        widgets::section(overview(detail, wide)),
        widgets::section(architecture(&detail.architecture, wide)),
        widgets::section(
            column![
                widgets::section_title("Technology Stack", None),
                widgets::columns(
                    detail
                        .tech_stack
                        .iter()
                        .map(|group| {
                            widgets::card(
                                group.tools.iter().fold(
                                    column![text(&group.category)
                                        .font(style::SEMIBOLD)
                                        .color(chrome::ACCENT_400.color())]
                                    .spacing(12),
                                    |list, tool| {
                                        list.push(
                                            column![
                                                text(&tool.name).size(15).font(style::SEMIBOLD),
                                                text(&tool.description).size(13).color(chrome::SLATE_400.color()),
                                            ]
                                            .spacing(2),
                                        )
                                    },
                                ),
                            )
                            .into()
                        })
                        .collect(),
                    if wide { 4 } else { 1 },
                    20,
                ),
            ]
            .spacing(32),
        ),
        widgets::section(phases(detail)),
        widgets::section(
            column![
                widgets::section_title("Project Visuals", None),
                widgets::columns(
                    detail
                        .screenshots
                        .iter()
                        .map(|shot| {
                            widgets::card(
                                column![
                                    container(
                                        canvas(ScreenshotVisual { kind: shot.kind })
                                            .width(Length::Fill)
                                            .height(VISUAL_HEIGHT),
                                    )
                                    .style(style::code),
                                    widgets::strong(&shot.title, 16),
                                    widgets::muted(&shot.description),
                                ]
                                .spacing(12),
                            )
                            .into()
                        })
                        .collect(),
                    two,
                    24,
                ),
            ]
            .spacing(32),
        ),
        technical_process(&detail.technical_process, wide),
        widgets::section(challenges(detail)),
        widgets::section(closing(detail)),
    ]
    .into()
}

fn hero(detail: &ProjectDetail, wide: bool) -> Element<'_, Message> {
    let metrics = detail
        .metrics
        .iter()
        .map(|metric| {
            widgets::card(
                column![
                    text(&metric.value).size(32).font(style::BOLD).color(chrome::ACCENT_400.color()),
                    widgets::strong(&metric.label, 14),
                    text(&metric.description).size(12).color(chrome::SLATE_500.color()),
                ]
                .spacing(4)
                .align_x(Alignment::Center),
            )
            .padding(20)
            .into()
        })
        .collect();

    let mut hero = Column::new()
        .spacing(24)
        .push(
            button(text("← Back to Projects").size(14))
                .padding(0)
                .style(style::text_link)
                .on_press(Message::Navigate(Route::Projects)),
        )
        .push(widgets::pill(&detail.category, chrome::ACCENT_400))
        .push(
            text(&detail.title)
                .size(if wide { 56 } else { 38 })
                .font(style::BOLD)
                .color(chrome::WHITE.color()),
        )
        .push(text(&detail.tagline).size(20).color(chrome::SLATE_400.color()));

    if let Some(url) = &detail.video_url {
        hero = hero.push(
            button(text("▶ Copy Demo Link").size(14).font(style::SEMIBOLD))
                .padding([10, 18])
                .style(style::secondary)
                .on_press(Message::CopyToClipboard(url.clone())),
        );
    }

    hero.push(widgets::columns(metrics, if wide { 4 } else { 2 }, 16))
        .into()
}

fn overview(detail: &ProjectDetail, wide: bool) -> Element<'_, Message> {
    let story = column![
        widgets::strong("Overview", 28),
        text(&detail.overview).size(18).color(chrome::SLATE_300.color()),
        container(
            column![
                row![text("⚠").color(chrome::RED_400.color()), widgets::strong("Problem Statement", 16)].spacing(8),
                widgets::muted(&detail.problem_statement),
            ]
            .spacing(10),
        )
        .padding(24)
        .width(Length::Fill)
        .style(style::outlined(chrome::RED_400)),
    ]
    .spacing(20)
    .width(Length::Fill);

    let features = detail.key_features.iter().fold(Column::new().spacing(12), |list, feature| {
        list.push(
            widgets::card(
                row![
                    widgets::icon_badge(feature.icon, style::BRAND, 40.0),
                    column![
                        widgets::strong(&feature.title, 15),
                        text(&feature.description).size(13).color(chrome::SLATE_400.color()),
                    ]
                    .spacing(2),
                ]
                .spacing(14)
                .align_y(Alignment::Center),
            )
            .padding(16),
        )
    });

    let solution = column![
        container(
            column![
                row![text("✦").color(chrome::TEAL_400.color()), widgets::strong("Solution", 16)].spacing(8),
                widgets::muted(&detail.solution),
            ]
            .spacing(10),
        )
        .padding(24)
        .width(Length::Fill)
        .style(style::outlined(chrome::TEAL_500)),
        features,
    ]
    .spacing(20)
    .width(Length::Fill);

    if wide {
        row![story, solution].spacing(40).into()
    } else {
        column![story, solution].spacing(32).into()
    }
}

fn architecture(architecture: &Architecture, wide: bool) -> Element<'_, Message> {
    let mut layers = Column::new().spacing(16);
    for (index, layer) in architecture.layers.iter().enumerate() {
        if index > 0 {
            layers = layers.push(
                container(text("↓").size(20).color(chrome::SLATE_500.color())).center_x(Length::Fill),
            );
        }

        let mut components = Row::new().spacing(8);
        for component in &layer.components {
            components = components.push(widgets::chip(component));
        }

        let label = column![
            widgets::strong(&layer.name, 18),
            text(&layer.description).size(14).color(chrome::SLATE_300.color()),
        ]
        .spacing(4)
        .width(if wide { Length::FillPortion(1) } else { Length::Fill });

        let body: Element<'_, Message> = if wide {
            row![label, container(components).width(Length::FillPortion(2))]
                .spacing(24)
                .align_y(Alignment::Center)
                .into()
        } else {
            column![label, widgets::chips(&layer.components)].spacing(12).into()
        };

        layers = layers.push(
            container(body)
                .padding(20)
                .width(Length::Fill)
                .style(style::washed(layer.gradient)),
        );
    }

    column![
        widgets::section_title(&architecture.title, Some(architecture.description.as_str())),
        widgets::card(layers).padding(32),
    ]
    .spacing(32)
    .into()
}

fn phases(detail: &ProjectDetail) -> Element<'_, Message> {
    let timeline = detail.implementation.iter().fold(Column::new().spacing(24), |list, phase| {
        list.push(
            row![
                container(text(&phase.phase).size(13).font(style::BOLD))
                    .padding([8, 14])
                    .style(style::filled(style::BRAND)),
                widgets::card(
                    column![
                        widgets::strong(&phase.title, 20),
                        widgets::muted(&phase.description),
                        widgets::chips(&phase.deliverables),
                    ]
                    .spacing(10),
                ),
            ]
            .spacing(20),
        )
    });

    column![widgets::section_title("Implementation Phases", None), timeline]
        .spacing(32)
        .into()
}

fn technical_process(steps: &[ProcessStep], wide: bool) -> Element<'_, Message> {
    if steps.is_empty() {
        return Column::new().into();
    }

    let mut process = Column::new().spacing(48);
    for step in steps {
        let details = step.details.iter().fold(
            column![row![text("✓").color(chrome::TEAL_400.color()), widgets::strong("Key Steps", 15)].spacing(8)]
                .spacing(8),
            |list, line| list.push(widgets::bullet(line, chrome::TEAL_400)),
        );

        let snippets = step.code_snippets.iter().fold(Column::new().spacing(20), |list, snippet| {
            list.push(
                container(
                    column![
                        row![
                            widgets::strong(&snippet.title, 14).width(Length::Fill),
                            widgets::pill(&snippet.language, chrome::TEAL_400),
                        ]
                        .align_y(Alignment::Center),
                        text(&snippet.description).size(13).color(chrome::SLATE_400.color()),
                        container(
                            text(&snippet.code)
                                .font(style::MONO)
                                .size(13)
                                .color(chrome::SLATE_200.color()),
                        )
                        .padding(16)
                        .width(Length::Fill)
                        .style(style::code),
                    ]
                    .spacing(10),
                )
                .padding(20)
                .width(Length::Fill)
                .style(style::outlined(chrome::SLATE_700)),
            )
        });

        let body: Element<'_, Message> = if wide {
            row![
                container(details).width(Length::FillPortion(1)),
                container(snippets).width(Length::FillPortion(2)),
            ]
            .spacing(24)
            .into()
        } else {
            column![details, snippets].spacing(20).into()
        };

        process = process.push(
            widgets::card(
                column![
                    row![
                        container(text(&step.step).size(18).font(style::BOLD))
                            .width(48)
                            .height(48)
                            .center_x(48)
                            .center_y(48)
                            .style(style::filled(style::BRAND)),
                        column![widgets::strong(&step.title, 22), widgets::muted(&step.description)].spacing(6),
                    ]
                    .spacing(20)
                    .align_y(Alignment::Center),
                    body,
                ]
                .spacing(24),
            )
            .padding(32),
        );
    }

    widgets::section(
        column![
            widgets::section_title(
                "Technical Implementation",
                Some("Detailed code, queries, and step-by-step technical process"),
            ),
            process,
        ]
        .spacing(32),
    )
}

fn challenges(detail: &ProjectDetail) -> Element<'_, Message> {
    let list = detail.challenges.iter().fold(Column::new().spacing(20), |list, item| {
        list.push(widgets::card(
            column![
                row![text("⚠").color(chrome::AMBER_400.color()), widgets::strong(&item.challenge, 17)].spacing(10),
                row![text("✓").color(chrome::GREEN_400.color()), widgets::muted(&item.solution)].spacing(10),
            ]
            .spacing(12),
        ))
    });

    column![widgets::section_title("Challenges & Solutions", None), list]
        .spacing(32)
        .into()
}

fn closing(detail: &ProjectDetail) -> Element<'_, Message> {
    column![
        widgets::strong("Technologies Used", 24),
        widgets::chips(&detail.technologies),
        row![
            widgets::link("← All Projects", Route::Projects, style::secondary),
            widgets::link("Discuss This Project", Route::Contact, style::primary),
        ]
        .spacing(16),
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use crate::content::Content;

    #[test]
    fn test_every_listing_resolves() {
        let content = Content::load().unwrap();
        for project in &content.projects {
            let detail = content.project(&project.id).unwrap();
            assert_eq!(detail.title, project.title);
        }
    }

    #[test]
    fn test_nested_id_is_not_found() {
        let content = Content::load().unwrap();
        assert!(content.project("healthcare-lakehouse/extra").is_none());
        assert!(content.project("").is_none());
    }
}
