/// About page
use iced::widget::{canvas, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use super::{portrait, Context};
use crate::color::{chrome, Shade};
use crate::ui::orbit::Orbit;
use crate::ui::{page_header, style, widgets};
use crate::Message;

pub const HEADING: &str = "About Me";

const ORBIT_HEIGHT: f32 = 420.0;

pub fn view<'a>(ctx: &Context<'a>) -> Element<'a, Message> {
    let about = &ctx.content.about;
    let per_row = if ctx.wide { 4 } else { 2 };

    let intro: Element<'a, Message> = if ctx.wide {
        row![
            container(profile_card(ctx)).width(Length::FillPortion(2)),
            container(story(ctx)).width(Length::FillPortion(3)),
        ]
        .spacing(32)
        .into()
    } else {
        column![profile_card(ctx), story(ctx)].spacing(32).into()
    };

    // Career Journey
    let mut journey = Column::new().spacing(20).width(Length::Fill);
    for milestone in &about.milestones {
        journey = journey.push(
            row![
                widgets::icon_badge(milestone.icon, milestone.gradient, 56.0),
                widgets::card(
                    column![
                        text(&milestone.year)
                            .size(24)
                            .font(style::BOLD)
                            .color(milestone.gradient[0].color()),
                        widgets::strong(&milestone.title, 18),
                        widgets::muted(&milestone.description),
                    ]
                    .spacing(6),
                ),
            ]
            .spacing(20)
            .align_y(Alignment::Center),
        );
    }

    let achievements = about
        .achievements
        .iter()
        .map(|achievement| {
            widgets::icon_stat(achievement.icon, &achievement.value, &achievement.label, style::BRAND)
        })
        .collect();

    let offerings = about
        .what_i_bring
        .iter()
        .map(|offering| {
            widgets::card(
                column![
                    widgets::strong(&offering.title, 18),
                    widgets::muted(&offering.description),
                    widgets::chips(&offering.highlights),
                ]
                .spacing(12),
            )
            .into()
        })
        .collect();

    let values = about
        .values
        .iter()
        .map(|value| {
            widgets::card(
                column![
                    widgets::icon_badge(value.icon, style::BRAND, 48.0),
                    widgets::strong(&value.title, 17),
                    text(&value.description).size(14).color(chrome::SLATE_400.color()),
                ]
                .spacing(12)
                .align_x(Alignment::Center),
            )
            .into()
        })
        .collect();

    let ecosystem = widgets::card(
        canvas(Orbit { ecosystem: &about.ecosystem })
            .width(Length::Fill)
            .height(ORBIT_HEIGHT),
    );

    widgets::section(
        column![
            page_header(
                HEADING,
                Some("Building enterprise-scale data platforms with cloud-native technologies"),
            ),
            intro,
            widgets::section_title("Career Journey", None),
            journey,
            widgets::section_title("Key Achievements", None),
            widgets::columns(achievements, per_row, 16),
            widgets::section_title("What I Bring to the Table", None),
            widgets::columns(offerings, if ctx.wide { 2 } else { 1 }, 20),
            widgets::section_title("My Work Philosophy", None),
            widgets::columns(values, per_row, 16),
            widgets::section_title("Technology Ecosystem", None),
            ecosystem,
        ]
        .spacing(40),
    )
}

fn profile_card<'a>(ctx: &Context<'a>) -> Element<'a, Message> {
    let resume = &ctx.content.resume;
    let personal = &resume.personal;

    let facts = column![
        fact("⌖", personal.location.clone(), chrome::SLATE_400),
        fact("▣", format!("{}+ Years Experience", personal.years_of_experience), chrome::SLATE_400),
        fact("◷", "Available for Remote Work".to_string(), chrome::SLATE_400),
        fact("◍", "Open to Opportunities".to_string(), chrome::GREEN_400),
    ]
    .spacing(10);

    let quick = [
        (format!("{}+", personal.years_of_experience), "Years Exp."),
        (resume.certifications.len().to_string(), "Certifications"),
        ("15+".to_string(), "Projects"),
        (resume.experience.len().to_string(), "Companies"),
    ]
    .into_iter()
    .map(|(value, label)| {
        container(
            column![
                text(value).size(24).font(style::BOLD).color(chrome::WHITE.color()),
                text(label).size(12).color(chrome::SLATE_500.color()),
            ]
            .spacing(2),
        )
        .padding(16)
        .width(Length::Fill)
        .style(style::chip)
        .into()
    })
    .collect();

    widgets::card(
        column![
            container(portrait(ctx, 176.0)).center_x(Length::Fill),
            widgets::strong(&personal.name, 24),
            text(&personal.title).color(chrome::ACCENT_400.color()),
            facts,
            widgets::columns(quick, 2, 12),
        ]
        .spacing(16),
    )
    .padding(32)
    .into()
}

fn fact<'a>(glyph: &'a str, label: String, tint: Shade) -> Element<'a, Message> {
    row![text(glyph).color(tint.color()), text(label).color(tint.color())]
        .spacing(8)
        .into()
}

fn story<'a>(ctx: &Context<'a>) -> Element<'a, Message> {
    let about = &ctx.content.resume.about;

    let highlights = about
        .highlights
        .iter()
        .map(|line| widgets::bullet(line, chrome::TEAL_400))
        .collect();

    Column::new()
        .spacing(32)
        .width(Length::Fill)
        .push(
            widgets::card(
                column![
                    row![text("♥").color(chrome::RED_400.color()), widgets::strong("My Story", 20)]
                        .spacing(8)
                        .align_y(Alignment::Center),
                    text(&about.summary).size(18).color(chrome::SLATE_300.color()),
                    widgets::muted(
                        "I'm passionate about transforming complex data challenges into elegant, \
                         scalable solutions. My journey from traditional ETL to modern cloud-native \
                         architectures has given me a unique perspective on building data platforms \
                         that truly serve business needs while maintaining the highest standards of \
                         security and compliance.",
                    ),
                ]
                .spacing(16),
            )
            .padding(32),
        )
        .push(
            widgets::card(
                column![
                    widgets::strong("What Sets Me Apart", 18),
                    widgets::columns(highlights, if ctx.wide { 2 } else { 1 }, 12),
                ]
                .spacing(20),
            )
            .padding(32),
        )
        .into()
}
