/// Landing page: name, title, call-to-action buttons and highlight cards
use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::{portrait, Context};
use crate::color::chrome;
use crate::router::Route;
use crate::ui::{style, widgets};
use crate::Message;

pub fn view<'a>(ctx: &Context<'a>) -> Element<'a, Message> {
    let content = ctx.content;
    let personal = &content.resume.personal;

    let badge = widgets::pill(
        format!("● {}+ Years of Experience", personal.years_of_experience),
        chrome::ACCENT_400,
    );

    let buttons = row![
        widgets::link("View Experience →", Route::Experience, style::primary),
        // No résumé file ships with the app
        button(text("⤓ Download Resume").size(15).font(style::SEMIBOLD))
            .padding([12, 22])
            .style(style::secondary),
        widgets::link("✉ Contact", Route::Contact, style::text_link),
    ]
    .spacing(16);

    let stats = content
        .home
        .stats
        .iter()
        .map(|stat| {
            widgets::card(widgets::stat(&stat.value, &stat.label, chrome::WHITE))
                .padding(16)
                .into()
        })
        .collect();

    let intro = column![
        badge,
        text(&personal.name)
            .size(if ctx.wide { 64 } else { 44 })
            .font(style::BOLD)
            .color(chrome::WHITE.color()),
        text(&personal.title)
            .size(if ctx.wide { 34 } else { 26 })
            .font(style::SEMIBOLD)
            .color(chrome::ACCENT_400.color()),
        text(&personal.tagline).size(19).color(chrome::SLATE_400.color()),
        buttons,
        widgets::columns(stats, 3, 16),
    ]
    .spacing(24)
    .width(Length::Fill);

    let mut aside = Column::new()
        .spacing(16)
        .width(Length::Fill)
        .push(container(portrait(ctx, 240.0)).center_x(Length::Fill));
    for highlight in &content.resume.highlights {
        aside = aside.push(
            widgets::card(
                row![
                    widgets::icon_badge(highlight.icon, style::BRAND, 48.0),
                    column![
                        widgets::strong(&highlight.title, 16),
                        text(&highlight.description).size(14).color(chrome::SLATE_400.color()),
                    ]
                    .spacing(2),
                ]
                .spacing(16)
                .align_y(Alignment::Center),
            )
            .padding(20),
        );
    }

    let body: Element<'a, Message> = if ctx.wide {
        Row::new()
            .push(intro)
            .push(aside)
            .spacing(64)
            .align_y(Alignment::Center)
            .into()
    } else {
        column![intro, aside].spacing(48).into()
    };

    widgets::section(body)
}
