/// Small building blocks shared by every page
use iced::widget::{button, column, container, row, text, Column, Container, Row, Space};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::style;
use crate::color::{chrome, Shade};
use crate::content::showcase::Gradient;
use crate::content::Icon;
use crate::router::Route;
use crate::Message;

/// Horizontal page gutter and max content width
pub const GUTTER: u16 = 24;
pub const MAX_WIDTH: f32 = 1200.0;

/// Centered, width-capped page section
pub fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(MAX_WIDTH)
            .width(Length::Fill),
    )
    .padding([48, GUTTER])
    .center_x(Length::Fill)
    .into()
}

/// Section heading with an optional lead paragraph
pub fn section_title<'a>(title: &'a str, lead: Option<&'a str>) -> Element<'a, Message> {
    let mut header = column![text(title).size(30).font(style::BOLD).color(chrome::WHITE.color())]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    if let Some(lead) = lead {
        header = header.push(text(lead).size(16).color(chrome::SLATE_400.color()));
    }

    header.into()
}

pub fn muted<'a>(content: impl text::IntoFragment<'a>) -> text::Text<'a> {
    text(content).size(15).color(chrome::SLATE_400.color())
}

pub fn strong<'a>(content: impl text::IntoFragment<'a>, size: u16) -> text::Text<'a> {
    text(content)
        .size(size)
        .font(style::SEMIBOLD)
        .color(chrome::WHITE.color())
}

/// Glass card with standard padding
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(style::glass)
}

/// Rounded gradient square holding an icon glyph
pub fn icon_badge<'a>(icon: Icon, stops: Gradient, size: f32) -> Element<'a, Message> {
    container(text(icon.glyph()).size(size * 0.45).color(chrome::WHITE.color()))
        .width(size)
        .height(size)
        .center_x(size)
        .center_y(size)
        .style(style::filled(stops))
        .into()
}

/// Brand monogram square ("SG")
pub fn monogram<'a>(initials: String, size: f32) -> Element<'a, Message> {
    container(text(initials).size(size * 0.42).font(style::BOLD).color(chrome::WHITE.color()))
        .width(size)
        .height(size)
        .center_x(size)
        .center_y(size)
        .style(style::filled(style::BRAND))
        .into()
}

pub fn chip<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(13))
        .padding([4, 10])
        .style(style::chip)
        .into()
}

/// Small tinted pill
pub fn pill<'a>(label: impl text::IntoFragment<'a>, tint: Shade) -> Element<'a, Message> {
    container(text(label).size(13).font(style::SEMIBOLD))
        .padding([6, 14])
        .style(style::tinted(tint))
        .into()
}

/// Wrapped row of technology chips
pub fn chips<'a>(labels: impl IntoIterator<Item = &'a String>) -> Element<'a, Message> {
    let elements = labels.into_iter().map(|label| chip(label)).collect();
    Wrap::with_elements(elements)
        .spacing(Pixels(8.0))
        .line_spacing(Pixels(8.0))
        .into()
}

/// Check-marked line of text
pub fn bullet<'a>(line: &'a str, tint: Shade) -> Element<'a, Message> {
    row![
        text("✓").size(14).color(tint.color()),
        muted(line).width(Length::Fill),
    ]
    .spacing(10)
    .into()
}

/// Lay items out in rows of `per_row`, padding the last row with space
pub fn columns<'a>(
    items: Vec<Element<'a, Message>>,
    per_row: usize,
    spacing: u16,
) -> Element<'a, Message> {
    let per_row = per_row.max(1);
    let mut grid = Column::new().spacing(spacing).width(Length::Fill);
    let mut current = Row::new().spacing(spacing).width(Length::Fill);
    let mut in_row = 0;

    for item in items {
        current = current.push(container(item).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == per_row {
            grid = grid.push(current);
            current = Row::new().spacing(spacing).width(Length::Fill);
            in_row = 0;
        }
    }

    if in_row > 0 {
        for _ in in_row..per_row {
            current = current.push(Space::with_width(Length::FillPortion(1)));
        }
        grid = grid.push(current);
    }

    grid.into()
}

/// Value over label, centered
pub fn stat<'a>(value: &'a str, label: &'a str, tint: Shade) -> Element<'a, Message> {
    column![
        text(value).size(32).font(style::BOLD).color(tint.color()),
        text(label).size(13).color(chrome::SLATE_400.color()),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .into()
}

/// Stat tile with icon badge on a gradient wash
pub fn icon_stat<'a>(
    icon: Icon,
    value: &'a str,
    label: &'a str,
    stops: Gradient,
) -> Element<'a, Message> {
    container(
        column![
            icon_badge(icon, stops, 44.0),
            text(value).size(28).font(style::BOLD).color(chrome::WHITE.color()),
            text(label).size(13).color(chrome::SLATE_400.color()),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill),
    )
    .padding(20)
    .width(Length::Fill)
    .style(style::washed(stops))
    .into()
}

/// Button that navigates to `route`
pub fn link<'a>(
    label: &'a str,
    route: Route,
    look: impl Fn(&iced::Theme, button::Status) -> button::Style + 'a,
) -> button::Button<'a, Message> {
    button(text(label).size(15).font(style::SEMIBOLD))
        .padding([12, 22])
        .style(look)
        .on_press(Message::Navigate(route))
}
