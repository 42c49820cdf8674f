use iced::widget::{column, container, text, Space};
use iced::{Alignment, Element, Length};

use super::style;
use crate::color::chrome;
use crate::Message;

/// Centered page title with an optional subtitle and a brand underline
pub fn page_header<'a>(title: &'a str, subtitle: Option<&'a str>) -> Element<'a, Message> {
    let mut header = column![text(title)
        .size(48)
        .font(style::BOLD)
        .color(chrome::WHITE.color())]
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    if let Some(subtitle) = subtitle {
        header = header.push(text(subtitle).size(19).color(chrome::SLATE_400.color()));
    }

    header
        .push(container(Space::new(80, 4)).style(style::underline))
        .push(Space::with_height(24))
        .into()
}
