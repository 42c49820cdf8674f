use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::{style, widgets};
use crate::color::chrome;
use crate::content::resume::Personal;
use crate::router::{Route, NAV_ITEMS};
use crate::Message;

/// Brand block on the left, the seven page links on the right.
/// Stacks vertically on narrow windows.
pub fn footer<'a>(personal: &'a Personal, wide: bool) -> Element<'a, Message> {
    let brand = button(
        row![
            widgets::monogram(personal.monogram(), 40.0),
            column![
                text(&personal.name).font(style::SEMIBOLD).color(chrome::WHITE.color()),
                text(&personal.title).size(13).color(chrome::SLATE_500.color()),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(0)
    .style(style::text_link)
    .on_press(Message::Navigate(Route::Home));

    let links = NAV_ITEMS
        .iter()
        .map(|(label, route)| {
            button(text(*label).size(14))
                .padding([4, 8])
                .style(style::text_link)
                .on_press(Message::Navigate(route.clone()))
                .into()
        })
        .collect();
    let links = Wrap::with_elements(links).spacing(Pixels(8.0)).line_spacing(Pixels(4.0));

    let body: Element<'a, Message> = if wide {
        row![brand, Space::with_width(Length::Fill), links]
            .align_y(Alignment::Center)
            .into()
    } else {
        column![brand, links]
            .spacing(24)
            .align_x(Alignment::Center)
            .into()
    };

    container(
        container(body)
            .max_width(widgets::MAX_WIDTH)
            .width(Length::Fill),
    )
    .padding([40, widgets::GUTTER])
    .center_x(Length::Fill)
    .style(style::navbar(true))
    .into()
}
