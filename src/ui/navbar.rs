use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use super::{style, widgets};
use crate::color::chrome;
use crate::content::resume::Personal;
use crate::router::{Route, NAV_ITEMS};
use crate::Message;

/// Top navigation bar state
///
/// - `scrolled` follows the page scroll offset against the threshold
/// - `menu_open` is the narrow-window menu, closed on every route change
#[derive(Debug, Clone)]
pub struct Navbar {
    threshold: f32,
    scrolled: bool,
    menu_open: bool,
}

impl Navbar {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the page's vertical scroll offset
    pub fn on_scroll(&mut self, offset_y: f32) {
        let scrolled = offset_y > self.threshold;
        if scrolled != self.scrolled {
            tracing::debug!(scrolled, offset_y, "navbar background changed");
            self.scrolled = scrolled;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_route_change(&mut self) {
        self.menu_open = false;
    }

    pub fn view<'a>(&self, current: &Route, personal: &'a Personal, wide: bool) -> Element<'a, Message> {
        let brand = button(
            row![
                widgets::monogram(personal.monogram(), 40.0),
                column![
                    text(&personal.name)
                        .size(17)
                        .font(style::SEMIBOLD)
                        .color(chrome::WHITE.color()),
                    text(&personal.title).size(12).color(chrome::SLATE_500.color()),
                ]
                .spacing(2),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .padding(0)
        .style(style::text_link)
        .on_press(Message::Navigate(Route::Home));

        let mut bar = Row::new()
            .push(brand)
            .push(Space::with_width(Length::Fill))
            .align_y(Alignment::Center)
            .height(if wide { 80 } else { 64 });

        if wide {
            for (label, route) in NAV_ITEMS.iter() {
                bar = bar.push(nav_button(*label, route, current));
            }
            bar = bar
                .push(Space::with_width(16))
                .push(widgets::link("Get in Touch", Route::Contact, style::primary).padding([8, 18]));
        } else {
            let toggle = if self.menu_open { "✕" } else { "☰" };
            bar = bar.push(
                button(text(toggle).size(22))
                    .padding(8)
                    .style(style::text_link)
                    .on_press(Message::ToggleMenu),
            );
        }

        let bar = container(
            container(bar)
                .max_width(widgets::MAX_WIDTH)
                .width(Length::Fill),
        )
        .padding([0, widgets::GUTTER])
        .center_x(Length::Fill)
        .style(style::navbar(self.scrolled));

        if wide || !self.menu_open {
            return bar.into();
        }

        let mut menu = Column::new().spacing(8).padding(16);
        for (label, route) in NAV_ITEMS.iter() {
            menu = menu.push(nav_button(*label, route, current).width(Length::Fill));
        }
        menu = menu.push(
            widgets::link("Get in Touch", Route::Contact, style::primary).width(Length::Fill),
        );

        column![bar, container(menu).width(Length::Fill).style(style::menu)].into()
    }
}

fn nav_button<'a>(label: &'a str, route: &Route, current: &Route) -> button::Button<'a, Message> {
    button(text(label).size(14).font(style::SEMIBOLD))
        .padding([8, 16])
        .style(style::nav_link(current.is_nav_item(route)))
        .on_press(Message::Navigate(route.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut navbar = Navbar::new(50.0);
        assert!(!navbar.is_scrolled());

        navbar.on_scroll(50.0);
        assert!(!navbar.is_scrolled());

        navbar.on_scroll(50.5);
        assert!(navbar.is_scrolled());

        navbar.on_scroll(0.0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn test_custom_threshold() {
        let mut navbar = Navbar::new(200.0);
        navbar.on_scroll(120.0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn test_menu_closes_on_route_change() {
        let mut navbar = Navbar::new(50.0);
        navbar.toggle_menu();
        assert!(navbar.is_menu_open());

        navbar.on_route_change();
        assert!(!navbar.is_menu_open());

        navbar.toggle_menu();
        navbar.toggle_menu();
        assert!(!navbar.is_menu_open());
    }
}
