/// Page frame shared by every route
///
/// The navbar stays pinned above one vertical scrollable that holds the
/// page outlet followed by the footer. The scroll offset is reported back
/// so the navbar can switch its background.
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{column, container, scrollable as scroll_area};
use iced::{Element, Length, Task};

use super::style;
use crate::Message;

/// Windows at least this wide get the desktop layout
pub const WIDE_BREAKPOINT: f32 = 1024.0;

pub fn is_wide(width: f32) -> bool {
    width >= WIDE_BREAKPOINT
}

/// The page scrollable
pub fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Jump the page back to the top
pub fn scroll_to_top<T>() -> Task<T> {
    scrollable::scroll_to(page_id(), AbsoluteOffset { x: 0.0, y: 0.0 })
}

pub fn layout<'a>(
    navbar: Element<'a, Message>,
    outlet: Element<'a, Message>,
    footer: Element<'a, Message>,
) -> Element<'a, Message> {
    let page = scroll_area(
        column![container(outlet).width(Length::Fill).height(Length::Shrink), footer]
            .width(Length::Fill),
    )
    .id(page_id())
    .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
    .width(Length::Fill)
    .height(Length::Fill);

    container(
        container(column![navbar, page])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::backdrop),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::page)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_breakpoint() {
        assert!(!is_wide(800.0));
        assert!(!is_wide(1023.9));
        assert!(is_wide(1024.0));
        assert!(is_wide(1920.0));
    }
}
