/// Page components, one per route
///
/// A `Page` is built from the route on every navigation. Page-local UI
/// state (the skills tab, the experience accordion, the projects filter,
/// the selected cloud platform, the contact form) lives inside the variant,
/// so leaving a page and coming back starts from the defaults again.

pub mod about;
pub mod architecture;
pub mod contact;
pub mod experience;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod skills;

use iced::widget::{container, image, Space};
use iced::Element;

use crate::color::chrome;
use crate::content::Content;
use crate::router::Route;
use crate::ui::{style, widgets};
use crate::Message;

pub use architecture::PlatformSelector;
pub use contact::ContactForm;
pub use experience::Accordion;
pub use projects::ProjectFilter;
pub use skills::SkillsTab;

/// Height of the blank outlet shown for unmatched paths
const EMPTY_OUTLET: f32 = 480.0;

/// What every page view reads
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub content: &'a Content,
    /// Decoded profile photo, `None` until loaded or when missing
    pub profile: Option<&'a image::Handle>,
    /// Window is at least the wide breakpoint
    pub wide: bool,
}

/// The mounted page and its local state
#[derive(Debug, Clone)]
pub enum Page {
    Home,
    About,
    Skills(SkillsTab),
    Experience(Accordion),
    Projects(ProjectFilter),
    ProjectDetail(String),
    Architecture(PlatformSelector),
    Contact(ContactForm),
    /// Path outside the route table: the outlet stays empty
    Unmatched,
}

impl Page {
    /// Fresh page state for `route`
    pub fn mount(route: &Route) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Skills => Page::Skills(SkillsTab::default()),
            Route::Experience => Page::Experience(Accordion::default()),
            Route::Projects => Page::Projects(ProjectFilter::default()),
            Route::ProjectDetail(id) => Page::ProjectDetail(id.clone()),
            Route::Architecture => Page::Architecture(PlatformSelector::default()),
            Route::Contact => Page::Contact(ContactForm::default()),
            Route::Unmatched(_) => Page::Unmatched,
        }
    }

    /// The page's top-level heading
    pub fn heading(&self, content: &Content) -> Option<String> {
        let heading = match self {
            Page::Home => content.resume.personal.name.clone(),
            Page::About => about::HEADING.to_string(),
            Page::Skills(_) => skills::HEADING.to_string(),
            Page::Experience(_) => experience::HEADING.to_string(),
            Page::Projects(_) => projects::HEADING.to_string(),
            Page::ProjectDetail(id) => match content.project(id) {
                Some(detail) => detail.title.clone(),
                None => project_detail::NOT_FOUND.to_string(),
            },
            Page::Architecture(_) => architecture::HEADING.to_string(),
            Page::Contact(_) => contact::HEADING.to_string(),
            Page::Unmatched => return None,
        };
        Some(heading)
    }

    pub fn view<'a>(&'a self, ctx: Context<'a>) -> Element<'a, Message> {
        match self {
            Page::Home => home::view(&ctx),
            Page::About => about::view(&ctx),
            Page::Skills(tab) => skills::view(*tab, &ctx),
            Page::Experience(accordion) => experience::view(accordion, &ctx),
            Page::Projects(filter) => projects::view(filter, &ctx),
            Page::ProjectDetail(id) => project_detail::view(id, &ctx),
            Page::Architecture(selector) => architecture::view(selector, &ctx),
            Page::Contact(form) => contact::view(form, &ctx),
            Page::Unmatched => Space::with_height(EMPTY_OUTLET).into(),
        }
    }
}

/// Profile photo, or the monogram when no photo was loaded
pub fn portrait<'a>(ctx: &Context<'a>, size: f32) -> Element<'a, Message> {
    match ctx.profile {
        Some(handle) => container(image(handle.clone()).width(size).height(size))
            .padding(4)
            .style(style::outlined(chrome::SLATE_700))
            .into(),
        None => widgets::monogram(ctx.content.resume.personal.monogram(), size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(path: &str, content: &Content) -> Option<String> {
        Page::mount(&Route::parse(path)).heading(content)
    }

    #[test]
    fn test_headings_per_route() {
        let content = Content::load().unwrap();

        let expected = [
            ("/", "Saketh Gittaveni"),
            ("/about", "About Me"),
            ("/skills", "Technical Skills"),
            ("/experience", "Professional Experience"),
            ("/projects", "Projects"),
            ("/architecture", "Architecture & Tech Stack"),
            ("/contact", "Get in Touch"),
            ("/projects/does-not-exist", "Project Not Found"),
            ("/projects/x/y", "Project Not Found"),
        ];
        for (path, title) in expected {
            assert_eq!(heading(path, &content).as_deref(), Some(title), "{path}");
        }

        let detail = content.project("healthcare-lakehouse").unwrap();
        assert_eq!(
            heading("/projects/healthcare-lakehouse", &content),
            Some(detail.title.clone())
        );
    }

    #[test]
    fn test_headings_come_from_page_constants() {
        let content = Content::load().unwrap();
        let pages = [
            (Route::About, about::HEADING),
            (Route::Skills, skills::HEADING),
            (Route::Experience, experience::HEADING),
            (Route::Projects, projects::HEADING),
            (Route::Architecture, architecture::HEADING),
            (Route::Contact, contact::HEADING),
        ];
        for (route, constant) in pages {
            assert_eq!(Page::mount(&route).heading(&content).as_deref(), Some(constant), "{route}");
        }
    }

    #[test]
    fn test_unmatched_has_no_heading() {
        let content = Content::load().unwrap();
        assert_eq!(heading("/nope", &content), None);
    }

    #[test]
    fn test_mount_resets_local_state() {
        let page = Page::mount(&Route::Experience);
        let Page::Experience(accordion) = page else {
            panic!("expected the experience page");
        };
        assert_eq!(accordion.expanded(), Some(0));

        let Page::Skills(tab) = Page::mount(&Route::Skills) else {
            panic!("expected the skills page");
        };
        assert_eq!(tab, SkillsTab::Categories);

        let Page::Contact(form) = Page::mount(&Route::Contact) else {
            panic!("expected the contact page");
        };
        assert!(!form.is_submitted());
    }
}
