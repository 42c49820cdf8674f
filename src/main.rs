use std::path::PathBuf;

use clap::Parser;
use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::{image, responsive};
use iced::{Element, Subscription, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod assets;
mod color;
mod content;
mod error;
mod pages;
mod router;
mod settings;
mod ui;

use content::Content;
use error::AppError;
use pages::contact::{self, Field};
use pages::{Context, Page, SkillsTab};
use router::{Route, Router};
use settings::Settings;
use ui::footer::footer;
use ui::layout;
use ui::navbar::Navbar;

/// Portfolio viewer
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to open first (e.g. `/projects/healthcare-lakehouse`)
    #[arg(long)]
    route: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_settings: bool,
}

/// Main application state
struct Portfolio {
    /// Everything the pages display, parsed once at startup
    content: Content,
    router: Router,
    /// Mounted page with its local state
    page: Page,
    navbar: Navbar,
    /// Profile photo once decoded
    profile: Option<image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    /// Return to the previous route (Alt+Left)
    Back,
    /// Page scrolled to this vertical offset
    Scrolled(f32),
    ToggleMenu,
    ProfileLoaded(Option<image::Handle>),
    CopyToClipboard(String),
    FilterProjects(String),
    SelectSkillsTab(SkillsTab),
    SelectPlatform(usize),
    ToggleExperience(usize),
    ContactFieldChanged(Field, String),
    SubmitContact,
    /// Confirmation timer for this submission ticket ran out
    ContactConfirmationElapsed(u64),
}

impl Portfolio {
    fn new(content: Content, settings: &Settings, start: Route) -> Self {
        let router = Router::new(start);
        let page = Page::mount(router.current());

        Portfolio {
            content,
            page,
            router,
            navbar: Navbar::new(settings.scroll_threshold),
            profile: None,
        }
    }

    /// Build the app and start decoding the profile photo
    fn boot(content: Content, settings: Settings, start: Route) -> (Self, Task<Message>) {
        let app = Self::new(content, &settings, start);
        tracing::info!(route = %app.router.current(), "portfolio started");

        (
            app,
            Task::perform(
                assets::load_profile(settings.profile_image),
                Message::ProfileLoaded,
            ),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                // Picking a menu link closes the menu even when the route is unchanged
                self.navbar.on_route_change();
                if self.router.navigate(route) {
                    return self.enter();
                }
            }
            Message::Back => {
                if self.router.back() {
                    return self.enter();
                }
            }
            Message::Scrolled(offset_y) => self.navbar.on_scroll(offset_y),
            Message::ToggleMenu => self.navbar.toggle_menu(),
            Message::ProfileLoaded(handle) => {
                tracing::debug!(loaded = handle.is_some(), "profile photo");
                self.profile = handle;
            }
            Message::CopyToClipboard(value) => {
                tracing::info!(%value, "copied to clipboard");
                return iced::clipboard::write(value);
            }
            Message::FilterProjects(category) => {
                if let Page::Projects(filter) = &mut self.page {
                    filter.select(category);
                }
            }
            Message::SelectSkillsTab(tab) => {
                if let Page::Skills(active) = &mut self.page {
                    *active = tab;
                }
            }
            Message::SelectPlatform(index) => {
                if let Page::Architecture(selector) = &mut self.page {
                    selector.select(index, self.content.architecture.cloud_platforms.len());
                }
            }
            Message::ToggleExperience(index) => {
                if let Page::Experience(accordion) = &mut self.page {
                    accordion.toggle(index);
                }
            }
            Message::ContactFieldChanged(field, value) => {
                if let Page::Contact(form) = &mut self.page {
                    form.set(field, value);
                }
            }
            Message::SubmitContact => {
                if let Page::Contact(form) = &mut self.page {
                    if let Some(ticket) = form.submit() {
                        return contact::confirmation_timer(ticket);
                    }
                }
            }
            Message::ContactConfirmationElapsed(ticket) => {
                // The form may have been unmounted since; then there is nothing to clear
                if let Page::Contact(form) = &mut self.page {
                    form.expire(ticket);
                }
            }
        }

        Task::none()
    }

    /// Mount the page for the current route, close the menu and scroll back
    /// to the top
    fn enter(&mut self) -> Task<Message> {
        self.page = Page::mount(self.router.current());
        self.navbar.on_route_change();
        self.navbar.on_scroll(0.0);
        layout::scroll_to_top()
    }

    fn view(&self) -> Element<'_, Message> {
        responsive(move |size| {
            let wide = layout::is_wide(size.width);
            let personal = &self.content.resume.personal;
            let ctx = Context {
                content: &self.content,
                profile: self.profile.as_ref(),
                wide,
            };

            layout::layout(
                self.navbar.view(self.router.current(), personal, wide),
                self.page.view(ctx),
                footer(personal, wide),
            )
        })
        .into()
    }

    fn title(&self) -> String {
        let name = &self.content.resume.personal.name;
        match self.page.heading(&self.content) {
            Some(heading) if heading != *name => format!("{heading} | {name}"),
            _ => format!("{name} | {}", self.content.resume.personal.title),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(shortcut)
    }

    fn theme(&self) -> Theme {
        ui::style::theme()
    }
}

fn shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::ArrowLeft) if modifiers.alt() => Some(Message::Back),
        _ => None,
    }
}

/// `RUST_LOG` wins; otherwise the configured filter
fn init_logging(fallback: &str) -> error::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn main() -> error::Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;
    if args.print_settings {
        println!("{}", settings.to_json()?);
        return Ok(());
    }
    init_logging(&settings.log_filter)?;

    tracing::info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let content = Content::load()?;
    let start = Route::parse(args.route.as_deref().unwrap_or(&settings.start_route));
    let size = (settings.window_width, settings.window_height);

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(size)
        .centered()
        .run_with(move || Portfolio::boot(content, settings, start))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(start: &str) -> Portfolio {
        Portfolio::new(Content::load().unwrap(), &Settings::default(), Route::parse(start))
    }

    #[test]
    fn test_navigation_remounts_page() {
        let mut app = app("/experience");
        let _ = app.update(Message::ToggleExperience(0));
        assert!(matches!(&app.page, Page::Experience(a) if a.expanded().is_none()));

        let _ = app.update(Message::Navigate(Route::About));
        let _ = app.update(Message::Navigate(Route::Experience));
        assert!(matches!(&app.page, Page::Experience(a) if a.expanded() == Some(0)));
    }

    #[test]
    fn test_navigation_closes_menu_and_resets_scroll() {
        let mut app = app("/");
        let _ = app.update(Message::ToggleMenu);
        let _ = app.update(Message::Scrolled(400.0));
        assert!(app.navbar.is_menu_open());
        assert!(app.navbar.is_scrolled());

        let _ = app.update(Message::Navigate(Route::Skills));
        assert!(!app.navbar.is_menu_open());
        assert!(!app.navbar.is_scrolled());
    }

    #[test]
    fn test_back_closes_menu() {
        let mut app = app("/");
        let _ = app.update(Message::Navigate(Route::About));
        let _ = app.update(Message::ToggleMenu);
        assert!(app.navbar.is_menu_open());

        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), &Route::Home);
        assert!(!app.navbar.is_menu_open());
    }

    #[test]
    fn test_back_returns_to_previous_page() {
        let mut app = app("/projects");
        let _ = app.update(Message::FilterProjects("Azure Cloud".into()));
        let _ = app.update(Message::Navigate(Route::ProjectDetail("ml-ops".into())));
        let title = app.content.project("ml-ops").unwrap().title.clone();
        assert_eq!(app.page.heading(&app.content), Some(title));

        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), &Route::Projects);
        assert!(matches!(&app.page, Page::Projects(f) if f.selected() == "All"));

        // Nothing left to go back to
        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), &Route::Projects);
    }

    #[test]
    fn test_messages_for_other_pages_are_ignored() {
        let mut app = app("/");
        let _ = app.update(Message::SelectSkillsTab(SkillsTab::Featured));
        let _ = app.update(Message::SubmitContact);
        let _ = app.update(Message::ContactConfirmationElapsed(1));
        assert!(matches!(app.page, Page::Home));
    }

    #[test]
    fn test_contact_confirmation_survives_stale_timer() {
        let mut app = app("/contact");
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Message, "Hello"),
        ] {
            let _ = app.update(Message::ContactFieldChanged(field, value.into()));
        }
        let _ = app.update(Message::SubmitContact);
        assert!(matches!(&app.page, Page::Contact(form) if form.is_submitted()));

        let _ = app.update(Message::ContactConfirmationElapsed(0));
        assert!(matches!(&app.page, Page::Contact(form) if form.is_submitted()));
    }

    #[test]
    fn test_platform_selection_bounds() {
        let mut app = app("/architecture");
        let _ = app.update(Message::SelectPlatform(1));
        let _ = app.update(Message::SelectPlatform(9));
        assert!(matches!(&app.page, Page::Architecture(s) if s.selected() == 1));
    }

    #[test]
    fn test_window_title() {
        assert_eq!(app("/about").title(), "About Me | Saketh Gittaveni");
        assert_eq!(app("/").title(), "Saketh Gittaveni | Senior Data Engineer");
        assert_eq!(app("/nowhere").title(), "Saketh Gittaveni | Senior Data Engineer");
    }

    #[test]
    fn test_alt_left_goes_back() {
        let alt = Modifiers::ALT;
        assert!(matches!(
            shortcut(Key::Named(key::Named::ArrowLeft), alt),
            Some(Message::Back)
        ));
        assert!(shortcut(Key::Named(key::Named::ArrowLeft), Modifiers::empty()).is_none());
        assert!(shortcut(Key::Named(key::Named::ArrowRight), alt).is_none());
    }
}
