/// Projects page: category filter over the project listing cards
use iced::widget::{button, column, container, row, text, Row};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::Context;
use crate::color::chrome;
use crate::content::Project;
use crate::router::Route;
use crate::ui::{page_header, style, widgets};
use crate::Message;

pub const HEADING: &str = "Projects";

/// Pseudo-category that shows every project
pub const ALL: &str = "All";

/// Technologies previewed on a card before the "+N more" note
const TECH_PREVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: ALL.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, category: String) {
        tracing::debug!(%category, "project filter changed");
        self.selected = category;
    }

    /// Projects whose category equals the selection exactly, or all of
    /// them for "All". Authored order is kept.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|project| self.selected == ALL || project.category == self.selected)
            .collect()
    }
}

/// "All" followed by each distinct category in first-appearance order
pub fn categories(projects: &[Project]) -> Vec<&str> {
    let mut categories = vec![ALL];
    for project in projects {
        if !categories.contains(&project.category.as_str()) {
            categories.push(&project.category);
        }
    }
    categories
}

pub fn view<'a>(filter: &ProjectFilter, ctx: &Context<'a>) -> Element<'a, Message> {
    let projects = &ctx.content.projects;

    let pills = categories(projects)
        .into_iter()
        .map(|category| {
            button(text(category).size(14).font(style::SEMIBOLD))
                .padding([10, 18])
                .style(style::pill(category == filter.selected()))
                .on_press(Message::FilterProjects(category.to_string()))
                .into()
        })
        .collect();
    let pills = Wrap::with_elements(pills)
        .spacing(Pixels(8.0))
        .line_spacing(Pixels(8.0));

    let cards = filter.visible(projects).into_iter().map(card).collect();

    widgets::section(
        column![
            page_header(
                HEADING,
                Some("Enterprise data engineering solutions I've architected and delivered"),
            ),
            container(pills).center_x(Length::Fill),
            widgets::columns(cards, if ctx.wide { 2 } else { 1 }, 24),
        ]
        .spacing(40),
    )
}

fn card(project: &Project) -> Element<'_, Message> {
    let impact = project
        .impact
        .iter()
        .take(2)
        .map(|line| {
            row![
                text("•").size(12).color(chrome::ACCENT_400.color()),
                text(line).size(13).color(chrome::SLATE_300.color()),
            ]
            .spacing(8)
            .into()
        })
        .collect();

    let mut technologies = Row::new().spacing(8).align_y(Alignment::Center);
    for tech in project.technologies.iter().take(TECH_PREVIEW) {
        technologies = technologies.push(widgets::chip(tech));
    }
    if project.technologies.len() > TECH_PREVIEW {
        technologies = technologies.push(
            text(format!("+{} more", project.technologies.len() - TECH_PREVIEW))
                .size(12)
                .color(chrome::SLATE_500.color()),
        );
    }

    let body = column![
        row![
            widgets::icon_badge(project.icon, style::BRAND, 48.0),
            column![
                widgets::pill(&project.category, chrome::ACCENT_400),
                widgets::strong(&project.title, 20),
                widgets::muted(&project.description),
            ]
            .spacing(8)
            .width(Length::Fill),
        ]
        .spacing(16),
        widgets::columns(impact, 2, 8),
        row![
            technologies.width(Length::Fill),
            text("View Details →").size(14).color(chrome::ACCENT_400.color()),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(20);

    button(body)
        .padding(24)
        .width(Length::Fill)
        .style(style::card_button)
        .on_press(Message::Navigate(Route::ProjectDetail(project.id.clone())))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn test_categories_in_first_appearance_order() {
        let content = Content::load().unwrap();
        let categories = categories(&content.projects);

        assert_eq!(categories[0], ALL);
        assert_eq!(categories[1], "Healthcare Analytics");
        assert_eq!(categories.len(), 9);
    }

    #[test]
    fn test_all_shows_every_project() {
        let content = Content::load().unwrap();
        let filter = ProjectFilter::default();
        assert_eq!(filter.selected(), ALL);
        assert_eq!(filter.visible(&content.projects).len(), 8);
    }

    #[test]
    fn test_each_category_shows_one_project() {
        let content = Content::load().unwrap();
        let mut filter = ProjectFilter::default();

        for category in categories(&content.projects).into_iter().skip(1) {
            filter.select(category.to_string());
            let visible = filter.visible(&content.projects);
            assert_eq!(visible.len(), 1, "{category}");
            assert_eq!(visible[0].category, category);
        }
    }

    #[test]
    fn test_unknown_category_shows_nothing() {
        let content = Content::load().unwrap();
        let mut filter = ProjectFilter::default();
        filter.select("healthcare analytics".into());
        assert!(filter.visible(&content.projects).is_empty());
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let content = Content::load().unwrap();
        let mut projects = content.projects.clone();
        projects.push(projects[0].clone());
        assert_eq!(categories(&projects).len(), 9);

        let mut filter = ProjectFilter::default();
        filter.select("Healthcare Analytics".into());
        assert_eq!(filter.visible(&projects).len(), 2);
    }
}
