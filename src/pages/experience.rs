/// Professional Experience page
use iced::widget::{button, canvas, column, container, row, text, Column, Row};
use iced::{Alignment, Element, Length, Padding};

use super::Context;
use crate::color::{chrome, Shade};
use crate::content::resume::Experience;
use crate::content::showcase::{CompanyBrand, ExperiencePage};
use crate::content::Icon;
use crate::ui::evolution::{self, Timeline};
use crate::ui::{page_header, style, widgets};
use crate::Message;

pub const HEADING: &str = "Professional Experience";

/// Work history accordion: at most one entry open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
}

impl Default for Accordion {
    /// Newest role starts open
    fn default() -> Self {
        Self { expanded: Some(0) }
    }
}

impl Accordion {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it in place of the
    /// current one
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) { None } else { Some(index) };
        tracing::debug!(expanded = ?self.expanded, "experience accordion toggled");
    }
}

/// First word of the company name ("Molina Healthcare" -> "Molina")
fn short_company(company: &str) -> &str {
    company.split_whitespace().next().unwrap_or(company)
}

/// Start of a duration range ("Jan 2023 - Present" -> "Jan 2023")
fn started(duration: &str) -> &str {
    duration.split(" - ").next().unwrap_or(duration)
}

/// Last two words of the role ("Senior Data Engineer" -> "Data Engineer")
fn short_role(role: &str) -> String {
    let words: Vec<&str> = role.split_whitespace().collect();
    words[words.len().saturating_sub(2)..].join(" ")
}

pub fn view<'a>(accordion: &Accordion, ctx: &Context<'a>) -> Element<'a, Message> {
    let resume = &ctx.content.resume;
    let page = &ctx.content.experience;
    let per_row = if ctx.wide { 4 } else { 2 };

    let stats = page
        .career_stats
        .iter()
        .map(|stat| widgets::icon_stat(stat.icon, &stat.value, &stat.label, stat.gradient))
        .collect();

    let mut history = Column::new().spacing(20);
    for (index, role) in resume.experience.iter().enumerate() {
        history = history.push(entry(index, role, page.brand(&role.company), accordion.is_expanded(index)));
    }

    let impact = page
        .impact_metrics
        .iter()
        .map(|item| {
            widgets::card(
                column![
                    text(&item.metric).size(36).font(style::BOLD).color(chrome::WHITE.color()),
                    text(&item.description).size(14).color(chrome::SLATE_400.color()),
                    text(&item.company).size(12).font(style::SEMIBOLD).color(chrome::ACCENT_400.color()),
                ]
                .spacing(8)
                .align_x(Alignment::Center),
            )
            .into()
        })
        .collect();

    let education = &resume.education;
    let education = widgets::card(
        row![
            widgets::icon_badge(Icon::GraduationCap, style::BRAND, 56.0),
            column![
                widgets::strong(&education.degree, 20),
                text(&education.institution).size(17).color(chrome::SLATE_300.color()),
                row![
                    widgets::muted(format!("⌖ {}", education.location)),
                    widgets::muted(format!("◷ {}", education.graduation_year)),
                ]
                .spacing(16),
            ]
            .spacing(6),
        ]
        .spacing(20),
    )
    .padding(32);

    let certifications = page.certification_details.iter().fold(Column::new().spacing(16), |list, cert| {
        list.push(
            widgets::card(
                row![
                    widgets::icon_badge(Icon::Award, cert.gradient, 48.0),
                    column![
                        widgets::strong(&cert.name, 16),
                        row![
                            text(&cert.issuer).size(13).color(chrome::SLATE_400.color()),
                            text("·").size(13).color(chrome::SLATE_500.color()),
                            text(&cert.year).size(13).color(chrome::SLATE_400.color()),
                            text("·").size(13).color(chrome::SLATE_500.color()),
                            text(&cert.credential_id).size(13).color(chrome::ACCENT_400.color()),
                        ]
                        .spacing(6),
                    ]
                    .spacing(4),
                ]
                .spacing(16)
                .align_y(Alignment::Center),
            )
            .padding(20),
        )
    });

    let credentials: Element<'a, Message> = {
        let education = column![widgets::strong("Education", 24), education]
            .spacing(20)
            .width(Length::Fill);
        let certifications = column![widgets::strong("Certifications", 24), certifications]
            .spacing(20)
            .width(Length::Fill);
        if ctx.wide {
            row![education, certifications].spacing(32).into()
        } else {
            column![education, certifications].spacing(40).into()
        }
    };

    widgets::section(
        column![
            page_header(HEADING, Some("9+ years building enterprise data platforms at scale")),
            widgets::columns(stats, per_row, 16),
            progression(&resume.experience, page),
            widgets::section_title("Work History", None),
            history,
            widgets::section_title("Measurable Impact", None),
            widgets::columns(impact, per_row, 16),
            credentials,
            skills_evolution(page),
        ]
        .spacing(40),
    )
}

/// Oldest role first, joined by arrows
fn progression<'a>(roles: &'a [Experience], page: &'a ExperiencePage) -> Element<'a, Message> {
    let mut steps = Row::new().spacing(12).align_y(Alignment::Center);
    for (position, role) in roles.iter().rev().enumerate() {
        if position > 0 {
            steps = steps.push(text("→").size(20).color(chrome::SLATE_500.color()));
        }

        let stops = page.brand(&role.company).map_or(
            [chrome::SLATE_500, chrome::SLATE_700],
            |brand| brand.gradient,
        );
        let initial = short_company(&role.company).chars().take(1).collect::<String>();

        steps = steps.push(
            column![
                container(text(initial).size(22).font(style::BOLD).color(chrome::WHITE.color()))
                    .width(64)
                    .height(64)
                    .center_x(64)
                    .center_y(64)
                    .style(style::filled(stops)),
                text(short_company(&role.company)).size(14).font(style::SEMIBOLD),
                text(started(&role.duration)).size(12).color(chrome::SLATE_500.color()),
                text(short_role(&role.role)).size(12).color(chrome::ACCENT_400.color()),
            ]
            .spacing(4)
            .align_x(Alignment::Center)
            .width(Length::Fill),
        );
    }

    widgets::card(column![widgets::strong("Career Progression", 18), steps].spacing(24).align_x(Alignment::Center))
        .padding(32)
        .into()
}

/// Company name color: the authored brand color, white otherwise
fn company_tint(brand: Option<&CompanyBrand>) -> Shade {
    brand.map_or(chrome::WHITE, |brand| brand.color)
}

fn entry<'a>(
    index: usize,
    role: &'a Experience,
    brand: Option<&'a CompanyBrand>,
    expanded: bool,
) -> Element<'a, Message> {
    let stops = brand.map_or([chrome::SLATE_500, chrome::SLATE_700], |brand| brand.gradient);

    let mut title = Row::new()
        .spacing(12)
        .align_y(Alignment::Center)
        .push(widgets::strong(&role.company, 22).color(company_tint(brand).color()));
    if let Some(brand) = brand {
        title = title.push(
            container(text(&brand.industry).size(12).font(style::SEMIBOLD))
                .padding([2, 8])
                .style(style::filled(brand.gradient)),
        );
    }

    let header = button(
        row![
            widgets::icon_badge(Icon::Building, stops, 56.0),
            column![
                title,
                text(&role.role).size(17).color(chrome::ACCENT_400.color()),
                row![
                    widgets::muted(format!("◷ {}", role.duration)),
                    widgets::muted(format!("⌖ {}", role.location)),
                ]
                .spacing(16),
            ]
            .spacing(6)
            .width(Length::Fill),
            text(if expanded { "▴" } else { "▾" }).size(20).color(chrome::SLATE_400.color()),
        ]
        .spacing(20)
        .align_y(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::text_link)
    .on_press(Message::ToggleExperience(index));

    let mut body = Column::new().push(header);
    if expanded {
        let achievements = role
            .achievements
            .iter()
            .fold(Column::new().spacing(10), |list, line| list.push(widgets::bullet(line, chrome::GREEN_400)));

        body = body.push(
            container(
                column![
                    text(&role.description).size(18).color(chrome::SLATE_300.color()),
                    widgets::strong("Key Achievements", 16),
                    achievements,
                    widgets::strong("Tech Stack", 16),
                    widgets::chips(&role.technologies),
                ]
                .spacing(16),
            )
            .padding(Padding {
                top: 0.0,
                right: 24.0,
                bottom: 24.0,
                left: 24.0,
            }),
        );
    }

    let look = if expanded {
        style::outlined(chrome::ACCENT_500)
    } else {
        style::outlined(chrome::SLATE_800)
    };
    container(body).width(Length::Fill).style(look).into()
}

fn skills_evolution<'a>(page: &'a ExperiencePage) -> Element<'a, Message> {
    let evolution = &page.evolution;

    let counters = evolution
        .counters
        .iter()
        .map(|counter| widgets::stat(&counter.value, &counter.label, counter.tint))
        .collect();

    let legend = evolution.legend.iter().fold(Row::new().spacing(24), |legend, entry| {
        legend.push(
            row![
                text("●").size(12).color(entry.tint.color()),
                text(&entry.label).size(14).color(chrome::SLATE_400.color()),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
    });

    widgets::card(
        column![
            widgets::section_title(
                "Skills Evolution",
                Some("A decade of continuous learning and skill acquisition across the data engineering landscape"),
            ),
            widgets::columns(counters, evolution.counters.len(), 16),
            canvas(Timeline { periods: &evolution.periods })
                .width(Length::Fill)
                .height(evolution::HEIGHT),
            container(legend).center_x(Length::Fill),
        ]
        .spacing(32),
    )
    .padding(32)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_starts_open() {
        let accordion = Accordion::default();
        assert_eq!(accordion.expanded(), Some(0));
        assert!(accordion.is_expanded(0));
        assert!(!accordion.is_expanded(1));
    }

    #[test]
    fn test_at_most_one_expanded() {
        let mut accordion = Accordion::default();

        accordion.toggle(2);
        assert_eq!(accordion.expanded(), Some(2));
        assert!(!accordion.is_expanded(0));

        accordion.toggle(1);
        assert_eq!(accordion.expanded(), Some(1));

        accordion.toggle(1);
        assert_eq!(accordion.expanded(), None);

        accordion.toggle(0);
        assert!((0..3).filter(|&i| accordion.is_expanded(i)).eq([0]));
    }

    #[test]
    fn test_company_name_uses_brand_color() {
        let content = crate::content::Content::load().unwrap();
        let brand = content.experience.brand("Molina Healthcare");
        assert_eq!(company_tint(brand), Shade::from_hex(0x00a651));
        assert_eq!(company_tint(content.experience.brand("Nowhere Inc")), chrome::WHITE);
    }

    #[test]
    fn test_progression_labels() {
        assert_eq!(short_company("Molina Healthcare"), "Molina");
        assert_eq!(short_company("Allstate"), "Allstate");
        assert_eq!(started("Jan 2023 - Present"), "Jan 2023");
        assert_eq!(started("2015"), "2015");
        assert_eq!(short_role("Senior Data Engineer"), "Data Engineer");
        assert_eq!(short_role("Engineer"), "Engineer");
    }
}
