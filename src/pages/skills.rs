/// Technical Skills page
///
/// The tab strip picks one of three views over the same skill set:
/// the résumé categories, the proficiency tiers or the featured tools.
/// Domain expertise, certifications and the overview chart follow below
/// whichever tab is active.
use iced::widget::{
    button, canvas, column, container, horizontal_space, progress_bar, row, text, Column, Row,
};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::Context;
use crate::color::chrome;
use crate::content::resume::SkillCategory;
use crate::content::showcase::{FeaturedTechnology, ProficiencyLevel};
use crate::content::Icon;
use crate::ui::bars::SkillBars;
use crate::ui::{page_header, style, widgets};
use crate::Message;

pub const HEADING: &str = "Technical Skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillsTab {
    #[default]
    Categories,
    Proficiency,
    Featured,
}

impl SkillsTab {
    pub const ALL: [SkillsTab; 3] = [SkillsTab::Categories, SkillsTab::Proficiency, SkillsTab::Featured];

    pub fn label(self) -> &'static str {
        match self {
            SkillsTab::Categories => "By Category",
            SkillsTab::Proficiency => "By Proficiency",
            SkillsTab::Featured => "Featured Tools",
        }
    }
}

pub fn view<'a>(active: SkillsTab, ctx: &Context<'a>) -> Element<'a, Message> {
    let content = ctx.content;
    let page = &content.skills;

    let stats = page
        .skill_stats
        .iter()
        .map(|stat| widgets::icon_stat(stat.icon, &stat.value, &stat.label, stat.gradient))
        .collect();

    let tabs = SkillsTab::ALL.into_iter().fold(Row::new().spacing(8), |tabs, tab| {
        tabs.push(
            button(text(tab.label()).font(style::SEMIBOLD))
                .padding([12, 24])
                .style(style::pill(tab == active))
                .on_press(Message::SelectSkillsTab(tab)),
        )
    });

    let body = match active {
        SkillsTab::Categories => categories(&content.resume.skills, ctx.wide),
        SkillsTab::Proficiency => proficiency(&page.proficiency_levels),
        SkillsTab::Featured => featured(&page.featured_technologies, ctx.wide),
    };

    let domains = page
        .domain_expertise
        .iter()
        .map(|domain| {
            container(
                column![
                    widgets::icon_badge(domain.icon, domain.backdrop, 52.0),
                    widgets::strong(&domain.domain, 20),
                    text(format!("{} experience", domain.years))
                        .size(13)
                        .color(chrome::SLATE_500.color()),
                    domain
                        .highlights
                        .iter()
                        .fold(Column::new().spacing(8), |list, line| {
                            list.push(widgets::bullet(line, domain.tint))
                        }),
                ]
                .spacing(10),
            )
            .padding(24)
            .width(Length::Fill)
            .style(style::washed(domain.backdrop))
            .into()
        })
        .collect();

    let certifications = page
        .certifications
        .iter()
        .map(|cert| {
            widgets::card(
                column![
                    widgets::icon_badge(Icon::Award, cert.gradient, 52.0),
                    widgets::strong(&cert.name, 16),
                    text(&cert.issuer).size(14).color(chrome::SLATE_400.color()),
                    text(&cert.year).size(12).color(chrome::SLATE_500.color()),
                ]
                .spacing(6)
                .align_x(Alignment::Center),
            )
            .into()
        })
        .collect();

    let chart = SkillBars { bars: &page.overview };
    let height = chart.height();
    let per_row = if ctx.wide { 3 } else { 1 };

    widgets::section(
        column![
            page_header(
                HEADING,
                Some("Comprehensive expertise across the modern data engineering stack"),
            ),
            widgets::columns(stats, if ctx.wide { 4 } else { 2 }, 16),
            container(tabs).center_x(Length::Fill),
            body,
            widgets::section_title("Domain Expertise", None),
            widgets::columns(domains, per_row, 20),
            widgets::section_title("Certifications", None),
            widgets::columns(certifications, per_row, 20),
            widgets::section_title("Skills Overview", None),
            widgets::card(canvas(chart).width(Length::Fill).height(height)),
        ]
        .spacing(40),
    )
}

fn categories<'a>(skills: &'a [SkillCategory], wide: bool) -> Element<'a, Message> {
    let cards = skills
        .iter()
        .map(|skill| {
            widgets::card(
                column![
                    row![
                        widgets::icon_badge(skill.icon, style::BRAND, 48.0),
                        widgets::strong(&skill.category, 17),
                    ]
                    .spacing(16)
                    .align_y(Alignment::Center),
                    widgets::chips(&skill.tools),
                ]
                .spacing(20),
            )
            .into()
        })
        .collect();

    widgets::columns(cards, if wide { 4 } else { 1 }, 20)
}

fn proficiency<'a>(levels: &'a [ProficiencyLevel]) -> Element<'a, Message> {
    let mut tiers = Column::new().spacing(32);
    for level in levels {
        let technologies = level
            .technologies
            .iter()
            .map(|name| {
                container(
                    row![
                        text("✓").size(13).color(level.border.color()),
                        text(name).size(14).color(chrome::SLATE_300.color()),
                    ]
                    .spacing(8),
                )
                .padding([8, 16])
                .style(style::chip)
                .into()
            })
            .collect();

        tiers = tiers.push(
            container(
                column![
                    row![
                        container(text(&level.level).size(14).font(style::BOLD))
                            .padding([8, 16])
                            .style(style::filled(level.gradient)),
                        text(&level.description).size(14).color(chrome::SLATE_400.color()),
                    ]
                    .spacing(16)
                    .align_y(Alignment::Center),
                    Wrap::with_elements(technologies)
                        .spacing(Pixels(12.0))
                        .line_spacing(Pixels(12.0)),
                ]
                .spacing(16),
            )
            .padding(24)
            .width(Length::Fill)
            .style(style::outlined(level.border)),
        );
    }
    tiers.into()
}

fn featured<'a>(technologies: &'a [FeaturedTechnology], wide: bool) -> Element<'a, Message> {
    let cards = technologies
        .iter()
        .map(|tech| {
            let filled = tech.stars();
            let stars = (0..5).fold(Row::new().spacing(2), |stars, index| {
                let tint = if index < filled {
                    chrome::AMBER_400
                } else {
                    chrome::SLATE_700
                };
                stars.push(text("★").size(14).color(tint.color()))
            });

            widgets::card(
                column![
                    row![
                        column![
                            widgets::strong(&tech.name, 20),
                            row![
                                widgets::pill(&tech.category, chrome::ACCENT_400),
                                text(&tech.experience).size(12).color(chrome::SLATE_500.color()),
                            ]
                            .spacing(8)
                            .align_y(Alignment::Center),
                        ]
                        .spacing(6)
                        .width(Length::Fill),
                        stars,
                    ],
                    row![
                        text("Proficiency").size(13).color(chrome::SLATE_400.color()),
                        horizontal_space(),
                        text(format!("{}%", tech.level)).size(13).font(style::SEMIBOLD),
                    ],
                    progress_bar(0.0..=100.0, f32::from(tech.level))
                        .height(8)
                        .style(style::gradient_meter(style::BRAND)),
                    widgets::muted(&tech.description),
                ]
                .spacing(14),
            )
            .into()
        })
        .collect();

    widgets::columns(cards, if wide { 3 } else { 1 }, 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_categories() {
        assert_eq!(SkillsTab::default(), SkillsTab::Categories);
        assert_eq!(SkillsTab::ALL[0], SkillsTab::default());
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = SkillsTab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(labels, ["By Category", "By Proficiency", "Featured Tools"]);
    }
}
