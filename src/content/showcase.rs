/// Page-local showcase data
///
/// Each page beyond the résumé itself carries its own stat tiles,
/// timelines and chart series. They live in `content/pages/*.json`,
/// one document per page, so the views stay free of literal copy.

use serde::Deserialize;

use super::Icon;
use crate::color::Shade;

/// Two-stop gradient, start then end
pub type Gradient = [Shade; 2];

// ========== Home ==========

#[derive(Debug, Clone, Deserialize)]
pub struct HomePage {
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

// ========== About ==========

#[derive(Debug, Clone, Deserialize)]
pub struct AboutPage {
    pub milestones: Vec<Milestone>,
    pub values: Vec<Value>,
    pub achievements: Vec<Achievement>,
    pub what_i_bring: Vec<Offering>,
    pub ecosystem: Ecosystem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub gradient: Gradient,
}

/// A work-philosophy card
#[derive(Debug, Clone, Deserialize)]
pub struct Value {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    pub value: String,
    pub label: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Offering {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Technology orbit drawn around the profile name
#[derive(Debug, Clone, Deserialize)]
pub struct Ecosystem {
    pub center: OrbitCenter,
    pub inner_orbit: Vec<Satellite>,
    pub outer_orbit: Vec<Satellite>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrbitCenter {
    pub name: String,
    pub caption: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Satellite {
    pub name: String,
    /// Degrees, clockwise from the positive x axis
    pub angle: f32,
    pub color: Shade,
}

// ========== Skills ==========

#[derive(Debug, Clone, Deserialize)]
pub struct SkillsPage {
    pub skill_stats: Vec<IconStat>,
    pub featured_technologies: Vec<FeaturedTechnology>,
    pub proficiency_levels: Vec<ProficiencyLevel>,
    pub domain_expertise: Vec<Domain>,
    pub certifications: Vec<Certification>,
    pub overview: Vec<OverviewBar>,
}

/// Stat tile with an icon badge
#[derive(Debug, Clone, Deserialize)]
pub struct IconStat {
    pub label: String,
    pub value: String,
    pub icon: Icon,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedTechnology {
    pub name: String,
    pub category: String,
    pub experience: String,
    /// Proficiency percentage, 0..=100
    pub level: u8,
    pub description: String,
}

impl FeaturedTechnology {
    /// Filled stars out of five
    pub fn stars(&self) -> usize {
        (usize::from(self.level) / 20).min(5)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProficiencyLevel {
    pub level: String,
    pub description: String,
    pub gradient: Gradient,
    pub border: Shade,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Domain {
    pub domain: String,
    pub icon: Icon,
    pub tint: Shade,
    pub backdrop: Gradient,
    pub years: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewBar {
    pub label: String,
    pub value: u8,
    pub gradient: Gradient,
}

// ========== Experience ==========

#[derive(Debug, Clone, Deserialize)]
pub struct ExperiencePage {
    pub career_stats: Vec<IconStat>,
    pub company_branding: Vec<CompanyBrand>,
    pub certification_details: Vec<CertificationDetail>,
    pub impact_metrics: Vec<ImpactMetric>,
    pub evolution: Evolution,
}

impl ExperiencePage {
    /// Brand colors for a company, if any were authored
    pub fn brand(&self, company: &str) -> Option<&CompanyBrand> {
        self.company_branding.iter().find(|b| b.company == company)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyBrand {
    pub company: String,
    pub color: Shade,
    pub gradient: Gradient,
    pub industry: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificationDetail {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub gradient: Gradient,
    pub credential_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImpactMetric {
    pub metric: String,
    pub description: String,
    pub company: String,
}

/// Skills Evolution timeline
#[derive(Debug, Clone, Deserialize)]
pub struct Evolution {
    pub counters: Vec<Counter>,
    pub periods: Vec<Period>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Counter {
    pub label: String,
    pub value: String,
    pub tint: Shade,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Period {
    pub years: String,
    pub company: String,
    pub dot_color: Shade,
    pub new_skills: String,
    pub skills: Vec<ColoredSkill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColoredSkill {
    pub name: String,
    pub color: Shade,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub tint: Shade,
}

// ========== Architecture ==========

#[derive(Debug, Clone, Deserialize)]
pub struct ArchitecturePage {
    pub cloud_platforms: Vec<CloudPlatform>,
    pub architecture_patterns: Vec<Pattern>,
    pub tech_stack_categories: Vec<StackCategory>,
    pub design_principles: Vec<Principle>,
    pub pipeline: Pipeline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudPlatform {
    pub name: String,
    pub gradient: Gradient,
    /// Percentage, 0..=100
    pub expertise: u8,
    pub services: Vec<String>,
    pub projects: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pattern {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub layers: Vec<PatternLayer>,
    pub use_cases: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternLayer {
    pub name: String,
    pub description: String,
    pub color: Shade,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StackCategory {
    pub category: String,
    pub icon: Icon,
    pub tint: Shade,
    pub technologies: Vec<RatedTechnology>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatedTechnology {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Principle {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

/// End-to-end pipeline diagram
#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    pub stages: Vec<PipelineStage>,
    pub governance: String,
    pub orchestration: String,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineStage {
    pub name: String,
    pub lines: Vec<String>,
    pub color: Shade,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn featured(level: u8) -> FeaturedTechnology {
        FeaturedTechnology {
            name: "Apache Spark".into(),
            category: "Processing".into(),
            experience: "8+ years".into(),
            level,
            description: String::new(),
        }
    }

    #[test]
    fn test_stars_floor_level_over_twenty() {
        assert_eq!(featured(95).stars(), 4);
        assert_eq!(featured(100).stars(), 5);
        assert_eq!(featured(19).stars(), 0);
        assert_eq!(featured(80).stars(), 4);
        assert_eq!(featured(255).stars(), 5);
    }
}
