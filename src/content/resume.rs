/// Résumé records
///
/// These structs mirror `content/resume.json`: the personal details,
/// the About summary, skill categories, work history and education
/// shared by most pages.

use serde::Deserialize;

use super::Icon;

/// The whole résumé document
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeData {
    pub personal: Personal,
    pub about: About,
    /// Home page highlight cards
    pub highlights: Vec<Highlight>,
    pub skills: Vec<SkillCategory>,
    /// Newest role first
    pub experience: Vec<Experience>,
    pub education: Education,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    /// Profile path without scheme (e.g. `linkedin.com/in/...`)
    pub linkedin: String,
    pub location: String,
    pub open_to_relocate: bool,
    pub years_of_experience: u32,
}

impl Personal {
    /// Initials shown in the brand badge and photo fallback
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: Icon,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_year: String,
}
