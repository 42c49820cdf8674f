/// Static content store
///
/// This module owns everything the site displays:
/// - The résumé (resume.rs)
/// - Project listings and case studies (project.rs)
/// - Page-local showcase data (showcase.rs)
/// - The closed icon set (icon.rs)
///
/// All documents are compiled into the binary and parsed exactly once.
/// The resulting `Content` is immutable for the life of the process.

pub mod icon;
pub mod project;
pub mod resume;
pub mod showcase;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use icon::Icon;
pub use project::{Project, ProjectDetail};
pub use resume::ResumeData;
pub use showcase::{AboutPage, ArchitecturePage, ExperiencePage, HomePage, SkillsPage};

/// Raw JSON for every content document
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub resume: &'a str,
    pub projects: &'a str,
    pub project_details: &'a str,
    pub home: &'a str,
    pub about: &'a str,
    pub skills: &'a str,
    pub experience: &'a str,
    pub architecture: &'a str,
}

/// The documents shipped inside the binary
pub const EMBEDDED: Sources<'static> = Sources {
    resume: include_str!("../../content/resume.json"),
    projects: include_str!("../../content/projects.json"),
    project_details: include_str!("../../content/project_details.json"),
    home: include_str!("../../content/pages/home.json"),
    about: include_str!("../../content/pages/about.json"),
    skills: include_str!("../../content/pages/skills.json"),
    experience: include_str!("../../content/pages/experience.json"),
    architecture: include_str!("../../content/pages/architecture.json"),
};

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum ContentError {
    /// A document is malformed, or names an unknown icon or shade
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("project id `{0}` is defined more than once")]
    DuplicateProject(String),

    #[error("project listing `{0}` has no matching case study")]
    DanglingSummary(String),
}

/// Every record the pages read, loaded once at startup
#[derive(Debug)]
pub struct Content {
    pub resume: ResumeData,
    /// Listing cards in authored order
    pub projects: Vec<Project>,
    /// Case studies in authored order
    details: Vec<ProjectDetail>,
    /// Case study position by id
    index: HashMap<String, usize>,
    pub home: HomePage,
    pub about: AboutPage,
    pub skills: SkillsPage,
    pub experience: ExperiencePage,
    pub architecture: ArchitecturePage,
}

impl Content {
    /// Parse the documents compiled into the binary
    pub fn load() -> Result<Self, ContentError> {
        Self::from_sources(EMBEDDED)
    }

    /// Parse and validate a full set of documents
    pub fn from_sources(sources: Sources<'_>) -> Result<Self, ContentError> {
        let details: Vec<ProjectDetail> = parse("project_details.json", sources.project_details)?;

        let mut index = HashMap::with_capacity(details.len());
        for (position, detail) in details.iter().enumerate() {
            if index.insert(detail.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateProject(detail.id.clone()));
            }
        }

        let projects: Vec<Project> = parse("projects.json", sources.projects)?;
        if let Some(orphan) = projects.iter().find(|p| !index.contains_key(&p.id)) {
            return Err(ContentError::DanglingSummary(orphan.id.clone()));
        }

        let content = Content {
            resume: parse("resume.json", sources.resume)?,
            projects,
            details,
            index,
            home: parse("pages/home.json", sources.home)?,
            about: parse("pages/about.json", sources.about)?,
            skills: parse("pages/skills.json", sources.skills)?,
            experience: parse("pages/experience.json", sources.experience)?,
            architecture: parse("pages/architecture.json", sources.architecture)?,
        };

        tracing::info!(
            projects = content.projects.len(),
            case_studies = content.details.len(),
            roles = content.resume.experience.len(),
            "content loaded"
        );
        tracing::debug!(ids = ?content.project_ids().collect::<Vec<_>>(), "case studies");

        Ok(content)
    }

    /// Case study for `id`, or `None` for the not-found page
    pub fn project(&self, id: &str) -> Option<&ProjectDetail> {
        self.index.get(id).map(|&position| &self.details[position])
    }

    /// Every case study id in authored order
    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.details.iter().map(|detail| detail.id.as_str())
    }
}

fn parse<T: DeserializeOwned>(document: &'static str, json: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { document, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = Content::load().unwrap();

        assert_eq!(content.resume.personal.name, "Saketh Gittaveni");
        assert_eq!(content.resume.personal.monogram(), "SG");
        assert_eq!(content.projects.len(), 8);
        assert_eq!(content.project_ids().count(), 8);
        assert_eq!(content.resume.experience.len(), 3);
        assert!(!content.about.ecosystem.inner_orbit.is_empty());
    }

    #[test]
    fn test_project_lookup_hit() {
        let content = Content::load().unwrap();
        let detail = content.project("healthcare-lakehouse").unwrap();

        assert_eq!(detail.title, "HIPAA-Compliant Healthcare Data Lakehouse");
        let metrics: Vec<&str> = detail.metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(metrics, vec!["55%", "40%", "25-30%", "50M+"]);
    }

    #[test]
    fn test_project_lookup_miss() {
        let content = Content::load().unwrap();
        assert!(content.project("nonexistent").is_none());
        assert!(content.project("").is_none());
        assert!(content.project("healthcare-lakehouse/extra").is_none());
    }

    #[test]
    fn test_project_ids_keep_authored_order() {
        let content = Content::load().unwrap();
        let ids: Vec<&str> = content.project_ids().collect();
        assert_eq!(ids.first(), Some(&"healthcare-lakehouse"));
        assert_eq!(ids.last(), Some(&"ml-ops"));
    }

    #[test]
    fn test_every_listing_links_to_a_case_study() {
        let content = Content::load().unwrap();
        for project in &content.projects {
            assert!(content.project(&project.id).is_some(), "{}", project.id);
        }
    }

    #[test]
    fn test_duplicate_project_is_rejected() {
        let details: serde_json::Value =
            serde_json::from_str(EMBEDDED.project_details).unwrap();
        let mut list = details.as_array().unwrap().clone();
        list.push(list[0].clone());
        let doubled = serde_json::to_string(&list).unwrap();

        let sources = Sources { project_details: &doubled, ..EMBEDDED };
        let err = Content::from_sources(sources).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProject(id) if id == "healthcare-lakehouse"));
    }

    #[test]
    fn test_dangling_summary_is_rejected() {
        let projects: serde_json::Value = serde_json::from_str(EMBEDDED.projects).unwrap();
        let mut list = projects.as_array().unwrap().clone();
        list[0]["id"] = serde_json::Value::from("ghost-project");
        let renamed = serde_json::to_string(&list).unwrap();

        let sources = Sources { projects: &renamed, ..EMBEDDED };
        let err = Content::from_sources(sources).unwrap_err();
        assert!(matches!(err, ContentError::DanglingSummary(id) if id == "ghost-project"));
    }

    #[test]
    fn test_parse_errors_name_the_document() {
        let broken = EMBEDDED.home.replace("\"stats\"", "\"stats_typo\"");
        let sources = Sources { home: &broken, ..EMBEDDED };
        let err = Content::from_sources(sources).unwrap_err();
        assert!(err.to_string().contains("pages/home.json"));

        let resume = EMBEDDED.resume.replacen("\"icon\": \"cloud\"", "\"icon\": \"rocket\"", 1);
        assert_ne!(resume, EMBEDDED.resume);
        let sources = Sources { resume: &resume, ..EMBEDDED };
        let err = Content::from_sources(sources).unwrap_err();
        assert!(matches!(err, ContentError::Parse { document: "resume.json", .. }));
    }
}
