/// Project records
///
/// Two shapes exist on purpose:
/// - `Project` is the short listing card from `content/projects.json`
/// - `ProjectDetail` is the full case study from `content/project_details.json`
///
/// The listing links every card to a detail record by `id`; that link is
/// checked when the content is loaded.

use serde::Deserialize;

use super::Icon;
use crate::color::Shade;

/// Listing card on the Projects page
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    // Authored alongside each listing; the cards show impact lines instead
    #[allow(dead_code)]
    pub challenge: String,
    #[allow(dead_code)]
    pub solution: String,
    pub impact: Vec<String>,
    pub technologies: Vec<String>,
    pub icon: Icon,
}

/// Full case study rendered at `/projects/:projectId`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tagline: String,
    pub overview: String,
    pub problem_statement: String,
    pub solution: String,
    pub architecture: Architecture,
    pub tech_stack: Vec<TechStackGroup>,
    pub implementation: Vec<Phase>,
    pub key_features: Vec<KeyFeature>,
    pub metrics: Vec<Metric>,
    pub challenges: Vec<Challenge>,
    pub screenshots: Vec<Screenshot>,
    pub technical_process: Vec<ProcessStep>,
    /// Walkthrough recording, when one exists
    #[serde(default)]
    pub video_url: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Architecture {
    pub title: String,
    pub description: String,
    pub layers: Vec<ArchitectureLayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureLayer {
    pub name: String,
    pub description: String,
    pub components: Vec<String>,
    pub gradient: [Shade; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechStackGroup {
    pub category: String,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phase {
    /// Two-digit ordinal label ("01")
    pub phase: String,
    pub title: String,
    pub description: String,
    pub deliverables: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyFeature {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Challenge {
    pub challenge: String,
    pub solution: String,
}

/// Which illustration a screenshot slot renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenshotKind {
    Dashboard,
    Architecture,
    Pipeline,
    Code,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Screenshot {
    pub title: String,
    pub description: String,
    pub kind: ScreenshotKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeSnippet {
    pub title: String,
    pub language: String,
    pub description: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_may_be_absent() {
        let step: ProcessStep = serde_json::from_str(
            r#"{"step": "01", "title": "Ingest", "description": "Land raw files", "details": []}"#,
        )
        .unwrap();
        assert!(step.code_snippets.is_empty());
    }

    #[test]
    fn test_unknown_screenshot_kind_is_rejected() {
        let result = serde_json::from_str::<Screenshot>(
            r#"{"title": "t", "description": "d", "kind": "video"}"#,
        );
        assert!(result.is_err());
    }
}
