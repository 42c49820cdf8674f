use serde::Deserialize;

/// Every icon the content documents may reference
///
/// Deserialization is strict: a name outside this list fails the whole
/// document instead of silently rendering a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Activity,
    Award,
    BarChart,
    Building,
    CheckCircle,
    Clock,
    Cloud,
    Code,
    Database,
    GitBranch,
    GraduationCap,
    Layers,
    Lock,
    Server,
    Shield,
    Target,
    TrendingUp,
    Users,
    Workflow,
    Zap,
}

impl Icon {
    /// Glyph drawn inside icon badges
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Activity => "∿",
            Icon::Award => "✪",
            Icon::BarChart => "▥",
            Icon::Building => "▦",
            Icon::CheckCircle => "✔",
            Icon::Clock => "◷",
            Icon::Cloud => "☁",
            Icon::Code => "</>",
            Icon::Database => "⛁",
            Icon::GitBranch => "⑂",
            Icon::GraduationCap => "✎",
            Icon::Layers => "≡",
            Icon::Lock => "⚿",
            Icon::Server => "▤",
            Icon::Shield => "⛨",
            Icon::Target => "◎",
            Icon::TrendingUp => "↗",
            Icon::Users => "☺",
            Icon::Workflow => "⇄",
            Icon::Zap => "⚡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_names() {
        let icons: Vec<Icon> =
            serde_json::from_str(r#"["bar_chart", "git_branch", "graduation_cap", "zap"]"#).unwrap();
        assert_eq!(
            icons,
            vec![Icon::BarChart, Icon::GitBranch, Icon::GraduationCap, Icon::Zap]
        );
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        let err = serde_json::from_str::<Icon>(r#""rocket""#).unwrap_err();
        assert!(err.to_string().contains("rocket"));
    }

    #[test]
    fn test_every_glyph_is_non_empty() {
        let all: Vec<Icon> = serde_json::from_str(
            r#"["activity","award","bar_chart","building","check_circle","clock","cloud",
               "code","database","git_branch","graduation_cap","layers","lock","server",
               "shield","target","trending_up","users","workflow","zap"]"#,
        )
        .unwrap();
        assert_eq!(all.len(), 20);
        assert!(all.iter().all(|icon| !icon.glyph().is_empty()));
    }
}
