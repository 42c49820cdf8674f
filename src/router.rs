/// Path-based navigation
///
/// Routes keep their URL meaning: every screen is addressed by a path
/// string, resolved the same way a browser router resolves it. The
/// `Router` adds a back stack on top.

use std::fmt;

/// A resolved location
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    /// `/projects/:projectId`, id taken verbatim
    ProjectDetail(String),
    Architecture,
    Contact,
    /// Any other path; the layout renders with an empty outlet
    Unmatched(String),
}

/// Links shown in the navbar, mobile menu and footer
pub static NAV_ITEMS: [(&str, Route); 7] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Skills", Route::Skills),
    ("Experience", Route::Experience),
    ("Projects", Route::Projects),
    ("Architecture", Route::Architecture),
    ("Contact", Route::Contact),
];

impl Route {
    /// Resolve a path. Total: every input maps to some route.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        match normalized {
            "/" => Route::Home,
            "/about" => Route::About,
            "/skills" => Route::Skills,
            "/experience" => Route::Experience,
            "/projects" => Route::Projects,
            "/architecture" => Route::Architecture,
            "/contact" => Route::Contact,
            other => match other.strip_prefix("/projects/") {
                Some(id) => Route::ProjectDetail(id.to_string()),
                None => Route::Unmatched(other.to_string()),
            },
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Skills => "/skills".to_string(),
            Route::Experience => "/experience".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::Architecture => "/architecture".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Unmatched(path) => path.clone(),
        }
    }

    /// Navbar entry highlighted for this route, if any
    ///
    /// Matching is on the exact path, so a project detail page highlights
    /// nothing.
    pub fn is_nav_item(&self, item: &Route) -> bool {
        self.path() == item.path()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Current route plus history
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        if let Route::Unmatched(path) = &start {
            tracing::warn!(%path, "no route matches start path");
        }
        Self { current: start, history: Vec::new() }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Move to `route`. Returns false when already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }

        if let Route::Unmatched(path) = &route {
            tracing::warn!(%path, "no route matches path");
        }
        tracing::debug!(from = %self.current, to = %route, "navigate");

        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Return to the previous route. Returns false when history is empty.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!(from = %self.current, to = %previous, "back");
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/skills"), Route::Skills);
        assert_eq!(Route::parse("/experience"), Route::Experience);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(Route::parse("/architecture"), Route::Architecture);
        assert_eq!(Route::parse("/contact"), Route::Contact);
    }

    #[test]
    fn test_trailing_slash_and_empty() {
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
    }

    #[test]
    fn test_project_detail() {
        assert_eq!(
            Route::parse("/projects/healthcare-lakehouse"),
            Route::ProjectDetail("healthcare-lakehouse".into())
        );
        assert_eq!(Route::parse("/projects/x/y"), Route::ProjectDetail("x/y".into()));
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(Route::parse("/blog"), Route::Unmatched("/blog".into()));
        assert_eq!(Route::parse("/About"), Route::Unmatched("/About".into()));
        assert_eq!(Route::parse("about"), Route::Unmatched("about".into()));
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Skills,
            Route::Experience,
            Route::Projects,
            Route::ProjectDetail("ml-ops".into()),
            Route::Architecture,
            Route::Contact,
            Route::Unmatched("/nowhere".into()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_nav_highlight_is_exact() {
        assert!(Route::Projects.is_nav_item(&Route::Projects));
        assert!(!Route::ProjectDetail("ml-ops".into()).is_nav_item(&Route::Projects));
        assert!(!Route::Home.is_nav_item(&Route::About));
    }

    #[test]
    fn test_history() {
        let mut router = Router::new(Route::Home);
        assert!(!router.back());

        assert!(router.navigate(Route::Projects));
        assert!(router.navigate(Route::ProjectDetail("ml-ops".into())));
        assert!(!router.navigate(Route::ProjectDetail("ml-ops".into())));

        assert!(router.back());
        assert_eq!(router.current(), &Route::Projects);
        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());
    }
}
