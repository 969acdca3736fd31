//! Workspace route classification
//!
//! A strict allow-list of rules. Every rule is evaluated and any match wins, so rule order
//! never changes the outcome and new rules are purely additive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Single allow-list rule
#[derive(Debug, Clone)]
pub enum RouteRule {
    /// Matches the literal and every sub-path beneath it
    Prefix(String),
    /// Matches only when the whole path matches the pattern
    Pattern(Regex),
}

impl RouteRule {
    pub fn prefix(literal: impl Into<String>) -> Self {
        RouteRule::Prefix(literal.into())
    }

    /// Build a pattern rule anchored to the full path
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{})$", pattern);
        Ok(RouteRule::Pattern(Regex::new(&anchored)?))
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            RouteRule::Prefix(literal) => path.starts_with(literal.as_str()),
            RouteRule::Pattern(regex) => regex.is_match(path),
        }
    }
}

/// Layout family of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Workspace,
    /// Workspace route reached through a dashboard pattern
    ProjectDashboard,
}

impl RouteClass {
    pub fn is_workspace(&self) -> bool {
        !matches!(self, RouteClass::Public)
    }
}

#[derive(Debug, Clone)]
pub struct RouteClassifier {
    rules: Vec<RouteRule>,
}

static WORKSPACE_CLASSIFIER: Lazy<RouteClassifier> = Lazy::new(|| {
    RouteClassifier::new(vec![
        RouteRule::prefix("/customers"),
        RouteRule::prefix("/communications"),
        RouteRule::pattern(r"/projects/[^/]+/dashboard")
            .unwrap_or_else(|e| unreachable!("static dashboard pattern is valid: {e}")),
    ])
});

impl RouteClassifier {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Canonical rules: `/customers`, `/communications` and project dashboards
    pub fn workspace() -> &'static RouteClassifier {
        &WORKSPACE_CLASSIFIER
    }

    pub fn is_workspace_route(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(path))
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        let mut class = RouteClass::Public;
        for rule in self.rules.iter().filter(|rule| rule.matches(path)) {
            match rule {
                RouteRule::Pattern(_) => return RouteClass::ProjectDashboard,
                RouteRule::Prefix(_) => class = RouteClass::Workspace,
            }
        }
        class
    }
}

/// `is_workspace_route` against the canonical rules
pub fn is_workspace_route(path: &str) -> bool {
    RouteClassifier::workspace().is_workspace_route(path)
}
