use crate::config::FrontendConfig;

/// Verdict for a single navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Binary allow/deny check run before a route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    public_paths: Vec<String>,
    login_route: String,
}

impl RouteGuard {
    pub fn new<I, S>(public_paths: I, login_route: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            public_paths: public_paths.into_iter().map(Into::into).collect(),
            login_route: login_route.into(),
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.public_paths.iter().cloned(), config.login_route.clone())
    }

    pub fn is_public(&self, path: &str) -> bool {
        let path = normalize(path);
        self.public_paths
            .iter()
            .any(|public| normalize(public) == path)
    }

    /// Unauthenticated visitors only reach allow-listed paths.
    pub fn check(&self, authenticated: bool, path: &str) -> GuardDecision {
        if authenticated || self.is_public(path) {
            GuardDecision::Allow
        } else {
            log::debug!("guard: {path} requires a session");
            GuardDecision::Redirect(self.login_route.clone())
        }
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
