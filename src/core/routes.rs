//! Route resolution for paths the router does not match itself

/// Prefix that must never render a page
pub const BLOCKED_PREFIX: &str = "/public";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    /// `/public` and everything below it
    Blocked,
    NotFound,
}

impl SiteRoute {
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        if path.is_empty() || path == "/" {
            return SiteRoute::Home;
        }
        match path.strip_prefix(BLOCKED_PREFIX) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => SiteRoute::Blocked,
            _ => SiteRoute::NotFound,
        }
    }

    /// HTTP status to answer with during server rendering
    pub fn status_code(self) -> u16 {
        match self {
            SiteRoute::Home => 200,
            SiteRoute::Blocked => 403,
            SiteRoute::NotFound => 404,
        }
    }
}
