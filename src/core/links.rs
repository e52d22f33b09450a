//! Navigation links and their external/internal classification

/// `target` of links that leave the site
pub const EXTERNAL_TARGET: &str = "_blank";
/// `rel` of links that leave the site
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// A labelled destination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn is_external(&self) -> bool {
        is_absolute_url(self.href)
    }

    pub fn target(&self) -> LinkTarget {
        LinkTarget::of(self.href)
    }
}

/// Absolute `http(s)://` URL
pub fn is_absolute_url(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Same tab, client-side navigation
    Internal,
    /// New browsing context, no opener or referrer
    External,
}

impl LinkTarget {
    pub fn of(href: &str) -> Self {
        if is_absolute_url(href) {
            LinkTarget::External
        } else {
            LinkTarget::Internal
        }
    }

    pub fn target_attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::External => Some(EXTERNAL_TARGET),
            LinkTarget::Internal => None,
        }
    }

    pub fn rel_attr(self) -> Option<&'static str> {
        match self {
            LinkTarget::External => Some(EXTERNAL_REL),
            LinkTarget::Internal => None,
        }
    }

    /// Accessible name; external links announce the new tab
    pub fn aria_label(self, label: &str) -> Option<String> {
        match self {
            LinkTarget::External => Some(format!("{} (opens in new tab)", label)),
            LinkTarget::Internal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_are_external() {
        for href in ["https://blog.boostlyx.com", "http://example.com/x"] {
            let target = LinkTarget::of(href);
            assert_eq!(target, LinkTarget::External);
            assert_eq!(target.target_attr(), Some("_blank"));
            assert_eq!(target.rel_attr(), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn test_paths_are_internal() {
        for href in ["/", "/pricing", "/about#why-boostlyx", "services"] {
            let target = LinkTarget::of(href);
            assert_eq!(target, LinkTarget::Internal);
            assert_eq!(target.target_attr(), None);
            assert_eq!(target.rel_attr(), None);
        }
    }

    #[test]
    fn test_aria_label() {
        assert_eq!(
            LinkTarget::External.aria_label("Blog").as_deref(),
            Some("Blog (opens in new tab)")
        );
        assert_eq!(LinkTarget::Internal.aria_label("About"), None);
    }

    #[test]
    fn test_link_helpers() {
        let link = Link::new("Sign In", "https://www.dash.boostlyx.com/accounts/sign-in");
        assert!(link.is_external());
        assert_eq!(link.target(), LinkTarget::External);
    }
}
