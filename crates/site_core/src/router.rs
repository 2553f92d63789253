//! Fragment parsing and exact-match route resolution.

use shared::{
    domain::{Fragment, PageId, Route, RouteMatch, ROOT_PATH, ROUTES},
    error::SiteError,
};
use url::Url;

/// Parses a `location.hash` value (`"#/guvi"`), a bare fragment (`"/guvi"`)
/// or an empty string. Empty means the root path.
pub fn parse_fragment(raw: &str) -> Fragment {
    let body = raw.strip_prefix('#').unwrap_or(raw);
    if body.is_empty() {
        return Fragment::Path(ROOT_PATH.to_string());
    }
    if body.starts_with('/') {
        Fragment::Path(body.to_string())
    } else {
        Fragment::Anchor(body.to_string())
    }
}

/// The fragment a visit starts on: the raw hash, or `default_path` when the
/// hash is empty or a bare `#`.
pub fn entry_fragment<'a>(raw: &'a str, default_path: &'a str) -> &'a str {
    let raw = raw.trim();
    if raw.is_empty() || raw == "#" {
        default_path
    } else {
        raw
    }
}

/// Extracts the fragment of a link target. Accepts relative `#...` hrefs and
/// absolute URLs; a URL without a fragment resolves to the root path.
pub fn fragment_from_href(href: &str) -> Result<Fragment, SiteError> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return Ok(parse_fragment(href));
    }

    let url = Url::parse(href).map_err(|err| SiteError::InvalidHref {
        href: href.to_string(),
        reason: err.to_string(),
    })?;
    Ok(parse_fragment(url.fragment().unwrap_or_default()))
}

pub fn href_for(path: &str) -> String {
    format!("#{path}")
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: &'static [Route],
    current_path: String,
}

impl Router {
    pub fn new(initial_fragment: &str) -> Self {
        Self::with_routes(&ROUTES, initial_fragment)
    }

    pub fn with_routes(routes: &'static [Route], initial_fragment: &str) -> Self {
        let current_path = match parse_fragment(initial_fragment) {
            Fragment::Path(path) => path,
            // Loading straight onto an in-page anchor shows the root page.
            Fragment::Anchor(_) => ROOT_PATH.to_string(),
        };
        Self {
            routes,
            current_path,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| RouteMatch::Page(route.page))
            .unwrap_or_else(|| RouteMatch::Unmatched(path.to_string()))
    }

    pub fn active(&self) -> RouteMatch {
        self.resolve(&self.current_path)
    }

    pub fn active_page(&self) -> Option<PageId> {
        self.active().page()
    }

    /// Applies a fragment change. Returns `true` when the current path changed;
    /// anchors never change it.
    pub fn navigate(&mut self, fragment: &Fragment) -> bool {
        match fragment {
            Fragment::Path(path) if *path != self.current_path => {
                self.current_path = path.clone();
                true
            }
            Fragment::Path(_) | Fragment::Anchor(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
