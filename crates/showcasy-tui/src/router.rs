//! Path routing and history for the page shell

use std::fmt;
use std::sync::Arc;

use showcasy_core::Catalog;
use tracing::{debug, warn};

/// A routed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Works,
    CaseStudy(String),
    Contact,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Works => "/works".to_string(),
            Route::CaseStudy(slug) => format!("/works/{}", slug),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// Terminal window title for the page
    pub fn title(&self, catalog: &Catalog) -> String {
        match self {
            Route::Home => "Brandon Torres | Frontend Developer Portfolio".to_string(),
            Route::About => "About | Brandon Torres - Frontend Developer".to_string(),
            Route::Works => "Works | showcasy.".to_string(),
            Route::CaseStudy(slug) => match catalog.project(slug) {
                Some(project) => format!("{} | showcasy.", project.title),
                None => "Works | showcasy.".to_string(),
            },
            Route::Contact => "Contact | showcasy.".to_string(),
        }
    }

    /// Menu entry this route highlights, if any
    pub fn section(&self) -> Route {
        match self {
            Route::CaseStudy(_) => Route::Works,
            other => other.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A resolved navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    /// Fragment after `#`, used as a scroll anchor
    pub anchor: Option<String>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            anchor: None,
        }
    }
}

/// Result of resolving a path against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Location),
    /// The path does not exist; navigation replaces it with this location
    Redirect(Location),
}

impl Resolution {
    pub fn location(&self) -> &Location {
        match self {
            Resolution::Found(location) | Resolution::Redirect(location) => location,
        }
    }
}

/// Strip trailing slashes and split off the fragment
pub fn normalize(path: &str) -> (String, Option<String>) {
    let (path, fragment) = match path.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (path, None),
    };
    let trimmed = path.trim().trim_end_matches('/');
    let normalized = if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    let anchor = fragment.filter(|f| !f.is_empty()).map(str::to_string);
    (normalized, anchor)
}

/// Path router with browser-style back/forward history
#[derive(Debug)]
pub struct Router {
    catalog: Arc<Catalog>,
    history: Vec<Location>,
    position: usize,
}

impl Router {
    /// Create a router starting at `path` (resolved, so it may redirect)
    pub fn new(catalog: Arc<Catalog>, path: &str) -> Self {
        let mut router = Self {
            catalog,
            history: Vec::new(),
            position: 0,
        };
        let start = router.resolve(path).location().clone();
        router.history.push(start);
        router
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let (path, anchor) = normalize(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Some(Route::Home),
            ["about"] => Some(Route::About),
            ["works"] => Some(Route::Works),
            ["contact"] => Some(Route::Contact),
            ["works", slug] => {
                if self.catalog.project(slug).is_some() {
                    Some(Route::CaseStudy(slug.to_string()))
                } else {
                    debug!(slug, "Unknown project, redirecting to works");
                    return Resolution::Redirect(Location::new(Route::Works));
                }
            }
            _ => None,
        };

        match route {
            Some(route) => Resolution::Found(Location { route, anchor }),
            None => {
                warn!(path = %path, "Unknown path, redirecting home");
                Resolution::Redirect(Location::new(Route::Home))
            }
        }
    }

    pub fn current(&self) -> &Location {
        &self.history[self.position]
    }

    /// Push a new history entry; returns the location to show
    ///
    /// A redirect records only its destination, so the missing path never
    /// appears in history. Navigating to the page already shown replaces the
    /// current entry (only its anchor changes).
    pub fn navigate(&mut self, path: &str) -> Location {
        let location = self.resolve(path).location().clone();
        if location.route == self.current().route {
            self.history[self.position] = location.clone();
        } else {
            self.history.truncate(self.position + 1);
            self.history.push(location.clone());
            self.position = self.history.len() - 1;
        }
        location
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.history.len()
    }

    pub fn back(&mut self) -> Option<Location> {
        if !self.can_go_back() {
            return None;
        }
        self.position -= 1;
        Some(self.current().clone())
    }

    pub fn forward(&mut self) -> Option<Location> {
        if !self.can_go_forward() {
            return None;
        }
        self.position += 1;
        Some(self.current().clone())
    }

    /// Every routable path, one per case study included
    pub fn all_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = [Route::Home, Route::About, Route::Works, Route::Contact]
            .iter()
            .map(Route::path)
            .collect();
        paths.extend(self.catalog.projects.iter().map(|p| p.path()));
        paths
    }
}
