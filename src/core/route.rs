use std::fmt;

use thiserror::Error;

use crate::catalog::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    /// The id is taken verbatim; resolving it is the detail view's job.
    ProjectDetail(ProjectId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no view for path {0:?}")]
    Unmatched(String),
}

impl Route {
    /// Select the composition for a URL path, after stripping `base` if the
    /// path starts with it.
    pub fn parse(path: &str, base: &str) -> Result<Self, RouteError> {
        let trimmed = strip_base(path, base);
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["project", id] => Ok(Route::ProjectDetail(ProjectId::new(*id))),
            _ => Err(RouteError::Unmatched(path.to_string())),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::ProjectDetail(id) => format!("/project/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Navigation stack. Going back from an empty history lands on the landing view.
#[derive(Debug, Clone)]
pub struct History {
    current: Route,
    previous: Vec<Route>,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            previous: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigating to the current route leaves the stack as it is.
    pub fn push(&mut self, route: Route) -> &Route {
        if route == self.current {
            return &self.current;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.previous.push(previous);
        &self.current
    }

    pub fn back(&mut self) -> &Route {
        self.current = self.previous.pop().unwrap_or(Route::Landing);
        &self.current
    }
}
