//! The two pages and their paths.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from resolving a path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No page lives at this path
    #[error("no page at {0}")]
    NotFound(String),
}

/// A page of the app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page at `/`
    #[default]
    Home,
    /// Counter page at `/counter-app`
    CounterApp,
}

impl Route {
    /// Path of this page
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::CounterApp => "/counter-app",
        }
    }

    /// Resolve a path, ignoring a trailing slash
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] if no page lives at `path`.
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" => Ok(Self::Home),
            "/counter-app" => Ok(Self::CounterApp),
            _ => Err(RouteError::NotFound(trimmed.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
