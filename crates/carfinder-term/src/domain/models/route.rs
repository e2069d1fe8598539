#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

pub const RESULT_ROUTE_SEGMENT: &str = "result";

/// Target of a navigation action that is currently disabled.
pub const INERT_HREF: &str = "#";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No screen is mounted at '{0}'")]
    Unknown(String),
    #[error("Route segment '{0}' is not path-safe")]
    UnsafeSegment(String),
}

/// Parameters of the `/result/{makeId}/{year}` route. Either may still be
/// unresolved, in which case the Results screen waits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub make_id: Option<String>,
    pub year: Option<String>,
}

impl RouteParams {
    pub fn new(make_id: &str, year: &str) -> RouteParams {
        return RouteParams {
            make_id: Some(make_id.to_string()),
            year: Some(year.to_string()),
        };
    }

    /// Both parameters, when both are present and non-empty.
    pub fn resolved(&self) -> Option<(&str, &str)> {
        match (self.make_id.as_deref(), self.year.as_deref()) {
            (Some(make_id), Some(year)) if !make_id.is_empty() && !year.is_empty() => {
                return Some((make_id, year));
            }
            _ => return None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Selection,
    Results(RouteParams),
}

/// A segment is safe when interpolating it raw cannot change the shape of
/// the URL it lands in.
pub fn is_path_safe(segment: &str) -> bool {
    return !segment.is_empty()
        && !segment
            .chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c == '%' || c.is_whitespace());
}

impl Route {
    pub fn results(make_id: &str, year: &str) -> Route {
        return Route::Results(RouteParams::new(make_id, year));
    }

    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Ok(Route::Selection);
        }

        // Positional: an empty segment stays in place as an unresolved param.
        let segments = trimmed.split('/').collect::<Vec<&str>>();

        if segments[0] != RESULT_ROUTE_SEGMENT || segments.len() > 3 {
            return Err(RouteError::Unknown(path.to_string()));
        }

        for segment in &segments[1..] {
            if !segment.is_empty() && !is_path_safe(segment) {
                return Err(RouteError::UnsafeSegment(segment.to_string()));
            }
        }

        return Ok(Route::Results(RouteParams {
            make_id: segments.get(1).map(|s| s.to_string()),
            year: segments.get(2).map(|s| s.to_string()),
        }));
    }

    pub fn path(&self) -> String {
        match self {
            Route::Selection => return "/".to_string(),
            Route::Results(params) => {
                let mut path = format!("/{RESULT_ROUTE_SEGMENT}");
                for segment in [&params.make_id, &params.year].into_iter().flatten() {
                    path.push('/');
                    path.push_str(segment);
                }
                return path;
            }
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Route, RouteError> {
        return Route::parse(s);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One pre-computable result route, serialized the way page generators expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathParams {
    pub make_id: String,
    pub year: String,
}

impl PathParams {
    pub fn route(&self) -> Route {
        return Route::results(&self.make_id, &self.year);
    }
}
