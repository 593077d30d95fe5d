//! Screen routes.
//!
//! The listing screen links to the create and edit screens by path, the same
//! paths the web front end uses, so the status bar can show where you are.

use std::fmt;

use crate::constants::{ROUTE_CREATE, ROUTE_EDIT_PREFIX, ROUTE_LIST};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/phong-hoc`
    #[default]
    List,
    /// `/phong-hoc/them-moi`
    Create,
    /// `/phong-hoc/chinh-sua/{code}`
    Edit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),
    #[error("Missing classroom code in route: {0}")]
    MissingCode(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => ROUTE_LIST.to_string(),
            Route::Create => ROUTE_CREATE.to_string(),
            Route::Edit(code) => format!("{}{}", ROUTE_EDIT_PREFIX, code),
        }
    }

    /// Parse a path. A single trailing slash is ignored.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);

        if trimmed == ROUTE_LIST {
            return Ok(Route::List);
        }
        if trimmed == ROUTE_CREATE {
            return Ok(Route::Create);
        }
        if let Some(code) = trimmed.strip_prefix(ROUTE_EDIT_PREFIX) {
            if code.is_empty() || code.contains('/') {
                return Err(RouteError::MissingCode(path.to_string()));
            }
            return Ok(Route::Edit(code.to_string()));
        }
        if format!("{}/", trimmed) == ROUTE_EDIT_PREFIX {
            return Err(RouteError::MissingCode(path.to_string()));
        }

        Err(RouteError::Unknown(path.to_string()))
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Route::Create | Route::Edit(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
