//! Navigation targets offered after a slide is done

use std::fmt;

use crate::error::WizardResult;

/// Page that offers bulk data import
pub const IMPORT_PAGE: &str = "data-import-tool";

/// Where a done-state action leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// List of records of a doctype
    List(String),
    /// A named page
    Page(String),
}

impl Route {
    /// Parse a route string; `List/<doctype>` is a list, anything else a page
    pub fn parse(route: &str) -> Self {
        match route.trim().split_once('/') {
            Some((kind, doctype)) if kind.eq_ignore_ascii_case("list") && !doctype.is_empty() => {
                Route::List(doctype.to_string())
            }
            _ => Route::Page(route.trim().to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List(doctype) => write!(f, "List/{}", doctype),
            Route::Page(page) => write!(f, "{}", page),
        }
    }
}

/// Performs navigation to a route
pub trait Router {
    /// Navigate to `route`
    fn set_route(&mut self, route: &Route) -> WizardResult<()>;
}

/// A labelled follow-up action shown in a slide's done state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneAction {
    /// Button text
    pub label: String,
    /// Navigation target
    pub route: Route,
}

impl DoneAction {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }
}
