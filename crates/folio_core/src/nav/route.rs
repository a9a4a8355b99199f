//! Path to route resolution.
//!
//! # Invariants
//! - Resolution is a pure function of the path.
//! - Prefixes match on whole path segments, checked in table order.
//! - Anything the table does not accept resolves to `Fallback`, which
//!   renders and highlights the home page.

use crate::nav::page::PageId;
use serde::Serialize;
use std::fmt::{Display, Formatter};

struct RoutePrefix {
    prefix: &'static str,
    page: PageId,
    /// Accepts exactly one trailing `/:id` segment.
    takes_id: bool,
}

const ROUTE_TABLE: &[RoutePrefix] = &[
    RoutePrefix {
        prefix: "/projects",
        page: PageId::Projects,
        takes_id: true,
    },
    RoutePrefix {
        prefix: "/about",
        page: PageId::About,
        takes_id: false,
    },
    RoutePrefix {
        prefix: "/contact",
        page: PageId::Contact,
        takes_id: false,
    },
];

/// Identity of the mounted page for transitions; the normalized path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RouteKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Resolved view for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Home,
    Projects,
    ProjectDetail { id: String },
    About,
    Contact,
    /// Unmatched path; renders the home page.
    Fallback { path: String },
}

impl Route {
    /// Resolves a location path.
    ///
    /// Query strings and fragments are ignored, and a trailing slash is
    /// tolerated.
    pub fn parse(path: &str) -> Self {
        let normalized = normalize_path(path);
        if normalized == "/" {
            return Self::Home;
        }

        for entry in ROUTE_TABLE {
            let Some(rest) = strip_segment_prefix(normalized.as_str(), entry.prefix) else {
                continue;
            };
            if rest.is_empty() {
                return Self::for_page(entry.page);
            }
            if entry.takes_id && !rest.contains('/') {
                return Self::ProjectDetail {
                    id: rest.to_string(),
                };
            }
            break;
        }

        Self::Fallback { path: normalized }
    }

    /// Top-level route for a page.
    pub fn for_page(page: PageId) -> Self {
        match page {
            PageId::Home => Self::Home,
            PageId::About => Self::About,
            PageId::Projects => Self::Projects,
            PageId::Contact => Self::Contact,
        }
    }

    /// Page highlighted in navigation while this route is shown.
    pub fn page(&self) -> PageId {
        match self {
            Self::Home | Self::Fallback { .. } => PageId::Home,
            Self::Projects | Self::ProjectDetail { .. } => PageId::Projects,
            Self::About => PageId::About,
            Self::Contact => PageId::Contact,
        }
    }

    /// Normalized path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::ProjectDetail { id } => format!("{}/{id}", PageId::Projects.path()),
            Self::Fallback { path } => path.clone(),
            other => other.page().path().to_string(),
        }
    }

    pub fn key(&self) -> RouteKey {
        RouteKey(self.path())
    }

    /// Project id carried by a detail route.
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::ProjectDetail { id } => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Resolves the highlighted page for a path.
pub fn page_for_path(path: &str) -> PageId {
    Route::parse(path).page()
}

fn normalize_path(path: &str) -> String {
    let without_fragment = path.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();
    let trimmed = without_query.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Returns the remainder after `prefix` when it ends on a segment boundary.
fn strip_segment_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('/')
}
