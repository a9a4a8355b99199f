//! Project page use-case service.
//!
//! # Responsibility
//! - Serve the project listing with the filter bar's `All` pseudo-category.
//! - Resolve the detail page's project fresh on every call.
//!
//! # Invariants
//! - Empty listings and missing projects are states, never errors.
//! - Service APIs only read through `ProjectSource`.

use crate::catalog::builtin;
use crate::catalog::store::{Catalog, ProjectSource};
use crate::model::project::{Category, ParseCategoryError, Project};
use log::debug;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Filter bar selection. `All` means no filter and is not a catalog category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Filter bar options in display order.
pub const FILTER_OPTIONS: [CategoryFilter; 5] = [
    CategoryFilter::All,
    CategoryFilter::Only(Category::WebXr),
    CategoryFilter::Only(Category::UnityXr),
    CategoryFilter::Only(Category::Simulation),
    CategoryFilter::Only(Category::Experiments),
];

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim() == Self::ALL_LABEL {
            return Ok(Self::All);
        }
        value.parse::<Category>().map(Self::Only)
    }
}

/// Listing page result for one filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListing<'a> {
    pub filter: CategoryFilter,
    /// Catalog order.
    pub projects: Vec<&'a Project>,
}

impl ProjectListing<'_> {
    /// `true` means the page shows its "no projects found" message.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }
}

/// Detail page resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectDetailView<'a> {
    Found(&'a Project),
    /// Rendered as "project not found" with a link back to the listing.
    NotFound { requested_id: String },
}

impl<'a> ProjectDetailView<'a> {
    pub fn project(&self) -> Option<&'a Project> {
        match self {
            Self::Found(project) => Some(*project),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Page-facing facade over a project source.
pub struct ProjectService<S: ProjectSource> {
    source: S,
}

impl<S: ProjectSource> ProjectService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Lists projects for the filter bar selection.
    pub fn list_projects(&self, filter: CategoryFilter) -> ProjectListing<'_> {
        let projects: Vec<&Project> = match filter {
            CategoryFilter::All => self.source.projects().iter().collect(),
            CategoryFilter::Only(category) => self.source.projects_by_category(category),
        };
        ProjectListing { filter, projects }
    }

    /// Resolves the detail page project. Call on every mount.
    pub fn open_detail(&self, project_id: &str) -> ProjectDetailView<'_> {
        let requested_id = project_id.trim();
        match self.source.project_by_id(requested_id) {
            Some(project) => ProjectDetailView::Found(project),
            None => {
                debug!(
                    "event=project_detail module=service status=not_found id={}",
                    requested_id
                );
                ProjectDetailView::NotFound {
                    requested_id: requested_id.to_string(),
                }
            }
        }
    }

    /// Categories that currently have at least one project.
    pub fn available_categories(&self) -> Vec<Category> {
        self.source.categories()
    }

    pub fn filter_options(&self) -> &'static [CategoryFilter] {
        &FILTER_OPTIONS
    }
}

/// Service over the shared built-in catalog.
pub fn builtin_service() -> ProjectService<&'static Catalog> {
    ProjectService::new(builtin())
}

#[cfg(test)]
mod tests {
    use super::CategoryFilter;
    use crate::model::project::{Category, ParseCategoryError};

    #[test]
    fn parses_filter_labels() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Unity XR".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::UnityXr))
        );
        assert_eq!(
            "Games".parse::<CategoryFilter>(),
            Err(ParseCategoryError::Unknown("Games".to_string()))
        );
    }

    #[test]
    fn labels_round_trip_through_display() {
        for option in super::FILTER_OPTIONS {
            assert_eq!(option.to_string().parse::<CategoryFilter>(), Ok(option));
        }
    }
}
