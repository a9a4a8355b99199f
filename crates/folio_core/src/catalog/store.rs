//! Read-only project catalog and its query surface.
//!
//! # Responsibility
//! - Hold an ordered, immutable collection of `Project` records.
//! - Answer lookup-by-id, filter-by-category and category enumeration.
//!
//! # Invariants
//! - A catalog is never mutated after construction.
//! - Lookup by id returns the first record in catalog order (first wins).
//! - Category enumeration yields each category once, in first-seen order.

use crate::model::project::{Category, Project, ProjectValidationError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How construction treats repeated project ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Keep every record; lookups resolve to the first occurrence.
    #[default]
    FirstWins,
    /// Fail construction on the first repeated id.
    Reject,
}

/// Catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidProject {
        index: usize,
        source: ProjectValidationError,
    },
    DuplicateId {
        id: String,
        first_index: usize,
        duplicate_index: usize,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProject { index, source } => {
                write!(f, "invalid project at position {index}: {source}")
            }
            Self::DuplicateId {
                id,
                first_index,
                duplicate_index,
            } => write!(
                f,
                "duplicate project id `{id}` at positions {first_index} and {duplicate_index}"
            ),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProject { source, .. } => Some(source),
            Self::DuplicateId { .. } => None,
        }
    }
}

/// Query contract consumed by page services.
pub trait ProjectSource {
    /// First project whose id equals `id`, or `None`.
    fn project_by_id(&self, id: &str) -> Option<&Project>;
    /// Projects of one category, catalog order preserved.
    fn projects_by_category(&self, category: Category) -> Vec<&Project>;
    /// Distinct categories in first-seen order.
    fn categories(&self) -> Vec<Category>;
    /// Every record in catalog order.
    fn projects(&self) -> &[Project];
}

impl<T: ProjectSource + ?Sized> ProjectSource for &T {
    fn project_by_id(&self, id: &str) -> Option<&Project> {
        (**self).project_by_id(id)
    }

    fn projects_by_category(&self, category: Category) -> Vec<&Project> {
        (**self).projects_by_category(category)
    }

    fn categories(&self) -> Vec<Category> {
        (**self).categories()
    }

    fn projects(&self) -> &[Project] {
        (**self).projects()
    }
}

/// Immutable ordered project collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
    duplicate_ids: Vec<String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog after validating every record.
    ///
    /// # Errors
    /// - `InvalidProject` for the first record failing `Project::validate`.
    /// - `DuplicateId` when `policy` is `Reject` and an id repeats.
    pub fn from_projects(
        projects: Vec<Project>,
        policy: DuplicateIdPolicy,
    ) -> Result<Self, CatalogError> {
        let duplicate_ids = scan_duplicates(&projects, policy)?;
        Ok(Self {
            projects,
            duplicate_ids,
        })
    }

    /// Returns the first record with the given id.
    ///
    /// Not-found is an expected outcome (stale bookmark, removed project).
    pub fn get_project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Returns records of `category` in catalog order; empty when none match.
    pub fn get_projects_by_category(&self, category: Category) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.category == category)
            .collect()
    }

    /// Returns each category present in the catalog once, first-seen order.
    pub fn get_all_categories(&self) -> Vec<Category> {
        let mut seen = BTreeSet::<Category>::new();
        self.projects
            .iter()
            .map(|project| project.category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_project_by_id(id).is_some()
    }

    /// Ids that appear more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }
}

impl ProjectSource for Catalog {
    fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.get_project_by_id(id)
    }

    fn projects_by_category(&self, category: Category) -> Vec<&Project> {
        self.get_projects_by_category(category)
    }

    fn categories(&self) -> Vec<Category> {
        self.get_all_categories()
    }

    fn projects(&self) -> &[Project] {
        self.all()
    }
}

/// Validates records and collects repeated ids under `policy`.
fn scan_duplicates(
    projects: &[Project],
    policy: DuplicateIdPolicy,
) -> Result<Vec<String>, CatalogError> {
    let mut first_seen = BTreeMap::<&str, usize>::new();
    let mut duplicate_ids = Vec::<String>::new();

    for (index, project) in projects.iter().enumerate() {
        project
            .validate()
            .map_err(|source| CatalogError::InvalidProject { index, source })?;

        let Some(&first_index) = first_seen.get(project.id.as_str()) else {
            first_seen.insert(project.id.as_str(), index);
            continue;
        };
        if policy == DuplicateIdPolicy::Reject {
            return Err(CatalogError::DuplicateId {
                id: project.id.clone(),
                first_index,
                duplicate_index: index,
            });
        }
        if !duplicate_ids.contains(&project.id) {
            duplicate_ids.push(project.id.clone());
        }
        warn!(
            "event=catalog_duplicate_id module=catalog status=degraded id={} first_index={} duplicate_index={}",
            project.id, first_index, index
        );
    }

    Ok(duplicate_ids)
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError, DuplicateIdPolicy};
    use crate::model::project::{Category, Project, ProjectValidationError};

    fn project(id: &str, title: &str, category: Category) -> Project {
        Project::new(id, title, category, format!("{title} description"))
    }

    #[test]
    fn first_occurrence_wins_for_duplicate_ids() {
        let catalog = Catalog::from_projects(
            vec![
                project("dup", "First", Category::WebXr),
                project("other", "Other", Category::Simulation),
                project("dup", "Second", Category::Experiments),
            ],
            DuplicateIdPolicy::FirstWins,
        )
        .expect("first-wins catalog");

        for _ in 0..3 {
            let found = catalog.get_project_by_id("dup").expect("dup present");
            assert_eq!(found.title, "First");
        }
        assert_eq!(catalog.duplicate_ids(), ["dup".to_string()]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn reject_policy_reports_positions() {
        let err = Catalog::from_projects(
            vec![
                project("dup", "First", Category::WebXr),
                project("dup", "Second", Category::WebXr),
            ],
            DuplicateIdPolicy::Reject,
        )
        .expect_err("duplicate must fail");
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                id: "dup".to_string(),
                first_index: 0,
                duplicate_index: 1,
            }
        );
    }

    #[test]
    fn invalid_record_fails_construction() {
        let err = Catalog::from_projects(
            vec![
                project("fine", "Fine", Category::WebXr),
                project("Not A Slug", "Bad", Category::WebXr),
            ],
            DuplicateIdPolicy::FirstWins,
        )
        .expect_err("invalid id must fail");
        assert_eq!(
            err,
            CatalogError::InvalidProject {
                index: 1,
                source: ProjectValidationError::InvalidId("Not A Slug".to_string()),
            }
        );
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let catalog = Catalog::from_projects(
            vec![
                project("a", "A", Category::Experiments),
                project("b", "B", Category::WebXr),
                project("c", "C", Category::Experiments),
                project("d", "D", Category::WebXr),
                project("e", "E", Category::UnityXr),
            ],
            DuplicateIdPolicy::FirstWins,
        )
        .expect("catalog");

        assert_eq!(
            catalog.get_all_categories(),
            vec![Category::Experiments, Category::WebXr, Category::UnityXr]
        );
    }

    #[test]
    fn empty_catalog_answers_every_query() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get_project_by_id("anything").is_none());
        assert!(catalog.get_projects_by_category(Category::WebXr).is_empty());
        assert!(catalog.get_all_categories().is_empty());
    }
}
