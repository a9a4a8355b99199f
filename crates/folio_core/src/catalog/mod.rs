//! Project catalog: compiled-in content plus pure queries.
//!
//! # Responsibility
//! - Own the built-in catalog for the lifetime of the process.
//! - Expose lookup/filter/enumerate queries over it.
//!
//! # Invariants
//! - The built-in catalog is constructed once and never mutated, so any
//!   number of readers may share it without locking.

pub mod data;
pub mod store;

use crate::model::project::{Category, Project};
use log::{error, info};
use once_cell::sync::Lazy;
use store::{Catalog, CatalogError, DuplicateIdPolicy};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| match load_builtin(DuplicateIdPolicy::FirstWins) {
    Ok(catalog) => catalog,
    Err(err) => {
        error!("event=catalog_load module=catalog status=error error={err}");
        Catalog::empty()
    }
});

/// Builds a fresh catalog from the authored content under `policy`.
///
/// `Reject` turns authoring mistakes such as repeated ids into errors.
pub fn load_builtin(policy: DuplicateIdPolicy) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_projects(data::authored_projects(), policy)?;
    info!(
        "event=catalog_load module=catalog status=ok projects={} categories={} duplicate_ids={}",
        catalog.len(),
        catalog.get_all_categories().len(),
        catalog.duplicate_ids().len()
    );
    Ok(catalog)
}

/// Shared built-in catalog.
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

/// Looks up a built-in project by id; first occurrence wins.
pub fn get_project_by_id(id: &str) -> Option<&'static Project> {
    builtin().get_project_by_id(id)
}

/// Built-in projects of one category, in catalog order.
pub fn get_projects_by_category(category: Category) -> Vec<&'static Project> {
    builtin().get_projects_by_category(category)
}

/// Distinct built-in categories in first-seen order.
pub fn get_all_categories() -> Vec<Category> {
    builtin().get_all_categories()
}
