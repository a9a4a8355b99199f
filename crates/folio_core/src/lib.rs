//! Core logic for the Folio portfolio site.
//! Owns the project catalog and the navigation state machine; rendering
//! lives outside this crate.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod nav;
pub mod service;

pub use catalog::store::{Catalog, CatalogError, DuplicateIdPolicy, ProjectSource};
pub use catalog::{get_all_categories, get_project_by_id, get_projects_by_category};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::project::{
    CaseStudy, CaseStudyNote, Category, Outcomes, ParseCategoryError, Project, ProjectLinks,
    ProjectMedia, ProjectValidationError,
};
pub use nav::controller::{
    NavItem, NavigationController, NavigationHost, NavigationSnapshot, NavigationState, NoopHost,
    ScrollBehavior,
};
pub use nav::page::PageId;
pub use nav::route::{Route, RouteKey};
pub use nav::transition::{TransitionMachine, TransitionPhase};
pub use service::project_service::{
    builtin_service, CategoryFilter, ProjectDetailView, ProjectListing, ProjectService,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
