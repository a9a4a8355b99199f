//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the project record rendered by listing and detail pages.
//! - Define the closed category vocabulary used for filtering.
//!
//! # Invariants
//! - Every project is identified by a stable slug `id`.
//! - `category` is always one of the four `Category` variants.

pub mod project;
