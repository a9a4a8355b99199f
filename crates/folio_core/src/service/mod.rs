//! Page-facing use-case services.
//!
//! # Responsibility
//! - Shape catalog queries into what listing and detail pages render.
//! - Keep pages decoupled from the concrete catalog.

pub mod project_service;
