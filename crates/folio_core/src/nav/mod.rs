//! Navigation: page ids, route resolution, transitions and the controller.
//!
//! # Responsibility
//! - Map locations to pages through one ordered route table.
//! - Own the ephemeral navigation state and its side effects.
//!
//! # Invariants
//! - Explicit navigation and external location changes share one
//!   derivation rule (`Route::parse`).
//! - Exactly one page is mounted at a time.

pub mod controller;
pub mod page;
pub mod route;
pub mod transition;
