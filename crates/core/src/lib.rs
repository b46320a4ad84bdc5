//! Domain types shared across the codelog workspace.
//!
//! Contains the snippet model, the closed lifecycle-status enum, field
//! validation helpers, and the workspace-wide error type. This crate has
//! no storage dependencies; both the staging store and the database layer
//! build on it.

pub mod error;
pub mod snippet;
pub mod types;
