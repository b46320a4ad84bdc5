//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the staging store, the repositories in
//! `codelog_db`, or the commit reconciler, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod category;
pub mod commit;
pub mod snippet;
pub mod user;
