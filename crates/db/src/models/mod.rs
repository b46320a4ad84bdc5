//! Row models and DTOs for the durable tier.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the DTOs consumed by its repository.

pub mod category;
pub mod code_record;
pub mod user;
