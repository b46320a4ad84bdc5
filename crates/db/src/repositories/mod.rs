//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! their executor (`&PgPool`, or an open transaction where the caller owns
//! the transaction boundary) as the first argument.

pub mod category_repo;
pub mod code_record_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use code_record_repo::CodeRecordRepo;
pub use user_repo::UserRepo;
