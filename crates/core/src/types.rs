/// Database primary keys for users and categories are PostgreSQL BIGSERIAL.
///
/// Snippet and commit identifiers are opaque strings supplied by the caller
/// and are not covered by this alias.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
