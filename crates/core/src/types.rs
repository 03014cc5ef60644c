/// All primary keys are PostgreSQL BIGSERIAL; the in-memory store uses the
/// same width so both backends expose identical ids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
