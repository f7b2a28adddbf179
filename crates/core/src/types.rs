/// Primary key of a persisted row (PostgreSQL BIGSERIAL). Valid ids are `> 0`.
pub type DbId = i64;

/// Storage-owned timestamps, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
