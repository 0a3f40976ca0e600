/// Entity ids are opaque strings (`"u7"`, `"doc-1718000000000"`, `"alpha-squad"`).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
