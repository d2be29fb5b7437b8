use thiserror::Error;

/// Failures surfaced by the task stores.
///
/// Every store operation returns these instead of panicking so the caller
/// can report the problem and keep its in-memory list as it was.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("snapshot payload is not valid: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage location unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("database schema version {found} does not match expected version {expected}")]
    SchemaMismatch { found: i64, expected: i64 },
}

pub type StoreResult<T> = Result<T, StoreError>;
