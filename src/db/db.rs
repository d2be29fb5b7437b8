use super::error::StoreResult;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tasks.db";

/// A single open connection to the task database.
///
/// Stores open a `Db` per operation; the connection is closed when the
/// value is dropped, including on early returns through `?`.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> StoreResult<Db> {
        let conn = Connection::open(path)?;
        tracing::trace!(path = %path.display(), "database opened");

        Ok(Db { conn })
    }
}
