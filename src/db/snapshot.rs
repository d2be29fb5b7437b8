//! Snapshot task store.
//!
//! Keeps the whole ordered list as one JSON array under a namespace in
//! `task_snapshots`. A save is a single upsert, so readers either see the
//! previous list or the new one.

use super::db::Db;
use super::error::StoreResult;
use super::schema::{prepare_schema, SchemaReset};
use rusqlite::{params, OptionalExtension};
use std::path::{Path, PathBuf};

pub const DEFAULT_NAMESPACE: &str = "tasks";

const UPSERT_SNAPSHOT: &str = "INSERT INTO task_snapshots (namespace, payload) VALUES (?1, ?2)
    ON CONFLICT(namespace) DO UPDATE SET payload = excluded.payload";
const SELECT_SNAPSHOT: &str = "SELECT payload FROM task_snapshots WHERE namespace = ?1";

pub struct TaskSnapshot {
    path: PathBuf,
    namespace: String,
}

impl TaskSnapshot {
    pub fn open(path: &Path, reset: SchemaReset) -> StoreResult<TaskSnapshot> {
        Self::open_namespace(path, DEFAULT_NAMESPACE, reset)
    }

    pub fn open_namespace(path: &Path, namespace: &str, reset: SchemaReset) -> StoreResult<TaskSnapshot> {
        let db = Db::open(path)?;
        prepare_schema(&db.conn, reset)?;

        Ok(TaskSnapshot {
            path: path.to_path_buf(),
            namespace: namespace.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Replaces the stored list with `tasks`.
    pub fn save_all<S: AsRef<str>>(&self, tasks: &[S]) -> StoreResult<()> {
        let texts: Vec<&str> = tasks.iter().map(AsRef::as_ref).collect();
        let payload = serde_json::to_string(&texts)?;

        let db = Db::open(&self.path)?;
        db.conn.execute(UPSERT_SNAPSHOT, params![self.namespace, payload])?;
        tracing::debug!(namespace = %self.namespace, count = texts.len(), "task snapshot saved");

        Ok(())
    }

    /// The last saved list, or an empty one if nothing was saved yet.
    pub fn load_all(&self) -> StoreResult<Vec<String>> {
        let db = Db::open(&self.path)?;
        let payload: Option<String> = db
            .conn
            .query_row(SELECT_SNAPSHOT, params![self.namespace], |row| row.get(0))
            .optional()?;

        match payload {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }
}
