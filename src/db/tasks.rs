//! Row-based task store.
//!
//! One row per task in the `tasks` table. Each call opens its own
//! connection and closes it before returning.
//!
//! The text-keyed operations (`delete_by_text`, `update_by_text`) match
//! every row carrying that text, so two tasks with the same text are
//! removed or rewritten together. The controller goes through the
//! id-keyed operations instead.

use super::db::Db;
use super::error::StoreResult;
use super::schema::{prepare_schema, SchemaReset, SchemaStatus};
use crate::libs::task::{Task, TaskId};
use rusqlite::params;
use std::path::{Path, PathBuf};

const INSERT_TASK: &str = "INSERT INTO tasks (text) VALUES (?1)";
const SELECT_TASKS: &str = "SELECT id, text FROM tasks ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_BY_TEXT: &str = "DELETE FROM tasks WHERE text = ?1";
const UPDATE_BY_ID: &str = "UPDATE tasks SET text = ?2 WHERE id = ?1";
const UPDATE_BY_TEXT: &str = "UPDATE tasks SET text = ?2 WHERE text = ?1";

pub struct TaskRows {
    path: PathBuf,
}

impl TaskRows {
    /// Opens the store at `path` and prepares its schema.
    pub fn open(path: &Path, reset: SchemaReset) -> StoreResult<TaskRows> {
        let rows = TaskRows { path: path.to_path_buf() };
        rows.create_table(reset)?;

        Ok(rows)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn db(&self) -> StoreResult<Db> {
        Db::open(&self.path)
    }

    pub fn create_table(&self, reset: SchemaReset) -> StoreResult<SchemaStatus> {
        let db = self.db()?;
        prepare_schema(&db.conn, reset)
    }

    pub fn insert(&self, text: &str) -> StoreResult<TaskId> {
        let db = self.db()?;
        db.conn.execute(INSERT_TASK, params![text])?;
        let id = TaskId(db.conn.last_insert_rowid());
        tracing::debug!(%id, "task row inserted");

        Ok(id)
    }

    /// Task texts in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<String>> {
        Ok(self.list_tasks()?.into_iter().map(|task| task.text).collect())
    }

    pub fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let db = self.db()?;
        let mut stmt = db.conn.prepare(SELECT_TASKS)?;
        let tasks = stmt
            .query_map([], |row| {
                Ok(Task {
                    id: TaskId(row.get(0)?),
                    text: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    pub fn delete_by_id(&self, id: TaskId) -> StoreResult<usize> {
        let db = self.db()?;
        let deleted = db.conn.execute(DELETE_BY_ID, params![id.0])?;
        tracing::debug!(%id, deleted, "task row deleted");

        Ok(deleted)
    }

    pub fn update_by_id(&self, id: TaskId, text: &str) -> StoreResult<usize> {
        let db = self.db()?;
        let updated = db.conn.execute(UPDATE_BY_ID, params![id.0, text])?;
        tracing::debug!(%id, updated, "task row updated");

        Ok(updated)
    }

    /// Deletes every row whose text equals `text`.
    pub fn delete_by_text(&self, text: &str) -> StoreResult<usize> {
        let db = self.db()?;
        let deleted = db.conn.execute(DELETE_BY_TEXT, params![text])?;
        if deleted > 1 {
            tracing::warn!(deleted, "delete by text removed several tasks sharing the same text");
        }

        Ok(deleted)
    }

    /// Rewrites every row whose text equals `old_text`.
    pub fn update_by_text(&self, old_text: &str, new_text: &str) -> StoreResult<usize> {
        let db = self.db()?;
        let updated = db.conn.execute(UPDATE_BY_TEXT, params![old_text, new_text])?;
        if updated > 1 {
            tracing::warn!(updated, "update by text rewrote several tasks sharing the same text");
        }

        Ok(updated)
    }
}
