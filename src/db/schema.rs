//! Schema creation and version checks for the task database.
//!
//! The schema version lives in `PRAGMA user_version`. There is no
//! incremental migration path: a database written with a different
//! version can only be brought up to date by dropping every table and
//! creating them again, which discards all stored tasks. That step only
//! runs when the caller passes [`SchemaReset::Allow`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::db::db::Db;
//! use tasklist::db::schema::{prepare_schema, SchemaReset};
//! use std::path::Path;
//!
//! let db = Db::open(Path::new("tasks.db"))?;
//! prepare_schema(&db.conn, SchemaReset::Deny)?;
//! # Ok::<(), tasklist::db::error::StoreError>(())
//! ```

use super::error::{StoreError, StoreResult};
use rusqlite::Connection;

/// Version written to `user_version` by this build.
pub const SCHEMA_VERSION: i64 = 1;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL
)";

const SCHEMA_SNAPSHOTS: &str = "CREATE TABLE IF NOT EXISTS task_snapshots (
    namespace TEXT NOT NULL PRIMARY KEY,
    payload TEXT NOT NULL
)";

const DROP_TABLES: &str = "DROP TABLE IF EXISTS tasks; DROP TABLE IF EXISTS task_snapshots;";

/// Whether a version mismatch may be resolved by wiping the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaReset {
    Allow,
    Deny,
}

impl From<bool> for SchemaReset {
    fn from(allow: bool) -> Self {
        if allow {
            SchemaReset::Allow
        } else {
            SchemaReset::Deny
        }
    }
}

/// What `prepare_schema` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    Created,
    UpToDate,
    Recreated { previous: i64 },
}

pub fn get_schema_version(conn: &Connection) -> StoreResult<i64> {
    let version = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i64) -> StoreResult<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {}", version))?;
    Ok(())
}

fn create_tables(conn: &Connection) -> StoreResult<()> {
    conn.execute(SCHEMA_TASKS, [])?;
    conn.execute(SCHEMA_SNAPSHOTS, [])?;
    Ok(())
}

/// Brings the database to [`SCHEMA_VERSION`], creating tables on first run.
pub fn prepare_schema(conn: &Connection, reset: SchemaReset) -> StoreResult<SchemaStatus> {
    let found = get_schema_version(conn)?;

    if found == SCHEMA_VERSION {
        create_tables(conn)?;
        return Ok(SchemaStatus::UpToDate);
    }

    if found == 0 {
        create_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
        tracing::debug!(version = SCHEMA_VERSION, "task schema created");
        return Ok(SchemaStatus::Created);
    }

    if reset == SchemaReset::Deny {
        return Err(StoreError::SchemaMismatch {
            found,
            expected: SCHEMA_VERSION,
        });
    }

    recreate_schema(conn)?;
    Ok(SchemaStatus::Recreated { previous: found })
}

/// Drops and recreates every table. All stored tasks are lost.
pub fn recreate_schema(conn: &Connection) -> StoreResult<()> {
    let previous = get_schema_version(conn)?;
    tracing::warn!(previous, expected = SCHEMA_VERSION, "dropping task tables; stored tasks are discarded");

    conn.execute_batch(DROP_TABLES)?;
    create_tables(conn)?;
    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}
