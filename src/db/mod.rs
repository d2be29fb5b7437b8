//! Database layer for the tasklist application.
//!
//! Both task store variants live in one SQLite file:
//!
//! - **Row store** ([`tasks`]): one row per task in `tasks(id, text)`.
//! - **Snapshot store** ([`snapshot`]): the whole ordered list as one JSON
//!   array per namespace in `task_snapshots`.
//!
//! Connections are never kept between calls. Each operation opens a
//! [`db::Db`], does its work and drops it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::db::schema::SchemaReset;
//! use tasklist::db::tasks::TaskRows;
//! use std::path::Path;
//!
//! let rows = TaskRows::open(Path::new("tasks.db"), SchemaReset::Deny)?;
//! let id = rows.insert("Buy milk")?;
//! rows.update_by_id(id, "Buy oat milk")?;
//! # Ok::<(), tasklist::db::error::StoreError>(())
//! ```

/// Connection handle.
pub mod db;

/// Store error type.
pub mod error;

/// Schema version checks and destructive recreation.
pub mod schema;

/// Whole-list snapshot store.
pub mod snapshot;

/// Row-per-task store.
pub mod tasks;
