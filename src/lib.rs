//! # Tasklist
//!
//! A small persistent to-do list for the terminal: add, edit, complete and
//! delete short text tasks, stored locally in SQLite.
//!
//! ## Features
//!
//! - **Two storage models**: one row per task, or the whole list as a snapshot
//! - **Interactive session**: a single-screen loop for working through the list
//! - **Safe schema handling**: format changes never wipe data without opt-in
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
