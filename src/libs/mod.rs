//! Core library modules for the tasklist application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::config::Config;
//! use tasklist::libs::controller::TaskListController;
//! use tasklist::libs::data_storage::DataStorage;
//! use tasklist::libs::sound::Silent;
//! use tasklist::libs::store::open_store;
//! use tasklist::libs::view::TerminalView;
//!
//! let store = open_store(&Config::default(), &DataStorage::new())?;
//! let mut controller = TaskListController::new(store, TerminalView::new(), Silent);
//! controller.initialize()?;
//! controller.add("Call mom")?;
//! # Ok::<(), tasklist::libs::controller::ControllerError>(())
//! ```

pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod sound;
pub mod store;
pub mod swipe;
pub mod task;
pub mod view;
