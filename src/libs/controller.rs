//! In-memory task list and the rules for changing it.
//!
//! The controller owns the ordered list for the length of a session. Every
//! change is staged on a copy, written through the [`TaskStore`], and only
//! then committed in memory and announced to the [`TaskListView`]. A store
//! failure therefore leaves both the list and the view untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::controller::TaskListController;
//! use tasklist::libs::config::Config;
//! use tasklist::libs::data_storage::DataStorage;
//! use tasklist::libs::sound::Silent;
//! use tasklist::libs::store::open_store;
//! use tasklist::libs::view::TerminalView;
//!
//! let store = open_store(&Config::default(), &DataStorage::new())?;
//! let mut controller = TaskListController::new(store, TerminalView::new(), Silent);
//! controller.initialize()?;
//! controller.add("Buy milk")?;
//! controller.complete(0)?;
//! # Ok::<(), tasklist::libs::controller::ControllerError>(())
//! ```

use super::sound::Feedback;
use super::store::TaskStore;
use super::swipe::{SwipeGesture, SwipeOutcome, DEFAULT_SWIPE_THRESHOLD};
use super::task::{is_blank, Task};
use super::view::TaskListView;
use crate::db::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("task list has not been loaded yet")]
    NotLoaded,

    #[error("position {position} is out of range for a list of {len} tasks")]
    PositionOutOfRange { position: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;

pub struct TaskListController<S, V, F> {
    store: S,
    view: V,
    feedback: F,
    tasks: Option<Vec<Task>>,
    swipe_threshold: f32,
}

impl<S: TaskStore, V: TaskListView, F: Feedback> TaskListController<S, V, F> {
    pub fn new(store: S, view: V, feedback: F) -> Self {
        TaskListController {
            store,
            view,
            feedback,
            tasks: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Sets the fraction of the row width a swipe must travel to delete.
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// Loads the stored list, replacing whatever is in memory.
    pub fn initialize(&mut self) -> ControllerResult<usize> {
        let tasks = self.store.load()?;
        let len = tasks.len();
        self.tasks = Some(tasks);
        tracing::debug!(len, "task list loaded");
        self.view.notify_all_changed();

        Ok(len)
    }

    pub fn is_loaded(&self) -> bool {
        self.tasks.is_some()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tasks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    fn loaded(&self) -> ControllerResult<&Vec<Task>> {
        self.tasks.as_ref().ok_or(ControllerError::NotLoaded)
    }

    fn check_position(&self, position: usize) -> ControllerResult<()> {
        let len = self.loaded()?.len();
        if position < len {
            Ok(())
        } else {
            Err(ControllerError::PositionOutOfRange { position, len })
        }
    }

    /// Appends a task. Blank input is ignored and reported as `false`.
    pub fn add(&mut self, text: &str) -> ControllerResult<bool> {
        let Some(list) = self.tasks.as_ref() else {
            return Err(ControllerError::NotLoaded);
        };
        if is_blank(text) {
            return Ok(false);
        }

        let id = self.store.insert(text, list)?;
        let tasks = self.tasks.get_or_insert_with(Vec::new);
        tasks.push(Task::new(id, text));
        let position = tasks.len() - 1;
        tracing::debug!(%id, position, "task added");
        self.view.notify_inserted(position);

        Ok(true)
    }

    /// Rewrites the first task whose text is `old_text`.
    ///
    /// Nothing happens when `old_text` is not in the list, or when
    /// `new_text` is blank or exactly `old_text`.
    pub fn edit(&mut self, old_text: &str, new_text: &str) -> ControllerResult<bool> {
        let list = self.loaded()?;
        match list.iter().position(|task| task.text == old_text) {
            Some(position) => self.edit_position(position, new_text),
            None => Ok(false),
        }
    }

    /// Asks the view for a replacement text for the task at `position`.
    pub fn edit_at(&mut self, position: usize) -> ControllerResult<bool> {
        self.check_position(position)?;
        let initial = self.tasks()[position].text.clone();

        match self.view.prompt_for_text(&initial) {
            Some(new_text) => self.edit_position(position, &new_text),
            None => Ok(false),
        }
    }

    /// Rewrites the task at `position`, with the same no-op rules as `edit`.
    pub fn edit_position(&mut self, position: usize, new_text: &str) -> ControllerResult<bool> {
        self.check_position(position)?;
        if is_blank(new_text) {
            return Ok(false);
        }

        let mut staged = self.loaded()?.clone();
        if staged[position].text == new_text {
            return Ok(false);
        }
        staged[position].text = new_text.to_string();

        self.store.update(&staged[position], &staged)?;
        tracing::debug!(id = %staged[position].id, position, "task edited");
        self.tasks = Some(staged);
        self.view.notify_changed(position);

        Ok(true)
    }

    /// Removes the task at `position` and plays the deletion feedback.
    pub fn delete_at(&mut self, position: usize) -> ControllerResult<Task> {
        self.check_position(position)?;

        let mut staged = self.loaded()?.clone();
        let removed = staged.remove(position);

        self.store.remove(&removed, &staged)?;
        tracing::debug!(id = %removed.id, position, "task removed");
        self.tasks = Some(staged);
        self.view.notify_removed(position);
        self.feedback.deletion();

        Ok(removed)
    }

    /// Marks the task done. Done tasks leave the list.
    pub fn complete(&mut self, position: usize) -> ControllerResult<Task> {
        self.delete_at(position)
    }

    /// Starts a swipe on the row at `position` using the configured threshold.
    pub fn begin_swipe(&self, position: usize, row_width: f32) -> ControllerResult<SwipeGesture> {
        self.check_position(position)?;
        Ok(SwipeGesture::begin(position, row_width, self.swipe_threshold))
    }

    /// Resolves a finished swipe: a committed swipe deletes its row.
    pub fn finish_swipe(&mut self, gesture: &mut SwipeGesture) -> ControllerResult<Option<Task>> {
        match gesture.release() {
            SwipeOutcome::Commit(position) => self.delete_at(position).map(Some),
            SwipeOutcome::Restore => Ok(None),
        }
    }

    pub fn render(&mut self) {
        if let Some(tasks) = &self.tasks {
            for (position, task) in tasks.iter().enumerate() {
                self.view.render_row(position, &task.text);
            }
        }
    }
}
