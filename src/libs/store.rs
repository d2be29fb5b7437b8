use crate::db::db::DB_FILE_NAME;
use crate::db::error::StoreResult;
use crate::db::schema::SchemaReset;
use crate::db::snapshot::TaskSnapshot;
use crate::db::tasks::TaskRows;
use crate::libs::config::{Config, StoreKind};
use crate::libs::data_storage::DataStorage;
use crate::libs::task::{Task, TaskId};

/// Durable side of the task list, as seen by the controller.
///
/// `list` is always the in-memory sequence the change applies to. For
/// `insert` it is the list before the new text is appended; for `update`
/// and `remove` it is the list after the change.
pub trait TaskStore {
    fn load(&mut self) -> StoreResult<Vec<Task>>;
    fn insert(&mut self, text: &str, list: &[Task]) -> StoreResult<TaskId>;
    fn update(&mut self, task: &Task, list: &[Task]) -> StoreResult<()>;
    fn remove(&mut self, task: &Task, list: &[Task]) -> StoreResult<()>;
}

impl TaskStore for TaskRows {
    fn load(&mut self) -> StoreResult<Vec<Task>> {
        self.list_tasks()
    }

    fn insert(&mut self, text: &str, _list: &[Task]) -> StoreResult<TaskId> {
        TaskRows::insert(self, text)
    }

    fn update(&mut self, task: &Task, _list: &[Task]) -> StoreResult<()> {
        self.update_by_id(task.id, &task.text)?;
        Ok(())
    }

    fn remove(&mut self, task: &Task, _list: &[Task]) -> StoreResult<()> {
        self.delete_by_id(task.id)?;
        Ok(())
    }
}

/// Snapshot store plus the session-local id counter its tasks need.
pub struct SnapshotSession {
    snapshot: TaskSnapshot,
    next_id: i64,
}

impl SnapshotSession {
    pub fn new(snapshot: TaskSnapshot) -> Self {
        SnapshotSession { snapshot, next_id: 1 }
    }

    fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl TaskStore for SnapshotSession {
    fn load(&mut self) -> StoreResult<Vec<Task>> {
        let texts = self.snapshot.load_all()?;
        Ok(texts
            .into_iter()
            .map(|text| Task {
                id: self.allocate(),
                text,
            })
            .collect())
    }

    fn insert(&mut self, text: &str, list: &[Task]) -> StoreResult<TaskId> {
        let mut texts: Vec<&str> = list.iter().map(|task| task.text.as_str()).collect();
        texts.push(text);
        self.snapshot.save_all(&texts)?;

        Ok(self.allocate())
    }

    fn update(&mut self, _task: &Task, list: &[Task]) -> StoreResult<()> {
        save_list(&self.snapshot, list)
    }

    fn remove(&mut self, _task: &Task, list: &[Task]) -> StoreResult<()> {
        save_list(&self.snapshot, list)
    }
}

fn save_list(snapshot: &TaskSnapshot, list: &[Task]) -> StoreResult<()> {
    let texts: Vec<&str> = list.iter().map(|task| task.text.as_str()).collect();
    snapshot.save_all(&texts)
}

/// Builds the store variant selected in `config`.
pub fn open_store(config: &Config, storage: &DataStorage) -> StoreResult<Box<dyn TaskStore>> {
    let path = storage.get_path(DB_FILE_NAME)?;
    let reset = SchemaReset::from(config.allow_schema_reset);

    let store: Box<dyn TaskStore> = match config.store {
        StoreKind::Rows => Box::new(TaskRows::open(&path, reset)?),
        StoreKind::Snapshot => Box::new(SnapshotSession::new(TaskSnapshot::open(&path, reset)?)),
    };
    tracing::debug!(kind = ?config.store, path = %path.display(), "task store opened");

    Ok(store)
}

impl<S: TaskStore + ?Sized> TaskStore for Box<S> {
    fn load(&mut self) -> StoreResult<Vec<Task>> {
        (**self).load()
    }

    fn insert(&mut self, text: &str, list: &[Task]) -> StoreResult<TaskId> {
        (**self).insert(text, list)
    }

    fn update(&mut self, task: &Task, list: &[Task]) -> StoreResult<()> {
        (**self).update(task, list)
    }

    fn remove(&mut self, task: &Task, list: &[Task]) -> StoreResult<()> {
        (**self).remove(task, list)
    }
}
