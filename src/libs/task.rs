use std::fmt;

/// Stable identifier of a task for as long as it exists.
///
/// For the row store this is the SQLite row id. Snapshot-backed sessions
/// hand out ids in load order; those only live for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    pub fn new(id: TaskId, text: &str) -> Self {
        Task { id, text: text.to_string() }
    }
}

/// True when `text` has nothing but whitespace. Such input is never stored.
///
/// Accepted text is kept exactly as typed, surrounding whitespace included.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
