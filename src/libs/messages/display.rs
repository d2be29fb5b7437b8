//! Display text for every [`Message`].
//!
//! All user-facing strings live here so command code only ever names a
//! message variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(position) => format!("Task #{} added", position),
            Message::TaskUpdated(position) => format!("Task #{} updated", position),
            Message::TaskRemoved(position) => format!("Task #{} removed", position),
            Message::TaskCompleted(text) => format!("Done: {}", text),
            Message::TaskDeleted(text) => format!("Deleted: {}", text),
            Message::TaskTextEmpty => "Task text is empty, nothing to add".to_string(),
            Message::TaskUnchanged => "No changes detected".to_string(),
            Message::TaskPositionInvalid { position, len } => {
                if *len == 0 {
                    format!("There is no task #{}: the list is empty", position)
                } else {
                    format!("There is no task #{}: choose a number between 1 and {}", position, len)
                }
            }
            Message::TasksEmpty => "Nothing to do. Add a task with `tasklist add <text>`".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({})", count),
            Message::TasksLoaded(count) => format!("Loaded {} task(s)", count),
            Message::TasksNotLoaded => "The task list has not been loaded".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionPrompt => "What would you like to do?".to_string(),
            Message::SessionActionAdd => "Add a task".to_string(),
            Message::SessionActionEdit => "Edit a task".to_string(),
            Message::SessionActionComplete => "Mark a task as done".to_string(),
            Message::SessionActionDelete => "Delete a task".to_string(),
            Message::SessionActionQuit => "Quit".to_string(),
            Message::SessionGoodbye => "Bye!".to_string(),
            Message::PromptTaskText => "Task".to_string(),
            Message::PromptEditTask => "Edit task".to_string(),
            Message::PromptSelectTask => "Select a task".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigInvalidThreshold(value) => {
                format!("Swipe threshold must be greater than 0 and at most 1, got {}", value)
            }
            Message::PromptStoreKind => "Where should tasks be stored?".to_string(),
            Message::PromptSound => "Play a sound when a task is removed?".to_string(),
            Message::PromptSwipeThreshold => "Swipe threshold (fraction of row width)".to_string(),
            Message::PromptAllowSchemaReset => "Wipe the database automatically when its format changes?".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageFailed(error) => format!("Task storage failed: {}", error),
            Message::SchemaMismatch { found, expected } => {
                format!("The task database uses format version {}, this build expects {}", found, expected)
            }
            Message::SchemaResetHint => {
                "Run `tasklist reset --yes` to recreate it. All stored tasks will be lost".to_string()
            }
            Message::SchemaResetDone => "Task database recreated".to_string(),
            Message::SchemaResetNeedsConfirmation => {
                "This deletes every stored task. Re-run with --yes to confirm".to_string()
            }
        };
        write!(f, "{}", s)
    }
}
