#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(usize),   // 1-based position
    TaskUpdated(usize), // 1-based position
    TaskRemoved(usize), // 1-based position
    TaskCompleted(String),
    TaskDeleted(String),
    TaskTextEmpty,
    TaskUnchanged,
    TaskPositionInvalid { position: usize, len: usize },
    TasksEmpty,
    TasksHeader(usize),
    TasksLoaded(usize),
    TasksNotLoaded,

    // === SESSION MESSAGES ===
    SessionPrompt,
    SessionActionAdd,
    SessionActionEdit,
    SessionActionComplete,
    SessionActionDelete,
    SessionActionQuit,
    SessionGoodbye,
    PromptTaskText,
    PromptEditTask,
    PromptSelectTask,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigInvalidThreshold(f32),
    PromptStoreKind,
    PromptSound,
    PromptSwipeThreshold,
    PromptAllowSchemaReset,

    // === STORAGE MESSAGES ===
    StorageFailed(String),
    SchemaMismatch { found: i64, expected: i64 },
    SchemaResetHint,
    SchemaResetDone,
    SchemaResetNeedsConfirmation,
}
