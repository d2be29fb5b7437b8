#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::rc::Rc;
    use tasklist::db::error::{StoreError, StoreResult};
    use tasklist::db::schema::SchemaReset;
    use tasklist::db::snapshot::TaskSnapshot;
    use tasklist::db::tasks::TaskRows;
    use tasklist::libs::controller::{ControllerError, TaskListController};
    use tasklist::libs::sound::Feedback;
    use tasklist::libs::store::{SnapshotSession, TaskStore};
    use tasklist::libs::swipe::SwipeGesture;
    use tasklist::libs::task::{Task, TaskId};
    use tasklist::libs::view::TaskListView;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Row(usize, String),
        Inserted(usize),
        Removed(usize),
        Changed(usize),
        AllChanged,
    }

    /// Records every notification and answers prompts from a queue.
    #[derive(Default)]
    struct RecordingView {
        events: Vec<Event>,
        answers: VecDeque<Option<String>>,
        prompts: Vec<String>,
    }

    impl TaskListView for RecordingView {
        fn render_row(&mut self, position: usize, text: &str) {
            self.events.push(Event::Row(position, text.to_string()));
        }

        fn notify_inserted(&mut self, position: usize) {
            self.events.push(Event::Inserted(position));
        }

        fn notify_removed(&mut self, position: usize) {
            self.events.push(Event::Removed(position));
        }

        fn notify_changed(&mut self, position: usize) {
            self.events.push(Event::Changed(position));
        }

        fn notify_all_changed(&mut self) {
            self.events.push(Event::AllChanged);
        }

        fn prompt_for_text(&mut self, initial: &str) -> Option<String> {
            self.prompts.push(initial.to_string());
            self.answers.pop_front().flatten()
        }
    }

    #[derive(Default)]
    struct CountingFeedback {
        deletions: usize,
    }

    impl Feedback for CountingFeedback {
        fn deletion(&mut self) {
            self.deletions += 1;
        }
    }

    /// Wraps a store and fails writes while the flag is set.
    struct FlakyStore<S> {
        inner: S,
        failing: Rc<RefCell<bool>>,
    }

    impl<S: TaskStore> FlakyStore<S> {
        fn check(&self) -> StoreResult<()> {
            if *self.failing.borrow() {
                Err(StoreError::Io(std::io::Error::other("disk full")))
            } else {
                Ok(())
            }
        }
    }

    impl<S: TaskStore> TaskStore for FlakyStore<S> {
        fn load(&mut self) -> StoreResult<Vec<Task>> {
            self.inner.load()
        }

        fn insert(&mut self, text: &str, list: &[Task]) -> StoreResult<TaskId> {
            self.check()?;
            self.inner.insert(text, list)
        }

        fn update(&mut self, task: &Task, list: &[Task]) -> StoreResult<()> {
            self.check()?;
            self.inner.update(task, list)
        }

        fn remove(&mut self, task: &Task, list: &[Task]) -> StoreResult<()> {
            self.check()?;
            self.inner.remove(task, list)
        }
    }

    type Controller<S> = TaskListController<S, RecordingView, CountingFeedback>;

    struct ControllerTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for ControllerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            ControllerTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl ControllerTestContext {
        fn rows(&self) -> Controller<TaskRows> {
            let store = TaskRows::open(&self.db_path, SchemaReset::Deny).unwrap();
            let mut controller = TaskListController::new(store, RecordingView::default(), CountingFeedback::default());
            controller.initialize().unwrap();
            controller
        }

        fn snapshot(&self) -> Controller<SnapshotSession> {
            let snapshot = TaskSnapshot::open(&self.db_path, SchemaReset::Deny).unwrap();
            let store = SnapshotSession::new(snapshot);
            let mut controller = TaskListController::new(store, RecordingView::default(), CountingFeedback::default());
            controller.initialize().unwrap();
            controller
        }
    }

    fn texts<S: TaskStore>(controller: &Controller<S>) -> Vec<String> {
        controller.tasks().iter().map(|task| task.text.clone()).collect()
    }

    fn run_scenario<S: TaskStore>(controller: &mut Controller<S>) {
        assert!(controller.add("Buy milk").unwrap());
        assert!(controller.add("Call mom").unwrap());
        assert_eq!(texts(controller), vec!["Buy milk", "Call mom"]);

        let removed = controller.delete_at(0).unwrap();
        assert_eq!(removed.text, "Buy milk");
        assert_eq!(texts(controller), vec!["Call mom"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_scenario_survives_new_session_with_rows(ctx: &mut ControllerTestContext) {
        run_scenario(&mut ctx.rows());
        assert_eq!(texts(&ctx.rows()), vec!["Call mom"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_scenario_survives_new_session_with_snapshot(ctx: &mut ControllerTestContext) {
        run_scenario(&mut ctx.snapshot());
        assert_eq!(texts(&ctx.snapshot()), vec!["Call mom"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_added_text_is_appended_and_durable(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("first").unwrap();
        controller.add("second").unwrap();

        assert_eq!(texts(&ctx.rows()), vec!["first", "second"]);
        assert_eq!(controller.view().events, vec![Event::AllChanged, Event::Inserted(0), Event::Inserted(1)]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_padded_text_is_stored_as_typed(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        assert!(controller.add("  padded  ").unwrap());
        assert_eq!(texts(&ctx.rows()), vec!["  padded  "]);

        let mut controller = ctx.snapshot();
        controller.add("\tindented note ").unwrap();
        assert_eq!(texts(&ctx.snapshot()), vec!["\tindented note "]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_blank_add_is_ignored(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        assert!(!controller.add("").unwrap());
        assert!(!controller.add("   ").unwrap());

        assert_eq!(controller.len(), 0);
        assert!(ctx.rows().is_empty());
        assert_eq!(controller.view().events, vec![Event::AllChanged]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_delete_shifts_following_items(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.snapshot();
        for text in ["a", "b", "c", "d"] {
            controller.add(text).unwrap();
        }

        controller.delete_at(1).unwrap();
        assert_eq!(texts(&controller), vec!["a", "c", "d"]);
        assert_eq!(controller.view().events.last(), Some(&Event::Removed(1)));
        assert_eq!(controller.feedback().deletions, 1);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_complete_removes_like_delete(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("done soon").unwrap();
        controller.add("later").unwrap();

        let completed = controller.complete(0).unwrap();
        assert_eq!(completed.text, "done soon");
        assert_eq!(texts(&ctx.rows()), vec!["later"]);
        assert_eq!(controller.feedback().deletions, 1);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_delete_out_of_range_is_rejected(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("only").unwrap();

        let err = controller.delete_at(1).unwrap_err();
        assert!(matches!(err, ControllerError::PositionOutOfRange { position: 1, len: 1 }));
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.feedback().deletions, 0);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_edit_rules(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("Buy milk").unwrap();

        assert!(!controller.edit("Absent", "New").unwrap());
        assert!(!controller.edit("Buy milk", "Buy milk").unwrap());
        assert!(!controller.edit("Buy milk", "  ").unwrap());
        assert_eq!(texts(&controller), vec!["Buy milk"]);

        assert!(controller.edit("Buy milk", "Buy oat milk").unwrap());
        assert_eq!(controller.view().events.last(), Some(&Event::Changed(0)));
        assert_eq!(texts(&ctx.rows()), vec!["Buy oat milk"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_edit_to_padded_text_is_a_change(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("x").unwrap();

        assert!(controller.edit("x", " x").unwrap());
        assert_eq!(texts(&ctx.rows()), vec![" x"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_edit_touches_only_first_duplicate(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("X").unwrap();
        controller.add("Y").unwrap();
        controller.add("X").unwrap();

        controller.edit("X", "Z").unwrap();
        assert_eq!(texts(&ctx.rows()), vec!["Z", "Y", "X"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_delete_touches_only_selected_duplicate(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("X").unwrap();
        controller.add("X").unwrap();

        controller.delete_at(1).unwrap();
        assert_eq!(texts(&ctx.rows()), vec!["X"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_edit_at_uses_prompt(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.snapshot();
        controller.add("draft").unwrap();

        controller.view_mut().answers.push_back(None);
        assert!(!controller.edit_at(0).unwrap());

        controller.view_mut().answers.push_back(Some("final".to_string()));
        assert!(controller.edit_at(0).unwrap());

        assert_eq!(controller.view().prompts, vec!["draft", "draft"]);
        assert_eq!(texts(&ctx.snapshot()), vec!["final"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_operations_require_initialize(ctx: &mut ControllerTestContext) {
        let store = TaskRows::open(&ctx.db_path, SchemaReset::Deny).unwrap();
        let mut controller = TaskListController::new(store, RecordingView::default(), CountingFeedback::default());

        assert!(!controller.is_loaded());
        assert!(matches!(controller.add("early"), Err(ControllerError::NotLoaded)));
        assert!(matches!(controller.delete_at(0), Err(ControllerError::NotLoaded)));
        assert!(matches!(controller.edit("a", "b"), Err(ControllerError::NotLoaded)));
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_failed_write_leaves_list_unchanged(ctx: &mut ControllerTestContext) {
        let failing = Rc::new(RefCell::new(false));
        let store = FlakyStore {
            inner: TaskRows::open(&ctx.db_path, SchemaReset::Deny).unwrap(),
            failing: failing.clone(),
        };
        let mut controller = TaskListController::new(store, RecordingView::default(), CountingFeedback::default());
        controller.initialize().unwrap();
        controller.add("keep me").unwrap();

        *failing.borrow_mut() = true;
        assert!(matches!(controller.add("lost"), Err(ControllerError::Store(_))));
        assert!(matches!(controller.edit("keep me", "changed"), Err(ControllerError::Store(_))));
        assert!(matches!(controller.delete_at(0), Err(ControllerError::Store(_))));

        assert_eq!(texts(&controller), vec!["keep me"]);
        assert_eq!(controller.feedback().deletions, 0);
        assert_eq!(controller.view().events, vec![Event::AllChanged, Event::Inserted(0)]);
        assert_eq!(texts(&ctx.rows()), vec!["keep me"]);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_swipe_commit_and_restore(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("stay").unwrap();
        controller.add("swipe me").unwrap();

        let mut short = SwipeGesture::begin(1, 400.0, 0.5);
        short.drag(100.0);
        assert!(controller.finish_swipe(&mut short).unwrap().is_none());
        assert_eq!(controller.len(), 2);

        let mut long = SwipeGesture::begin(1, 400.0, 0.5);
        long.drag(-300.0);
        let removed = controller.finish_swipe(&mut long).unwrap();
        assert_eq!(removed.map(|task| task.text), Some("swipe me".to_string()));
        assert_eq!(texts(&ctx.rows()), vec!["stay"]);
        assert_eq!(controller.feedback().deletions, 1);
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_swipe_uses_configured_threshold(ctx: &mut ControllerTestContext) {
        let store = TaskRows::open(&ctx.db_path, SchemaReset::Deny).unwrap();
        let mut controller = TaskListController::new(store, RecordingView::default(), CountingFeedback::default())
            .with_swipe_threshold(0.25);
        controller.initialize().unwrap();
        controller.add("short swipe is enough").unwrap();

        assert!(matches!(
            controller.begin_swipe(1, 400.0),
            Err(ControllerError::PositionOutOfRange { position: 1, len: 1 })
        ));

        let mut gesture = controller.begin_swipe(0, 400.0).unwrap();
        gesture.drag(120.0);
        assert!(controller.finish_swipe(&mut gesture).unwrap().is_some());
        assert!(ctx.rows().is_empty());
    }

    #[test_context(ControllerTestContext)]
    #[test]
    fn test_render_emits_every_row(ctx: &mut ControllerTestContext) {
        let mut controller = ctx.rows();
        controller.add("one").unwrap();
        controller.add("two").unwrap();
        controller.view_mut().events.clear();

        controller.render();
        assert_eq!(
            controller.view().events,
            vec![Event::Row(0, "one".to_string()), Event::Row(1, "two".to_string())]
        );
    }
}
