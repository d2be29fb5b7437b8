use super::messages::Message;
use crate::{msg_print, msg_success};
use dialoguer::{theme::ColorfulTheme, Input};
use prettytable::{row, Table};

/// What the controller needs from whatever draws the list.
///
/// Positions are 0-based indices into the controller's list.
pub trait TaskListView {
    fn render_row(&mut self, position: usize, text: &str);
    fn notify_inserted(&mut self, position: usize);
    fn notify_removed(&mut self, position: usize);
    fn notify_changed(&mut self, position: usize);
    fn notify_all_changed(&mut self);
    /// Shows an editable prompt. `None` means the user cancelled.
    fn prompt_for_text(&mut self, initial: &str) -> Option<String>;
}

/// Terminal rendition of the list screen.
///
/// Rows handed to `render_row` are buffered and printed as one table by
/// [`TerminalView::flush`].
#[derive(Default)]
pub struct TerminalView {
    rows: Vec<(usize, String)>,
}

impl TerminalView {
    pub fn new() -> Self {
        TerminalView { rows: Vec::new() }
    }

    pub fn flush(&mut self) {
        if self.rows.is_empty() {
            msg_print!(Message::TasksEmpty);
            return;
        }

        msg_print!(Message::TasksHeader(self.rows.len()));
        let mut table = Table::new();
        table.add_row(row!["#", "TASK"]);
        for (position, text) in self.rows.drain(..) {
            table.add_row(row![position + 1, text]);
        }
        table.printstd();
    }
}

impl TaskListView for TerminalView {
    fn render_row(&mut self, position: usize, text: &str) {
        self.rows.push((position, text.to_string()));
    }

    fn notify_inserted(&mut self, position: usize) {
        msg_success!(Message::TaskAdded(position + 1));
    }

    fn notify_removed(&mut self, position: usize) {
        msg_success!(Message::TaskRemoved(position + 1));
    }

    fn notify_changed(&mut self, position: usize) {
        msg_success!(Message::TaskUpdated(position + 1));
    }

    fn notify_all_changed(&mut self) {
        self.rows.clear();
    }

    fn prompt_for_text(&mut self, initial: &str) -> Option<String> {
        let result = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEditTask.to_string())
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(error = %e, "edit prompt cancelled");
                None
            }
        }
    }
}
