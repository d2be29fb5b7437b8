//! Interactive session: the whole list on one screen.
//!
//! Each round prints the list, asks for an action and applies it through
//! the controller. Storage failures are reported and the session goes on
//! with the list exactly as it was before the failed action.

use super::{open_controller, report, TerminalController};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Edit,
    Complete,
    Delete,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [Action::Add, Action::Edit, Action::Complete, Action::Delete, Action::Quit];

    fn label(&self) -> String {
        let message = match self {
            Action::Add => Message::SessionActionAdd,
            Action::Edit => Message::SessionActionEdit,
            Action::Complete => Message::SessionActionComplete,
            Action::Delete => Message::SessionActionDelete,
            Action::Quit => Message::SessionActionQuit,
        };
        message.to_string()
    }
}

pub fn cmd(storage: &DataStorage) -> Result<()> {
    let mut controller = open_controller(storage)?;
    let theme = ColorfulTheme::default();
    let labels: Vec<String> = Action::ALL.iter().map(Action::label).collect();

    loop {
        controller.render();
        controller.view_mut().flush();

        let selection = Select::with_theme(&theme)
            .with_prompt(Message::SessionPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[selection] {
            Action::Add => handle_add(&mut controller, &theme)?,
            Action::Quit => break,
            action => {
                if let Some(position) = pick_task(&controller, &theme)? {
                    handle_task_action(&mut controller, action, position);
                }
            }
        }
    }

    msg_print!(Message::SessionGoodbye);
    Ok(())
}

fn handle_add(controller: &mut TerminalController, theme: &ColorfulTheme) -> Result<()> {
    let text: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskText.to_string())
        .allow_empty(true)
        .interact_text()?;

    match controller.add(&text) {
        Ok(true) => {}
        Ok(false) => msg_warning!(Message::TaskTextEmpty),
        Err(e) => report(e),
    }

    Ok(())
}

fn pick_task(controller: &TerminalController, theme: &ColorfulTheme) -> Result<Option<usize>> {
    if controller.is_empty() {
        msg_info!(Message::TasksEmpty);
        return Ok(None);
    }

    let items: Vec<&str> = controller.tasks().iter().map(|task| task.text.as_str()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection)
}

fn handle_task_action(controller: &mut TerminalController, action: Action, position: usize) {
    let result = match action {
        Action::Edit => controller.edit_at(position).map(|changed| {
            if !changed {
                msg_info!(Message::TaskUnchanged);
            }
        }),
        Action::Complete => controller
            .complete(position)
            .map(|task| msg_print!(Message::TaskCompleted(task.text))),
        Action::Delete => controller
            .delete_at(position)
            .map(|task| msg_print!(Message::TaskDeleted(task.text))),
        Action::Add | Action::Quit => Ok(()),
    };

    if let Err(e) = result {
        report(e);
    }
}
