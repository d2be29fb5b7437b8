pub mod add;
pub mod edit;
pub mod init;
pub mod list;
pub mod remove;
pub mod reset;
pub mod session;

use crate::db::error::StoreError;
use crate::libs::config::Config;
use crate::libs::controller::{ControllerError, TaskListController};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::sound::{DeletionSound, Feedback, Silent, TerminalBell};
use crate::libs::store::{open_store, TaskStore};
use crate::libs::view::TerminalView;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task to the end of the list", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Show all tasks")]
    List,
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as done (removes it from the list)", arg_required_else_help = true)]
    Done(remove::RemoveArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(remove::RemoveArgs),
    #[command(about = "Work through the list interactively")]
    Session,
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Recreate the task database, deleting every stored task")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Directory holding the task database and configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = DataStorage::resolve(cli.data_dir);

        match cli.command {
            Commands::Add(args) => add::cmd(&storage, args),
            Commands::List => list::cmd(&storage),
            Commands::Edit(args) => edit::cmd(&storage, args),
            Commands::Done(args) => remove::cmd(&storage, args, remove::Removal::Complete),
            Commands::Delete(args) => remove::cmd(&storage, args, remove::Removal::Delete),
            Commands::Session => session::cmd(&storage),
            Commands::Init => init::cmd(&storage),
            Commands::Reset(args) => reset::cmd(&storage, args),
        }
    }
}

pub type TerminalController = TaskListController<Box<dyn TaskStore>, TerminalView, Box<dyn Feedback>>;

/// Opens the configured store and loads the list into a controller.
pub fn open_controller(storage: &DataStorage) -> Result<TerminalController> {
    let config = Config::read_from(storage)?;
    let store = open_store(&config, storage).map_err(|e| explain(e.into()))?;

    let feedback: Box<dyn Feedback> = if config.sound {
        Box::new(DeletionSound::new(TerminalBell::new()))
    } else {
        Box::new(Silent)
    };

    let mut controller =
        TaskListController::new(store, TerminalView::new(), feedback).with_swipe_threshold(config.swipe_threshold);
    let loaded = controller.initialize().map_err(explain)?;
    msg_debug!("{}", Message::TasksLoaded(loaded));

    Ok(controller)
}

fn describe(err: &ControllerError) -> Message {
    match err {
        ControllerError::PositionOutOfRange { position, len } => Message::TaskPositionInvalid {
            position: position + 1,
            len: *len,
        },
        ControllerError::Store(StoreError::SchemaMismatch { found, expected }) => Message::SchemaMismatch {
            found: *found,
            expected: *expected,
        },
        ControllerError::Store(e) => Message::StorageFailed(e.to_string()),
        ControllerError::NotLoaded => Message::TasksNotLoaded,
    }
}

fn hint(err: &ControllerError) {
    if let ControllerError::Store(StoreError::SchemaMismatch { .. }) = err {
        msg_info!(Message::SchemaResetHint);
    }
}

/// Turns a controller failure into a user-facing error.
///
/// Positions in messages are 1-based, as on the command line.
pub fn explain(err: ControllerError) -> anyhow::Error {
    hint(&err);
    anyhow!("❌ {}", describe(&err))
}

/// Prints a failure that should not end an interactive session.
pub fn report(err: ControllerError) {
    msg_error!(describe(&err));
    hint(&err);
}

/// Converts a 1-based command line position to a list index.
pub fn to_index(position: u64) -> usize {
    position.saturating_sub(1) as usize
}
