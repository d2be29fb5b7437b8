use super::{explain, open_controller, to_index};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Task number as shown by `list`
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub position: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Complete,
    Delete,
}

pub fn cmd(storage: &DataStorage, args: RemoveArgs, removal: Removal) -> Result<()> {
    let mut controller = open_controller(storage)?;
    let position = to_index(args.position);

    let task = match removal {
        Removal::Complete => controller.complete(position),
        Removal::Delete => controller.delete_at(position),
    }
    .map_err(explain)?;

    match removal {
        Removal::Complete => msg_print!(Message::TaskCompleted(task.text)),
        Removal::Delete => msg_print!(Message::TaskDeleted(task.text)),
    }

    Ok(())
}
