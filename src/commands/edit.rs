use super::{explain, open_controller, to_index};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task number as shown by `list`
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub position: u64,

    /// New text; prompts with the current text when omitted
    #[arg(num_args = 0.., trailing_var_arg = true)]
    pub text: Vec<String>,
}

pub fn cmd(storage: &DataStorage, args: EditArgs) -> Result<()> {
    let mut controller = open_controller(storage)?;
    let position = to_index(args.position);

    let changed = if args.text.is_empty() {
        controller.edit_at(position)
    } else {
        controller.edit_position(position, &args.text.join(" "))
    }
    .map_err(explain)?;

    if !changed {
        msg_info!(Message::TaskUnchanged);
    }

    Ok(())
}
