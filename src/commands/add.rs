use super::{explain, open_controller};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text; several words are joined with spaces
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub text: Vec<String>,
}

pub fn cmd(storage: &DataStorage, args: AddArgs) -> Result<()> {
    let mut controller = open_controller(storage)?;

    if !controller.add(&args.text.join(" ")).map_err(explain)? {
        msg_warning!(Message::TaskTextEmpty);
    }

    Ok(())
}
