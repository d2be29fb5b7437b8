use crate::db::db::{Db, DB_FILE_NAME};
use crate::db::schema::recreate_schema;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Confirm that every stored task may be deleted
    #[arg(long)]
    pub yes: bool,
}

pub fn cmd(storage: &DataStorage, args: ResetArgs) -> Result<()> {
    if !args.yes {
        msg_warning!(Message::SchemaResetNeedsConfirmation);
        return Ok(());
    }

    let db = Db::open(&storage.get_path(DB_FILE_NAME)?)?;
    recreate_schema(&db.conn)?;
    msg_success!(Message::SchemaResetDone);

    Ok(())
}
