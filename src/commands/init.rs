use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd(storage: &DataStorage) -> Result<()> {
    // A broken config file should not block rewriting it.
    let current = Config::read_from(storage).unwrap_or_default();
    let config = current.init()?;
    config.save_to(storage)?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
