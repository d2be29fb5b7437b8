use super::open_controller;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;

pub fn cmd(storage: &DataStorage) -> Result<()> {
    let mut controller = open_controller(storage)?;
    controller.render();
    controller.view_mut().flush();

    Ok(())
}
