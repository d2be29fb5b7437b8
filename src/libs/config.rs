//! Configuration for the task list.
//!
//! Settings live in `config.json` inside the application data directory.
//! A missing file means defaults, so the program works without setup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklist::libs::config::{Config, StoreKind};
//!
//! let mut config = Config::read()?;
//! config.store = StoreKind::Snapshot;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::swipe::DEFAULT_SWIPE_THRESHOLD;
use crate::msg_bail_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Which persistence model backs the list.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// One row per task, changed one row at a time.
    #[default]
    Rows,
    /// The whole list rewritten on every change.
    Snapshot,
}

impl StoreKind {
    pub const ALL: [StoreKind; 2] = [StoreKind::Rows, StoreKind::Snapshot];

    pub fn label(&self) -> &'static str {
        match self {
            StoreKind::Rows => "One row per task",
            StoreKind::Snapshot => "Whole-list snapshot",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store: StoreKind,

    /// Play the deletion sound when a task is completed or deleted.
    pub sound: bool,

    /// Fraction of the row width a swipe must travel to delete the row.
    pub swipe_threshold: f32,

    /// Allow wiping the database when its schema version does not match.
    ///
    /// Off by default: a mismatch is reported and nothing is deleted.
    pub allow_schema_reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreKind::Rows,
            sound: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            allow_schema_reset: false,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        Self::read_file(&config_file_path)
    }

    fn read_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        self.validate()?;
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold <= 1.0) {
            msg_bail_anyhow!(Message::ConfigInvalidThreshold(self.swipe_threshold));
        }
        Ok(())
    }

    /// Interactive setup, starting from the values in `self`.
    pub fn init(&self) -> Result<Config> {
        let theme = ColorfulTheme::default();

        let labels: Vec<&str> = StoreKind::ALL.iter().map(StoreKind::label).collect();
        let current = StoreKind::ALL.iter().position(|kind| *kind == self.store).unwrap_or(0);
        let store = Select::with_theme(&theme)
            .with_prompt(Message::PromptStoreKind.to_string())
            .items(&labels)
            .default(current)
            .interact()?;

        let sound = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptSound.to_string())
            .default(self.sound)
            .interact()?;

        let swipe_threshold = Input::with_theme(&theme)
            .with_prompt(Message::PromptSwipeThreshold.to_string())
            .default(self.swipe_threshold)
            .validate_with(|input: &f32| -> Result<(), String> {
                if *input > 0.0 && *input <= 1.0 {
                    Ok(())
                } else {
                    Err(Message::ConfigInvalidThreshold(*input).to_string())
                }
            })
            .interact_text()?;

        let allow_schema_reset = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptAllowSchemaReset.to_string())
            .default(self.allow_schema_reset)
            .interact()?;

        let config = Config {
            store: StoreKind::ALL[store],
            sound,
            swipe_threshold,
            allow_schema_reset,
        };

        Ok(config)
    }
}
