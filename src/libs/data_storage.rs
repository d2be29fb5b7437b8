//! Where the task database and `config.json` live.
//!
//! The directory is `--data-dir` when given, otherwise a per-user location:
//! `$XDG_DATA_HOME/lacodda/tasklist` (falling back to `~/.local/share`) on
//! Linux, `~/Library/Application Support/lacodda/tasklist` on macOS and
//! `%LOCALAPPDATA%\lacodda\tasklist` on Windows.

use std::env::{self, consts::OS};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "tasklist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Storage in the per-user data directory.
    pub fn new() -> Self {
        Self::with_base(user_data_dir().join(VENDOR_NAME).join(APP_NAME))
    }

    /// Storage pinned to `base_path`, used as is.
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Picks the command line override if there is one.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        data_dir.map_or_else(Self::new, Self::with_base)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the storage directory, creating the
    /// directory on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn env_dir(name: &str) -> Option<PathBuf> {
    env::var_os(name).filter(|value| !value.is_empty()).map(PathBuf::from)
}

fn user_data_dir() -> PathBuf {
    let home = || env_dir("HOME").unwrap_or_else(|| PathBuf::from("."));
    match OS {
        "windows" => env_dir("LOCALAPPDATA").unwrap_or_else(|| PathBuf::from(".")),
        "macos" => home().join("Library").join("Application Support"),
        _ => env_dir("XDG_DATA_HOME").unwrap_or_else(|| home().join(".local").join("share")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_user_dir() {
        let storage = DataStorage::resolve(Some(PathBuf::from("/tmp/tasks-here")));
        assert_eq!(storage.base_path(), Path::new("/tmp/tasks-here"));
    }

    #[test]
    fn user_dir_ends_in_vendor_and_app() {
        let storage = DataStorage::resolve(None);
        assert!(storage.base_path().ends_with(Path::new(VENDOR_NAME).join(APP_NAME)));
    }

    #[test]
    fn get_path_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::with_base(temp_dir.path().join("nested").join("dir"));

        let path = storage.get_path("tasks.db").unwrap();
        assert!(storage.base_path().is_dir());
        assert_eq!(path, storage.base_path().join("tasks.db"));
    }
}
