//! Location of studymate's files: `config.json` and `studymate.db`.
//!
//! `STUDYMATE_DATA_DIR` overrides the directory outright. Otherwise it is the
//! platform application data directory:
//!
//! | OS      | Directory                                              |
//! |---------|--------------------------------------------------------|
//! | Linux   | `$HOME/.local/share/studymate/studymate`               |
//! | macOS   | `$HOME/Library/Application Support/studymate/studymate` |
//! | Windows | `%LOCALAPPDATA%\studymate\studymate`                   |

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "studymate";
pub const APP_NAME: &str = "studymate";

/// Environment variable naming the data directory to use instead of the
/// platform default.
pub const DATA_DIR_ENV: &str = "STUDYMATE_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the data directory from the environment at call time.
    pub fn new() -> Self {
        let base_path = match var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => platform_dir().join(VENDOR_NAME).join(APP_NAME),
        };

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` without touching the filesystem.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Path of `file_name`, creating the data directory first so the file
    /// can be written.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.file_path(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_dir() -> PathBuf {
    let home = || var("HOME").unwrap_or_else(|_| ".".into());
    match OS {
        "windows" => PathBuf::from(var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
        "macos" => Path::new(&home()).join("Library").join("Application Support"),
        _ => Path::new(&home()).join(".local").join("share"),
    }
}
