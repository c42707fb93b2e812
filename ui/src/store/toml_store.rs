//! TOML-file backed settings store.
//!
//! The whole key space is one flat table. Dotted keys are quoted, so the file
//! reads like:
//!
//! ```toml
//! ColorPalette = 1
//! theme = "ayu"
//! "asm.cmt.col" = 40
//! "colors.gui.background" = [37, 40, 43, 255]
//! ```
//!
//! Every mutation rewrites the file. Failures are logged and the in-memory
//! copy stays authoritative for the rest of the process.

use super::{SettingValue, SettingsStore, StoreError};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct TomlSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, SettingValue>,
    writable: bool,
}

impl TomlSettingsStore {
    /// Open the store at `path`.
    ///
    /// Never fails: a missing file starts empty, an unparsable one is logged
    /// and ignored (it will be overwritten by the next write), and an
    /// unwritable location is reported through [`is_writable`](SettingsStore::is_writable).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Ignoring unreadable settings file: {e}");
                BTreeMap::new()
            }
        };
        let writable = Self::probe_writable(&path);
        log::info!(
            "Opened settings store at {} ({} keys, writable: {writable})",
            path.display(),
            values.len()
        );

        Self {
            path,
            values,
            writable,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<BTreeMap<String, SettingValue>, StoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(toml::from_str(&content)?)
    }

    fn probe_writable(path: &Path) -> bool {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        if path.exists() {
            return OpenOptions::new().append(true).open(path).is_ok();
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => fs::remove_file(path).is_ok(),
            Err(_) => false,
        }
    }

    /// Write the current key space to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn flush_or_log(&self) {
        if let Err(e) = self.flush() {
            log::error!("Failed to persist settings: {e}");
        }
    }
}

impl SettingsStore for TomlSettingsStore {
    fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        if self.values.get(key) == Some(&value) {
            return;
        }
        self.values.insert(key.to_string(), value);
        self.flush_or_log();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush_or_log();
        }
    }

    fn clear(&mut self) {
        self.values.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => log::info!("Removed settings file {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::error!(
                "Failed to remove settings file {}: {e}",
                self.path.display()
            ),
        }
    }

    fn is_writable(&self) -> bool {
        self.writable
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
