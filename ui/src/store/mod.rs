//! Durable key-value settings store.
//!
//! Settings are addressed by string keys (`ColorPalette`, `colors.gui.border`,
//! `asm.cmt.col`, ...) and hold one of four value types. Writes go straight
//! through to the backing medium; there is no batching.

pub mod memory;
pub mod toml_store;

pub use memory::MemorySettingsStore;
pub use toml_store::TomlSettingsStore;

use engine::{ConfigValue, Rgba};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A value held by the settings store.
///
/// Fonts and locales are stored as text; colors as `[r, g, b, a]` arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Color(Rgba),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            SettingValue::Int(i) => Some(*i != 0),
            SettingValue::Text(s) => Some(ConfigValue::Str(s.clone()).to_bool()),
            SettingValue::Color(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Bool(b) => Some(i64::from(*b)),
            SettingValue::Int(i) => Some(*i),
            SettingValue::Text(s) => s.trim().parse().ok(),
            SettingValue::Color(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            SettingValue::Bool(b) => Some(b.to_string()),
            SettingValue::Int(i) => Some(i.to_string()),
            SettingValue::Text(s) => Some(s.clone()),
            SettingValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            SettingValue::Color(color) => Some(*color),
            SettingValue::Text(s) => Rgba::parse_hex(s).ok(),
            _ => None,
        }
    }

    /// Engine-facing form of this value. Colors become hex strings.
    pub fn to_config_value(&self) -> ConfigValue {
        match self {
            SettingValue::Bool(b) => ConfigValue::Bool(*b),
            SettingValue::Int(i) => ConfigValue::Int(*i),
            SettingValue::Text(s) => ConfigValue::Str(s.clone()),
            SettingValue::Color(color) => ConfigValue::Str(color.to_string()),
        }
    }
}

impl From<ConfigValue> for SettingValue {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Bool(b) => SettingValue::Bool(b),
            ConfigValue::Int(i) => SettingValue::Int(i),
            ConfigValue::Str(s) => SettingValue::Text(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<Rgba> for SettingValue {
    fn from(value: Rgba) -> Self {
        SettingValue::Color(value)
    }
}

/// Durable string-keyed settings.
///
/// Writes never fail from the caller's point of view: an implementation that
/// cannot persist logs the failure and keeps the value in memory.
pub trait SettingsStore {
    fn value(&self, key: &str) -> Option<SettingValue>;

    fn set_value(&mut self, key: &str, value: SettingValue);

    fn remove(&mut self, key: &str);

    /// Drop every key and the backing medium.
    fn clear(&mut self);

    /// Whether writes reach the backing medium.
    fn is_writable(&self) -> bool;

    /// Human-readable location of the backing medium.
    fn location(&self) -> String;

    fn keys(&self) -> Vec<String>;

    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        self.value(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    fn int_or(&self, key: &str, default: i64) -> i64 {
        self.value(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        self.value(key)
            .and_then(|v| v.as_text())
            .unwrap_or_else(|| default.to_string())
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Rc<RefCell<T>> {
    fn value(&self, key: &str) -> Option<SettingValue> {
        self.borrow().value(key)
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.borrow_mut().set_value(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.borrow_mut().remove(key);
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }

    fn is_writable(&self) -> bool {
        self.borrow().is_writable()
    }

    fn location(&self) -> String {
        self.borrow().location()
    }

    fn keys(&self) -> Vec<String> {
        self.borrow().keys()
    }
}
