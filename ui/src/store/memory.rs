use super::{SettingValue, SettingsStore};
use std::collections::BTreeMap;

/// Settings held only in memory.
///
/// Used by tests and as the degraded fallback when no settings file can be
/// resolved. A store built with [`read_only`](Self::read_only) still accepts
/// writes but reports itself unwritable.
#[derive(Debug, Clone)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, SettingValue>,
    writable: bool,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            writable: true,
        }
    }

    pub fn read_only() -> Self {
        Self {
            values: BTreeMap::new(),
            writable: false,
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<SettingValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    fn is_writable(&self) -> bool {
        self.writable
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
