use super::{Configuration, keys};
use crate::events::ConfigEvent;
use crate::store::SettingValue;
use crate::translations;
use std::fmt;
use std::path::MAIN_SEPARATOR;
use std::str::FromStr;

const DEFAULT_LOCALE: &str = "en_US";

/// Editor font, persisted as `"family,size"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub point_size: u32,
}

impl Font {
    pub fn new(family: &str, point_size: u32) -> Self {
        Self {
            family: family.to_string(),
            point_size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Inconsolata", 11)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.family, self.point_size)
    }
}

impl FromStr for Font {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, size) = s
            .rsplit_once(',')
            .ok_or_else(|| format!("font '{s}' is not 'family,size'"))?;
        let family = family.trim();
        if family.is_empty() {
            return Err(format!("font '{s}' has no family"));
        }
        let point_size = size
            .trim()
            .parse()
            .map_err(|e| format!("font '{s}' has an invalid size: {e}"))?;
        Ok(Self::new(family, point_size))
    }
}

impl Configuration {
    /// Projects directory. When unset, the engine's own setting is adopted
    /// and persisted.
    pub fn dir_projects(&mut self) -> String {
        let persisted = self.store.text_or(keys::DIR_PROJECTS, "");
        let dir = if persisted.is_empty() {
            let from_engine = self.engine.get_string(keys::DIR_PROJECTS);
            self.set_dir_projects(&from_engine);
            from_engine
        } else {
            persisted
        };
        native_separators(&dir)
    }

    pub fn set_dir_projects(&mut self, dir: &str) {
        self.store
            .set_value(keys::DIR_PROJECTS, SettingValue::from(native_separators(dir)));
    }

    /// Last folder a file was opened from; the home directory by default.
    pub fn recent_folder(&self) -> String {
        let home = dirs::home_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        native_separators(&self.store.text_or(keys::RECENT_FOLDER, &home))
    }

    pub fn set_recent_folder(&mut self, dir: &str) {
        self.store.set_value(
            keys::RECENT_FOLDER,
            SettingValue::from(native_separators(dir)),
        );
    }

    /// Tab last selected in the new-file dialog.
    pub fn new_file_last_clicked(&self) -> i64 {
        self.store.int_or(keys::NEW_FILE_LAST_CLICKED, 0)
    }

    pub fn set_new_file_last_clicked(&mut self, tab: i64) {
        self.store
            .set_value(keys::NEW_FILE_LAST_CLICKED, SettingValue::Int(tab));
    }

    pub fn auto_update_enabled(&self) -> bool {
        self.store.bool_or(keys::AUTO_UPDATE_ENABLED, false)
    }

    pub fn set_auto_update_enabled(&mut self, enabled: bool) {
        self.store
            .set_value(keys::AUTO_UPDATE_ENABLED, SettingValue::Bool(enabled));
    }

    /// Interface locale, e.g. `de_DE`. Defaults to the system locale.
    pub fn locale(&self) -> String {
        self.store.text_or(keys::LOCALE, &system_locale())
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.store.set_value(keys::LOCALE, SettingValue::from(locale));
    }

    /// Select the locale whose native language name is `language`
    /// (`"Deutsch"`, `"français"`). Returns whether a match was found.
    pub fn set_locale_by_name(&mut self, language: &str) -> bool {
        match translations::locale_for_language(language) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                log::warn!("No locale found for language '{language}'");
                false
            }
        }
    }

    pub fn font(&self) -> Font {
        match self.store.value(keys::FONT).and_then(|v| v.as_text()) {
            Some(text) => text.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring stored font: {e}");
                Font::default()
            }),
            None => Font::default(),
        }
    }

    pub fn set_font(&mut self, font: &Font) {
        self.store
            .set_value(keys::FONT, SettingValue::from(font.to_string()));
        self.emit(ConfigEvent::FontsUpdated);
    }

    /// True on the first call ever; every later call (and every later
    /// process) sees false.
    pub fn is_first_execution(&mut self) -> bool {
        if self.store.contains(keys::FIRST_EXECUTION) {
            return false;
        }
        self.store
            .set_value(keys::FIRST_EXECUTION, SettingValue::Bool(false));
        true
    }
}

/// `/` becomes the platform separator; a no-op where that is `/` already.
fn native_separators(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace('/', &MAIN_SEPARATOR.to_string())
    }
}

/// `LC_ALL`, then `LANG`, stripped of encoding (`de_DE.UTF-8` -> `de_DE`).
fn system_locale() -> String {
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| {
            value
                .split(['.', '@'])
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .find(|locale| !locale.is_empty() && locale != "C" && locale != "POSIX")
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}
