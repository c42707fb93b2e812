use super::Configuration;
use crate::error::AppError;
use crate::lookup::Lookup;
use crate::options::{OPTION_CATALOG, find_option};
use crate::store::SettingValue;
use engine::{ConfigValue, ValueKind};

impl Configuration {
    /// Persist every catalog default and push it to the engine.
    pub fn reset_to_default_asm_options(&mut self) {
        log::info!("Resetting {} engine options to defaults", OPTION_CATALOG.len());
        for entry in OPTION_CATALOG.iter() {
            self.set_config(entry.key, entry.default.clone());
        }
    }

    /// Push persisted overrides (or catalog defaults) into the engine.
    pub fn apply_saved_asm_options(&mut self) {
        for entry in OPTION_CATALOG.iter() {
            let value = self
                .store
                .value(entry.key)
                .map(|v| v.to_config_value())
                .unwrap_or_else(|| entry.default.clone())
                .coerce(entry.kind());
            self.push_option(entry.key, value, "apply_saved_asm_options");
        }
        log::debug!("Applied {} saved engine options", OPTION_CATALOG.len());
    }

    /// Engine value of a catalog option, read with the option's declared type.
    /// Keys outside the catalog yield `None`.
    pub fn get_config_var(&self, key: &str) -> Option<ConfigValue> {
        let entry = find_option(key)?;
        Some(match entry.kind() {
            ValueKind::Bool => ConfigValue::Bool(self.engine.get_bool(key)),
            ValueKind::Int => ConfigValue::Int(self.engine.get_int(key)),
            ValueKind::Str => ConfigValue::Str(self.engine.get_string(key)),
        })
    }

    pub fn get_config_bool(&self, key: &str) -> Lookup<bool> {
        match self.get_config_var(key) {
            Some(value) => Lookup::Found(value.to_bool()),
            None => Lookup::Fallback(false),
        }
    }

    pub fn get_config_int(&self, key: &str) -> Lookup<i64> {
        match self.get_config_var(key) {
            Some(value) => Lookup::Found(value.to_int()),
            None => Lookup::Fallback(0),
        }
    }

    pub fn get_config_string(&self, key: &str) -> Lookup<String> {
        match self.get_config_var(key) {
            Some(value) => Lookup::Found(value.to_string()),
            None => Lookup::Fallback(String::new()),
        }
    }

    /// Set an engine option. Catalog options are also persisted.
    pub fn set_config(&mut self, key: &str, value: impl Into<ConfigValue>) {
        let value = value.into();
        if find_option(key).is_some() {
            self.store.set_value(key, SettingValue::from(value.clone()));
        }
        self.push_option(key, value, "set_config");
    }

    fn push_option(&mut self, key: &str, value: ConfigValue, operation: &str) {
        if let Err(e) = self.engine.set_config(key, value) {
            self.reporter
                .report_warning(AppError::from(e), "Configuration", operation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReporter;
    use crate::store::MemorySettingsStore;
    use crate::theme::{HeadlessHost, MemoryResources};
    use claims::*;
    use engine::InMemoryEngine;

    fn configuration(store: MemorySettingsStore) -> Configuration {
        Configuration::new(
            Box::new(store),
            Box::new(InMemoryEngine::new()),
            Box::new(HeadlessHost::default()),
            Box::new(MemoryResources::new()),
            ErrorReporter::log_only(),
        )
    }

    #[test]
    fn test_saved_override_wins_over_default() {
        let store = MemorySettingsStore::new().with("asm.cmt.col", 40_i64);
        let mut config = configuration(store);

        config.apply_saved_asm_options();

        assert_eq!(config.get_config_int("asm.cmt.col"), Lookup::Found(40));
        assert_eq!(config.get_config_int("asm.nbytes"), Lookup::Found(10));
        assert_eq!(config.get_config_bool("asm.xrefs"), Lookup::Found(false));
    }

    #[test]
    fn test_saved_values_are_coerced_to_declared_type() {
        let store = MemorySettingsStore::new()
            .with("asm.bytes", "true")
            .with("asm.tabs", "7");
        let mut config = configuration(store);

        config.apply_saved_asm_options();

        assert_some_eq!(config.get_config_var("asm.bytes"), ConfigValue::Bool(true));
        assert_some_eq!(config.get_config_var("asm.tabs"), ConfigValue::Int(7));
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        let config = configuration(MemorySettingsStore::new());

        assert_none!(config.get_config_var("scr.color"));
        assert_eq!(config.get_config_bool("nope"), Lookup::Fallback(false));
        assert_eq!(config.get_config_int("nope"), Lookup::Fallback(0));
        assert_eq!(
            config.get_config_string("nope"),
            Lookup::Fallback(String::new())
        );
    }

    #[test]
    fn test_set_config_persists_only_catalog_keys() {
        let mut config = configuration(MemorySettingsStore::new());

        config.set_config("asm.syntax", "att");
        config.set_config("scr.color", 0_i64);

        assert_some_eq!(
            config.store().value("asm.syntax"),
            SettingValue::from("att")
        );
        assert_none!(config.store().value("scr.color"));
        assert_eq!(config.engine().get_int("scr.color"), 0);
        assert_eq!(
            config.get_config_string("asm.syntax"),
            Lookup::Found("att".to_string())
        );
    }

    #[test]
    fn test_reset_to_defaults_makes_defaults_explicit() {
        let store = MemorySettingsStore::new().with("asm.bytes", true);
        let mut config = configuration(store);

        config.reset_to_default_asm_options();

        for entry in OPTION_CATALOG.iter() {
            assert_some_eq!(
                config.store().value(entry.key),
                SettingValue::from(entry.default.clone())
            );
            assert_some_eq!(config.get_config_var(entry.key), entry.default.clone());
        }
    }
}
