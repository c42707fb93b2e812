use super::{Configuration, keys};
use crate::events::ConfigEvent;
use crate::lookup::Lookup;
use crate::store::SettingValue;
use crate::theme::resources::{LOGO_DARK_WINDOW, LOGO_LIGHT_WINDOW};
use crate::theme::{Appearance, InterfaceTheme, ThemeLoader, is_dark_window, registry};
use engine::scheme::DEFAULT_SCHEME;
use engine::{Directive, Rgba};

impl Configuration {
    /// Persisted interface theme index, unvalidated.
    pub fn interface_theme(&self) -> i64 {
        self.store.int_or(keys::INTERFACE_THEME, 0)
    }

    /// Persisted color theme name.
    pub fn color_theme(&self) -> String {
        self.store.text_or(keys::COLOR_THEME, DEFAULT_SCHEME)
    }

    /// Switch the interface theme. Out-of-range indices select Native.
    ///
    /// Always reapplies the full theme, even when `index` is already current,
    /// then emits [`ConfigEvent::InterfaceThemeChanged`] followed by
    /// [`ConfigEvent::ColorsUpdated`].
    pub fn set_interface_theme(&mut self, index: i64) -> Lookup<&'static InterfaceTheme> {
        let resolved = registry::resolve(index);
        if resolved.is_fallback() {
            log::warn!("Interface theme index {index} out of range, using Native");
        }
        let (index, theme) = *resolved.value();

        self.store
            .set_value(keys::INTERFACE_THEME, SettingValue::Int(index as i64));

        let applied = ThemeLoader::new(self.resources.as_ref(), self.native_palette)
            .load(theme.kind, self.host.as_mut());
        for (name, color) in applied.colors {
            self.set_color(name, color);
        }
        log::info!("Interface theme set to {theme}");

        self.emit(ConfigEvent::InterfaceThemeChanged);
        self.emit(ConfigEvent::ColorsUpdated);
        resolved.map(|(_, theme)| theme)
    }

    /// Switch the color theme.
    ///
    /// `"default"` resets the engine to its own scheme, any other name loads
    /// that scheme. The name is persisted even if the engine refuses it. The
    /// scheme's colors are cached in the store. For bundled schemes the
    /// interface theme is then reapplied, so its override table wins over the
    /// scheme for the keys it owns. Custom schemes keep every color they set.
    ///
    /// Remembering the choice per interface theme is up to the caller, see
    /// [`Configuration::set_last_theme_of`].
    pub fn set_color_theme(&mut self, name: &str) {
        let directive = if name == DEFAULT_SCHEME {
            Directive::ResetColorScheme
        } else {
            Directive::LoadColorScheme(name.to_string())
        };
        let loaded = self.execute(directive, "set_color_theme");
        self.store.set_value(keys::COLOR_THEME, SettingValue::from(name));

        let scheme = if loaded {
            self.scheme_colors()
        } else {
            Vec::new()
        };
        for (key, color) in &scheme {
            self.set_color(key, *color);
        }

        if !self.engine.is_custom_scheme(name) {
            let index = self.interface_theme();
            self.set_interface_theme(index);
        }

        log::info!("Color theme set to '{name}' ({} colors)", scheme.len());

        self.emit(ConfigEvent::ColorsUpdated);
    }

    /// Cached color `name`, or the `"other"` color when absent.
    pub fn get_color(&self, name: &str) -> Lookup<Rgba> {
        let stored = self
            .store
            .value(&format!("{}{name}", keys::COLOR_PREFIX))
            .and_then(|v| v.as_color());
        match stored {
            Some(color) => Lookup::Found(color),
            None => Lookup::Fallback(
                self.store
                    .value(keys::FALLBACK_COLOR)
                    .and_then(|v| v.as_color())
                    .unwrap_or(Rgba::TRANSPARENT),
            ),
        }
    }

    pub fn set_color(&mut self, name: &str, color: Rgba) {
        self.store.set_value(
            &format!("{}{name}", keys::COLOR_PREFIX),
            SettingValue::Color(color),
        );
    }

    /// The interface theme for the persisted index.
    ///
    /// An invalid persisted index is corrected by applying Native, which
    /// also emits that theme's events.
    pub fn get_current_theme(&mut self) -> Lookup<&'static InterfaceTheme> {
        let resolved = registry::resolve(self.interface_theme());
        if resolved.is_fallback() {
            self.set_interface_theme(0);
        }
        resolved.map(|(_, theme)| theme)
    }

    pub fn window_color_is_dark(&mut self) -> bool {
        let theme = self.get_current_theme().into_inner();
        match theme.fixed_appearance() {
            Some(Appearance::Dark) => true,
            Some(Appearance::Light) => false,
            None => is_dark_window(self.host.palette().window),
        }
    }

    /// Logo resource that reads well on the current window color.
    pub fn logo_file(&mut self) -> &'static str {
        if self.window_color_is_dark() {
            LOGO_DARK_WINDOW
        } else {
            LOGO_LIGHT_WINDOW
        }
    }

    /// Color theme last used with `theme`, defaulting to the current one.
    pub fn last_theme_of(&self, theme: &InterfaceTheme) -> String {
        self.store.text_or(
            &format!("{}{}", keys::LAST_THEME_PREFIX, theme.name),
            &self.color_theme(),
        )
    }

    pub fn set_last_theme_of(&mut self, theme: &InterfaceTheme, color_theme: &str) {
        self.store.set_value(
            &format!("{}{}", keys::LAST_THEME_PREFIX, theme.name),
            SettingValue::from(color_theme),
        );
    }

    /// The engine's active scheme, skipping malformed entries.
    fn scheme_colors(&self) -> Vec<(String, Rgba)> {
        let scheme = self.engine.color_scheme();
        let Some(entries) = scheme.as_object() else {
            log::warn!("Engine color scheme is not a JSON object");
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|(key, value)| match Rgba::from_json(value) {
                Some(color) => Some((key.clone(), color)),
                None => {
                    log::debug!("Skipping malformed scheme color '{key}'");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReporter;
    use crate::store::{MemorySettingsStore, TomlSettingsStore};
    use crate::theme::{HeadlessHost, MemoryResources, Palette};
    use claims::*;
    use engine::InMemoryEngine;

    fn configuration(store: MemorySettingsStore, host: HeadlessHost) -> Configuration {
        Configuration::new(
            Box::new(store),
            Box::new(InMemoryEngine::new()),
            Box::new(host),
            Box::new(MemoryResources::new()),
            ErrorReporter::log_only(),
        )
    }

    #[test]
    fn test_get_color_falls_back_to_other() {
        let store = MemorySettingsStore::new()
            .with("colors.other", Rgba::rgb(1, 2, 3))
            .with("colors.gui.border", Rgba::rgb(9, 9, 9));
        let config = configuration(store, HeadlessHost::default());

        assert_eq!(
            config.get_color("gui.border"),
            Lookup::Found(Rgba::rgb(9, 9, 9))
        );
        assert_eq!(
            config.get_color("nope"),
            Lookup::Fallback(Rgba::rgb(1, 2, 3))
        );
    }

    #[test]
    fn test_get_color_without_other_is_transparent() {
        let config = configuration(MemorySettingsStore::new(), HeadlessHost::default());
        assert_eq!(config.get_color("nope"), Lookup::Fallback(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_get_current_theme_repairs_invalid_index() {
        let store = MemorySettingsStore::new().with(keys::INTERFACE_THEME, 9_i64);
        let mut config = configuration(store, HeadlessHost::default());

        let theme = config.get_current_theme();
        assert!(theme.is_fallback());
        assert_eq!(theme.into_inner().name, "Native");
        assert_eq!(config.interface_theme(), 0);
    }

    #[test]
    fn test_window_color_is_dark_follows_fixed_appearance() {
        let light_window = HeadlessHost::new(Palette::new(Rgba::WHITE, Rgba::BLACK));
        let mut config = configuration(MemorySettingsStore::new(), light_window);

        config.set_interface_theme(1);
        assert!(config.window_color_is_dark());
        assert_eq!(config.logo_file(), LOGO_DARK_WINDOW);

        config.set_interface_theme(0);
        assert!(!config.window_color_is_dark());
        assert_eq!(config.logo_file(), LOGO_LIGHT_WINDOW);
    }

    #[test]
    fn test_last_theme_of_defaults_to_current_color_theme() {
        let store = MemorySettingsStore::new().with(keys::COLOR_THEME, "ayu");
        let mut config = configuration(store, HeadlessHost::default());
        let dark = &registry::INTERFACE_THEMES[1];

        assert_eq!(config.last_theme_of(dark), "ayu");
        config.set_last_theme_of(dark, "solarized");
        assert_eq!(config.last_theme_of(dark), "solarized");
    }

    #[test]
    fn test_unknown_color_theme_is_still_persisted() {
        let mut config = configuration(MemorySettingsStore::new(), HeadlessHost::default());
        config.set_color_theme("does-not-exist");
        assert_eq!(config.color_theme(), "does-not-exist");
        assert_some!(config.store().value("colors.gui.background"));
    }

    #[test]
    fn test_get_color_survives_hand_edited_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "\"colors.other\" = [1, 2, 3, 255]\n\"colors.gui.border\" = \"a\u{e9}123\"\n",
        )
        .unwrap();
        let config = Configuration::new(
            Box::new(TomlSettingsStore::open(&path)),
            Box::new(InMemoryEngine::new()),
            Box::new(HeadlessHost::default()),
            Box::new(MemoryResources::new()),
            ErrorReporter::log_only(),
        );

        assert_eq!(
            config.get_color("gui.border"),
            Lookup::Fallback(Rgba::rgb(1, 2, 3))
        );
    }

    #[test]
    fn test_interface_table_wins_over_bundled_scheme() {
        let mut config = configuration(MemorySettingsStore::new(), HeadlessHost::default());
        config.set_interface_theme(2);

        config.set_color_theme("default");

        assert_eq!(
            config.get_color("gui.border"),
            Lookup::Found(Rgba::rgb(145, 200, 250))
        );
        assert_eq!(
            config.get_color("gui.background"),
            Lookup::Found(Rgba::WHITE)
        );
        assert_eq!(
            config.get_color("comment"),
            Lookup::Found(Rgba::rgb(197, 197, 197))
        );
    }

    #[test]
    fn test_set_color_theme_does_not_record_last_theme() {
        let mut config = configuration(MemorySettingsStore::new(), HeadlessHost::default());
        config.set_interface_theme(1);

        config.set_color_theme("ayu");

        let key = format!("{}{}", keys::LAST_THEME_PREFIX, registry::INTERFACE_THEMES[1].name);
        assert_none!(config.store().value(&key));
    }
}
