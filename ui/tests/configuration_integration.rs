use claims::*;
use cutlass::configuration::Configuration;
use cutlass::error::ErrorReporter;
use cutlass::events::ConfigEvent;
use cutlass::lookup::Lookup;
use cutlass::options::OPTION_CATALOG;
use cutlass::store::{MemorySettingsStore, SettingValue, SettingsStore};
use cutlass::theme::{HeadlessHost, MemoryResources, Palette, ThemeHost};
use engine::{ColorScheme, ConfigValue, Directive, InMemoryEngine, OptionEngine, Rgba};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

// Shared handles let the tests look at what the configuration did to its
// collaborators.
struct Harness {
    config: Configuration,
    store: Rc<RefCell<MemorySettingsStore>>,
    engine: Rc<RefCell<InMemoryEngine>>,
    host: Rc<RefCell<HeadlessHost>>,
    events: Receiver<ConfigEvent>,
}

impl Harness {
    fn new() -> Self {
        Self::with(InMemoryEngine::new(), Palette::default())
    }

    fn with(engine: InMemoryEngine, window: Palette) -> Self {
        let store = Rc::new(RefCell::new(MemorySettingsStore::new()));
        let engine = Rc::new(RefCell::new(engine));
        let host = Rc::new(RefCell::new(HeadlessHost::new(window)));
        let mut config = Configuration::new(
            Box::new(Rc::clone(&store)),
            Box::new(Rc::clone(&engine)),
            Box::new(Rc::clone(&host)),
            Box::new(stylesheets()),
            ErrorReporter::log_only(),
        );
        let (tx, events) = mpsc::channel();
        config.subscribe_channel(tx);

        Self {
            config,
            store,
            engine,
            host,
            events,
        }
    }

    fn store_snapshot(&self) -> BTreeMap<String, SettingValue> {
        let store = self.store.borrow();
        store
            .keys()
            .into_iter()
            .filter_map(|key| store.value(&key).map(|value| (key, value)))
            .collect()
    }

    fn color_snapshot(&self) -> BTreeMap<String, SettingValue> {
        self.store_snapshot()
            .into_iter()
            .filter(|(key, _)| key.starts_with("colors."))
            .collect()
    }

    fn engine_snapshot(&self) -> (BTreeMap<&'static str, Option<ConfigValue>>, String) {
        let engine = self.engine.borrow();
        let options = OPTION_CATALOG
            .iter()
            .map(|entry| (entry.key, engine.option(entry.key).cloned()))
            .collect();
        (options, engine.current_scheme_name().to_string())
    }

    fn host_snapshot(&self) -> (Palette, Option<String>) {
        let host = self.host.borrow();
        (host.palette(), host.stylesheet().map(str::to_string))
    }

    fn drain_events(&self) -> Vec<ConfigEvent> {
        self.events.try_iter().collect()
    }
}

fn stylesheets() -> MemoryResources {
    MemoryResources::new()
        .with("native/native.qss", "/* native */")
        .with("qdarkstyle/style.qss", "/* dark */")
        .with("lightstyle/light.qss", "/* light */")
}

fn scheme_color(engine: &Rc<RefCell<InMemoryEngine>>, key: &str) -> Option<Rgba> {
    Rgba::from_json(&engine.borrow().color_scheme()[key])
}

mod interface_themes {
    use super::*;

    fn out_of_range() -> impl Strategy<Value = i64> {
        prop_oneof![i64::MIN..0, 3..i64::MAX]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn test_out_of_range_index_behaves_like_native(index in out_of_range()) {
            let mut clamped = Harness::new();
            let mut native = Harness::new();

            let from_invalid = clamped.config.set_interface_theme(index);
            let from_zero = native.config.set_interface_theme(0);

            prop_assert!(from_invalid.is_fallback());
            prop_assert!(from_zero.is_found());
            prop_assert_eq!(from_invalid.into_inner(), from_zero.into_inner());
            prop_assert_eq!(clamped.store_snapshot(), native.store_snapshot());
            prop_assert_eq!(clamped.host_snapshot(), native.host_snapshot());
            prop_assert_eq!(clamped.drain_events(), native.drain_events());
        }
    }

    #[test]
    fn test_set_interface_theme_emits_in_order_every_time() {
        let mut harness = Harness::new();

        harness.config.set_interface_theme(2);
        harness.config.set_interface_theme(2);

        assert_eq!(
            harness.drain_events(),
            vec![
                ConfigEvent::InterfaceThemeChanged,
                ConfigEvent::ColorsUpdated,
                ConfigEvent::InterfaceThemeChanged,
                ConfigEvent::ColorsUpdated,
            ]
        );
        assert_eq!(harness.host.borrow().stylesheet(), Some("/* light */"));
        assert_eq!(harness.config.interface_theme(), 2);
    }

    #[test]
    fn test_dark_theme_is_dark_regardless_of_window_color() {
        let bright = Palette::new(Rgba::WHITE, Rgba::BLACK);
        let mut harness = Harness::with(InMemoryEngine::new(), bright);

        harness.config.set_interface_theme(1);

        assert_eq!(harness.host.borrow().palette().window, Rgba::WHITE);
        assert!(harness.config.window_color_is_dark());
    }

    #[test]
    fn test_native_darkness_follows_window_luminance() {
        let dim = Palette::new(Rgba::rgb(40, 40, 40), Rgba::WHITE);
        let mut harness = Harness::with(InMemoryEngine::new(), dim);

        harness.config.set_interface_theme(0);

        assert!(harness.config.window_color_is_dark());
        assert_eq!(
            harness.config.get_color("gui.background"),
            Lookup::Found(Rgba::rgb(30, 30, 30))
        );
    }
}

mod colors {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_missing_color_returns_other(suffix in "[a-z]{1,12}") {
            let mut harness = Harness::new();
            harness.config.load_initial();
            let key = format!("missing.{suffix}");

            let other = assert_some!(
                harness.store.borrow().value("colors.other").and_then(|v| v.as_color())
            );
            prop_assert_eq!(harness.config.get_color(&key), Lookup::Fallback(other));
        }
    }

    #[test]
    fn test_default_theme_reflects_engine_scheme() {
        let mut harness = Harness::new();
        harness.config.load_initial();
        harness.config.set_color_theme("ayu");
        harness.config.set_color("comment", Rgba::rgb(1, 2, 3));

        harness.config.set_color_theme("default");

        let engine_comment = assert_some!(scheme_color(&harness.engine, "comment"));
        assert_eq!(
            harness.config.get_color("comment"),
            Lookup::Found(engine_comment)
        );
        assert_eq!(
            harness.engine.borrow().history().last(),
            Some(&Directive::ResetColorScheme)
        );
        assert_eq!(harness.config.color_theme(), "default");
    }

    #[test]
    fn test_named_theme_issues_load_directive() {
        let mut harness = Harness::new();

        harness.config.set_color_theme("solarized");

        assert!(
            harness
                .engine
                .borrow()
                .history()
                .contains(&Directive::LoadColorScheme("solarized".to_string()))
        );
        assert_eq!(
            harness.config.get_color("other"),
            Lookup::Found(Rgba::rgb(131, 148, 150))
        );
    }

    #[test]
    fn test_bundled_theme_reapplies_interface_overrides() {
        let mut harness = Harness::new();
        harness.config.set_interface_theme(1);
        harness.drain_events();

        harness.config.set_color_theme("ayu");

        let events = harness.drain_events();
        assert!(events.contains(&ConfigEvent::InterfaceThemeChanged));
        assert_eq!(events.last(), Some(&ConfigEvent::ColorsUpdated));
        assert_eq!(
            harness.config.get_color("gui.navbar.seek"),
            Lookup::Found(Rgba::rgb(233, 86, 86))
        );
        assert_eq!(
            harness.config.get_color("gui.background"),
            Lookup::Found(Rgba::rgb(37, 40, 43))
        );
        assert_eq!(
            harness.config.get_color("comment"),
            Lookup::Found(Rgba::rgb(92, 103, 115))
        );
    }

    #[test]
    fn test_light_theme_keeps_its_border_after_default_scheme() {
        let mut harness = Harness::new();
        harness.config.set_interface_theme(2);

        harness.config.set_color_theme("default");

        assert_eq!(
            harness.config.get_color("gui.border"),
            Lookup::Found(Rgba::rgb(145, 200, 250))
        );
        assert_eq!(
            harness.config.get_color("gui.background"),
            Lookup::Found(Rgba::WHITE)
        );
    }

    #[test]
    fn test_custom_theme_keeps_interface_overrides() {
        let mut engine = InMemoryEngine::new();
        engine.add_custom_scheme(
            "MyCustom",
            ColorScheme::new()
                .with("other", Rgba::rgb(10, 10, 10))
                .with("gui.background", Rgba::rgb(11, 12, 13)),
        );
        let mut harness = Harness::with(engine, Palette::default());
        harness.config.load_initial();
        harness.drain_events();

        harness.config.set_color_theme("MyCustom");

        assert_eq!(
            harness.config.get_color("gui.navbar.seek"),
            Lookup::Found(Rgba::rgb(255, 0, 0))
        );
        assert_eq!(
            harness.config.get_color("gui.background"),
            Lookup::Found(Rgba::rgb(11, 12, 13))
        );
        assert_eq!(harness.drain_events(), vec![ConfigEvent::ColorsUpdated]);
    }

    #[test]
    fn test_color_theme_is_remembered_per_interface_theme() {
        let mut harness = Harness::new();
        harness.config.set_interface_theme(2);
        harness.config.set_color_theme("white");
        let light = harness.config.get_current_theme().into_inner();
        assert_eq!(harness.config.last_theme_of(light), "white");

        harness.config.set_last_theme_of(light, "white");
        harness.config.set_color_theme("ayu");

        assert_eq!(harness.config.last_theme_of(light), "white");
    }
}

mod option_mirror {
    use super::*;

    fn any_value() -> impl Strategy<Value = ConfigValue> {
        prop_oneof![
            any::<bool>().prop_map(ConfigValue::Bool),
            (-1000i64..1000).prop_map(ConfigValue::Int),
            "[a-z0-9]{0,8}".prop_map(ConfigValue::Str),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn test_set_config_round_trips_through_declared_type(
            index in 0..OPTION_CATALOG.len(),
            value in any_value(),
        ) {
            let mut harness = Harness::new();
            let entry = &OPTION_CATALOG[index];

            harness.config.set_config(entry.key, value.clone());

            prop_assert_eq!(
                harness.config.get_config_var(entry.key),
                Some(value.coerce(entry.kind()))
            );
            prop_assert_eq!(
                harness.store.borrow().value(entry.key),
                Some(SettingValue::from(value))
            );
        }
    }

    #[test]
    fn test_apply_saved_options_is_idempotent() {
        let mut harness = Harness::new();
        harness
            .store
            .borrow_mut()
            .set_value("asm.cmt.col", SettingValue::Int(50));
        harness
            .store
            .borrow_mut()
            .set_value("asm.syntax", SettingValue::from("att"));

        harness.config.apply_saved_asm_options();
        let first = harness.engine_snapshot();
        harness.config.apply_saved_asm_options();
        let second = harness.engine_snapshot();

        assert_eq!(first, second);
        assert_some_eq!(first.0["asm.cmt.col"].clone(), ConfigValue::Int(50));
    }

    #[test]
    fn test_defaults_override_engine_boot_values() {
        let mut harness = Harness::new();
        assert!(harness.engine.borrow().get_bool("asm.bytes"));

        harness.config.apply_saved_asm_options();

        assert_eq!(harness.config.get_config_bool("asm.bytes"), Lookup::Found(false));
        assert_eq!(harness.config.get_config_int("asm.nbytes"), Lookup::Found(10));
        assert!(harness.store_snapshot().is_empty());
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn test_reset_all_matches_fresh_start() {
        let mut used = Harness::new();
        used.config.load_initial();
        used.config.set_interface_theme(1);
        used.config.set_color_theme("ayu");
        used.config.set_color("gui.border", Rgba::rgb(1, 1, 1));
        used.config.set_config("asm.bytes", true);

        used.config.reset_all();
        used.config.load_initial();

        let mut fresh = Harness::new();
        fresh.config.load_initial();

        assert_eq!(used.color_snapshot(), fresh.color_snapshot());
        assert_eq!(used.host_snapshot(), fresh.host_snapshot());
        assert_eq!(used.engine_snapshot(), fresh.engine_snapshot());
        assert_eq!(used.config.interface_theme(), 0);
        assert_eq!(used.config.color_theme(), "default");
    }

    #[test]
    fn test_reset_all_clears_engine_and_emits_fonts_updated() {
        let mut harness = Harness::new();
        harness.config.load_initial();
        harness.drain_events();

        harness.config.reset_all();

        assert!(
            harness
                .engine
                .borrow()
                .history()
                .contains(&Directive::ClearSettings)
        );
        assert_eq!(
            harness.drain_events().last(),
            Some(&ConfigEvent::FontsUpdated)
        );
    }

    #[test]
    fn test_load_initial_restores_persisted_state() {
        let mut harness = Harness::new();
        harness
            .store
            .borrow_mut()
            .set_value("ColorPalette", SettingValue::Int(2));
        harness
            .store
            .borrow_mut()
            .set_value("theme", SettingValue::from("solarized"));

        harness.config.load_initial();

        assert_eq!(harness.engine.borrow().current_scheme_name(), "solarized");
        assert_eq!(harness.host.borrow().stylesheet(), Some("/* light */"));
        assert_eq!(
            harness.config.get_config_string("asm.syntax"),
            Lookup::Found("intel".to_string())
        );
    }
}
