//! # Configuration
//!
//! The context object that owns every persisted preference of the
//! application and keeps three parties in sync:
//!
//! - the durable [`SettingsStore`] (interface theme index, color theme name,
//!   cached colors, option overrides, miscellaneous preferences)
//! - the disassembly [`OptionEngine`] (options and the active color scheme)
//! - the widget toolkit through a [`ThemeHost`] (stylesheet and palette)
//!
//! Every mutator writes through to the store immediately and publishes its
//! [`ConfigEvent`]s synchronously before returning. No operation returns an
//! error: failures underneath are logged through the [`ErrorReporter`] and
//! the documented fallback is used instead.
//!
//! ```no_run
//! use cutlass::configuration::Configuration;
//! use cutlass::error::ErrorReporter;
//! use cutlass::store::MemorySettingsStore;
//! use cutlass::theme::{HeadlessHost, MemoryResources};
//! use engine::InMemoryEngine;
//!
//! let mut config = Configuration::new(
//!     Box::new(MemorySettingsStore::new()),
//!     Box::new(InMemoryEngine::new()),
//!     Box::new(HeadlessHost::default()),
//!     Box::new(MemoryResources::new()),
//!     ErrorReporter::log_only(),
//! );
//! config.load_initial();
//! config.set_interface_theme(1);
//! ```

mod mirror;
mod preferences;
mod themes;

pub use preferences::Font;

use crate::error::{AppError, ErrorReporter};
use crate::events::{ConfigEvent, EventBus, ListenerId};
use crate::store::SettingsStore;
use crate::theme::{Palette, ResourceProvider, ThemeHost};
use engine::{Directive, OptionEngine};
use std::sync::mpsc::Sender;

/// Durable store keys.
pub mod keys {
    pub const INTERFACE_THEME: &str = "ColorPalette";
    pub const COLOR_THEME: &str = "theme";
    pub const COLOR_PREFIX: &str = "colors.";
    pub const FALLBACK_COLOR: &str = "colors.other";
    pub const LAST_THEME_PREFIX: &str = "lastThemeOf.";
    pub const DIR_PROJECTS: &str = "dir.projects";
    pub const RECENT_FOLDER: &str = "dir.recentFolder";
    pub const NEW_FILE_LAST_CLICKED: &str = "newFileLastClicked";
    pub const AUTO_UPDATE_ENABLED: &str = "autoUpdateEnabled";
    pub const LOCALE: &str = "locale";
    pub const FONT: &str = "font";
    pub const FIRST_EXECUTION: &str = "firstExecution";
}

pub struct Configuration {
    store: Box<dyn SettingsStore>,
    engine: Box<dyn OptionEngine>,
    host: Box<dyn ThemeHost>,
    resources: Box<dyn ResourceProvider>,
    events: EventBus,
    reporter: ErrorReporter,
    native_palette: Palette,
}

impl Configuration {
    /// Build the context. The host's current palette is captured as the
    /// native palette restored by the Native interface theme.
    ///
    /// An unwritable store raises one critical alert; the configuration keeps
    /// working with values that will not survive a restart.
    pub fn new(
        store: Box<dyn SettingsStore>,
        engine: Box<dyn OptionEngine>,
        host: Box<dyn ThemeHost>,
        resources: Box<dyn ResourceProvider>,
        reporter: ErrorReporter,
    ) -> Self {
        let native_palette = host.palette();

        if !store.is_writable() {
            let location = store.location();
            reporter.report_critical(
                AppError::Store(format!("{location} is not writable")),
                "Configuration",
                "new",
                &format!(
                    "!!! Settings are not writable! Make sure you have a write access to \"{location}\""
                ),
            );
        }

        Self {
            store,
            engine,
            host,
            resources,
            events: EventBus::new(),
            reporter,
            native_palette,
        }
    }

    /// Apply everything persisted: interface theme, color theme, then the
    /// option overrides.
    pub fn load_initial(&mut self) {
        log::info!("Loading persisted configuration from {}", self.store.location());
        let index = self.interface_theme();
        self.set_interface_theme(index);
        let color_theme = self.color_theme();
        self.set_color_theme(&color_theme);
        self.apply_saved_asm_options();
    }

    /// Wipe engine options and the durable store, then start over from
    /// defaults.
    pub fn reset_all(&mut self) {
        log::info!("Resetting all settings");
        self.execute(Directive::ClearSettings, "reset_all");
        self.store.clear();
        self.load_initial();
        self.emit(ConfigEvent::FontsUpdated);
    }

    pub fn subscribe(&mut self, callback: impl FnMut(ConfigEvent) + 'static) -> ListenerId {
        self.events.subscribe(callback)
    }

    pub fn subscribe_channel(&mut self, tx: Sender<ConfigEvent>) -> ListenerId {
        self.events.subscribe_channel(tx)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn engine(&self) -> &dyn OptionEngine {
        self.engine.as_ref()
    }

    pub fn native_palette(&self) -> Palette {
        self.native_palette
    }

    fn emit(&self, event: ConfigEvent) {
        self.events.emit(event);
    }

    /// Run a directive, absorbing a refusal. Returns whether it succeeded.
    fn execute(&mut self, directive: Directive, operation: &str) -> bool {
        match self.engine.execute(directive) {
            Ok(()) => true,
            Err(e) => {
                self.reporter
                    .report_warning(AppError::from(e), "Configuration", operation);
                false
            }
        }
    }
}
