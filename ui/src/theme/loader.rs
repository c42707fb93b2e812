use super::host::ThemeHost;
use super::palettes::{self, ColorTable};
use super::resources::ResourceProvider;
use super::types::{InterfaceThemeKind, Palette};
use engine::Rgba;

/// Sum of RGB channels below which a window color counts as dark.
pub const DARK_WINDOW_THRESHOLD: u16 = 382;

#[cfg(target_os = "macos")]
const DOCK_TITLE_FIX: &str = "QDockWidget::title\
{\
    background-color: #31363b;\
    text-align: center;\
    height: 12px;\
}";

pub fn is_dark_window(window: Rgba) -> bool {
    window.channel_sum() < DARK_WINDOW_THRESHOLD
}

/// What entering an interface theme produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    pub kind: InterfaceThemeKind,
    pub stylesheet_applied: bool,
    /// Semantic overrides, in write order. Later entries win.
    pub colors: Vec<(&'static str, Rgba)>,
}

/// Applies the base look of an interface theme to a [`ThemeHost`].
pub struct ThemeLoader<'a> {
    resources: &'a dyn ResourceProvider,
    native_palette: Palette,
}

impl<'a> ThemeLoader<'a> {
    pub fn new(resources: &'a dyn ResourceProvider, native_palette: Palette) -> Self {
        Self {
            resources,
            native_palette,
        }
    }

    pub fn load(&self, kind: InterfaceThemeKind, host: &mut dyn ThemeHost) -> AppliedTheme {
        log::debug!("Loading base interface theme {kind:?}");
        match kind {
            InterfaceThemeKind::Native => self.load_native(host),
            InterfaceThemeKind::Dark => self.load_dark(host),
            InterfaceThemeKind::Light => self.load_light(host),
        }
    }

    fn load_native(&self, host: &mut dyn ThemeHost) -> AppliedTheme {
        let stylesheet_applied = self.apply_stylesheet(InterfaceThemeKind::Native, host, |s| s);
        host.set_palette(self.native_palette);

        let branch = if is_dark_window(host.palette().window) {
            palettes::NATIVE_DARK
        } else {
            palettes::NATIVE_LIGHT
        };
        AppliedTheme {
            kind: InterfaceThemeKind::Native,
            stylesheet_applied,
            colors: collect(&[palettes::NATIVE_BASE, branch]),
        }
    }

    fn load_dark(&self, host: &mut dyn ThemeHost) -> AppliedTheme {
        let stylesheet_applied =
            self.apply_stylesheet(InterfaceThemeKind::Dark, host, with_platform_fixes);
        if stylesheet_applied {
            let palette = host.palette().with_text(Rgba::WHITE);
            host.set_palette(palette);
        }
        AppliedTheme {
            kind: InterfaceThemeKind::Dark,
            stylesheet_applied,
            colors: collect(&[palettes::DARK_BASE, palettes::DARK]),
        }
    }

    fn load_light(&self, host: &mut dyn ThemeHost) -> AppliedTheme {
        let stylesheet_applied = self.apply_stylesheet(InterfaceThemeKind::Light, host, |s| s);
        if stylesheet_applied {
            let palette = host.palette().with_text(Rgba::BLACK);
            host.set_palette(palette);
        }
        AppliedTheme {
            kind: InterfaceThemeKind::Light,
            stylesheet_applied,
            colors: collect(&[palettes::LIGHT]),
        }
    }

    fn apply_stylesheet(
        &self,
        kind: InterfaceThemeKind,
        host: &mut dyn ThemeHost,
        adjust: impl FnOnce(String) -> String,
    ) -> bool {
        let resource = kind.stylesheet_resource();
        match self.resources.read(resource) {
            Some(stylesheet) => {
                host.set_stylesheet(&adjust(stylesheet));
                true
            }
            None => {
                log::warn!("Can't find {kind:?} theme stylesheet '{resource}'");
                false
            }
        }
    }
}

fn collect(tables: &[ColorTable]) -> Vec<(&'static str, Rgba)> {
    tables.iter().flat_map(|table| table.iter().copied()).collect()
}

#[cfg(target_os = "macos")]
fn with_platform_fixes(mut stylesheet: String) -> String {
    stylesheet.push_str(DOCK_TITLE_FIX);
    stylesheet
}

#[cfg(not(target_os = "macos"))]
fn with_platform_fixes(stylesheet: String) -> String {
    stylesheet
}
