use super::types::{Appearance, InterfaceTheme, InterfaceThemeKind};
use crate::lookup::Lookup;

/// Built-in interface themes, in selection-index order.
pub static INTERFACE_THEMES: [InterfaceTheme; 3] = [
    InterfaceTheme {
        kind: InterfaceThemeKind::Native,
        name: "Native",
        appearances: &[Appearance::Light, Appearance::Dark],
    },
    InterfaceTheme {
        kind: InterfaceThemeKind::Dark,
        name: "Dark",
        appearances: &[Appearance::Dark],
    },
    InterfaceTheme {
        kind: InterfaceThemeKind::Light,
        name: "Light",
        appearances: &[Appearance::Light],
    },
];

/// Resolve a selection index; anything outside the registry falls back to
/// index 0 (Native).
pub fn resolve(index: i64) -> Lookup<(usize, &'static InterfaceTheme)> {
    match usize::try_from(index)
        .ok()
        .filter(|i| *i < INTERFACE_THEMES.len())
    {
        Some(i) => Lookup::Found((i, &INTERFACE_THEMES[i])),
        None => Lookup::Fallback((0, &INTERFACE_THEMES[0])),
    }
}

pub fn by_name(name: &str) -> Option<(usize, &'static InterfaceTheme)> {
    INTERFACE_THEMES
        .iter()
        .enumerate()
        .find(|(_, theme)| theme.name.eq_ignore_ascii_case(name))
}
