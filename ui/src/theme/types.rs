use engine::Rgba;
use std::fmt;

/// Light or dark appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

/// The closed set of interface theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceThemeKind {
    Native,
    Dark,
    Light,
}

impl InterfaceThemeKind {
    /// Stylesheet resource loaded on entry.
    pub fn stylesheet_resource(self) -> &'static str {
        match self {
            InterfaceThemeKind::Native => "native/native.qss",
            InterfaceThemeKind::Dark => "qdarkstyle/style.qss",
            InterfaceThemeKind::Light => "lightstyle/light.qss",
        }
    }
}

/// A structural UI skin and the appearance modes it supports.
#[derive(Debug, PartialEq, Eq)]
pub struct InterfaceTheme {
    pub kind: InterfaceThemeKind,
    pub name: &'static str,
    pub appearances: &'static [Appearance],
}

impl InterfaceTheme {
    /// The single appearance this theme is restricted to, if any.
    pub fn fixed_appearance(&self) -> Option<Appearance> {
        match self.appearances {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl fmt::Display for InterfaceTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The subset of a widget palette this layer manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window: Rgba,
    pub text: Rgba,
}

impl Palette {
    pub const fn new(window: Rgba, text: Rgba) -> Self {
        Self { window, text }
    }

    pub fn with_text(self, text: Rgba) -> Self {
        Self { text, ..self }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Rgba::rgb(239, 239, 239), Rgba::BLACK)
    }
}
