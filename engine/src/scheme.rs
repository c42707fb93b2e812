use crate::color::Rgba;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Name of the engine's native scheme.
pub const DEFAULT_SCHEME: &str = "default";

/// A named set of semantic colors (`comment`, `gui.background`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScheme {
    colors: BTreeMap<String, Rgba>,
}

impl ColorScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, color: Rgba) -> Self {
        self.set(name, color);
        self
    }

    pub fn set(&mut self, name: &str, color: Rgba) {
        self.colors.insert(name.to_string(), color);
    }

    pub fn get(&self, name: &str) -> Option<Rgba> {
        self.colors.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// JSON object mapping every color name to a `[r, g, b, a]` array.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .colors
            .iter()
            .map(|(name, color)| {
                let channels: [u8; 4] = (*color).into();
                (name.clone(), Value::from(channels.to_vec()))
            })
            .collect();
        Value::Object(map)
    }

    /// Build a scheme from a JSON object, skipping entries that are not
    /// four-channel arrays.
    pub fn from_json(value: &Value) -> Self {
        let mut scheme = Self::new();
        if let Some(object) = value.as_object() {
            for (name, channels) in object {
                match Rgba::from_json(channels) {
                    Some(color) => scheme.set(name, color),
                    None => log::debug!("Skipping malformed scheme color '{name}'"),
                }
            }
        }
        scheme
    }
}

/// Schemes bundled with the engine, keyed by name.
pub static BUILTIN_SCHEMES: Lazy<BTreeMap<&'static str, ColorScheme>> = Lazy::new(|| {
    let mut schemes = BTreeMap::new();
    schemes.insert(DEFAULT_SCHEME, default_scheme());
    schemes.insert("ayu", ayu_scheme());
    schemes.insert("solarized", solarized_scheme());
    schemes.insert("white", white_scheme());
    schemes
});

fn default_scheme() -> ColorScheme {
    ColorScheme::new()
        .with("comment", Rgba::rgb(197, 197, 197))
        .with("fname", Rgba::rgb(255, 0, 0))
        .with("flag", Rgba::rgb(0, 255, 255))
        .with("call", Rgba::rgb(0, 255, 0))
        .with("jmp", Rgba::rgb(0, 255, 0))
        .with("cjmp", Rgba::rgb(0, 255, 0))
        .with("ret", Rgba::rgb(255, 0, 0))
        .with("nop", Rgba::rgb(0, 0, 255))
        .with("num", Rgba::rgb(255, 255, 0))
        .with("reg", Rgba::rgb(0, 255, 255))
        .with("mov", Rgba::rgb(255, 255, 255))
        .with("invalid", Rgba::rgb(255, 0, 0))
        .with("offset", Rgba::rgb(0, 255, 0))
        .with("other", Rgba::rgb(255, 255, 255))
        .with("gui.background", Rgba::rgb(0, 0, 0))
        .with("gui.alt_background", Rgba::rgb(20, 20, 20))
        .with("gui.border", Rgba::rgb(0, 0, 0))
}

fn ayu_scheme() -> ColorScheme {
    ColorScheme::new()
        .with("comment", Rgba::rgb(92, 103, 115))
        .with("fname", Rgba::rgb(255, 180, 84))
        .with("flag", Rgba::rgb(230, 180, 80))
        .with("call", Rgba::rgb(255, 180, 84))
        .with("jmp", Rgba::rgb(149, 230, 203))
        .with("cjmp", Rgba::rgb(149, 230, 203))
        .with("ret", Rgba::rgb(255, 51, 51))
        .with("nop", Rgba::rgb(92, 103, 115))
        .with("num", Rgba::rgb(255, 238, 153))
        .with("reg", Rgba::rgb(89, 194, 255))
        .with("mov", Rgba::rgb(203, 204, 198))
        .with("invalid", Rgba::rgb(255, 51, 51))
        .with("offset", Rgba::rgb(92, 103, 115))
        .with("other", Rgba::rgb(203, 204, 198))
        .with("gui.background", Rgba::rgb(15, 20, 25))
        .with("gui.alt_background", Rgba::rgb(20, 25, 31))
}

fn solarized_scheme() -> ColorScheme {
    ColorScheme::new()
        .with("comment", Rgba::rgb(88, 110, 117))
        .with("fname", Rgba::rgb(38, 139, 210))
        .with("flag", Rgba::rgb(42, 161, 152))
        .with("call", Rgba::rgb(133, 153, 0))
        .with("jmp", Rgba::rgb(133, 153, 0))
        .with("cjmp", Rgba::rgb(181, 137, 0))
        .with("ret", Rgba::rgb(220, 50, 47))
        .with("nop", Rgba::rgb(88, 110, 117))
        .with("num", Rgba::rgb(211, 54, 130))
        .with("reg", Rgba::rgb(108, 113, 196))
        .with("mov", Rgba::rgb(147, 161, 161))
        .with("invalid", Rgba::rgb(220, 50, 47))
        .with("offset", Rgba::rgb(42, 161, 152))
        .with("other", Rgba::rgb(131, 148, 150))
        .with("gui.background", Rgba::rgb(0, 43, 54))
}

fn white_scheme() -> ColorScheme {
    ColorScheme::new()
        .with("comment", Rgba::rgb(0, 128, 0))
        .with("fname", Rgba::rgb(128, 0, 0))
        .with("flag", Rgba::rgb(0, 0, 128))
        .with("call", Rgba::rgb(0, 0, 0))
        .with("jmp", Rgba::rgb(0, 0, 0))
        .with("cjmp", Rgba::rgb(0, 0, 0))
        .with("ret", Rgba::rgb(128, 0, 0))
        .with("num", Rgba::rgb(0, 0, 255))
        .with("reg", Rgba::rgb(0, 0, 0))
        .with("other", Rgba::rgb(0, 0, 0))
        .with("gui.background", Rgba::rgb(255, 255, 255))
}
