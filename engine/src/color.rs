use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel RGBA color.
///
/// Serialized as a `[r, g, b, a]` array, which is also the shape the engine
/// uses when reporting its color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Sum of the red, green and blue channels (0..=765).
    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Build a color from a JSON `[r, g, b, a]` array.
    ///
    /// Returns `None` unless the value is an array of exactly four integers.
    /// Channels outside `0..=255` are clamped.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let channels = value.as_array()?;
        if channels.len() != 4 {
            return None;
        }

        let mut out = [0u8; 4];
        for (slot, channel) in out.iter_mut().zip(channels) {
            *slot = channel.as_i64()?.clamp(0, 255) as u8;
        }
        Some(Self::from(out))
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn parse_hex(hex: &str) -> Result<Self, &'static str> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err("Invalid hex color format");
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("Invalid hex digit");
        }

        let channel = |range: std::ops::Range<usize>, err: &'static str| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| err)
        };
        let r = channel(0..2, "Invalid red component")?;
        let g = channel(2..4, "Invalid green component")?;
        let b = channel(4..6, "Invalid blue component")?;
        let a = if hex.len() == 8 {
            channel(6..8, "Invalid alpha component")?
        } else {
            255
        };

        Ok(Self::new(r, g, b, a))
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}
