use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An opaque sRGB color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{}'", s));
        }
        u32::from_str_radix(digits, 16)
            .map(Color::hex)
            .map_err(|e| format!("invalid color '{}': {}", s, e))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Dark terminal palette shared by every panel
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::hex(0x1a1a2e);
    pub const TERMINAL_BG: Color = Color::hex(0x0d1117);
    pub const TERMINAL_HEADER: Color = Color::hex(0x161b22);
    pub const TERMINAL_BORDER: Color = Color::hex(0x30363d);
    pub const TEXT: Color = Color::hex(0xe6edf3);
    pub const WHITE: Color = Color::hex(0xffffff);
    pub const GREEN: Color = Color::hex(0x3fb950);
    pub const CYAN: Color = Color::hex(0x58a6ff);
    pub const YELLOW: Color = Color::hex(0xd29922);
    pub const RED: Color = Color::hex(0xf85149);
    pub const DIM: Color = Color::hex(0x8b949e);
}
