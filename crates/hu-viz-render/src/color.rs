use std::fmt;

use serde::{Deserialize, Serialize};

/// sRGB colour with straight alpha. (De)serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` (leading `#` optional). Malformed channels read as 0.
    pub fn hex(s: &str) -> Self {
        let digits = s.trim().trim_start_matches('#');
        let channel = |i: usize| digits.get(i..i + 2).and_then(|c| u8::from_str_radix(c, 16).ok()).unwrap_or(0);
        Self::rgb(channel(0), channel(2), channel(4))
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        (self.a - 1.0).abs() < 1e-6
    }
}

/// SVG paint value: `#rrggbb` when opaque, `rgba(...)` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color { r, g, b, a } = *self;
        if self.is_opaque() {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "rgba({r},{g},{b},{a:.3})")
        }
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color::hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.with_alpha(1.0).to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Named colour cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Matplotlib's default property cycle.
    Tab10,
    /// Wong's colour-blind safe set, as used by ATLAS.
    AtlasWong,
    /// Muted cycle for the minimal theme.
    Muted,
}

impl Palette {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tab10" => Some(Self::Tab10),
            "atlas_wong" => Some(Self::AtlasWong),
            "muted" => Some(Self::Muted),
            _ => None,
        }
    }

    fn hex_codes(self) -> &'static [&'static str] {
        match self {
            Self::Tab10 => &[
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
                "#bcbd22", "#17becf",
            ],
            Self::AtlasWong => &["#0072b2", "#d55e00", "#56b4e9", "#e69f00", "#f0e442", "#009e73", "#cc79a7"],
            Self::Muted => &["#4878d0", "#ee854a", "#6acc64", "#d65f5f", "#956cb4", "#8c613c", "#dc7ec0", "#797979"],
        }
    }

    pub fn colors(self) -> Vec<Color> {
        self.hex_codes().iter().map(|s| Color::hex(s)).collect()
    }
}

/// Colours of the palette called `name`; unknown names fall back to tab10.
pub fn palette_colors(name: &str) -> Vec<Color> {
    Palette::parse(name)
        .unwrap_or_else(|| {
            log::warn!("unknown palette '{name}', falling back to tab10");
            Palette::Tab10
        })
        .colors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        let c = Color::hex("#1f77b4");
        assert_eq!((c.r, c.g, c.b), (0x1f, 0x77, 0xb4));
        assert!(c.is_opaque());
        assert_eq!(Color::hex("zz"), Color::BLACK);
    }

    #[test]
    fn display_is_svg_paint() {
        assert_eq!(Color::rgb(31, 119, 180).to_string(), "#1f77b4");
        assert_eq!(Color::rgb(31, 119, 180).with_alpha(0.25).to_string(), "rgba(31,119,180,0.250)");
    }

    #[test]
    fn serde_as_hex_string() {
        let c: Color = serde_json::from_str("\"#d62728\"").unwrap();
        assert_eq!(c, Color::rgb(0xd6, 0x27, 0x28));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#d62728\"");
    }

    #[test]
    fn palette_lookup() {
        assert_eq!(palette_colors("tab10").len(), 10);
        assert_eq!(palette_colors("atlas_wong").len(), 7);
        assert_eq!(palette_colors("nope")[0], Color::hex("#1f77b4"));
    }
}
