use crate::config::ConfigError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(text: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(text.to_string());
        let hex = text.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip(0..3) {
                    // #abc expands to #aabbcc
                    *slot = channel(&hex[i..i + 1])? * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Add `amount` to every channel, clamping to 0..=255.
    pub fn lighten(self, amount: i16) -> Self {
        let shift = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
        Self::rgb(shift(self.r), shift(self.g), shift(self.b))
    }

    /// CSS `rgb(r, g, b)` string for canvas fill styles.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Non-empty ordered set of colors new glyphs are tinted from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(pub(crate) Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn from_hex(colors: &[&str]) -> Result<Self, ConfigError> {
        let parsed = colors
            .iter()
            .map(|c| Color::parse_hex(c))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.0.choose(rng).copied().unwrap_or(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_hex_agree() {
        assert_eq!(Color::parse_hex("#0F6").unwrap(), Color::rgb(0, 255, 102));
        assert_eq!(
            Color::parse_hex("#00ff66").unwrap(),
            Color::parse_hex("#0F6").unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#ggg", "#+ff", "red"] {
            assert!(Color::parse_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn lighten_clamps() {
        let c = Color::rgb(250, 10, 128).lighten(30);
        assert_eq!(c, Color::rgb(255, 40, 158));
        assert_eq!(Color::rgb(5, 5, 5).lighten(-30), Color::BLACK);
    }
}
