use crate::color::{Color, Palette};
use crate::constants::THEME_LIGHTEN_STEPS;

/// Color scheme: page/backdrop background plus the accent glyphs derive from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub accent: Color,
}

pub const THEMES: [Theme; 6] = [
    Theme {
        name: "MATRIX",
        background: Color::rgb(0x00, 0x00, 0x00),
        accent: Color::rgb(0x00, 0xff, 0x00),
    },
    Theme {
        name: "CYBER",
        background: Color::rgb(0x0a, 0x0a, 0x2a),
        accent: Color::rgb(0x00, 0xff, 0xff),
    },
    Theme {
        name: "NEON",
        background: Color::rgb(0x1a, 0x00, 0x1a),
        accent: Color::rgb(0xff, 0x00, 0xff),
    },
    Theme {
        name: "GREEN",
        background: Color::rgb(0x00, 0x2a, 0x00),
        accent: Color::rgb(0x00, 0xff, 0x00),
    },
    Theme {
        name: "RED",
        background: Color::rgb(0x2a, 0x00, 0x00),
        accent: Color::rgb(0xff, 0x44, 0x44),
    },
    Theme {
        name: "BLUE",
        background: Color::rgb(0x00, 0x00, 0x2a),
        accent: Color::rgb(0x44, 0x44, 0xff),
    },
];

impl Theme {
    /// Accent followed by progressively lighter variants.
    pub fn palette(&self) -> Palette {
        Palette(
            THEME_LIGHTEN_STEPS
                .iter()
                .map(|&step| self.accent.lighten(step))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_palette_lightens_toward_white() {
        let p = THEMES[4].palette();
        assert_eq!(
            p.colors(),
            &[
                Color::rgb(0xff, 0x44, 0x44),
                Color::rgb(0xff, 0x62, 0x62),
                Color::rgb(0xff, 0x80, 0x80),
                Color::rgb(0xff, 0x9e, 0x9e),
            ]
        );
    }
}
