//! Palette input consumed read-only by every visual element.
//!
//! Particles and sprites never hold literal colors; they hold a shade role
//! that is resolved against the active theme each frame. Swapping themes
//! therefore re-skins the next frame without touching any simulation state.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 8-bit RGB color, formatted as a CSS `rgba()` string for the canvas.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected `#rgb` or `#rrggbb`, got {0:?}")]
    Malformed(String),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// CSS color string with the given opacity in `[0, 1]`.
    pub fn css(&self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let malformed = || ColorParseError::Malformed(s.to_string());
        let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
        let chars: Vec<u8> = hex.chars().map(nibble).collect::<Option<_>>().ok_or_else(malformed)?;
        match chars.as_slice() {
            &[r, g, b] => Ok(Color::rgb(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => {
                Ok(Color::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
            }
            _ => Err(malformed()),
        }
    }
}

/// Color role carried by dust motes instead of a literal color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DustShade {
    Primary,
    Secondary,
}

/// Color role carried by hearts and firework sparks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpriteShade {
    Primary,
    Secondary,
    Accent,
    White,
}

/// Named palette. Field meanings follow the upstream page contract:
/// `primary` tints dust, the planet base and hearts; `secondary` is the
/// second dust shade and shadow tint; `accent` is used for bright
/// highlights; `dark` for the planet shadow; the gradient pair fills the
/// background; `star` tints the background star sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub dark: Color,
    pub bg_gradient_start: Color,
    pub bg_gradient_end: Color,
    pub star: Color,
}

impl Theme {
    pub fn dust_color(&self, shade: DustShade) -> Color {
        match shade {
            DustShade::Primary => self.primary,
            DustShade::Secondary => self.secondary,
        }
    }

    pub fn sprite_color(&self, shade: SpriteShade) -> Color {
        match shade {
            SpriteShade::Primary => self.primary,
            SpriteShade::Secondary => self.secondary,
            SpriteShade::Accent => self.accent,
            SpriteShade::White => Color::WHITE,
        }
    }

    pub fn by_id(id: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.id == id)
    }

    /// Build a custom theme from seven whitespace-separated hex colors in
    /// the order primary, secondary, accent, dark, gradient start, gradient
    /// end, star. This is how a hosting page supplies its own palette.
    pub fn from_css_list(list: &str) -> Result<Theme, ColorParseError> {
        let mut it = list.split_whitespace();
        let mut next = || -> Result<Color, ColorParseError> {
            it.next()
                .ok_or_else(|| ColorParseError::Malformed(list.to_string()))?
                .parse()
        };
        Ok(Theme {
            id: "custom",
            name: "Custom",
            primary: next()?,
            secondary: next()?,
            accent: next()?,
            dark: next()?,
            bg_gradient_start: next()?,
            bg_gradient_end: next()?,
            star: next()?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0].clone()
    }
}

/// Built-in palettes.
pub const THEMES: [Theme; 5] = [
    Theme {
        id: "passion",
        name: "Passion",
        primary: Color::rgb(0xec, 0x48, 0x99),
        secondary: Color::rgb(0xfb, 0xcf, 0xe8),
        accent: Color::rgb(0xe1, 0x1d, 0x48),
        dark: Color::rgb(0x50, 0x07, 0x24),
        bg_gradient_start: Color::rgb(0x1f, 0x0a, 0x15),
        bg_gradient_end: Color::rgb(0x00, 0x00, 0x00),
        star: Color::rgb(0x63, 0x66, 0xf1),
    },
    Theme {
        id: "ocean",
        name: "Ocean",
        primary: Color::rgb(0x0e, 0xa5, 0xe9),
        secondary: Color::rgb(0xba, 0xe6, 0xfd),
        accent: Color::rgb(0x38, 0xbd, 0xf8),
        dark: Color::rgb(0x08, 0x2f, 0x49),
        bg_gradient_start: Color::rgb(0x0c, 0x1a, 0x2e),
        bg_gradient_end: Color::rgb(0x00, 0x00, 0x00),
        star: Color::rgb(0xff, 0xff, 0xff),
    },
    Theme {
        id: "mystic",
        name: "Mystic",
        primary: Color::rgb(0xa8, 0x55, 0xf7),
        secondary: Color::rgb(0xe9, 0xd5, 0xff),
        accent: Color::rgb(0xd8, 0xb4, 0xfe),
        dark: Color::rgb(0x3b, 0x07, 0x64),
        bg_gradient_start: Color::rgb(0x18, 0x0a, 0x29),
        bg_gradient_end: Color::rgb(0x00, 0x00, 0x00),
        star: Color::rgb(0xf4, 0x72, 0xb6),
    },
    Theme {
        id: "golden",
        name: "Golden",
        primary: Color::rgb(0xf5, 0x9e, 0x0b),
        secondary: Color::rgb(0xfd, 0xe6, 0x8a),
        accent: Color::rgb(0xfb, 0xbf, 0x24),
        dark: Color::rgb(0x45, 0x1a, 0x03),
        bg_gradient_start: Color::rgb(0x27, 0x13, 0x00),
        bg_gradient_end: Color::rgb(0x00, 0x00, 0x00),
        star: Color::rgb(0xfc, 0xd3, 0x4d),
    },
    Theme {
        id: "galaxy",
        name: "Galaxy",
        primary: Color::rgb(0x14, 0xb8, 0xa6),
        secondary: Color::rgb(0x99, 0xf6, 0xe4),
        accent: Color::rgb(0xf0, 0xab, 0xfc),
        dark: Color::rgb(0x04, 0x2f, 0x2e),
        bg_gradient_start: Color::rgb(0x02, 0x2c, 0x22),
        bg_gradient_end: Color::rgb(0x00, 0x00, 0x00),
        star: Color::rgb(0x5e, 0xea, 0xd4),
    },
];
