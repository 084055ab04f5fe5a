use super::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User theme selection. `System` defers to the platform signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
}

/// Named hue groups within a generated color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorGroup {
    Accent1,
    Accent2,
    Accent3,
    Neutral1,
    Neutral2,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 5] = [
        ColorGroup::Accent1,
        ColorGroup::Accent2,
        ColorGroup::Accent3,
        ColorGroup::Neutral1,
        ColorGroup::Neutral2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorGroup::Accent1 => "accent1",
            ColorGroup::Accent2 => "accent2",
            ColorGroup::Accent3 => "accent3",
            ColorGroup::Neutral1 => "neutral1",
            ColorGroup::Neutral2 => "neutral2",
        }
    }
}

impl fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightness steps of a tonal palette, lightest to darkest.
pub const COLOR_TIERS: [u16; 13] = [
    0, 10, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000,
];

/// A simple RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

    /// Parse a hex color string: `#rrggbb` or the 3-digit `#rgb` shorthand.
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex.trim().trim_start_matches('#');

        let invalid = |reason: &str| ThemeError::InvalidColor {
            value: hex.to_string(),
            reason: reason.to_string(),
        };

        let parse = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid("not a hex digit"));

        // Components are taken as byte slices below, so multi-byte input
        // must be rejected up front rather than panicking mid-slice.
        if !digits.is_ascii() {
            return Err(invalid("not a hex digit"));
        }

        match digits.len() {
            6 => Ok(Rgb(
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            )),
            3 => {
                let expand = |s: &str| parse(&format!("{s}{s}"));
                Ok(Rgb(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid("expected 3 or 6 hex digits")),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The 4-color set handed to the rendering layer.
///
/// Always derived deterministically from the dark-mode flag and the active
/// color scheme; there is no independent mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub surface: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#112233").unwrap(), Rgb(0x11, 0x22, 0x33));
        assert_eq!(Rgb::from_hex("112233").unwrap(), Rgb(0x11, 0x22, 0x33));
        assert_eq!(Rgb::from_hex("#abc").unwrap(), Rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_hex_parsing_rejects_garbage() {
        assert_err!(Rgb::from_hex(""));
        assert_err!(Rgb::from_hex("#12"));
        assert_err!(Rgb::from_hex("#11223g"));
        assert_err!(Rgb::from_hex("#1122334455"));
    }

    #[test]
    fn test_hex_parsing_rejects_multibyte_input() {
        // "€" is 3 bytes and "€€" is 6, matching the accepted byte lengths.
        assert_err!(Rgb::from_hex("€"));
        assert_err!(Rgb::from_hex("€€"));
        assert_err!(Rgb::from_hex("#€€"));
    }

    #[test]
    fn test_hex_display_round_trip() {
        let color = Rgb(0x11, 0x22, 0x33);
        assert_eq!(color.to_string(), "#112233");
        assert_eq!(Rgb::from_hex(&color.to_string()).unwrap(), color);
    }
}
