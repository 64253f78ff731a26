//! Hex color parsing.

use std::fmt;
use std::str::FromStr;

use crate::RainError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an opacity, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Channels as floats, for compositing.
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = RainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

/// An RGB color with an opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

/// Parse a color written as six hex digits, with or without a leading `#`.
///
/// Digits are case-insensitive. Anything else, including the three-digit
/// shorthand, is rejected with [`RainError::InvalidColorFormat`].
pub fn parse_hex_color(hex: &str) -> Result<Rgb, RainError> {
    let invalid = || RainError::InvalidColorFormat {
        value: hex.to_string(),
    };

    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(parse_hex_color("#030303"), Ok(Rgb::new(3, 3, 3)));
        assert_eq!(parse_hex_color("008529"), Ok(Rgb::new(0, 133, 41)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_hex_color("#FFaa00"), Ok(Rgb::new(255, 170, 0)));
        assert_eq!(parse_hex_color("abcdef"), parse_hex_color("ABCDEF"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["#03", "red", "", "#", "##030303", "#0303030", "#03030g", "0x0303"] {
            assert_eq!(
                parse_hex_color(bad),
                Err(RainError::InvalidColorFormat {
                    value: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        // Six bytes, but not six hex digits.
        assert!(parse_hex_color("ééé").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let color = Rgb::new(0, 133, 41);
        assert_eq!(color.to_string(), "#008529");
        assert_eq!(color.to_string().parse::<Rgb>(), Ok(color));
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(1.5).alpha, 1.0);
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(-0.5).alpha, 0.0);
    }
}
