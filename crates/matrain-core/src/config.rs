//! Engine configuration.

use serde::Deserialize;

use crate::{RainError, Rgb, parse_hex_color};

/// Default pixel size of one grid cell.
pub const DEFAULT_TILE_SIZE: u32 = 20;
/// Largest tile size accepted by validation.
pub const MAX_TILE_SIZE: u32 = 4096;
/// Default opacity of the per-tick fade overlay.
pub const DEFAULT_FADE_FACTOR: f32 = 0.05;
/// Default overlay color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#030303";
/// Default glyph color.
pub const DEFAULT_FONT_COLOR: &str = "#008529";

/// Options recognized by the rain engine. Every field is optional in
/// serialized form and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pixel size of each grid cell and glyph.
    pub tile_size: u32,
    /// Opacity of the overlay painted every tick. Higher values shorten the trail.
    pub fade_factor: f32,
    /// Overlay color as a hex string.
    pub background_color: String,
    /// Glyph color as a hex string.
    pub font_color: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            fade_factor: DEFAULT_FADE_FACTOR,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            font_color: DEFAULT_FONT_COLOR.to_string(),
        }
    }
}

impl EngineConfig {
    /// Check numeric bounds and decode both colors.
    pub fn validate(&self) -> Result<Palette, RainError> {
        if self.tile_size == 0 || self.tile_size > MAX_TILE_SIZE {
            return Err(RainError::InvalidTileSize(self.tile_size));
        }
        // NaN fails both comparisons and is rejected here too.
        if !(self.fade_factor > 0.0 && self.fade_factor <= 1.0) {
            return Err(RainError::InvalidFadeFactor(self.fade_factor));
        }
        Ok(Palette {
            background: parse_hex_color(&self.background_color)?,
            font: parse_hex_color(&self.font_color)?,
        })
    }
}

/// The two decoded colors an engine paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub font: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let palette = EngineConfig::default().validate().unwrap();
        assert_eq!(palette.background, Rgb::new(3, 3, 3));
        assert_eq!(palette.font, Rgb::new(0, 133, 41));
    }

    #[test]
    fn test_rejects_zero_tile_size() {
        let config = EngineConfig {
            tile_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(RainError::InvalidTileSize(0)));
    }

    #[test]
    fn test_rejects_oversized_tile() {
        let config = EngineConfig {
            tile_size: MAX_TILE_SIZE + 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(RainError::InvalidTileSize(MAX_TILE_SIZE + 1))
        );

        let largest = EngineConfig {
            tile_size: MAX_TILE_SIZE,
            ..Default::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_fade() {
        for fade in [0.0, -0.1, 1.01, f32::NAN] {
            let config = EngineConfig {
                fade_factor: fade,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(RainError::InvalidFadeFactor(_))),
                "fade {fade} should be rejected"
            );
        }
        let opaque = EngineConfig {
            fade_factor: 1.0,
            ..Default::default()
        };
        assert!(opaque.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_font_color() {
        let config = EngineConfig {
            font_color: "green".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(RainError::InvalidColorFormat {
                value: "green".to_string()
            })
        );
    }
}
