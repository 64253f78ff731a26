//! Core types shared by the matrain crates.
//!
//! Colors, engine configuration and the error type live here so that the
//! config loader and the rain engine agree on them without depending on
//! each other.

mod color;
mod config;
mod error;

pub use color::{Rgb, Rgba, parse_hex_color};
pub use config::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_FADE_FACTOR, DEFAULT_FONT_COLOR, DEFAULT_TILE_SIZE,
    EngineConfig, MAX_TILE_SIZE, Palette,
};
pub use error::RainError;
