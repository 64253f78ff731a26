//! Error type for the rain engine.

use thiserror::Error;

/// Errors raised while configuring or starting the rain engine.
///
/// None of these are recoverable at runtime: they surface at construction or
/// at `start`, and the animation never runs past them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RainError {
    /// A color option is not a 6-digit hex string.
    #[error("invalid color {value:?}: use a hex value e.g. #030303")]
    InvalidColorFormat { value: String },

    /// The tile size must be between 1 and `MAX_TILE_SIZE` pixels.
    #[error("invalid tile size {0}: must be between 1 and 4096 pixels")]
    InvalidTileSize(u32),

    /// The fade factor must lie in (0, 1].
    #[error("invalid fade factor {0}: must be greater than 0 and at most 1")]
    InvalidFadeFactor(f32),

    /// The drawing surface is gone or was never attached.
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,

    /// `start` was called on an engine that already left the idle state.
    #[error("animation loop already started")]
    AlreadyStarted,
}
