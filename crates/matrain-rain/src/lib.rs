//! Matrix rain animation engine.
//!
//! The engine splits a pixel surface into tile-wide columns and, once per
//! tick, paints a translucent overlay followed by one random glyph per
//! column. Drawing goes through the [`Surface`] trait; [`CellCanvas`] is a
//! surface backed by terminal cells that renders as a ratatui widget.

mod canvas;
mod color;
mod engine;
mod glyphs;
mod layout;
mod scheduler;
mod surface;

pub use canvas::CellCanvas;
pub use engine::{LoopState, RainEngine, StopHandle, TICK_INTERVAL};
pub use glyphs::{GLYPH_COUNT, GLYPH_RANGE, random_glyph};
pub use layout::{Column, Layout, MIN_STACK_HEIGHT, random_stack_height, recompute_layout};
pub use scheduler::{Host, HostEvent, run};
pub use surface::{Font, FontFamily, PixelRect, Size, Surface};
