//! The drawing surface the engine paints on.

use matrain_core::{Rgb, Rgba};

/// Dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// The rectangle covering a whole surface of the given size.
    pub const fn covering(size: Size) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Monospace,
}

/// Font used for subsequent [`Surface::fill_text`] calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Font {
    pub size_px: u32,
    pub family: FontFamily,
}

impl Font {
    pub const fn monospace(size_px: u32) -> Self {
        Self {
            size_px,
            family: FontFamily::Monospace,
        }
    }
}

/// A resizable 2D drawing surface.
///
/// The surface is sized by whoever hosts it. The engine reads that size
/// through [`layout_size`](Surface::layout_size) and mirrors it onto the
/// backing buffer.
pub trait Surface {
    /// Size assigned by the host's layout, or `None` once the surface has
    /// been disposed.
    fn layout_size(&self) -> Option<Size>;

    /// Current size of the backing pixel buffer.
    fn buffer_size(&self) -> Size;

    /// Resize the backing buffer. Existing contents are discarded.
    fn set_buffer_size(&mut self, size: Size);

    /// Composite `color` over the given rectangle, source-over.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);

    /// Set the font and opaque fill color for text drawn afterwards.
    fn set_text_style(&mut self, font: Font, color: Rgb);

    /// Draw a glyph with its left edge at `x` and its baseline at `y`.
    fn fill_text(&mut self, glyph: char, x: u32, y: u32);
}
