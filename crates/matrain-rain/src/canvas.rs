//! A pixel surface backed by terminal cells.
//!
//! Each terminal cell stands for a `cell_width` x `cell_height` block of
//! pixels. Overlays are composited into every cell they touch, so glyphs
//! fade towards the overlay color over successive ticks the same way they
//! would on a real 2D canvas.

use matrain_core::{Rgb, Rgba};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::color::{Channels, composite_over, distance, to_color};
use crate::surface::{Font, PixelRect, Size, Surface};

/// A glyph is dropped once its color is this close to the overlay color.
const GLYPH_CUTOFF: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct CanvasCell {
    background: Channels,
    /// Coverage of the background, 0 until something is painted.
    coverage: f32,
    glyph: Option<char>,
    foreground: Channels,
}

/// Terminal-cell surface.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cell_width: u32,
    cell_height: u32,
    /// Size assigned by the host, `None` once disposed.
    layout: Option<Size>,
    buffer: Size,
    cols: u32,
    rows: u32,
    cells: Vec<CanvasCell>,
    font: Font,
    fill: Rgb,
}

impl CellCanvas {
    /// Create a canvas where one terminal cell covers the given pixel block.
    /// Zero dimensions are raised to one pixel.
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            layout: None,
            buffer: Size::default(),
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            font: Font::default(),
            fill: Rgb::default(),
        }
    }

    /// Set the layout size from a terminal area measured in cells.
    /// Pixel sizes saturate at `u32::MAX`.
    pub fn set_terminal_size(&mut self, cols: u16, rows: u16) {
        self.layout = Some(Size::new(
            (cols as u32).saturating_mul(self.cell_width),
            (rows as u32).saturating_mul(self.cell_height),
        ));
    }

    /// Detach the canvas from its host. Later ticks against it fail.
    pub fn dispose(&mut self) {
        self.layout = None;
        self.cells.clear();
    }

    /// Grid dimensions in cells.
    pub fn grid_size(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// The glyph currently visible in a cell.
    pub fn glyph_at(&self, col: u32, row: u32) -> Option<char> {
        self.cell(col, row).and_then(|cell| cell.glyph)
    }

    /// Number of cells showing a glyph.
    pub fn visible_glyphs(&self) -> usize {
        self.cells.iter().filter(|cell| cell.glyph.is_some()).count()
    }

    /// Font set by the last [`Surface::set_text_style`] call. Terminals
    /// cannot scale text, so it is recorded but not applied.
    pub fn font(&self) -> Font {
        self.font
    }

    fn cell(&self, col: u32, row: u32) -> Option<&CanvasCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    fn cell_mut(&mut self, col: u32, row: u32) -> Option<&mut CanvasCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get_mut(row as usize * self.cols as usize + col as usize)
    }
}

impl Surface for CellCanvas {
    fn layout_size(&self) -> Option<Size> {
        self.layout
    }

    fn buffer_size(&self) -> Size {
        self.buffer
    }

    fn set_buffer_size(&mut self, size: Size) {
        self.buffer = size;
        self.cols = size.width / self.cell_width;
        self.rows = size.height / self.cell_height;
        self.cells = vec![CanvasCell::default(); self.cols as usize * self.rows as usize];
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let first_col = rect.x / self.cell_width;
        let first_row = rect.y / self.cell_height;
        let end_col = rect
            .x
            .saturating_add(rect.width)
            .div_ceil(self.cell_width)
            .min(self.cols);
        let end_row = rect
            .y
            .saturating_add(rect.height)
            .div_ceil(self.cell_height)
            .min(self.rows);

        for row in first_row..end_row {
            for col in first_col..end_col {
                let Some(cell) = self.cell_mut(col, row) else {
                    continue;
                };
                let (background, coverage) = composite_over(cell.background, cell.coverage, color);
                cell.background = background;
                cell.coverage = coverage;

                if cell.glyph.is_some() {
                    // Glyphs are painted opaque, so they stay fully covered.
                    let (foreground, _) = composite_over(cell.foreground, 1.0, color);
                    cell.foreground = foreground;
                    if distance(foreground, color.rgb.to_f32()) < GLYPH_CUTOFF {
                        cell.glyph = None;
                    }
                }
            }
        }
    }

    fn set_text_style(&mut self, font: Font, color: Rgb) {
        self.font = font;
        self.fill = color;
    }

    fn fill_text(&mut self, glyph: char, x: u32, y: u32) {
        // The glyph sits in the cell just above its baseline.
        let Some(bottom) = y.checked_sub(1) else {
            return;
        };
        let (col, row) = (x / self.cell_width, bottom / self.cell_height);
        let fill = self.fill.to_f32();
        if let Some(cell) = self.cell_mut(col, row) {
            cell.glyph = Some(glyph);
            cell.foreground = fill;
        }
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows.min(area.height as u32);
        let cols = self.cols.min(area.width as u32);
        for row in 0..rows {
            for col in 0..cols {
                let Some(canvas_cell) = self.cell(col, row) else {
                    continue;
                };
                let position = (area.x + col as u16, area.y + row as u16);
                let Some(cell) = buf.cell_mut(position) else {
                    continue;
                };
                if canvas_cell.coverage > 0.0 {
                    cell.set_bg(to_color(canvas_cell.background, canvas_cell.coverage));
                }
                match canvas_cell.glyph {
                    Some(glyph) => {
                        cell.set_char(glyph);
                        cell.set_fg(to_color(canvas_cell.foreground, 1.0));
                    }
                    None => {
                        cell.set_char(' ');
                        cell.set_fg(Color::Reset);
                    }
                }
            }
        }
    }
}
