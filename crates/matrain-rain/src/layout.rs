//! Column layout for the rain grid.

use rand::Rng;

/// Shortest stream a column can be given, in tiles.
pub const MIN_STACK_HEIGHT: f32 = 10.0;

/// State for a single rain column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Horizontal pixel offset, a multiple of the tile size.
    pub x: u32,
    /// Stream length in tiles before the column restarts at the top.
    /// Kept fractional; the counter wraps once it reaches or passes it.
    pub stack_height: f32,
    /// Current stream position in tiles.
    pub stack_counter: u32,
}

impl Column {
    /// Move the stream down one tile. Returns `true` when it wrapped back to
    /// the top with a fresh height.
    pub fn advance<R: Rng + ?Sized>(&mut self, max_stack_height: u32, rng: &mut R) -> bool {
        self.stack_counter += 1;
        if self.stack_counter as f32 >= self.stack_height {
            self.stack_height = random_stack_height(max_stack_height, rng);
            self.stack_counter = 0;
            return true;
        }
        false
    }
}

/// Columns computed for one surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub columns: Vec<Column>,
    /// Surface height in tiles, rounded up.
    pub max_stack_height: u32,
}

/// Draw a stream length uniformly from `[10, 10 + max_stack_height)`.
pub fn random_stack_height<R: Rng + ?Sized>(max_stack_height: u32, rng: &mut R) -> f32 {
    if max_stack_height == 0 {
        return MIN_STACK_HEIGHT;
    }
    rng.gen_range(MIN_STACK_HEIGHT..MIN_STACK_HEIGHT + max_stack_height as f32)
}

/// Split a surface into tile-wide columns.
///
/// Partial columns at the right edge are dropped, while a partial row at the
/// bottom still counts towards the maximum stack height.
pub fn recompute_layout<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    tile_size: u32,
    rng: &mut R,
) -> Layout {
    let tile_size = tile_size.max(1);
    let max_stack_height = height.div_ceil(tile_size);

    let columns = (0..width / tile_size)
        .map(|i| Column {
            x: i * tile_size,
            stack_height: random_stack_height(max_stack_height, rng),
            stack_counter: 0,
        })
        .collect();

    Layout {
        columns,
        max_stack_height,
    }
}
