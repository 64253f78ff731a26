//! Glyphs drawn by the rain.

use std::ops::RangeInclusive;

use rand::Rng;

/// Printable ASCII, excluding the space.
pub const GLYPH_RANGE: RangeInclusive<u8> = 33..=126;

/// Number of distinct glyphs.
pub const GLYPH_COUNT: usize = 94;

/// Pick a glyph uniformly from [`GLYPH_RANGE`].
pub fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(GLYPH_RANGE))
}
