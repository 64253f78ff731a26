//! Compositing helpers for the cell canvas.

use matrain_core::Rgba;
use ratatui::style::Color;

/// A color with straight (non-premultiplied) float channels in `[0, 255]`.
pub type Channels = [f32; 3];

/// Composite `src` over a destination with coverage `dst_alpha`.
///
/// Returns the resulting color and coverage. A fully transparent
/// destination simply takes on the source color.
pub fn composite_over(dst: Channels, dst_alpha: f32, src: Rgba) -> (Channels, f32) {
    let src_alpha = src.alpha;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= f32::EPSILON {
        return ([0.0; 3], 0.0);
    }
    let src_rgb = src.rgb.to_f32();
    let blend = |i: usize| {
        (src_rgb[i] * src_alpha + dst[i] * dst_alpha * (1.0 - src_alpha)) / out_alpha
    };
    ([blend(0), blend(1), blend(2)], out_alpha)
}

/// Largest per-channel difference between two colors.
pub fn distance(a: Channels, b: Channels) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// Convert float channels, scaled by `alpha` over black, to a terminal color.
pub fn to_color(channels: Channels, alpha: f32) -> Color {
    let channel = |v: f32| (v * alpha).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(channels[0]), channel(channels[1]), channel(channels[2]))
}

#[cfg(test)]
mod tests {
    use matrain_core::Rgb;

    use super::*;

    #[test]
    fn test_over_transparent_takes_source() {
        let (rgb, alpha) = composite_over([0.0; 3], 0.0, Rgb::new(10, 20, 30).with_alpha(0.25));
        assert_eq!(rgb, [10.0, 20.0, 30.0]);
        assert_eq!(alpha, 0.25);
    }

    #[test]
    fn test_over_opaque_mixes() {
        let (rgb, alpha) = composite_over([200.0, 0.0, 100.0], 1.0, Rgb::new(0, 0, 0).with_alpha(0.5));
        assert_eq!(rgb, [100.0, 0.0, 50.0]);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn test_nothing_over_nothing() {
        let (_, alpha) = composite_over([0.0; 3], 0.0, Rgb::new(1, 1, 1).with_alpha(0.0));
        assert_eq!(alpha, 0.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance([0.0, 133.0, 41.0], [3.0, 3.0, 3.0]), 130.0);
        assert_eq!(distance([5.0; 3], [5.0; 3]), 0.0);
    }

    #[test]
    fn test_to_color_scales_by_alpha() {
        assert_eq!(to_color([200.0, 100.0, 0.0], 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(to_color([255.0; 3], 1.0), Color::Rgb(255, 255, 255));
    }
}
