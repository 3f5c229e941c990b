//! Color utilities for charts

use egui::Color32;

/// Saturation/lightness used for generated slice colors.
const SLICE_SATURATION: f32 = 0.70;
const SLICE_LIGHTNESS: f32 = 0.60;

/// Produce `count` visually distinct colors by spacing hues evenly around
/// the hue circle at fixed saturation and lightness. Deterministic and
/// order-preserving.
pub fn distinct_colors(count: usize) -> Vec<Color32> {
    (0..count)
        .map(|i| {
            let hue = (i as f32 * 360.0 / count as f32) % 360.0;
            hsl_color(hue, SLICE_SATURATION, SLICE_LIGHTNESS)
        })
        .collect()
}

/// Convert an HSL triple (hue in degrees, saturation/lightness in 0..=1)
/// to an sRGB color.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue % 360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Fixed palette for word clouds, cycled by word rank.
pub fn word_palette_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(45, 80, 22),
        Color32::from_rgb(74, 124, 42),
        Color32::from_rgb(106, 176, 76),
        Color32::from_rgb(61, 139, 61),
        Color32::from_rgb(92, 184, 92),
        Color32::from_rgb(40, 167, 69),
        Color32::from_rgb(69, 176, 73),
        Color32::from_rgb(103, 194, 58),
        Color32::from_rgb(133, 206, 97),
        Color32::from_rgb(149, 212, 117),
    ];
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_requested_count() {
        for count in [1usize, 2, 5, 12, 36] {
            assert_eq!(distinct_colors(count).len(), count);
        }
    }

    #[test]
    fn colors_are_distinct() {
        let colors = distinct_colors(12);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn single_color_is_hue_zero() {
        // hue 0 at s=0.70, l=0.60 is a red
        let colors = distinct_colors(1);
        assert_eq!(colors[0], hsl_color(0.0, 0.70, 0.60));
        let [r, g, b, _] = colors[0].to_array();
        assert!(r > g && r > b);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(distinct_colors(7), distinct_colors(7));
    }

    #[test]
    fn hues_are_evenly_spaced() {
        // with 4 colors the hues are 0, 90, 180, 270: red-ish, green-ish,
        // cyan-ish, blue/purple-ish
        let colors = distinct_colors(4);
        assert_eq!(colors[0], hsl_color(0.0, 0.70, 0.60));
        assert_eq!(colors[1], hsl_color(90.0, 0.70, 0.60));
        assert_eq!(colors[2], hsl_color(180.0, 0.70, 0.60));
        assert_eq!(colors[3], hsl_color(270.0, 0.70, 0.60));
    }

    #[test]
    fn hsl_primaries_convert_exactly() {
        assert_eq!(hsl_color(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_color(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_color(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
        assert_eq!(hsl_color(0.0, 0.0, 1.0), Color32::from_rgb(255, 255, 255));
    }
}
