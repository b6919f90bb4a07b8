use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Cluster color palette
// ---------------------------------------------------------------------------

/// One visually distinct color per cluster id, from evenly spaced hues.
/// Indexed by the engine's cluster label.
pub fn cluster_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_one_color_per_cluster() {
        assert!(cluster_palette(0).is_empty());
        let palette = cluster_palette(5);
        assert_eq!(palette.len(), 5);
        // Evenly spaced hues never collide for small counts.
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
