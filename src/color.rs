use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Medal;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_hex(rgb)
        })
        .collect()
}

fn to_hex(rgb: Srgb) -> String {
    let rgb: Srgb<u8> = rgb.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

/// Conventional colour for a medal, `None` for labels outside the domain.
pub fn medal_color(medal: &Medal) -> Option<String> {
    let rgb = match medal {
        Medal::Gold => Srgb::new(0.831, 0.686, 0.216),
        Medal::Silver => Srgb::new(0.753, 0.753, 0.753),
        Medal::Bronze => Srgb::new(0.804, 0.498, 0.196),
        Medal::NoMedal => Srgb::new(0.502, 0.502, 0.502),
        Medal::Other(_) => return None,
    };
    Some(to_hex(rgb))
}

// ---------------------------------------------------------------------------
// Color mapping: series label → hex colour
// ---------------------------------------------------------------------------

/// Maps the labels of one chart to distinct colours. Medal labels keep their
/// conventional colours; everything else gets a generated hue.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    /// Build a colour map for the given labels.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let generated: Vec<&str> = labels
            .iter()
            .copied()
            .filter(|l| medal_color(&Medal::parse(l)).is_none())
            .collect();
        let palette = generate_palette(generated.len());

        let mut mapping: BTreeMap<String, String> = generated
            .into_iter()
            .zip(palette)
            .map(|(l, c)| (l.to_string(), c))
            .collect();
        for label in labels {
            if let Some(c) = medal_color(&Medal::parse(label)) {
                mapping.insert(label.to_string(), c);
            }
        }

        ColorMap { mapping }
    }

    /// Look up the colour for a given label.
    pub fn color_for(&self, label: &str) -> Option<String> {
        self.mapping.get(label).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_hex_format() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for c in &colors {
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn medals_keep_fixed_colors() {
        let map = ColorMap::new(["Gold", "Silver", "Kenya"]);
        assert_eq!(map.color_for("Gold"), medal_color(&Medal::Gold));
        assert_eq!(map.color_for("Silver"), medal_color(&Medal::Silver));
        assert!(map.color_for("Kenya").is_some());
        assert_eq!(map.color_for("Chile"), None);
    }

    #[test]
    fn generated_colors_are_distinct() {
        let map = ColorMap::new(["Athletics", "Rowing", "Judo"]);
        let a = map.color_for("Athletics");
        let r = map.color_for("Rowing");
        let j = map.color_for("Judo");
        assert_ne!(a, r);
        assert_ne!(r, j);
        assert_ne!(a, j);
    }
}
