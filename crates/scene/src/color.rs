//! Named flat colors used by the scene.

use glam::Vec3;

/// A flat, opaque color selected per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Grey,
    DarkGrey,
    Green,
    DarkGreen,
    Brown,
    DarkBrown,
    White,
    Black,
    Blue,
    Yellow,
}

impl Color {
    /// Every color, in table order.
    pub const ALL: [Color; 11] = [
        Color::Red,
        Color::Grey,
        Color::DarkGrey,
        Color::Green,
        Color::DarkGreen,
        Color::Brown,
        Color::DarkBrown,
        Color::White,
        Color::Black,
        Color::Blue,
        Color::Yellow,
    ];

    /// Linear RGB components in [0, 1].
    pub fn rgb(self) -> Vec3 {
        let [r, g, b] = self.rgb8();
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }

    /// RGB components as bytes.
    pub const fn rgb8(self) -> [u8; 3] {
        match self {
            Color::Red => [255, 0, 0],
            Color::Grey => [169, 169, 169],
            Color::DarkGrey => [90, 90, 90],
            Color::Green => [60, 140, 60],
            Color::DarkGreen => [20, 80, 40],
            Color::Brown => [139, 90, 43],
            Color::DarkBrown => [92, 51, 23],
            Color::White => [255, 255, 255],
            Color::Black => [20, 20, 20],
            Color::Blue => [70, 110, 180],
            Color::Yellow => [250, 220, 90],
        }
    }

    /// Lowercase name, for logs and debug output.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Grey => "grey",
            Color::DarkGrey => "dark_grey",
            Color::Green => "green",
            Color::DarkGreen => "dark_green",
            Color::Brown => "brown",
            Color::DarkBrown => "dark_brown",
            Color::White => "white",
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_in_unit_range() {
        for color in Color::ALL {
            let rgb = color.rgb();
            assert!(rgb.min_element() >= 0.0 && rgb.max_element() <= 1.0, "{:?}", color);
        }
    }

    #[test]
    fn test_grey_matches_roof_grey() {
        // Roof grey is 169/255 on every channel
        assert!((Color::Grey.rgb() - Vec3::splat(169.0 / 255.0)).length() < 1e-6);
    }

    #[test]
    fn test_building_red_is_pure_red() {
        assert_eq!(Color::Red.rgb(), Vec3::X);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Color::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Color::ALL.len());
    }
}
