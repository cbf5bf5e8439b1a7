//! Color themes for the console chrome and the JSON tree.
//!
//! The window chrome follows the dark/light setting. Message bubbles use the
//! fixed presets in `presets.rs` regardless of the chrome theme, so bubble
//! content is always drawn with the dark-on-light palette below.

use eframe::egui::Color32;

use crate::json_tree::LeafKind;

/// Chrome theme with a small surface hierarchy
#[derive(Clone, Debug)]
pub struct ConsoleTheme {
    pub name: String,
    /// 0: app background, 1: toolbar, 2: hover
    pub surface: [Color32; 3],
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border_medium: Color32,
}

impl ConsoleTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),
                Color32::from_rgb(19, 19, 26),
                Color32::from_rgb(37, 37, 50),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(114, 118, 125),
            border_medium: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(227, 229, 232),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_muted: Color32::from_rgb(116, 127, 141),
            border_medium: Color32::from_rgb(210, 213, 219),
        }
    }

    /// Resolve a theme by its settings name; anything but "light" is dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Text color inside message bubbles.
pub const BUBBLE_TEXT: Color32 = Color32::from_rgb(34, 34, 34);

/// Muted text inside bubbles (item counts, timestamps on hover).
pub const BUBBLE_TEXT_MUTED: Color32 = Color32::from_rgb(110, 110, 110);

/// Key color in the JSON tree.
pub const TREE_KEY: Color32 = Color32::from_rgb(40, 40, 40);

/// Value colors for the JSON tree, tuned for the light bubble backgrounds.
pub fn leaf_color(kind: LeafKind) -> Color32 {
    match kind {
        LeafKind::String => Color32::from_rgb(200, 60, 30),
        LeafKind::Integer => Color32::from_rgb(0, 130, 110),
        LeafKind::Float => Color32::from_rgb(0, 110, 150),
        LeafKind::Boolean => Color32::from_rgb(150, 50, 170),
        LeafKind::Null => Color32::from_rgb(120, 120, 120),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_by_name() {
        assert_eq!(ConsoleTheme::by_name("light").name, "Light");
        assert_eq!(ConsoleTheme::by_name("dark").name, "Dark");
        assert_eq!(ConsoleTheme::by_name("solarized").name, "Dark");
    }

    #[test]
    fn test_leaf_colors_distinct_for_strings_and_numbers() {
        assert_ne!(leaf_color(LeafKind::String), leaf_color(LeafKind::Integer));
        assert_ne!(leaf_color(LeafKind::Integer), leaf_color(LeafKind::Float));
    }
}
