//! Color themes, bubble presets and text styles.

pub mod colors;
pub mod fonts;
pub mod presets;

pub use colors::{leaf_color, ConsoleTheme, BUBBLE_TEXT, BUBBLE_TEXT_MUTED, TREE_KEY};
pub use fonts::{apply_app_style, configure_text_styles};
pub use presets::{preset_for, BubbleAlign, BubblePreset};
