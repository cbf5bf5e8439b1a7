//! Text style definitions and global egui styling.

use eframe::egui::{Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Text hierarchy used by the console.
///
/// - **Small**: 10px, elapsed-time labels
/// - **Body**: 14px, toolbar and labels
/// - **Monospace**: 13px, raw message bodies and JSON tree rows
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
    ]
    .into()
}

/// Apply the console style to the egui context. Call once at startup.
pub fn apply_app_style(ctx: &eframe::egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = eframe::egui::vec2(8.0, 4.0);
    style.spacing.window_margin = eframe::egui::Margin::same(12);
    style.spacing.button_padding = eframe::egui::vec2(10.0, 5.0);

    style.visuals.widgets.inactive.corner_radius = eframe::egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = eframe::egui::CornerRadius::same(6);
    style.visuals.widgets.active.bg_fill = Color32::from_rgb(88, 101, 242);
    style.visuals.widgets.active.corner_radius = eframe::egui::CornerRadius::same(6);

    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles() {
        let styles = configure_text_styles();
        assert_eq!(styles[&TextStyle::Monospace].family, FontFamily::Monospace);
        assert_eq!(styles[&TextStyle::Small].size, 10.0);
        assert_eq!(styles.len(), 5);
    }
}
