//! Top toolbar: transcript source, message counters and list controls.

use eframe::egui::{self, RichText, Stroke};

use crate::buffer::DirectionCounts;
use crate::state::FeedState;
use crate::ui::theme::ConsoleTheme;

/// Actions that the toolbar can request
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// Drop every message from the list
    Clear,
    /// Switch between dark and light chrome
    ToggleTheme,
}

/// Render the toolbar.
/// Returns Some(ToolbarAction) if an action was requested.
pub fn render_toolbar(
    ui: &mut egui::Ui,
    source_label: &str,
    counts: DirectionCounts,
    error_count: usize,
    feed_state: FeedState,
    theme: &ConsoleTheme,
) -> Option<ToolbarAction> {
    let mut toolbar_action: Option<ToolbarAction> = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.spacing_mut().button_padding = egui::vec2(8.0, 4.0);

        render_feed_dot(ui, feed_state, theme);
        ui.label(RichText::new(source_label).strong().color(theme.text_primary));

        ui.separator();
        ui.label(
            RichText::new(format!("↑ {}  ↓ {}  • {}", counts.sent, counts.received, counts.status))
                .color(theme.text_muted),
        );
        if error_count > 0 {
            ui.label(
                RichText::new(format!("{} bad lines", error_count))
                    .small()
                    .color(theme.warning),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_label = if theme.name == "Dark" { "☀ Light" } else { "🌙 Dark" };
            if ui.button(theme_label).clicked() {
                toolbar_action = Some(ToolbarAction::ToggleTheme);
            }
            if ui.button("Clear").on_hover_text("Ctrl+L").clicked() {
                toolbar_action = Some(ToolbarAction::Clear);
            }
        });
    });

    toolbar_action
}

/// Filled dot while the feed is live, hollow once it has finished.
fn render_feed_dot(ui: &mut egui::Ui, feed_state: FeedState, theme: &ConsoleTheme) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    let center = rect.center();
    match feed_state {
        FeedState::Live => {
            ui.painter().circle_filled(center, 4.0, theme.success);
        }
        FeedState::Starting => {
            ui.painter().circle_filled(center, 4.0, theme.warning);
        }
        FeedState::Finished => {
            ui.painter()
                .circle_stroke(center, 4.0, Stroke::new(1.5, theme.text_muted));
        }
    }
    response.on_hover_text(match feed_state {
        FeedState::Starting => "Opening source",
        FeedState::Live => "Reading",
        FeedState::Finished => "Finished",
    });
}
