//! Collapsible JSON tree view for structured message bodies.

use eframe::egui::{self, RichText, TextStyle};

use crate::json_tree::{JsonNode, NodeValue};
use crate::ui::theme::{leaf_color, BUBBLE_TEXT_MUTED, TREE_KEY};

/// Draw a tree. Containers use collapsing headers seeded with the node's
/// default open state; no type markers and no clipboard buttons are shown.
pub(crate) fn render_json_tree(ui: &mut egui::Ui, tree: &JsonNode) {
    ui.style_mut().override_text_style = Some(TextStyle::Monospace);
    ui.spacing_mut().item_spacing.y = 2.0;
    render_node(ui, tree);
}

fn render_node(ui: &mut egui::Ui, node: &JsonNode) {
    match &node.value {
        NodeValue::Leaf { text, kind } => {
            ui.horizontal_wrapped(|ui| {
                if let Some(key) = &node.key {
                    ui.label(RichText::new(format!("{}:", key.label())).color(TREE_KEY));
                }
                ui.label(RichText::new(text).color(leaf_color(*kind)));
            });
        }
        NodeValue::Object(children) | NodeValue::Array(children) => {
            let header = match &node.key {
                Some(key) => format!("{}: {}", key.label(), node.summary()),
                None => node.summary(),
            };
            egui::CollapsingHeader::new(RichText::new(header).color(TREE_KEY))
                .id_salt(node.id_path())
                .default_open(node.default_open)
                .show(ui, |ui| {
                    if children.is_empty() {
                        ui.label(RichText::new("empty").italics().color(BUBBLE_TEXT_MUTED));
                    }
                    for child in children {
                        render_node(ui, child);
                    }
                });
        }
    }
}
