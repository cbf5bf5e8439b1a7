//! A single WebSocket message bubble.
//!
//! Layout: a rounded block tinted by the direction preset, holding a fixed
//! indicator column (glyph over elapsed time) and a flexible content column.
//! Status lines drop the indicator column and span the wider status width.

use std::hash::Hash;

use eframe::egui::{self, Align, Layout, RichText};

use super::helpers::BubbleLayout;
use super::json_view::render_json_tree;
use crate::body::DisplayBody;
use crate::record::MessageRecord;
use crate::ui::theme::presets::{
    BUBBLE_CORNER_RADIUS, BUBBLE_MARGIN_TOP, BUBBLE_PADDING, GLYPH_SIZE,
    INDICATOR_COLUMN_WIDTH, INDICATOR_PADDING_RIGHT, TIMER_SIZE,
};
use crate::ui::theme::{BubbleAlign, BUBBLE_TEXT};

/// Render a record whose body has already been prepared.
///
/// `id_salt` must be unique among the bubbles drawn in the same `Ui`; it
/// keeps the expansion state of each tree separate.
pub fn render_message(
    ui: &mut egui::Ui,
    id_salt: impl Hash,
    record: &MessageRecord,
    body: &DisplayBody,
) -> egui::Response {
    let layout = BubbleLayout::for_record(record);
    let preset = layout.preset;

    ui.add_space(BUBBLE_MARGIN_TOP);

    let available = ui.available_width();
    let outer_width = available * preset.width_fraction;
    let lead = match preset.align {
        BubbleAlign::Start | BubbleAlign::Fill => 0.0,
        BubbleAlign::End => available - outer_width,
    };
    let inner_width = (outer_width - 2.0 * f32::from(BUBBLE_PADDING)).max(0.0);

    ui.push_id(id_salt, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            if lead > 0.0 {
                ui.add_space(lead);
            }

            egui::Frame::new()
                .fill(preset.background)
                .corner_radius(egui::CornerRadius::same(BUBBLE_CORNER_RADIUS))
                .inner_margin(egui::Margin::same(BUBBLE_PADDING))
                .show(ui, |ui| {
                    ui.set_width(inner_width);
                    ui.visuals_mut().override_text_color = Some(BUBBLE_TEXT);

                    ui.horizontal_top(|ui| {
                        if let Some(glyph) = layout.glyph {
                            render_indicator(ui, glyph, layout.timing.as_deref());
                        }
                        ui.vertical(|ui| {
                            ui.spacing_mut().item_spacing.x = 4.0;
                            render_body(ui, body);
                        });
                    });
                })
                .response
        })
        .inner
    })
    .inner
}

/// Render a bare record, parsing its body on the spot.
pub fn render_record(
    ui: &mut egui::Ui,
    id_salt: impl Hash,
    record: &MessageRecord,
) -> egui::Response {
    let body = DisplayBody::from_raw(&record.body);
    render_message(ui, id_salt, record, &body)
}

fn render_indicator(ui: &mut egui::Ui, glyph: &str, timing: Option<&str>) {
    let width = INDICATOR_COLUMN_WIDTH - INDICATOR_PADDING_RIGHT;
    ui.allocate_ui_with_layout(
        egui::vec2(width, 0.0),
        Layout::top_down(Align::Center),
        |ui| {
            ui.set_width(width);
            ui.label(RichText::new(glyph).size(GLYPH_SIZE).strong());
            if let Some(timing) = timing {
                ui.label(RichText::new(timing).size(TIMER_SIZE));
            }
        },
    );
    ui.add_space(INDICATOR_PADDING_RIGHT);
}

fn render_body(ui: &mut egui::Ui, body: &DisplayBody) {
    match body {
        DisplayBody::Tree(tree) => render_json_tree(ui, tree),
        DisplayBody::Text(text) => {
            ui.add(egui::Label::new(RichText::new(text).monospace()).wrap());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Direction;
    use eframe::egui::epaint::Shape;

    fn collect_texts(shape: &Shape, out: &mut Vec<String>) {
        match shape {
            Shape::Text(text) => out.push(text.galley.text().to_string()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_texts(s, out)),
            _ => {}
        }
    }

    /// Run one headless frame drawing `record` and return every painted string.
    fn painted_texts(record: &MessageRecord) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                render_record(ui, "bubble", record);
            });
        });
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut texts);
        }
        texts
    }

    #[test]
    fn test_sent_json_scenario() {
        let record = MessageRecord::new(Direction::Sent, r#"{"a":1,"b":{"c":2}}"#)
            .with_elapsed_ms(12.0);
        let texts = painted_texts(&record);

        assert!(texts.iter().any(|t| t == "↑"));
        assert!(texts.iter().any(|t| t == "12ms"));
        assert!(texts.iter().any(|t| t == "a:"));
        assert!(texts.iter().any(|t| t.starts_with("b:")));
        // b starts collapsed
        assert!(!texts.iter().any(|t| t == "c:"));
    }

    #[test]
    fn test_received_text_scenario() {
        let record = MessageRecord::new(Direction::Received, "plain text reply");
        let texts = painted_texts(&record);

        assert!(texts.iter().any(|t| t == "↓"));
        assert!(texts.iter().any(|t| t == "plain text reply"));
        assert!(!texts.iter().any(|t| t.ends_with("ms")));
    }

    #[test]
    fn test_status_scenario() {
        let record = MessageRecord::new(Direction::Status, "Connected").with_elapsed_ms(3.0);
        let texts = painted_texts(&record);

        assert!(texts.iter().any(|t| t == "Connected"));
        assert!(!texts.iter().any(|t| t == "↑" || t == "↓"));
        assert!(!texts.iter().any(|t| t == "3ms"));
    }

    #[test]
    fn test_invalid_json_rendered_verbatim() {
        let record = MessageRecord::new(Direction::Received, "{invalid");
        let texts = painted_texts(&record);
        assert!(texts.iter().any(|t| t == "{invalid"));
    }
}
