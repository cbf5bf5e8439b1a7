//! The scrolling message list.

use eframe::egui::{self, RichText};

use super::bubble::render_message;
use crate::buffer::MessageLog;
use crate::ui::theme::ConsoleTheme;

/// Render every entry of the log, newest at the bottom.
pub fn render_messages(ui: &mut egui::Ui, log: &MessageLog, theme: &ConsoleTheme) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);

            if log.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new("No messages yet")
                            .size(13.0)
                            .color(theme.text_muted),
                    );
                });
            }

            for entry in log.entries() {
                render_message(ui, entry.seq, &entry.record, &entry.body)
                    .on_hover_text(&entry.timestamp);
            }

            ui.add_space(8.0);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Direction, MessageRecord};

    #[test]
    fn test_render_messages_headless() {
        let mut log = MessageLog::default();
        log.push(MessageRecord::new(Direction::Status, "Connected"));
        log.push(MessageRecord::new(Direction::Sent, r#"{"op":"sub","args":[1,2]}"#).with_elapsed_ms(3.0));
        log.push(MessageRecord::new(Direction::Received, "ack"));
        let theme = ConsoleTheme::dark();

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_messages(ui, &log, &theme);
                });
            });
        }
    }
}
