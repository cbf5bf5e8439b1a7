//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::ConsoleApp;
use crate::state::FeedState;
use crate::ui;

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        let mut clear = false;
        let mut toggle_theme = false;
        ctx.input(|i| {
            // Ctrl+L: Clear the message list
            if i.modifiers.ctrl && i.key_pressed(egui::Key::L) {
                clear = true;
            }
            // Ctrl+T: Toggle chrome theme
            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                toggle_theme = true;
            }
        });
        if clear {
            self.clear_messages();
        }
        if toggle_theme {
            self.toggle_theme(ctx);
        }

        // Keep polling while records can still arrive
        if self.state.feed_state != FeedState::Finished {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if !self.state.status_messages.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(500));
        }
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        self.render_toolbar(ctx);
        self.render_central_panel(ctx);

        let theme = self.get_theme();
        ui::render_status_toasts(ctx, &self.state.status_messages, &theme);
    }
}
