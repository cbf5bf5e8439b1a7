//! Toolbar and central panel rendering

use eframe::egui;

use crate::app::ConsoleApp;
use crate::ui;

impl ConsoleApp {
    /// Render the toolbar at the top of the window
    pub(in crate::app) fn render_toolbar(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();

        let action = egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                ui::toolbar::render_toolbar(
                    ui,
                    &self.state.source_label,
                    self.state.log.counts,
                    self.state.error_count,
                    self.state.feed_state,
                    &theme,
                )
            })
            .inner;

        match action {
            Some(ui::toolbar::ToolbarAction::Clear) => self.clear_messages(),
            Some(ui::toolbar::ToolbarAction::ToggleTheme) => self.toggle_theme(ctx),
            None => {}
        }
    }

    /// Render the central panel with the message list
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let theme = self.get_theme();
        let list_bg = theme.surface[0];
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(list_bg).inner_margin(12.0))
            .show(ctx, |ui| {
                ui::messages::render_messages(ui, &self.state.log, &theme);
            });
    }
}
