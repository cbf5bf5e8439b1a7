//! Core ConsoleApp struct definition and initialization

use std::path::PathBuf;

use eframe::egui;
use tracing::{info, warn};

use crate::config::{save_settings_to, Overrides, Settings};
use crate::feed::{spawn_feed, FeedHandle};
use crate::protocol::FeedSource;
use crate::state::{ConsoleState, FeedState};
use crate::ui;

/// Startup options resolved from settings and command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub source: FeedSource,
    /// As loaded from disk
    pub settings: Settings,
    pub overrides: Overrides,
    /// Where settings are written on exit; None disables saving
    pub settings_path: Option<PathBuf>,
}

pub struct ConsoleApp {
    pub state: ConsoleState,

    // Running transcript feed; None if it could not be started
    pub feed: Option<FeedHandle>,

    // Persisted preferences; only in-app changes land here
    pub settings: Settings,
    settings_path: Option<PathBuf>,

    // Chrome theme in effect, command line included
    theme: String,
}

impl ConsoleApp {
    /// Get the current chrome theme ("dark" or "light")
    pub(super) fn get_theme(&self) -> ui::theme::ConsoleTheme {
        ui::theme::ConsoleTheme::by_name(&self.theme)
    }

    pub fn new(cc: &eframe::CreationContext<'_>, options: AppOptions) -> Self {
        let app = Self::with_options(options);
        apply_visuals(&cc.egui_ctx, &app.theme);
        ui::theme::apply_app_style(&cc.egui_ctx);
        app
    }

    /// Build the app without an egui context; starts the feed.
    pub fn with_options(options: AppOptions) -> Self {
        let AppOptions {
            source,
            settings,
            overrides,
            settings_path,
        } = options;
        let effective = settings.with_overrides(&overrides);
        let mut state = ConsoleState::new(source.label(), effective.max_messages);

        let feed = match spawn_feed(source, effective.follow) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(error = %e, "failed to start transcript feed");
                state.push_status(format!("⚠ {}", e));
                state.feed_state = FeedState::Finished;
                None
            }
        };

        Self {
            state,
            feed,
            settings,
            settings_path,
            theme: effective.theme,
        }
    }

    /// Switch the chrome theme. Saved on exit.
    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = if self.theme == "light" {
            "dark".to_string()
        } else {
            "light".to_string()
        };
        self.settings.theme = self.theme.clone();
        apply_visuals(ctx, &self.theme);
        ui::theme::apply_app_style(ctx);
    }

    pub(super) fn clear_messages(&mut self) {
        self.state.log.clear();
        self.state.error_count = 0;
        info!("message list cleared");
    }
}

fn apply_visuals(ctx: &egui::Context, theme: &str) {
    match theme {
        "light" => ctx.set_visuals(egui::Visuals::light()),
        _ => ctx.set_visuals(egui::Visuals::dark()),
    }
}

impl Drop for ConsoleApp {
    fn drop(&mut self) {
        // Persist settings on exit
        if let Some(path) = &self.settings_path {
            if let Err(e) = save_settings_to(path, &self.settings) {
                warn!(error = %e, "failed to save settings");
            }
        }
    }
}
