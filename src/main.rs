//! ws-console - a viewer for recorded WebSocket traffic built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Feed thread: runs a Tokio runtime reading the transcript
//! - Communication via crossbeam channels

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing::{info, warn};

use ws_console::app::{AppOptions, ConsoleApp};
use ws_console::config::{load_settings_from, settings_path, Overrides, Settings};
use ws_console::protocol::FeedSource;
use ws_console::telemetry::init_tracing;

/// View WebSocket messages from a JSON-lines transcript.
///
/// Each line is `{"dir": "send"|"recv"|"status", "time": <ms>, "message": ...}`.
#[derive(Parser, Debug)]
#[command(name = "ws-console", version)]
struct Args {
    /// Transcript file; omit or use "-" to read stdin
    path: Option<PathBuf>,

    /// Keep watching the file for appended lines
    #[arg(short, long)]
    follow: bool,

    /// Window theme
    #[arg(long, value_parser = ["dark", "light"])]
    theme: Option<String>,

    /// Messages kept before the oldest are dropped
    #[arg(long, env = "WS_CONSOLE_MAX_MESSAGES")]
    max_messages: Option<usize>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_tracing("info");

    let settings_path = settings_path()
        .map_err(|e| warn!(error = %e, "no settings location, settings will not be saved"))
        .ok();
    let settings = settings_path
        .as_deref()
        .map(|path| {
            load_settings_from(path).unwrap_or_else(|e| {
                warn!(error = %e, "could not load settings, using defaults");
                Settings::default()
            })
        })
        .unwrap_or_default();
    let overrides = Overrides {
        theme: args.theme,
        max_messages: args.max_messages,
        follow: args.follow,
    };

    let source = FeedSource::from_arg(args.path.as_deref());
    info!(
        source = %source.label(),
        follow = settings.with_overrides(&overrides).follow,
        "starting ws-console"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(format!("ws-console - {}", source.label())),
        ..Default::default()
    };

    let app_options = AppOptions {
        source,
        settings,
        overrides,
        settings_path,
    };
    eframe::run_native(
        "ws-console",
        options,
        Box::new(move |cc| Ok(Box::new(ConsoleApp::new(cc, app_options)))),
    )
}
