//! ws-console library.
//!
//! Renders WebSocket message records as chat-style bubbles with a
//! collapsible JSON tree, plus the viewer app around them.

pub mod app;
pub mod body;
pub mod buffer;
pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod json_tree;
pub mod protocol;
pub mod record;
pub mod state;
pub mod telemetry;
pub mod ui;
