//! WebSocket message rendering for the central panel.

mod bubble;
mod helpers;
mod json_view;
mod render;

// Re-export public API
pub use bubble::{render_message, render_record};
pub use helpers::BubbleLayout;
pub use render::render_messages;
