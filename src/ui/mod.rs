//! UI rendering modules for the console.
//!
//! - `messages`: message bubbles, JSON tree view and the scrolling list
//! - `toolbar`: source, counters and list controls
//! - `status_toasts`: transient notifications
//! - `theme`: chrome colors, bubble presets and text styles

pub mod messages;
pub mod status_toasts;
pub mod theme;
pub mod toolbar;

pub use messages::*;
pub use status_toasts::*;
pub use toolbar::*;
