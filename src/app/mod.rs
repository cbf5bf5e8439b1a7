//! Application module structure for ConsoleApp
//!
//! - `core`: ConsoleApp struct and initialization
//! - `events`: draining the transcript feed
//! - `update`: main update loop and global shortcuts
//! - `panels`: toolbar and central panel rendering

pub mod core;
pub mod events;
pub mod panels;
pub mod update;

pub use core::{AppOptions, ConsoleApp};
