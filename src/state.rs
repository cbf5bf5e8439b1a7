//! Core viewer state, separated from UI logic.
//!
//! `ConsoleState` holds what the window displays: the message log, the feed
//! status and transient toasts. UI components receive it as a parameter.

use std::time::{Duration, Instant};

use crate::buffer::MessageLog;

/// Lifecycle of the transcript feed as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// Spawned, source not opened yet
    Starting,
    /// Records may still arrive
    Live,
    /// The feed ended, either at EOF or after an error
    Finished,
}

pub struct ConsoleState {
    pub log: MessageLog,

    /// Label of the transcript source (path or "stdin")
    pub source_label: String,

    pub feed_state: FeedState,

    /// Number of transcript lines that failed to decode
    pub error_count: usize,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl ConsoleState {
    pub fn new(source_label: impl Into<String>, max_messages: usize) -> Self {
        Self {
            log: MessageLog::new(max_messages),
            source_label: source_label.into(),
            feed_state: FeedState::Starting,
            error_count: 0,
            status_messages: Vec::new(),
        }
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages.push((message.into(), Instant::now()));
    }

    /// Drop toasts older than `max_age_secs`.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        let max_age = Duration::from_secs(max_age_secs);
        self.status_messages
            .retain(|(_, created)| created.elapsed() < max_age);
    }
}
