//! Event processing from the transcript feed

use super::ConsoleApp;
use crate::events;

impl ConsoleApp {
    /// Drain everything the feed has sent since the last frame.
    pub fn process_events(&mut self) {
        let Some(feed) = &self.feed else {
            return;
        };

        let pending: Vec<_> = feed.events.try_iter().collect();
        for event in pending {
            events::process_single_event(&mut self.state, event);
        }
    }
}
