//! Applying feed events to the viewer state.

use tracing::{debug, warn};

use crate::protocol::FeedEvent;
use crate::state::{ConsoleState, FeedState};

/// Apply one event from the feed.
pub fn process_single_event(state: &mut ConsoleState, event: FeedEvent) {
    match event {
        FeedEvent::Opened(label) => {
            debug!(source = %label, "feed opened");
            state.source_label = label;
            state.feed_state = FeedState::Live;
        }

        FeedEvent::Record(record) => {
            state.log.push(record);
        }

        FeedEvent::Error(msg) => {
            warn!(error = %msg, "feed error");
            state.error_count += 1;
            state.push_status(format!("⚠ {}", msg));
        }

        FeedEvent::Finished => {
            state.feed_state = FeedState::Finished;
            state.push_status(format!("Finished reading {}", state.source_label));
        }
    }
}
