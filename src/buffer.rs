use chrono::Local;

use crate::body::{BodyKind, DisplayBody};
use crate::record::{Direction, MessageRecord};

/// Default maximum entries to keep before trimming
pub const DEFAULT_MAX_MESSAGES: usize = 2000;
/// Number of oldest entries to remove when trimming
pub const DEFAULT_TRIM_COUNT: usize = 500;

/// A record together with its prepared body and arrival time
#[derive(Clone, Debug)]
pub struct MessageEntry {
    /// Monotonic id, used as the egui id salt for the bubble
    pub seq: u64,
    /// Local arrival time, "HH:MM:SS"
    pub timestamp: String,
    pub record: MessageRecord,
    pub body: DisplayBody,
}

impl MessageEntry {
    pub fn kind(&self) -> BodyKind {
        self.body.kind()
    }
}

/// Per-direction counters shown in the toolbar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionCounts {
    pub sent: usize,
    pub received: usize,
    pub status: usize,
}

impl DirectionCounts {
    fn bump(&mut self, direction: Direction) {
        match direction {
            Direction::Sent => self.sent += 1,
            Direction::Received => self.received += 1,
            Direction::Status => self.status += 1,
        }
    }
}

/// Bounded, arrival-ordered list of messages for display
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: Vec<MessageEntry>,
    max_messages: usize,
    trim_count: usize,
    next_seq: u64,
    /// Totals since the last clear, trimmed entries included
    pub counts: DirectionCounts,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}

impl MessageLog {
    pub fn new(max_messages: usize) -> Self {
        let max_messages = max_messages.max(1);
        Self {
            entries: Vec::new(),
            max_messages,
            trim_count: DEFAULT_TRIM_COUNT.min(max_messages),
            next_seq: 0,
            counts: DirectionCounts::default(),
        }
    }

    /// Prepare and append a record, trimming the oldest entries when full.
    pub fn push(&mut self, record: MessageRecord) -> &MessageEntry {
        let body = DisplayBody::from_raw(&record.body);
        self.counts.bump(record.direction);
        let entry = MessageEntry {
            seq: self.next_seq,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            record,
            body,
        };
        self.next_seq += 1;
        self.entries.push(entry);

        if self.entries.len() > self.max_messages {
            self.entries.drain(0..self.trim_count);
        }
        // Just pushed, so the log is non-empty
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[MessageEntry] {
        &self.entries
    }

    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.counts = DirectionCounts::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_prepares_body() {
        let mut log = MessageLog::default();
        let entry = log.push(MessageRecord::new(Direction::Sent, r#"{"a":1}"#));
        assert_eq!(entry.kind(), BodyKind::Structured);
        let entry = log.push(MessageRecord::new(Direction::Received, "hello"));
        assert_eq!(entry.kind(), BodyKind::Text);
        assert_eq!(entry.seq, 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_push_trims_oldest() {
        let mut log = MessageLog::default();
        for i in 0..(DEFAULT_MAX_MESSAGES + 10) {
            log.push(MessageRecord::new(Direction::Received, format!("msg{}", i)));
        }
        assert!(log.len() <= DEFAULT_MAX_MESSAGES);
        // Oldest entries went first
        assert_eq!(log.entries()[0].record.body, format!("msg{}", DEFAULT_TRIM_COUNT));
        assert_eq!(log.counts.received, DEFAULT_MAX_MESSAGES + 10);
    }

    #[test]
    fn test_small_limit_trims_whole_log() {
        let mut log = MessageLog::new(3);
        for i in 0..4 {
            log.push(MessageRecord::new(Direction::Sent, format!("{}", i)));
        }
        assert!(log.len() <= 3);
    }

    #[test]
    fn test_counts_and_clear() {
        let mut log = MessageLog::default();
        log.push(MessageRecord::new(Direction::Sent, "a"));
        log.push(MessageRecord::new(Direction::Received, "b"));
        log.push(MessageRecord::new(Direction::Status, "Connected"));
        assert_eq!(
            log.counts,
            DirectionCounts {
                sent: 1,
                received: 1,
                status: 1
            }
        );
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.counts, DirectionCounts::default());
    }
}
