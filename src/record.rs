//! WebSocket message records as supplied by the session that owns the socket.

use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, Result};

/// Which way a message travelled, or a connection-status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Sent,
    Received,
    Status,
}

impl Direction {
    /// Map a wire `dir` value to a direction. Anything unrecognised is a status line.
    pub fn from_wire(dir: &str) -> Self {
        match dir {
            "send" | "sent" => Direction::Sent,
            "recv" | "received" => Direction::Received,
            _ => Direction::Status,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Direction::Sent => "send",
            Direction::Received => "recv",
            Direction::Status => "status",
        }
    }

    pub fn is_status(self) -> bool {
        matches!(self, Direction::Status)
    }
}

impl From<String> for Direction {
    fn from(dir: String) -> Self {
        Direction::from_wire(&dir)
    }
}

impl From<Direction> for String {
    fn from(dir: Direction) -> Self {
        dir.as_wire().to_string()
    }
}

/// One WebSocket event to display.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    pub direction: Direction,
    /// Round-trip time in milliseconds, when known.
    pub elapsed_ms: Option<f64>,
    /// Raw payload text, JSON or not.
    pub body: String,
}

impl MessageRecord {
    pub fn new(direction: Direction, body: impl Into<String>) -> Self {
        Self {
            direction,
            elapsed_ms: None,
            body: body.into(),
        }
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: f64) -> Self {
        self.elapsed_ms = Some(elapsed_ms);
        self
    }

    /// Elapsed time if it is a usable non-negative number.
    pub fn valid_elapsed_ms(&self) -> Option<f64> {
        self.elapsed_ms.filter(|ms| ms.is_finite() && *ms >= 0.0)
    }
}

/// Transcript line layout: `{"dir": "...", "time": 12, "message": ...}`.
#[derive(Debug, Serialize, Deserialize)]
struct WireRecord {
    dir: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<f64>,
    message: serde_json::Value,
}

impl From<WireRecord> for MessageRecord {
    fn from(wire: WireRecord) -> Self {
        // Non-string payloads keep their JSON text so they still render as a tree.
        let body = match wire.message {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };
        MessageRecord {
            direction: wire.dir,
            elapsed_ms: wire.time.filter(|ms| ms.is_finite() && *ms >= 0.0),
            body,
        }
    }
}

/// Decode one transcript line. Returns `Ok(None)` for blank lines.
///
/// `line_no` is 1-based and only used for the error message.
pub fn decode_line(line: &str, line_no: usize) -> Result<Option<MessageRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let wire: WireRecord = serde_json::from_str(trimmed).map_err(|source| ConsoleError::Decode {
        line: line_no,
        source,
    })?;
    Ok(Some(wire.into()))
}

/// Encode a record as a single transcript line (no trailing newline).
pub fn encode_line(record: &MessageRecord) -> String {
    let wire = WireRecord {
        dir: record.direction,
        time: record.valid_elapsed_ms(),
        message: serde_json::Value::String(record.body.clone()),
    };
    serde_json::to_string(&wire).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_wire() {
        assert_eq!(Direction::from_wire("send"), Direction::Sent);
        assert_eq!(Direction::from_wire("recv"), Direction::Received);
        assert_eq!(Direction::from_wire("status"), Direction::Status);
        assert_eq!(Direction::from_wire("sent"), Direction::Sent);
        assert_eq!(Direction::from_wire("received"), Direction::Received);

        // Unknown values fall back to status
        assert_eq!(Direction::from_wire("ping"), Direction::Status);
        assert_eq!(Direction::from_wire(""), Direction::Status);
        assert_eq!(Direction::from_wire("SEND"), Direction::Status);
    }

    #[test]
    fn test_decode_line_string_message() {
        let record = decode_line(r#"{"dir":"send","time":12,"message":"{\"a\":1}"}"#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.direction, Direction::Sent);
        assert_eq!(record.elapsed_ms, Some(12.0));
        assert_eq!(record.body, r#"{"a":1}"#);
    }

    #[test]
    fn test_decode_line_without_time() {
        let record = decode_line(r#"{"dir":"status","message":"Connected"}"#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.direction, Direction::Status);
        assert_eq!(record.elapsed_ms, None);
        assert_eq!(record.body, "Connected");
    }

    #[test]
    fn test_decode_line_object_message_keeps_json_text() {
        let record = decode_line(r#"{"dir":"recv","message":{"ok":true}}"#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.body, r#"{"ok":true}"#);
    }

    #[test]
    fn test_decode_line_unknown_direction_is_status() {
        let record = decode_line(r#"{"dir":"close","message":"bye"}"#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.direction, Direction::Status);
    }

    #[test]
    fn test_decode_line_negative_time_dropped() {
        let record = decode_line(r#"{"dir":"recv","time":-3,"message":"x"}"#, 1)
            .unwrap()
            .unwrap();
        assert_eq!(record.elapsed_ms, None);
    }

    #[test]
    fn test_decode_line_blank_and_invalid() {
        assert!(decode_line("   ", 3).unwrap().is_none());

        let err = decode_line("not json", 4).unwrap_err();
        assert!(matches!(err, ConsoleError::Decode { line: 4, .. }));

        // Missing message field
        assert!(decode_line(r#"{"dir":"send"}"#, 5).is_err());
    }

    #[test]
    fn test_encode_line_matches_transcript_layout() {
        let record = MessageRecord::new(Direction::Received, "hello").with_elapsed_ms(42.0);
        let line = encode_line(&record);
        assert_eq!(line, r#"{"dir":"recv","time":42.0,"message":"hello"}"#);
        assert_eq!(decode_line(&line, 1).unwrap(), Some(record));
    }

    #[test]
    fn test_valid_elapsed_ms() {
        let record = MessageRecord::new(Direction::Sent, "x").with_elapsed_ms(f64::NAN);
        assert_eq!(record.valid_elapsed_ms(), None);
        let record = MessageRecord::new(Direction::Sent, "x").with_elapsed_ms(0.0);
        assert_eq!(record.valid_elapsed_ms(), Some(0.0));
    }
}
