//! Dispatched pointer event types.
//!
//! Every pointer-move and click the control loop dispatches can be logged
//! as an append-only JSONL stream for diagnostics and replay. Coordinates
//! are absolute screen pixels, matching what the pointer sink received.

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in nanoseconds since run start.
pub type TimestampNs = u64;

/// A single dispatched pointer event with timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Monotonic nanoseconds since run start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// The event payload.
    #[serde(flatten)]
    pub kind: EventKind,
}

/// Discriminated union of dispatched event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Absolute pointer move.
    Move {
        /// Screen X coordinate in pixels.
        x: f64,
        /// Screen Y coordinate in pixels.
        y: f64,
    },

    /// Button click (press and release).
    Click {
        /// Which button was clicked.
        button: MouseButton,
        /// Pointer position at click time.
        x: f64,
        y: f64,
    },
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Stream header with run metadata, written as the first log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at run start (ISO 8601).
    pub epoch_wall: String,

    /// Source frame dimensions in pixels.
    pub frame_width: u32,
    pub frame_height: u32,

    /// Target screen dimensions in pixels.
    pub screen_width: u32,
    pub screen_height: u32,
}

impl PointerEvent {
    /// Create a pointer-move event.
    pub fn moved(timestamp_ns: TimestampNs, x: f64, y: f64) -> Self {
        Self {
            timestamp_ns,
            kind: EventKind::Move { x, y },
        }
    }

    /// Create a click event.
    pub fn click(timestamp_ns: TimestampNs, button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            timestamp_ns,
            kind: EventKind::Click { button, x, y },
        }
    }

    /// Timestamp as fractional seconds since run start.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000_000.0
    }

    /// The screen position carried by this event.
    pub fn position(&self) -> (f64, f64) {
        match &self.kind {
            EventKind::Move { x, y } => (*x, *y),
            EventKind::Click { x, y, .. } => (*x, *y),
        }
    }

    /// Whether this is a click event.
    pub fn is_click(&self) -> bool {
        matches!(self.kind, EventKind::Click { .. })
    }
}

/// Parse events from JSONL content (one JSON object per line).
pub fn parse_events(jsonl: &str) -> Result<Vec<PointerEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize events to JSONL format.
pub fn serialize_events(events: &[PointerEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_event_roundtrip() {
        let event = PointerEvent::moved(1_000_000_000, 960.0, 540.0);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: PointerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }

    #[test]
    fn test_click_event_roundtrip() {
        let event = PointerEvent::click(2_000_000_000, MouseButton::Left, 100.0, 200.0);
        let json = serde_json::to_string(&event).unwrap();
        let parsed: PointerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
        assert!(parsed.is_click());
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let events = vec![
            PointerEvent::moved(0, 0.0, 0.0),
            PointerEvent::click(100_000_000, MouseButton::Left, 960.0, 540.0),
            PointerEvent::moved(200_000_000, 961.0, 540.5),
        ];
        let jsonl = serialize_events(&events).unwrap();
        let parsed = parse_events(&jsonl).unwrap();
        assert_eq!(events, parsed);
    }

    #[test]
    fn test_parse_events_skips_header_comment() {
        let jsonl = "# {\"schema_version\":\"1.0\"}\n{\"t\":0,\"type\":\"move\",\"x\":1.0,\"y\":2.0}\n";
        let parsed = parse_events(jsonl).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].timestamp_ns, 0);
    }

    #[test]
    fn test_json_format_is_stable() {
        let event = PointerEvent::moved(1234567890123, 12.5, 7.25);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"t\":1234567890123"));
        assert!(json.contains("\"type\":\"move\""));
        assert!(json.contains("\"x\":12.5"));
        assert!(json.contains("\"y\":7.25"));
    }

    #[test]
    fn test_position_extraction() {
        let mv = PointerEvent::moved(0, 3.0, 7.0);
        assert_eq!(mv.position(), (3.0, 7.0));

        let click = PointerEvent::click(0, MouseButton::Left, 1.0, 2.0);
        assert_eq!(click.position(), (1.0, 2.0));
    }

    #[test]
    fn test_timestamp_secs() {
        let event = PointerEvent::moved(1_500_000_000, 0.0, 0.0);
        assert!((event.timestamp_secs() - 1.5).abs() < 1e-9);
    }
}
