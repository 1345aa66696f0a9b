//! Append-only event logger.
//!
//! Optionally mirrors every dispatched pointer event to a JSONL file:
//! a `# {header}` comment line followed by one event per line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::{EventStreamHeader, PointerEvent};

/// Writes dispatched events to a JSONL file.
pub struct EventLogger {
    writer: BufWriter<File>,
    path: PathBuf,
    events_written: u64,
}

impl EventLogger {
    /// Create a new logger, writing the header as the first line.
    pub fn new(path: PathBuf, header: EventStreamHeader) -> AirmouseResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);

        let header_json = serde_json::to_string(&header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| AirmouseError::pointer(format!("failed to write log header: {e}")))?;

        Ok(Self {
            writer,
            path,
            events_written: 0,
        })
    }

    /// Write a single event as a JSONL line.
    pub fn write_event(&mut self, event: &PointerEvent) -> AirmouseResult<()> {
        let json = serde_json::to_string(event)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| AirmouseError::pointer(format!("failed to write event: {e}")))?;
        self.events_written += 1;

        // Flush every 1000 events for crash safety
        if self.events_written % 1000 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> AirmouseResult<()> {
        self.writer
            .flush()
            .map_err(|e| AirmouseError::pointer(format!("failed to flush event log: {e}")))?;
        Ok(())
    }

    /// Number of events written.
    pub fn events_written(&self) -> u64 {
        self.events_written
    }

    /// Path to the output file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for EventLogger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airmouse_hand_model::event::parse_events;
    use airmouse_hand_model::MouseButton;

    fn test_header() -> EventStreamHeader {
        EventStreamHeader {
            schema_version: "1.0".to_string(),
            epoch_wall: "2026-01-01T00:00:00Z".to_string(),
            frame_width: 640,
            frame_height: 480,
            screen_width: 1920,
            screen_height: 1080,
        }
    }

    #[test]
    fn test_logger_roundtrip() {
        let dir = std::env::temp_dir().join("airmouse_test_logger");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("events.jsonl");
        {
            let mut logger = EventLogger::new(path.clone(), test_header()).unwrap();
            logger
                .write_event(&PointerEvent::moved(0, 960.0, 540.0))
                .unwrap();
            logger
                .write_event(&PointerEvent::click(
                    100_000_000,
                    MouseButton::Left,
                    960.0,
                    540.0,
                ))
                .unwrap();
            assert_eq!(logger.events_written(), 2);
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // 1 header + 2 events
        assert!(lines[0].starts_with("# "));

        let events = parse_events(&content).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[1].is_click());

        std::fs::remove_dir_all(&dir).ok();
    }
}
