//! Recording stub for tests.

use std::sync::{Arc, Mutex};

use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::{MouseButton, PointerEvent};

use crate::PointerSink;

/// Pointer sink that records every dispatched event in memory instead of
/// touching the OS pointer. Timestamps are sequence numbers, so assertions
/// stay deterministic. Clones share the same event store, which lets a test
/// hand one clone to the loop and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<PointerEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in dispatch order.
    pub fn events(&self) -> Vec<PointerEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded pointer-move positions in dispatch order.
    pub fn moves(&self) -> Vec<(f64, f64)> {
        self.events()
            .iter()
            .filter(|e| !e.is_click())
            .map(|e| e.position())
            .collect()
    }

    /// Number of recorded click events.
    pub fn click_count(&self) -> usize {
        self.events().iter().filter(|e| e.is_click()).count()
    }

    fn push(&self, event: PointerEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }

    fn last_position(&self) -> (f64, f64) {
        self.events()
            .iter()
            .rev()
            .find(|e| !e.is_click())
            .map(|e| e.position())
            .unwrap_or((0.0, 0.0))
    }
}

impl PointerSink for RecordingSink {
    fn move_to(&mut self, x: f64, y: f64) -> AirmouseResult<()> {
        let seq = self.events().len() as u64;
        self.push(PointerEvent::moved(seq, x, y));
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> AirmouseResult<()> {
        let seq = self.events().len() as u64;
        let (x, y) = self.last_position();
        self.push(PointerEvent::click(seq, button, x, y));
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
