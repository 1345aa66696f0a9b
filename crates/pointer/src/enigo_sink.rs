//! Cross-platform pointer injection via enigo.

use enigo::{Enigo, MouseControllable};

use airmouse_common::error::AirmouseResult;
use airmouse_hand_model::MouseButton;

use crate::PointerSink;

/// Pointer sink driving the real OS cursor through enigo.
pub struct EnigoSink {
    enigo: Enigo,
}

impl EnigoSink {
    pub fn new() -> Self {
        Self {
            enigo: Enigo::new(),
        }
    }
}

impl Default for EnigoSink {
    fn default() -> Self {
        Self::new()
    }
}

fn to_enigo_button(button: MouseButton) -> enigo::MouseButton {
    match button {
        MouseButton::Left => enigo::MouseButton::Left,
        MouseButton::Right => enigo::MouseButton::Right,
        MouseButton::Middle => enigo::MouseButton::Middle,
    }
}

impl PointerSink for EnigoSink {
    fn move_to(&mut self, x: f64, y: f64) -> AirmouseResult<()> {
        self.enigo.mouse_move_to(x.round() as i32, y.round() as i32);
        Ok(())
    }

    fn click(&mut self, button: MouseButton) -> AirmouseResult<()> {
        self.enigo.mouse_click(to_enigo_button(button));
        Ok(())
    }

    fn name(&self) -> &str {
        "enigo"
    }
}
