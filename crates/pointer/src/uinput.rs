//! Linux virtual pointer device via uinput.
//!
//! Creates an absolute-axis virtual input device so the compositor sees
//! real kernel input events. Requires write access to `/dev/uinput`
//! (usually the `input` group or a udev rule).

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AbsInfo, AbsoluteAxisType, AttributeSet, EventType, InputEvent, Key, UinputAbsSetup};

use airmouse_common::error::{AirmouseError, AirmouseResult};
use airmouse_hand_model::{MouseButton, ScreenSize};

use crate::PointerSink;

/// Pointer sink backed by a uinput virtual absolute-pointer device.
pub struct UinputSink {
    device: VirtualDevice,
    screen: ScreenSize,
}

impl UinputSink {
    /// Create the virtual device sized to the target screen.
    pub fn new(screen: ScreenSize) -> AirmouseResult<Self> {
        let abs_x = UinputAbsSetup::new(
            AbsoluteAxisType::ABS_X,
            AbsInfo::new(0, 0, screen.width.saturating_sub(1) as i32, 0, 0, 0),
        );
        let abs_y = UinputAbsSetup::new(
            AbsoluteAxisType::ABS_Y,
            AbsInfo::new(0, 0, screen.height.saturating_sub(1) as i32, 0, 0, 0),
        );

        let mut keys = AttributeSet::<Key>::new();
        keys.insert(Key::BTN_LEFT);
        keys.insert(Key::BTN_RIGHT);
        keys.insert(Key::BTN_MIDDLE);

        let device = VirtualDeviceBuilder::new()
            .and_then(|builder| {
                builder
                    .name("airmouse virtual pointer")
                    .with_absolute_axis(&abs_x)?
                    .with_absolute_axis(&abs_y)?
                    .with_keys(&keys)?
                    .build()
            })
            .map_err(|e| {
                AirmouseError::pointer(format!(
                    "failed to create uinput device (check /dev/uinput access): {e}"
                ))
            })?;

        Ok(Self { device, screen })
    }

    /// Whether /dev/uinput looks writable for the current process.
    pub fn is_supported() -> bool {
        std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/uinput")
            .is_ok()
    }

    fn clamp_x(&self, x: f64) -> i32 {
        (x.round() as i32).clamp(0, self.screen.width.saturating_sub(1) as i32)
    }

    fn clamp_y(&self, y: f64) -> i32 {
        (y.round() as i32).clamp(0, self.screen.height.saturating_sub(1) as i32)
    }
}

fn button_key(button: MouseButton) -> Key {
    match button {
        MouseButton::Left => Key::BTN_LEFT,
        MouseButton::Right => Key::BTN_RIGHT,
        MouseButton::Middle => Key::BTN_MIDDLE,
    }
}

impl PointerSink for UinputSink {
    fn move_to(&mut self, x: f64, y: f64) -> AirmouseResult<()> {
        let events = [
            InputEvent::new(EventType::ABSOLUTE, AbsoluteAxisType::ABS_X.0, self.clamp_x(x)),
            InputEvent::new(EventType::ABSOLUTE, AbsoluteAxisType::ABS_Y.0, self.clamp_y(y)),
        ];
        self.device
            .emit(&events)
            .map_err(|e| AirmouseError::pointer(format!("uinput move failed: {e}")))
    }

    fn click(&mut self, button: MouseButton) -> AirmouseResult<()> {
        let key = button_key(button);
        self.device
            .emit(&[InputEvent::new(EventType::KEY, key.code(), 1)])
            .and_then(|_| {
                self.device
                    .emit(&[InputEvent::new(EventType::KEY, key.code(), 0)])
            })
            .map_err(|e| AirmouseError::pointer(format!("uinput click failed: {e}")))
    }

    fn name(&self) -> &str {
        "uinput"
    }
}
