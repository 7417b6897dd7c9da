//! The physical gamepad we read from and the virtual pointer we write to.

use std::io;
use std::path::{Path, PathBuf};

use evdevil::event::{InputEvent, Key, Rel};
use evdevil::uinput::UinputDevice;
use evdevil::Evdev;

use crate::input::{Output, StickAxis};

/// Keys advertised by the virtual pointer. Never changes after creation.
pub const POINTER_KEYS: [Key; 8] = [
    Key::BTN_LEFT,
    Key::BTN_RIGHT,
    Key::KEY_LEFTCTRL,
    Key::KEY_LEFTALT,
    Key::KEY_LEFT,
    Key::KEY_RIGHT,
    Key::KEY_UP,
    Key::KEY_DOWN,
];

/// Relative axes advertised by the virtual pointer.
pub const POINTER_AXES: [Rel; 4] = [Rel::X, Rel::Y, Rel::WHEEL_HI_RES, Rel::HWHEEL_HI_RES];

pub trait EventSource {
    /// Append every event already queued on the device to `out`. Never blocks.
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> io::Result<()>;

    /// Current absolute position of a stick axis, as held by the device.
    fn stick(&self, axis: StickAxis) -> io::Result<i32>;
}

pub trait EventSink {
    /// Write one batch. The batch already ends with `Output::Sync`.
    fn send(&mut self, batch: &[Output]) -> io::Result<()>;
}

/// Non-blocking handle to a gamepad evdev node. Closed on drop.
pub struct Gamepad {
    dev: Evdev,
    path: PathBuf,
}

impl Gamepad {
    pub fn open(path: &Path) -> io::Result<Self> {
        let dev = Evdev::open(path)?;
        dev.set_nonblocking(true)?;
        Ok(Self {
            dev,
            path: path.to_path_buf(),
        })
    }

    pub fn name(&self) -> io::Result<String> {
        self.dev.name()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for Gamepad {
    fn drain(&mut self, out: &mut Vec<InputEvent>) -> io::Result<()> {
        // The iterator ends once the non-blocking read would block.
        for ev in self.dev.raw_events() {
            out.push(ev?);
        }
        Ok(())
    }

    fn stick(&self, axis: StickAxis) -> io::Result<i32> {
        Ok(self.dev.abs_info(axis.abs())?.value())
    }
}

/// uinput mouse + arrow-key device. Unregistered on drop.
pub struct VirtualPointer {
    uinput: UinputDevice,
    buf: Vec<InputEvent>,
}

impl VirtualPointer {
    pub fn create(name: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let uinput = UinputDevice::builder()?
            .with_rel_axes(POINTER_AXES)?
            .with_keys(POINTER_KEYS)?
            .build(name)?;

        if let Ok(sysname) = uinput.sysname() {
            log::info!(
                "Virtual pointer ready: /sys/devices/virtual/input/{}",
                sysname.to_string_lossy()
            );
        }

        Ok(Self {
            uinput,
            buf: Vec::with_capacity(32),
        })
    }
}

impl EventSink for VirtualPointer {
    fn send(&mut self, batch: &[Output]) -> io::Result<()> {
        self.buf.clear();
        self.buf.extend(report_body(batch).iter().map(|out| out.to_event()));
        // `finish` writes the SYN_REPORT that closes the batch.
        self.uinput.writer().write_events(&self.buf)?.finish()?;
        Ok(())
    }
}

/// The batch without its trailing sync marker.
fn report_body(batch: &[Output]) -> &[Output] {
    batch.strip_suffix(&[Output::Sync]).unwrap_or(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_set_covers_every_mapped_output() {
        use crate::input::{translate, AnalogMapping, GamepadInput, StickState};

        let mut out = Vec::new();
        for input in [
            GamepadInput::East(1),
            GamepadInput::South(1),
            GamepadInput::TriggerLeft(1),
            GamepadInput::TriggerRight(1),
            GamepadInput::HatX(0),
            GamepadInput::HatY(0),
        ] {
            translate(input, &mut out);
        }
        AnalogMapping::default().translate(
            &StickState { x: 9000, y: 9000, rx: 9000, ry: 9000 },
            &mut out,
        );

        for output in out {
            match output {
                Output::Key(key, _) => assert!(POINTER_KEYS.contains(&key), "{:?}", key),
                Output::Rel(rel, _) => assert!(POINTER_AXES.contains(&rel), "{:?}", rel),
                Output::Sync => {}
            }
        }
    }

    #[test]
    fn only_one_sync_marker_reaches_the_writer() {
        let batch = [Output::Key(Key::BTN_LEFT, 1), Output::Rel(Rel::X, 3), Output::Sync];
        assert_eq!(
            report_body(&batch),
            &[Output::Key(Key::BTN_LEFT, 1), Output::Rel(Rel::X, 3)]
        );
        assert!(!report_body(&batch).contains(&Output::Sync));
        assert_eq!(report_body(&[Output::Sync]), &[] as &[Output]);
    }

    #[test]
    fn opening_a_missing_node_fails() {
        assert!(Gamepad::open(Path::new("/nonexistent/event99")).is_err());
    }
}
