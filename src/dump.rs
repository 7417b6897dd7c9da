//! Dump raw input events from the gamepad for debugging.
//! Run: gamepad-mouse dump  (Ctrl+C to stop).

use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::device::{EventSource, Gamepad};
use crate::input::event::code_name;

pub fn run_dump(
    path: &Path,
    interval: Duration,
    stop: impl Fn() -> bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut gamepad = Gamepad::open(path)?;
    let name = gamepad.name().unwrap_or_else(|_| "unknown".into());
    eprintln!(
        "Dumping events from {} ({}) (Ctrl+C to stop):\n",
        gamepad.path().display(),
        name
    );

    let mut events = Vec::with_capacity(64);
    let mut n = 0u64;
    while !stop() {
        events.clear();
        gamepad.drain(&mut events)?;
        for ev in &events {
            n += 1;
            let name = code_name(ev.event_type().raw(), ev.raw_code());
            println!("{:6}  {}  value={}", n, name, ev.raw_value());
        }
        thread::sleep(interval);
    }
    Ok(())
}
