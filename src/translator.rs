//! Poll the gamepad, translate, and flush one atomic batch per tick.

use std::io;
use std::thread;
use std::time::Duration;

use evdevil::event::InputEvent;

use crate::device::{EventSink, EventSource};
use crate::input::{translate, AnalogMapping, GamepadInput, Output, StickAxis, StickState};

pub struct Translator<S, K> {
    source: S,
    sink: K,
    analog: AnalogMapping,
    raw: Vec<InputEvent>,
    batch: Vec<Output>,
    frame_count: u64,
}

impl<S: EventSource, K: EventSink> Translator<S, K> {
    pub fn new(source: S, sink: K, analog: AnalogMapping) -> Self {
        Self {
            source,
            sink,
            analog,
            raw: Vec::with_capacity(64),
            batch: Vec::with_capacity(32),
            frame_count: 0,
        }
    }

    /// Run one polling iteration. Returns the number of events flushed,
    /// including the trailing sync marker, or 0 if nothing was sent.
    pub fn tick(&mut self) -> io::Result<usize> {
        self.raw.clear();
        self.batch.clear();

        self.source.drain(&mut self.raw)?;
        for ev in &self.raw {
            translate(GamepadInput::classify(ev), &mut self.batch);
        }

        let mut sticks = StickState::default();
        for axis in StickAxis::ALL {
            sticks.set(axis, self.source.stick(axis)?);
        }
        self.analog.translate(&sticks, &mut self.batch);

        if self.batch.is_empty() {
            return Ok(0);
        }

        self.batch.push(Output::Sync);
        self.sink.send(&self.batch)?;
        self.log_progress();

        Ok(self.batch.len())
    }

    /// Tick every `interval` until `stop` returns true.
    pub fn run(&mut self, interval: Duration, stop: impl Fn() -> bool) -> io::Result<()> {
        while !stop() {
            self.tick()?;
            thread::sleep(interval);
        }
        log::debug!("Translator stopped after {} batches", self.frame_count);
        Ok(())
    }

    fn log_progress(&mut self) {
        if self.frame_count == 0 {
            log::info!("Gamepad events flowing");
        }
        self.frame_count += 1;

        if self.frame_count.is_multiple_of(500) {
            log::debug!("Batches forwarded: {}", self.frame_count);
        }
    }

    #[cfg(test)]
    fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    #[cfg(test)]
    fn sink(&self) -> &K {
        &self.sink
    }
}
