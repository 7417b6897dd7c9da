//! Analog stick to relative motion: left stick moves the pointer, right stick scrolls.

use evdevil::event::{Abs, Rel};

use super::mapping::Output;

/// Dead zone plus linear scaling for one stick axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    pub dead_zone: u32,
    /// Output units per raw axis unit (`speed / axis_max`).
    pub scale: f64,
}

impl AxisTransform {
    pub fn new(dead_zone: u32, speed: u32, axis_max: i32) -> Self {
        Self {
            dead_zone,
            scale: f64::from(speed) / f64::from(axis_max),
        }
    }

    /// `None` inside the dead zone, otherwise `ceil(value * scale)`.
    pub fn delta(&self, value: i32) -> Option<i32> {
        if value.unsigned_abs() <= self.dead_zone {
            return None;
        }
        Some((f64::from(value) * self.scale).ceil() as i32)
    }
}

/// The four stick axes read from the gamepad every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickAxis {
    X,
    Y,
    Rx,
    Ry,
}

impl StickAxis {
    pub const ALL: [StickAxis; 4] = [StickAxis::X, StickAxis::Y, StickAxis::Rx, StickAxis::Ry];

    pub fn abs(self) -> Abs {
        match self {
            StickAxis::X => Abs::X,
            StickAxis::Y => Abs::Y,
            StickAxis::Rx => Abs::RX,
            StickAxis::Ry => Abs::RY,
        }
    }
}

/// Absolute stick positions sampled from device state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickState {
    pub x: i32,
    pub y: i32,
    pub rx: i32,
    pub ry: i32,
}

impl StickState {
    pub fn set(&mut self, axis: StickAxis, value: i32) {
        match axis {
            StickAxis::X => self.x = value,
            StickAxis::Y => self.y = value,
            StickAxis::Rx => self.rx = value,
            StickAxis::Ry => self.ry = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogMapping {
    pub pointer: AxisTransform,
    pub scroll: AxisTransform,
}

impl AnalogMapping {
    /// Append pointer and wheel motion for the current stick positions.
    ///
    /// Axes inside their dead zone emit nothing. RY is negated: the stick
    /// reports up as negative and wheel up is positive.
    pub fn translate(&self, sticks: &StickState, out: &mut Vec<Output>) {
        if let Some(dx) = self.pointer.delta(sticks.x) {
            out.push(Output::Rel(Rel::X, dx));
        }
        if let Some(dy) = self.pointer.delta(sticks.y) {
            out.push(Output::Rel(Rel::Y, dy));
        }
        if let Some(dx) = self.scroll.delta(sticks.rx) {
            out.push(Output::Rel(Rel::HWHEEL_HI_RES, dx));
        }
        if let Some(dy) = self.scroll.delta(sticks.ry) {
            out.push(Output::Rel(Rel::WHEEL_HI_RES, -dy));
        }
    }
}

impl Default for AnalogMapping {
    fn default() -> Self {
        Self {
            pointer: AxisTransform::new(1600, 15, 32767),
            scroll: AxisTransform::new(1600, 15, 32767),
        }
    }
}
